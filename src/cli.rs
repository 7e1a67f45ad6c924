use std::path::PathBuf;

use palc::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "lispc", after_long_help = "Compiles parenthesized calls like `(add 1 2)` into `add(1, 2);`.")]
pub struct Cli {
	/// Keep `var` in front of declarations
	#[arg(long)]
	pub keep_var: bool,
	/// Stage to print: tokens, ist, ost or output
	#[arg(long)]
	pub emit:     Option<String>,
	#[command(subcommand)]
	pub mode:     Mode,
}

#[derive(Subcommand, Debug)]
pub enum Mode {
	/// Input file
	File { path: PathBuf },
	/// Source text given on the command line
	Eval { source: String },
	/// Input prompt
	Repl,
}
