use std::process::ExitCode;

use lispc::{Compiler, Emit, Options, cli::*};
use palc::Parser;

fn main() -> ExitCode {
	let cli = Cli::parse();
	let compiler = Compiler::new(Options { keep_var_keyword: cli.keep_var });
	let emit = match cli.emit.as_deref().map(str::parse::<Emit>).transpose() {
		Ok(emit) => emit.unwrap_or_default(),
		Err(e) => {
			eprintln!("Invalid --emit: {e}");
			return ExitCode::FAILURE;
		}
	};

	match cli.mode {
		Mode::File { path } => {
			if let Err(e) = compiler.run_file(&path, emit) {
				eprintln!("Failed run file: {e}");
				return ExitCode::FAILURE;
			}
		}
		Mode::Eval { source } => match compiler.render(&source, emit) {
			Ok(output) => println!("{output}"),
			Err(e) => {
				eprintln!("Failed compile: {e}");
				return ExitCode::FAILURE;
			}
		},
		Mode::Repl => compiler.run_prompt(emit),
	}
	ExitCode::SUCCESS
}
