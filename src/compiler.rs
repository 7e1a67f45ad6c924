use std::{fs::read_to_string, io::Write, path::Path, str::FromStr};

use anyhow::Context;

use crate::{CompileError, UnknownStage, generator, parser::Parser, scanner::Scanner, transformer::Transformer};

/// Settings for one compilation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Options {
	/// Keep `var` in front of declarations instead of emitting a plain
	/// assignment.
	pub keep_var_keyword: bool,
}

/// Which stage of the pipeline to print.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Emit {
	Tokens,
	/// Intermediate syntax tree.
	Ist,
	/// Output syntax tree.
	Ost,
	#[default]
	Output,
}

impl FromStr for Emit {
	type Err = UnknownStage;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"tokens" => Ok(Emit::Tokens),
			"ist" => Ok(Emit::Ist),
			"ost" => Ok(Emit::Ost),
			"output" => Ok(Emit::Output),
			_ => Err(UnknownStage(s.to_string())),
		}
	}
}

/// Drives source text through scanner, parser, transformer and generator.
#[derive(Debug, Default)]
pub struct Compiler {
	options: Options,
}

impl Compiler {
	pub fn new(options: Options) -> Self { Self { options } }

	/// Compile `source` to output text.
	pub fn compile(&self, source: &str) -> Result<String, CompileError> { self.render(source, Emit::Output) }

	/// Run the pipeline up to `emit` and render that stage's result.
	pub fn render(&self, source: &str, emit: Emit) -> Result<String, CompileError> {
		let tokens = Scanner::new(source).scan_tokens()?;
		if emit == Emit::Tokens {
			return Ok(format!("{tokens:?}"));
		}

		let ast = Parser::new(&tokens).parse()?;
		if emit == Emit::Ist {
			return Ok(ast.to_string());
		}

		let ost = Transformer::new(self.options).transform(&ast);
		if emit == Emit::Ost {
			return Ok(format!("{ost:#?}"));
		}

		Ok(generator::generate(&ost))
	}

	/// Read and compile a source file.
	pub fn compile_file<P: AsRef<Path>>(&self, path: P) -> Result<String, CompileError> {
		let source = read_to_string(path).context("Failed open source file")?;
		self.compile(&source)
	}

	/// Read a source file and print the requested stage.
	pub fn run_file<P: AsRef<Path>>(&self, path: P, emit: Emit) -> Result<(), CompileError> {
		let source = read_to_string(path).context("Failed open source file")?;
		println!("{}", self.render(&source, emit)?);
		Ok(())
	}

	/// Run the REPL prompt, one line per compilation.
	pub fn run_prompt(&self, emit: Emit) {
		let mut input = String::new();
		let stdin = std::io::stdin();
		loop {
			input.clear();
			print!("> ");
			if let Err(e) = std::io::stdout().flush() {
				eprintln!("Failed flush: {e}");
			}
			match stdin.read_line(&mut input) {
				Ok(0) => {
					println!("\nExited lispc repl");
					break;
				}
				Ok(_) => {}
				Err(e) => {
					eprintln!("Failed read line: {e}");
					continue;
				}
			}
			match self.render(input.trim_end_matches(['\r', '\n']), emit) {
				Ok(output) => println!("{output}"),
				Err(e) => eprintln!("Failed compile: {e}"),
			}
		}
	}
}
