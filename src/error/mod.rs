pub mod parser;
pub mod scanner;

/// CompileError is the top-level error type for the compiler.
///
/// Every failure aborts the whole compilation, there is never partial output.
#[derive(thiserror::Error, Debug)]
pub enum CompileError {
	/// Internal compiler error or failed I/O around the pipeline
	#[error("CompilerInternalError: {0}")]
	InternalError(#[from] anyhow::Error),
	/// The source text could not be split into tokens
	#[error("Scan error: {0}")]
	ScanError(#[from] scanner::ScanError),
	/// The tokens do not form a program
	#[error("Syntax error: {0}")]
	ParseError(#[from] parser::ParseError),
}

/// A `--emit` value that names no pipeline stage.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown stage `{0}`, expected one of tokens, ist, ost, output")]
pub struct UnknownStage(pub String);
