/// Errors raised while scanning. The first one stops the scanner.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ScanError {
	/// A character outside the lexical grammar.
	#[error("Unexpected character '{0}'")]
	UnexpectedCharacter(char),
	/// A string literal whose closing quote is missing.
	#[error("Unterminated string literal")]
	UnterminatedString,
}
