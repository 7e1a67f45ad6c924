/// Stands in for a token kind when the token stream ran out.
pub const END_OF_INPUT: &str = "end of input";

/// Errors raised while parsing. Token kinds are named, positions are not tracked.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
	#[error("Unexpected token kind {0}")]
	UnexpectedToken(&'static str),
	#[error("`{target}` can only be followed by a number or a string literal, but {found} was found")]
	ExpectedLiteral { target: String, found: &'static str },
	#[error("A call must start with the callee name right after `(`, but {0} was found")]
	ExpectedCallee(&'static str),
	#[error("`var` must be followed by the name it declares, but {0} was found")]
	ExpectedDeclarationTarget(&'static str),
	#[error("Unterminated call to `{0}`, expected RightParen")]
	UnterminatedCall(String),
}
