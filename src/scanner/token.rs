/// A token produced by the scanner.
///
/// Payloads borrow straight from the source text, so a token stream never
/// outlives the string it was scanned from. Tokens carry no position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
	/// New line character `\n`.
	NewLine,
	/// Any other whitespace character: ` `, `\t`, `\r`, ...
	Whitespace,
	/// Left parenthesis `(`.
	LeftParen,
	/// Right parenthesis `)`.
	RightParen,
	/// Integer literal, e.g. `123`.
	NumberLiteral(&'a str),
	/// String literal without its quotes, e.g. `hi` for `"hi"`.
	StringLiteral(&'a str),
	/// Identifier, e.g. a callee or an assignment target.
	Identifier(&'a str),
	/// Declaration keyword `var`.
	Var,
	/// Assignment marker `=`. Never scanned from text.
	Equal,
}

impl<'a> Token<'a> {
	/// Trivia carries no meaning but has to survive for formatting.
	pub fn is_trivia(&self) -> bool { matches!(self, Token::Whitespace | Token::NewLine) }

	pub fn is_literal(&self) -> bool { matches!(self, Token::NumberLiteral(_) | Token::StringLiteral(_)) }

	pub fn keyword_or_identifier(value: &'a str) -> Self {
		match value {
			"var" => Token::Var,
			_ => Token::Identifier(value),
		}
	}

	/// Name of the token kind, for diagnostics.
	pub fn kind(&self) -> &'static str {
		match self {
			Token::NewLine => "NewLine",
			Token::Whitespace => "Whitespace",
			Token::LeftParen => "LeftParen",
			Token::RightParen => "RightParen",
			Token::NumberLiteral(_) => "NumberLiteral",
			Token::StringLiteral(_) => "StringLiteral",
			Token::Identifier(_) => "Identifier",
			Token::Var => "Var",
			Token::Equal => "Equal",
		}
	}
}
