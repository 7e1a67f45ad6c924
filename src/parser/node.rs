//! Intermediate syntax tree nodes.
//!
//! The tree mirrors the source grammar closely: trivia stays in the tree as
//! ordinary nodes so that later stages can reproduce the layout.

use std::fmt::{self, Display};

/// Root of the intermediate tree: the top-level forms in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Program<'a> {
	pub body: Vec<Node<'a>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node<'a> {
	CallExpression { callee: &'a str, arguments: Vec<Node<'a>> },
	NumberLiteral(&'a str),
	StringLiteral(&'a str),
	Identifier(&'a str),
	WhiteSpace,
	NewLine,
	VarKeyword,
	EqualsToken,
	/// Closes a `var` declaration.
	Semicolon,
}

impl<'a> Node<'a> {
	pub fn call(callee: &'a str, arguments: Vec<Self>) -> Self { Node::CallExpression { callee, arguments } }
}

/// Writes nodes separated by single spaces.
fn write_spaced(f: &mut fmt::Formatter<'_>, nodes: &[Node<'_>]) -> fmt::Result {
	for (i, node) in nodes.iter().enumerate() {
		if i > 0 {
			write!(f, " ")?;
		}
		write!(f, "{node}")?;
	}
	Ok(())
}

/// An s-expression dump: whitespace shows as `_`, newlines as `\n`.
impl Display for Program<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write_spaced(f, &self.body) }
}

impl Display for Node<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		use Node::*;
		match self {
			CallExpression { callee, arguments } => {
				write!(f, "({callee}")?;
				if !arguments.is_empty() {
					write!(f, " ")?;
					write_spaced(f, arguments)?;
				}
				write!(f, ")")
			}
			NumberLiteral(value) => write!(f, "{value}"),
			StringLiteral(value) => write!(f, "\"{value}\""),
			Identifier(name) => write!(f, "{name}"),
			WhiteSpace => write!(f, "_"),
			NewLine => write!(f, "\\n"),
			VarKeyword => write!(f, "var"),
			EqualsToken => write!(f, "="),
			Semicolon => write!(f, ";"),
		}
	}
}
