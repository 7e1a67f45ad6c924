//! Serializes the output tree to text.
//!
//! The generator is nothing but the `Display` implementations of the output
//! tree. No state, no separators beyond the ones spelled out here: the
//! program body is concatenated as is, layout comes from its `WhiteSpace` and
//! `NewLine` nodes.

use std::fmt::{self, Display};

use crate::transformer::{CallExpression, Identifier, Node, Program};

/// Generates the output text for a whole program.
pub fn generate(program: &Program<'_>) -> String { program.to_string() }

impl Display for Program<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for node in &self.body {
			write!(f, "{node}")?;
		}
		Ok(())
	}
}

impl Display for CallExpression<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}(", self.callee)?;
		for (i, argument) in self.arguments.iter().enumerate() {
			if i > 0 {
				write!(f, ", ")?;
			}
			write!(f, "{argument}")?;
		}
		write!(f, ")")
	}
}

impl Display for Identifier<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.name) }
}

impl Display for Node<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Node::ExpressionStatement(call) => write!(f, "{call};"),
			Node::CallExpression(call) => write!(f, "{call}"),
			Node::Identifier(identifier) => write!(f, "{identifier}"),
			Node::NumberLiteral(value) => f.write_str(value),
			Node::StringLiteral(value) => write!(f, "\"{value}\""),
			Node::WhiteSpace => f.write_str(" "),
			Node::NewLine => f.write_str("\n"),
			Node::VarKeyword => f.write_str("var"),
			Node::EqualsToken => f.write_str("="),
			Node::Semicolon => f.write_str(";"),
		}
	}
}
