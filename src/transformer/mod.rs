//! Retargets the intermediate tree into an output-shaped tree.
//!
//! One depth-first, pre-order walk. Each step gets the intermediate node, its
//! intermediate parent and the list it has to append its output into. That
//! list belongs to the output counterpart of the parent: the program body for
//! top-level forms, the argument list of the freshly built call for anything
//! inside a call.
//!
//! Two things change shape on the way:
//!
//! - a call at the top level becomes an `ExpressionStatement`, a call in
//!   argument position stays a bare `CallExpression`;
//! - whitespace between arguments is dropped, the generator puts `, ` between
//!   arguments instead. Newlines are always kept.

mod node;

pub use node::*;

use crate::{Options, parser as ist};

/// Transforms with default options.
pub fn transform<'a>(ast: &ist::Program<'a>) -> Program<'a> { Transformer::default().transform(ast) }

#[derive(Debug, Default)]
pub struct Transformer {
	options: Options,
}

impl Transformer {
	pub fn new(options: Options) -> Self { Self { options } }

	pub fn transform<'a>(&self, ast: &ist::Program<'a>) -> Program<'a> {
		let mut program = Program::default();
		self.traverse_array(&ast.body, None, &mut program.body);
		program
	}

	fn traverse_array<'a>(&self, nodes: &[ist::Node<'a>], parent: Option<&ist::Node<'a>>, target: &mut Vec<Node<'a>>) {
		let mut after_var = false;
		for node in nodes {
			after_var = self.traverse_node(node, parent, after_var, target);
		}
	}

	/// Appends the output for `node` to `target`. `after_var` is set while
	/// the siblings before `node`, up to a dropped `var`, were all
	/// whitespace; the return value is the same flag for the next sibling.
	fn traverse_node<'a>(
		&self,
		node: &ist::Node<'a>,
		parent: Option<&ist::Node<'a>>,
		after_var: bool,
		target: &mut Vec<Node<'a>>,
	) -> bool {
		let in_call = matches!(parent, Some(ist::Node::CallExpression { .. }));
		match node {
			ist::Node::WhiteSpace if in_call || after_var => return after_var,
			ist::Node::WhiteSpace => target.push(Node::WhiteSpace),
			ist::Node::NewLine => target.push(Node::NewLine),
			ist::Node::NumberLiteral(value) => target.push(Node::NumberLiteral(*value)),
			ist::Node::StringLiteral(value) => target.push(Node::StringLiteral(*value)),
			ist::Node::Identifier(name) => target.push(Node::identifier(*name)),
			ist::Node::EqualsToken => target.push(Node::EqualsToken),
			ist::Node::Semicolon => target.push(Node::Semicolon),
			ist::Node::VarKeyword if self.options.keep_var_keyword => target.push(Node::VarKeyword),
			// The target syntax declares by plain assignment.
			ist::Node::VarKeyword => return true,
			ist::Node::CallExpression { callee, arguments } => {
				let mut call = CallExpression::new(*callee, Vec::new());
				self.traverse_array(arguments, Some(node), &mut call.arguments);
				if in_call {
					target.push(Node::CallExpression(call));
				} else {
					target.push(Node::ExpressionStatement(call));
				}
			}
		}
		false
	}
}
