//! Output syntax tree nodes, shaped after the target syntax.

/// Root of the output tree: statements and layout in output order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Program<'a> {
	pub body: Vec<Node<'a>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Identifier<'a> {
	pub name: &'a str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallExpression<'a> {
	pub callee:    Identifier<'a>,
	pub arguments: Vec<Node<'a>>,
}

impl<'a> CallExpression<'a> {
	pub fn new(callee: &'a str, arguments: Vec<Node<'a>>) -> Self {
		Self { callee: Identifier { name: callee }, arguments }
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node<'a> {
	/// A call used as a statement, only ever at the top level.
	ExpressionStatement(CallExpression<'a>),
	/// A call used as an argument of another call.
	CallExpression(CallExpression<'a>),
	Identifier(Identifier<'a>),
	NumberLiteral(&'a str),
	StringLiteral(&'a str),
	WhiteSpace,
	NewLine,
	VarKeyword,
	EqualsToken,
	Semicolon,
}

impl<'a> Node<'a> {
	pub fn identifier(name: &'a str) -> Self { Node::Identifier(Identifier { name }) }
}
