//! The `Scanner` works on the lexical grammar, characters in and tokens out.
//! The `Parser` works on the syntactic grammar, tokens in and an intermediate
//! syntax tree out.
//!
//! Program grammar:
//!
//! ``` BNF
//! program     → form* ;
//! form        → trivia | declaration | assignment | call | literal ;
//! argument    → trivia | "var" | assignment | call | literal ;
//! trivia      → WHITESPACE | NEWLINE ;
//! declaration → "var" trivia* assignment trivia* literal ;
//! assignment  → IDENTIFIER ;  (only when a literal follows, trivia skipped)
//! call        → "(" IDENTIFIER argument* ")" ;
//! literal     → NUMBER | STRING ;
//! ```
//!
//! An identifier is an assignment target whenever the closest non-trivia
//! token before it is not `(`. The callee is read by the `call` rule itself
//! and never reaches that check, so in practice every identifier outside
//! callee position is taken as a target, even inside an argument list:
//! `(add x 1)` takes `x` as the target of `1`. The grammar cannot tell a
//! bare name from a declaration target without more context.
//!
//! An assignment target is rewritten into `Identifier WhiteSpace EqualsToken`,
//! so `a 1` reads as `a = 1`, with the literal left as the following form.

mod node;

use Token::*;
pub use node::*;

use crate::{
	error::parser::{END_OF_INPUT, ParseError},
	scanner::Token,
};

/// Parses a token stream into an intermediate tree.
pub fn parse<'a>(tokens: &[Token<'a>]) -> Result<Program<'a>, ParseError> { Parser::new(tokens).parse() }

fn kind_or_end(token: Option<Token<'_>>) -> &'static str { token.map_or(END_OF_INPUT, |t| t.kind()) }

/// A recursive descent parser with a single forward cursor.
pub struct Parser<'t, 'a> {
	/// The tokens to parse.
	tokens: &'t [Token<'a>],
	/// Index of the token currently being considered.
	cursor: usize,
	/// Number of calls enclosing the cursor.
	depth:  usize,
}

impl<'t, 'a> Parser<'t, 'a> {
	pub fn new(tokens: &'t [Token<'a>]) -> Self { Self { tokens, cursor: 0, depth: 0 } }

	pub fn parse(&mut self) -> Result<Program<'a>, ParseError> {
		let mut program = Program::default();
		while self.peek().is_some() {
			program.body.extend(self.walk()?);
		}
		Ok(program)
	}

	/// Parse a single form. Trivia, literals and calls yield one node,
	/// an assignment target yields three and a declaration yields the whole
	/// statement. The caller splices them in order.
	fn walk(&mut self) -> Result<Vec<Node<'a>>, ParseError> {
		let token = self.peek().ok_or(ParseError::UnexpectedToken(END_OF_INPUT))?;
		let nodes = match token {
			Whitespace | NewLine => vec![self.trivia_node()],
			NumberLiteral(value) => {
				self.advance();
				vec![Node::NumberLiteral(value)]
			}
			StringLiteral(value) => {
				self.advance();
				vec![Node::StringLiteral(value)]
			}
			Equal => {
				self.advance();
				vec![Node::EqualsToken]
			}
			Identifier(name) if !matches!(self.look_back(), Some(LeftParen)) => self.assignment(name)?,
			LeftParen => vec![self.call()?],
			Var => self.declaration()?,
			_ => return Err(ParseError::UnexpectedToken(token.kind())),
		};
		Ok(nodes)
	}

	/// `target` followed, after any trivia, by a literal. Consumes only the
	/// identifier itself.
	fn assignment(&mut self, target: &'a str) -> Result<Vec<Node<'a>>, ParseError> {
		match self.look_ahead() {
			Some(token) if token.is_literal() => {}
			found => {
				return Err(ParseError::ExpectedLiteral { target: target.to_string(), found: kind_or_end(found) });
			}
		}
		self.advance();
		Ok(vec![Node::Identifier(target), Node::WhiteSpace, Node::EqualsToken])
	}

	fn call(&mut self) -> Result<Node<'a>, ParseError> {
		self.advance(); // consume '('

		// The callee has to follow the paren directly, no trivia in between.
		let callee = match self.advance() {
			Some(Identifier(name)) => name,
			found => return Err(ParseError::ExpectedCallee(kind_or_end(found))),
		};

		// Trivia inside the argument list is kept as ordinary arguments.
		self.depth += 1;
		let mut arguments = Vec::new();
		loop {
			match self.peek() {
				Some(RightParen) => break,
				Some(_) => arguments.extend(self.walk()?),
				None => return Err(ParseError::UnterminatedCall(callee.to_string())),
			}
		}
		self.depth -= 1;
		self.advance(); // consume ')'

		Ok(Node::call(callee, arguments))
	}

	fn declaration(&mut self) -> Result<Vec<Node<'a>>, ParseError> {
		self.advance(); // consume 'var'
		// Inside a call the keyword is a plain argument, the name after it
		// goes through the ordinary assignment rule.
		if self.depth > 0 {
			return Ok(vec![Node::VarKeyword]);
		}

		let mut nodes = vec![Node::VarKeyword];
		nodes.extend(self.trivia());
		let target = match self.peek() {
			Some(Identifier(name)) => name,
			found => return Err(ParseError::ExpectedDeclarationTarget(kind_or_end(found))),
		};
		nodes.extend(self.assignment(target)?);
		nodes.extend(self.trivia());
		// `assignment` made sure a literal is next.
		nodes.extend(self.walk()?);
		nodes.push(Node::Semicolon);
		Ok(nodes)
	}

	/// Consume a run of trivia tokens.
	fn trivia(&mut self) -> Vec<Node<'a>> {
		let mut nodes = Vec::new();
		while self.peek().is_some_and(|t| t.is_trivia()) {
			nodes.push(self.trivia_node());
		}
		nodes
	}

	/// Consume the trivia token under the cursor.
	fn trivia_node(&mut self) -> Node<'a> {
		match self.advance() {
			Some(NewLine) => Node::NewLine,
			_ => Node::WhiteSpace,
		}
	}

	/// Advance to the next token, returning the one just consumed.
	fn advance(&mut self) -> Option<Token<'a>> {
		let token = self.peek()?;
		self.cursor += 1;
		Some(token)
	}

	/// Peek at the current token.
	fn peek(&self) -> Option<Token<'a>> { self.tokens.get(self.cursor).copied() }

	/// Nearest non-trivia token after the current one.
	fn look_ahead(&self) -> Option<Token<'a>> {
		self.tokens.iter().skip(self.cursor + 1).find(|t| !t.is_trivia()).copied()
	}

	/// Nearest non-trivia token before the current one.
	fn look_back(&self) -> Option<Token<'a>> {
		self.tokens[..self.cursor].iter().rev().find(|t| !t.is_trivia()).copied()
	}
}
