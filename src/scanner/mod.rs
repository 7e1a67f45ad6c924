//! Turns source text into a flat stream of tokens.
//!
//! The lexical grammar is tiny: parentheses, integer literals, string
//! literals, ASCII names and whitespace. Whitespace is not skipped, every
//! space and every newline becomes its own token because the output keeps
//! the source layout.
//!
//! Names, numbers and strings are all recognized with `maximal munch`: once
//! the first character decides the kind of lexeme, the scanner keeps eating
//! characters of the same class. `var` can only be told apart from an
//! identifier once the whole name has been read.
mod token;

use std::{iter::Peekable, str::CharIndices};

use Token::*;
pub use token::*;

use crate::ScanError;

/// Scans `source` into tokens, stopping at the first error.
pub fn scan(source: &str) -> Result<Vec<Token<'_>>, ScanError> { Scanner::new(source).scan_tokens() }

/// A scanner over source text.
pub struct Scanner<'a> {
	/// User input source code
	source:      &'a str,
	/// User input source code iterator
	source_iter: Peekable<CharIndices<'a>>,
	/// Points at the beginning of the current lexeme
	start:       usize,
	/// Points just past the character most recently consumed
	cursor:      usize,
}

impl<'a> Scanner<'a> {
	pub fn new(source: &'a str) -> Self {
		let source_iter = source.char_indices().peekable();

		Self { source, source_iter, start: 0, cursor: 0 }
	}

	/// Scan all tokens from the source code.
	///
	/// There is no recovery: the first unrecognized character or unterminated
	/// string aborts the whole scan.
	pub fn scan_tokens(&mut self) -> Result<Vec<Token<'a>>, ScanError> {
		let mut tokens = Vec::new();
		while let Some(c) = self.advance() {
			// We are at the beginning of the next lexeme.
			self.start = self.cursor - c.len_utf8();
			tokens.push(self.scan_token(c)?);
		}
		Ok(tokens)
	}

	/// Classify the lexeme starting with `c`, which has already been consumed.
	fn scan_token(&mut self, c: char) -> Result<Token<'a>, ScanError> {
		#[rustfmt::skip]
		let token = match c {
			'\n' => NewLine,
			'(' => LeftParen,
			')' => RightParen,
			'"' => self.string()?,
			c if c.is_whitespace() => Whitespace,
			c if c.is_ascii_digit() => NumberLiteral(self.take_while(|c| c.is_ascii_digit())),
			c if c.is_ascii_alphabetic() => Token::keyword_or_identifier(self.take_while(|c| c.is_ascii_alphabetic())),
			_ => return Err(ScanError::UnexpectedCharacter(c)),
		};
		Ok(token)
	}

	/// Advance to the next character
	fn advance(&mut self) -> Option<char> {
		let (i, c) = self.source_iter.next()?;
		self.cursor = i + c.len_utf8();
		Some(c)
	}

	/// Peek the current character
	fn peek(&mut self) -> Option<char> { self.source_iter.peek().map(|&(_, c)| c) }

	/// Keep consuming while `pred` holds, stopping before the first character
	/// that fails it (or at the end of input). Returns the current lexeme.
	fn take_while(&mut self, pred: impl Fn(char) -> bool) -> &'a str {
		while self.peek().is_some_and(&pred) {
			self.advance();
		}
		&self.source[self.start..self.cursor]
	}

	/// Scan a string literal, the opening quote already consumed.
	fn string(&mut self) -> Result<Token<'a>, ScanError> {
		self.start = self.cursor;
		let value = self.take_while(|c| c != '"');
		match self.advance() {
			Some('"') => Ok(StringLiteral(value)),
			_ => Err(ScanError::UnterminatedString),
		}
	}
}
