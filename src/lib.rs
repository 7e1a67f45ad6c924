//! # From parenthesized calls to C-style calls
//!
//! Source: `(add 1 (sub 2 2))`, output: `add(1, sub(2, 2));`.
//!
//! Spacing and line breaks of the source survive into the output, so the
//! compiler never throws trivia away until it knows the target syntax has no
//! use for it.

//! ## Scanning
//!
//! Takes in the characters and converts them into tokens. Parentheses,
//! numbers `123`, string literals `"hi!"`, names `add` and the keyword `var`
//! are tokens, and so is every single space and newline.
//!
//! `(add 1 2)` becomes
//! `["(", "add", " ", "1", " ", "2", ")"]`.

//! ## Parsing
//!
//! Builds the intermediate syntax tree, shaped after the source grammar. A
//! call owns its callee name and its arguments, trivia included:
//!
//! ``` markdown
//! Program
//! └── add (CallExpression)
//!     ├── ␣ (WhiteSpace)
//!     ├── 1 (NumberLiteral)
//!     ├── ␣ (WhiteSpace)
//!     └── sub (CallExpression)
//!         ├── ␣ (WhiteSpace)
//!         ├── 2 (NumberLiteral)
//!         ├── ␣ (WhiteSpace)
//!         └── 2 (NumberLiteral)
//! ```
//!
//! `var a 1` is a declaration, read as the assignment `a = 1`.

//! ## Transforming
//!
//! Walks the intermediate tree and builds a second tree shaped after the
//! target syntax: top-level calls turn into statements, whitespace between
//! arguments goes away because the target separates arguments with commas.

//! ## Code generation
//!
//! Serializes the output tree. Statements end with `;`, arguments are joined
//! with `, `, everything else is printed as it was read.

pub mod cli;
mod compiler;
mod error;
pub mod generator;
pub mod parser;
pub mod scanner;
pub mod transformer;

pub use compiler::{Compiler, Emit, Options};
pub use error::{
	CompileError, UnknownStage,
	parser::{END_OF_INPUT, ParseError},
	scanner::ScanError,
};

/// Compile `source` with default options.
///
/// ```
/// assert_eq!(lispc::compile("(add 1 (sub 2 2))").unwrap(), "add(1, sub(2, 2));");
/// assert_eq!(lispc::compile("var a 1").unwrap(), "a = 1;");
/// ```
pub fn compile(source: &str) -> Result<String, CompileError> { Compiler::default().compile(source) }
