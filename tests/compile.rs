//! End-to-end tests for the whole pipeline.

use lispc::{CompileError, Compiler, END_OF_INPUT, Options, ParseError, ScanError, compile};
use proptest::prelude::*;

#[test]
fn compile_calls() {
	assert_eq!(compile("(add 1 2)").unwrap(), "add(1, 2);");
	assert_eq!(compile("(add 1 (sub 2 2))").unwrap(), "add(1, sub(2, 2));");
	assert_eq!(compile("(print \"hello world\")").unwrap(), "print(\"hello world\");");
	assert_eq!(compile("(f)").unwrap(), "f();");
	assert_eq!(compile("(f (g (h)))").unwrap(), "f(g(h()));");
}

#[test]
fn compile_declarations() {
	assert_eq!(compile("var a 1").unwrap(), "a = 1;");
	assert_eq!(compile("var s \"hi\"").unwrap(), "s = \"hi\";");
	assert_eq!(compile("a 1").unwrap(), "a = 1");
	let compiler = Compiler::new(Options { keep_var_keyword: true });
	assert_eq!(compiler.compile("var a 1\nvar b 2").unwrap(), "var a = 1;\nvar b = 2;");
}

#[test]
fn compile_declaration_keeps_line_breaks() {
	let output = compile("var\na 1\n(f 1)").unwrap();
	assert_eq!(output, "\na = 1;\nf(1);");
	assert_eq!(output.matches('\n').count(), 2);
	assert_eq!(compile("var \n\n  b \"x\"").unwrap(), "\n\n  b = \"x\";");
}

#[test]
fn compile_var_in_call() {
	assert_eq!(compile("(f var a 1)").unwrap(), "f(a, =, 1);");
	let compiler = Compiler::new(Options { keep_var_keyword: true });
	assert_eq!(compiler.compile("(f var a 1)").unwrap(), "f(var, a, =, 1);");
}

#[test]
fn compile_keeps_layout() {
	assert_eq!(compile("(f 1)\n(g 2)").unwrap(), "f(1);\ng(2);");
	assert_eq!(compile("\n\n(f 1)\n\n").unwrap(), "\n\nf(1);\n\n");
	assert_eq!(compile("  (f 1)  (g 2)").unwrap(), "  f(1);  g(2);");
	assert_eq!(compile("(add 1     2)").unwrap(), "add(1, 2);");
	assert_eq!(compile("").unwrap(), "");
}

#[test]
fn compile_sample_program() {
	let output = Compiler::default().compile_file(concat!(env!("CARGO_MANIFEST_DIR"), "/tests/sample.lisp")).unwrap();
	assert_eq!(output, "\nadd(1, sus(2, 2));\na = 1;\n\nb =    \"hi\";\n");
}

#[test]
fn compile_errors() {
	assert!(matches!(compile("(add 1 @)"), Err(CompileError::ScanError(ScanError::UnexpectedCharacter('@')))));
	assert!(matches!(compile("(print \"oops)"), Err(CompileError::ScanError(ScanError::UnterminatedString))));
	assert!(matches!(compile("(add 1 2))"), Err(CompileError::ParseError(ParseError::UnexpectedToken("RightParen")))));
	assert!(matches!(compile("(add 1 2"), Err(CompileError::ParseError(ParseError::UnterminatedCall(_)))));
	assert!(matches!(
		compile("var"),
		Err(CompileError::ParseError(ParseError::ExpectedDeclarationTarget(found))) if found == END_OF_INPUT
	));
}

#[test]
fn compile_error_messages() {
	assert_eq!(compile("(f #)").unwrap_err().to_string(), "Scan error: Unexpected character '#'");
	assert_eq!(compile("\"").unwrap_err().to_string(), "Scan error: Unterminated string literal");
	assert_eq!(
		compile("var a (f)").unwrap_err().to_string(),
		"Syntax error: `a` can only be followed by a number or a string literal, but LeftParen was found"
	);
}

/// A literal or a call, as source text and the text it should compile to.
fn expression() -> impl Strategy<Value = (String, String)> {
	let leaf = prop_oneof![
		"[0-9]{1,3}".prop_map(|n| (n.clone(), n)),
		"[a-z ]{0,4}".prop_map(|s| (format!("\"{s}\""), format!("\"{s}\""))),
	];
	leaf.prop_recursive(3, 24, 4, |inner| {
		let callee = "[a-z]{1,5}".prop_filter("`var` is a keyword", |name| name != "var");
		(callee, prop::collection::vec((inner, "[ \t]{1,3}"), 0..4)).prop_map(|(callee, arguments)| {
			let source: String = arguments.iter().map(|((source, _), gap)| format!("{gap}{source}")).collect();
			let output: Vec<&str> = arguments.iter().map(|((_, output), _)| output.as_str()).collect();
			(format!("({callee}{source})"), format!("{callee}({})", output.join(", ")))
		})
	})
}

proptest! {
	#[test]
	fn rejects_unknown_characters(
		before in "[()0-9A-Za-z \n]{0,12}",
		bad in r#"[^()"0-9A-Za-z\s]"#,
		after in "[()0-9A-Za-z \n]{0,12}",
	) {
		let bad = bad.chars().next().unwrap();
		let result = compile(&format!("{before}{bad}{after}"));
		prop_assert!(
			matches!(result, Err(CompileError::ScanError(ScanError::UnexpectedCharacter(c))) if c == bad)
		);
	}

	#[test]
	fn separates_arguments_with_commas(arguments in prop::collection::vec(("[0-9]{1,4}", "[ \t]{1,4}"), 2..8)) {
		let source: String = arguments.iter().map(|(n, gap)| format!("{gap}{n}")).collect();
		let output = compile(&format!("(f{source})")).unwrap();
		prop_assert_eq!(output.matches(", ").count(), arguments.len() - 1);
		let numbers: Vec<&str> = arguments.iter().map(|(n, _)| n.as_str()).collect();
		prop_assert_eq!(output, format!("f({});", numbers.join(", ")));
	}

	#[test]
	fn compiles_nested_calls((source, output) in expression()) {
		prop_assert_eq!(compile(&format!("(top {source})")).unwrap(), format!("top({output});"));
	}

	#[test]
	fn compiles_deterministically((source, _) in expression(), layout in "[ \n]{0,3}") {
		let source = format!("{layout}(top {source}){layout}");
		prop_assert_eq!(compile(&source).unwrap(), compile(&source).unwrap());
	}
}
