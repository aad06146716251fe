use std::fs;

use pretty_assertions::assert_eq;
use rubyish::{
    Error,
    error::{ParseError, RuntimeError},
    run,
};
use walkdir::WalkDir;

#[test]
fn script_fixtures_match_expected_output() {
    let mut count = 0;
    let root = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/scripts");

    for entry in
        WalkDir::new(root).sort_by_file_name()
                          .into_iter()
                          .filter_map(Result::ok)
                          .filter(|e| e.path().extension().is_some_and(|ext| ext == "rb"))
    {
        let path = entry.path();
        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        let expected_path = path.with_extension("out");
        let expected = fs::read_to_string(&expected_path).unwrap_or_else(|e| {
                           panic!("Missing expected output {expected_path:?}: {e}")
                       });

        count += 1;
        match output_of(&source) {
            Ok(actual) => assert_eq!(actual, expected, "output of {path:?}"),
            Err(e) => panic!("Script {path:?} failed:\n{source}\nError: {e}"),
        }
    }

    assert!(count > 0, "No scripts found in tests/scripts");
}

fn output_of(src: &str) -> Result<String, Error> {
    let mut out = Vec::new();
    run(src, &mut out)?;
    Ok(String::from_utf8(out).expect("output is UTF-8"))
}

fn assert_output(src: &str, expected: &str) {
    match output_of(src) {
        Ok(actual) => assert_eq!(actual, expected),
        Err(e) => panic!("Script failed: {e}"),
    }
}

fn assert_success(src: &str) {
    if let Err(e) = output_of(src) {
        panic!("Script failed: {e}");
    }
}

fn assert_failure(src: &str) -> Error {
    match output_of(src) {
        Ok(out) => panic!("Script succeeded but was expected to fail, printing:\n{out}"),
        Err(e) => e,
    }
}

#[test]
fn numbers_print_with_six_decimals() {
    assert_output("puts 3.5", "3.500000\n");
    assert_output("puts 3", "3.000000\n");
    assert_output("puts 1 / 3", "0.333333\n");
}

#[test]
fn strings_print_without_quotes() {
    assert_output("puts \"hello there\"", "hello there\n");
    assert_output("puts \"\"", "\n");
}

#[test]
fn booleans_and_nil_print_by_name() {
    assert_output("puts false\nputs 2 > 1", "false\ntrue\n");
    assert_output("def nothing\nend\nputs nothing()", "nil\n");
}

#[test]
fn reassignment_overwrites() {
    assert_output("x = 1\nx = 2\nputs x", "2.000000\n");
}

#[test]
fn chained_assignment_is_right_associative() {
    assert_output("a = b = 4\nputs a + b", "8.000000\n");
}

#[test]
fn if_elsif_else_runs_exactly_one_branch() {
    let src = "if false\nputs 1\nelsif true\nputs 2\nelse\nputs 3\nend";
    assert_output(src, "2.000000\n");
    assert_output("if false\nputs 1\nelse\nputs 3\nend", "3.000000\n");
    assert_output("if false\nputs 1\nend\nputs 0", "0.000000\n");
}

#[test]
fn for_loops_respect_range_kind() {
    assert_output("for i in 1..3\nputs i\nend", "1.000000\n2.000000\n3.000000\n");
    assert_output("for i in 1...3\nputs i\nend", "1.000000\n2.000000\n");
}

#[test]
fn functions_add_and_check_arity() {
    assert_output("def add(a, b)\na + b\nend\nputs add(2, 3)", "5.000000\n");

    let err = assert_failure("def add(a, b)\na + b\nend\nadd(1)");
    assert_eq!(err,
               Error::Runtime(RuntimeError::ArgumentCountMismatch { name:     "add".to_string(),
                                                                    expected: 2,
                                                                    found:    1,
                                                                    line:     4, }));
}

#[test]
fn functions_see_globals_defined_before_the_call() {
    assert_output("def show\nputs limit\nend\nlimit = 7\nshow()", "7.000000\n");
}

#[test]
fn string_equality_compares_contents() {
    assert_output("puts \"abc\" == \"abc\"\nputs \"abc\" == \"abd\"", "true\nfalse\n");
}

#[test]
fn comments_are_ignored() {
    assert_output("# leading\nputs 1 # trailing\n# closing", "1.000000\n");
}

#[test]
fn empty_program_prints_nothing() {
    assert_output("", "");
    assert_output("  \n# only a comment\n", "");
}

#[test]
fn unknown_name_is_reported_with_its_line() {
    let err = assert_failure("x = 1\nputs y");
    assert_eq!(err,
               Error::Runtime(RuntimeError::UnknownName { name: "y".to_string(),
                                                          line: 2, }));
    assert_eq!(err.to_string(), "Error on line 2: Undefined name 'y'.");
}

#[test]
fn output_before_a_runtime_error_is_kept() {
    let mut out = Vec::new();
    let result = run("puts 1\nputs 1 % 0\nputs 2", &mut out);

    assert_eq!(result, Err(Error::Runtime(RuntimeError::DivisionByZero { line: 2 })));
    assert_eq!(String::from_utf8(out).unwrap(), "1.000000\n");
}

#[test]
fn syntax_error_prevents_any_output() {
    let mut out = Vec::new();
    let result = run("puts 1\nputs (", &mut out);

    assert!(matches!(result, Err(Error::Parse(_))));
    assert!(out.is_empty());
}

#[test]
fn conditions_must_be_boolean() {
    let err = assert_failure("if 1\nputs 1\nend");
    assert_eq!(err,
               Error::Runtime(RuntimeError::ExpectedBoolean { found: "Number",
                                                              line:  1, }));
}

#[test]
fn undefined_operations_are_errors() {
    assert!(matches!(assert_failure("puts \"a\" + 1"),
                     Error::Runtime(RuntimeError::UnsupportedOperation { .. })));
    assert!(matches!(assert_failure("puts \"a\" < \"b\""),
                     Error::Runtime(RuntimeError::UnsupportedOperation { .. })));
    assert!(matches!(assert_failure("puts -true"),
                     Error::Runtime(RuntimeError::UnsupportedOperand { .. })));
    assert!(matches!(assert_failure("puts 5 % 0"),
                     Error::Runtime(RuntimeError::DivisionByZero { line: 1 })));
}

#[test]
fn lexical_errors() {
    assert_eq!(assert_failure("x = 1\nputs @"),
               Error::Parse(ParseError::UnexpectedCharacter { character: "@".to_string(),
                                                              line:      2, }));
    assert!(matches!(assert_failure("puts \"open"),
                     Error::Parse(ParseError::UnterminatedString { .. })));
}

#[test]
fn missing_end_is_a_syntax_error() {
    assert!(matches!(assert_failure("while true\nputs 1"),
                     Error::Parse(ParseError::UnexpectedEndOfInput { .. })));
    assert!(matches!(assert_failure("def f(a\nend"), Error::Parse(_)));
}

#[test]
fn for_requires_a_range_literal() {
    assert!(matches!(assert_failure("for i in 3\nend"),
                     Error::Parse(ParseError::ExpectedToken { .. })));
}

#[test]
fn short_circuit_skips_right_operand() {
    assert_success("puts false && undefined()");
    assert_success("puts true || undefined()");
}

#[test]
fn dividing_by_zero_yields_infinity_or_nan() {
    assert_output("puts 1 / 0\nputs -1 / 0\nputs 0 / 0", "inf\n-inf\nNaN\n");
}

#[test]
fn deep_recursion_runs_on_the_default_stack() {
    let src = "def f(n)\nif n > 0\nf(n - 1)\nend\nn\nend\nputs f(255)";
    assert_output(src, "255.000000\n");
}

#[test]
fn runaway_recursion_is_an_error() {
    assert!(matches!(assert_failure("def f(n)\nf(n + 1)\nend\nf(0)"),
                     Error::Runtime(RuntimeError::StackOverflow { .. })));
}

#[test]
fn deeply_nested_expressions_parse_and_run() {
    let src = format!("puts {}1{}", "(".repeat(5000), ")".repeat(5000));
    assert_output(&src, "1.000000\n");

    let depth = 1000;
    let src = format!("puts {}true", "!".repeat(depth));
    assert_output(&src, "true\n");

    let src = format!("{}puts 1\n{}", "if true\n".repeat(depth), "end\n".repeat(depth));
    assert_output(&src, "1.000000\n");
}
