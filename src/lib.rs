//! # rubyish
//!
//! rubyish is a tree-walking interpreter for a small, Ruby-flavored
//! scripting language written in Rust.
//! It scans and parses a whole program up front, then executes it statement
//! by statement, with numbers, strings, booleans, ranges, user-defined
//! functions, `if`/`while`/`for` control flow, and `puts` output.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use std::io::Write;

pub use crate::error::Error;
use crate::{
    ast::Statement,
    error::ParseError,
    interpreter::{evaluator::core::Interpreter, parser::core::parse_program, scanner::Scanner},
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` and `Statement` enums and related types
/// that represent the syntactic structure of source code as a tree. The AST
/// is built by the parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines expression and statement types for all language constructs.
/// - Attaches source lines to AST nodes for error reporting.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised during scanning,
/// parsing, or evaluating code. Every error carries the source line it was
/// raised on and renders as `Error on line N: ...`.
///
/// # Responsibilities
/// - Defines error enums for each phase (parser, evaluator).
/// - Wraps both in a single `Error` returned by [`run`].
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, scanning, parsing, environments,
/// evaluation, and value representations to provide a complete runtime.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, scanner, parser, evaluator,
///   environment, and value types.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// General utilities for safe numeric conversion.
///
/// # Responsibilities
/// - Convert between `i64` and `f64` without silent data loss.
pub mod util;

/// Parses a whole program without running it.
///
/// # Errors
/// The first `ParseError` in the source, lexical or syntactic.
///
/// # Examples
/// ```
/// use rubyish::parse;
///
/// let program = parse("def double(x)\nx * 2\nend\nputs double(4)").unwrap();
/// assert_eq!(program.len(), 2);
///
/// assert!(parse("if true\nputs 1").is_err());
/// ```
#[tracing::instrument(level = "debug", skip_all)]
pub fn parse(source: &str) -> Result<Vec<Statement>, ParseError> {
    let mut scanner = Scanner::new(source)?;
    parse_program(&mut scanner)
}

/// Parses and executes a program, writing `puts` output to `out`.
///
/// The whole source is parsed before anything runs, so a syntax error
/// anywhere means no output at all. Execution stops at the first runtime
/// error; output written before it stays written.
///
/// # Errors
/// `Error::Parse` if the source does not scan or parse, `Error::Runtime` if
/// a statement fails.
///
/// # Examples
/// ```
/// use rubyish::{Error, run};
///
/// let mut out = Vec::new();
/// run("x = 1.5\nputs x * 2", &mut out).unwrap();
/// assert_eq!(String::from_utf8(out).unwrap(), "3.000000\n");
///
/// // 'y' is not defined.
/// let err = run("puts y", std::io::sink()).unwrap_err();
/// assert!(matches!(err, Error::Runtime(_)));
/// ```
#[tracing::instrument(level = "debug", skip_all)]
pub fn run<W: Write>(source: &str, out: W) -> Result<(), Error> {
    let program = parse(source)?;

    let mut interpreter = Interpreter::new(out);
    interpreter.interpret(&program)?;
    Ok(())
}
