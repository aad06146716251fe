/// Core parsing logic.
///
/// Entry points for whole programs and expressions, plus assignment and the
/// `if` statement.
pub mod core;

/// Unary and primary expression parsing.
///
/// Handles prefix operators, literals, identifiers, method calls and
/// parenthesized groups.
pub mod unary;

/// Binary operator parsing.
///
/// One function per precedence level, from `||` down to `* / %`.
pub mod binary;

/// Block parsing.
///
/// Collects the statements of a block body up to its closing keyword.
pub mod block;

/// Utility functions for the parser.
///
/// Comma separated lists and range literal decoding.
pub mod utils;

/// Statement parsing.
///
/// Dispatches on the leading keyword to `puts`, `while`, `for`, `def` and
/// expression statements.
pub mod statement;
