/// Binary operator evaluation logic.
///
/// Handles arithmetic, comparisons, equality, and the short-circuiting
/// logical operators.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements arithmetic negation and logical NOT.
pub mod unary;

/// Core evaluation logic.
///
/// Contains the `Interpreter`, statement execution, expression dispatch, and
/// the `EvalResult` type shared by the whole evaluator.
pub mod core;

/// Evaluation of `for` loops.
///
/// Iterates a range literal, rebinding the loop variable before every pass.
pub mod for_loop;

/// Function definition and call evaluation.
///
/// Handles user-defined function calls, argument checking, call frames, and
/// the output written by `puts`.
pub mod function;
