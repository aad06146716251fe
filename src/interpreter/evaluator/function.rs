/// User-defined function calls.
///
/// Resolves the callee, checks arity, binds arguments in a fresh call frame,
/// and enforces the call depth limit.
pub mod core;

/// The output routine behind `puts`.
///
/// Writes a value's display form to the interpreter's sink.
pub mod print;
