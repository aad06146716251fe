/// Arithmetic on numbers: `+ - * / %`.
pub mod scalar;

/// Equality and ordering comparisons.
pub mod comparison;

/// Dispatch from an operator to its evaluation routine.
pub mod core;

/// Short-circuiting `&&` and `||`.
pub mod logic;
