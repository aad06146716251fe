/// Numeric conversion helpers.
///
/// Checked conversions between the interpreter's `f64` numbers and the `i64`
/// integers used by range bounds and the `%` operator. Each returns an error
/// instead of silently rounding or saturating.
pub mod num;
/// Stack growth for deeply nested programs.
pub mod stack;
