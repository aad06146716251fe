use crate::{error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// Largest signed integer exactly representable as an `f64` (`2^53 - 1`).
pub const MAX_SAFE_I64_INT: i64 = 9_007_199_254_740_991;

/// Truncates an `f64` toward zero and converts it to `i64`.
///
/// Used by the `%` operator, which works on the integer parts of its
/// operands.
///
/// # Errors
/// `RuntimeError::TypeError` for NaN, infinities and values outside the
/// `i64` range.
///
/// # Example
/// ```
/// use rubyish::{error::RuntimeError, util::num::truncate_to_i64};
///
/// assert_eq!(truncate_to_i64(7.9, 1).unwrap(), 7);
/// assert_eq!(truncate_to_i64(-7.9, 1).unwrap(), -7);
///
/// let err = truncate_to_i64(f64::NAN, 3).unwrap_err();
/// assert!(matches!(err, RuntimeError::TypeError { line: 3, .. }));
/// ```
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_precision_loss)]
pub fn truncate_to_i64(value: f64, line: usize) -> EvalResult<i64> {
    if !value.is_finite() {
        return Err(RuntimeError::TypeError { details: format!("Cannot truncate non-finite value {value} to an integer"),
                                             line });
    }
    let truncated = value.trunc();
    // i64::MAX as f64 rounds up to 2^63, which is itself out of range.
    if truncated < i64::MIN as f64 || truncated >= i64::MAX as f64 {
        return Err(RuntimeError::TypeError { details: format!("Value {value} does not fit in an integer"),
                                             line });
    }
    Ok(truncated as i64)
}

/// Converts an `i64` to `f64` if it is exactly representable.
///
/// Range bounds are materialized as integers at parse time; loop variables
/// bound from them must not silently round.
///
/// # Errors
/// `RuntimeError::TypeError` if the magnitude exceeds [`MAX_SAFE_I64_INT`].
///
/// # Example
/// ```
/// use rubyish::util::num::{MAX_SAFE_I64_INT, i64_to_f64_checked};
///
/// assert_eq!(i64_to_f64_checked(42, 1).unwrap(), 42.0);
/// assert!(i64_to_f64_checked(MAX_SAFE_I64_INT + 1, 1).is_err());
/// ```
#[allow(clippy::cast_precision_loss)]
pub fn i64_to_f64_checked(value: i64, line: usize) -> EvalResult<f64> {
    if value.unsigned_abs() > MAX_SAFE_I64_INT.unsigned_abs() {
        return Err(RuntimeError::TypeError { details: format!("Integer {value} cannot be represented exactly as a number"),
                                             line });
    }
    Ok(value as f64)
}
