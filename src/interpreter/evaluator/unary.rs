use crate::{
    ast::UnaryOperator,
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// Evaluates a unary operation on a value.
///
/// Supported operators:
/// - `Negate`: numeric negation.
/// - `Not`: boolean negation.
///
/// # Parameters
/// - `op`: Unary operator.
/// - `value`: Input value.
/// - `line`: Line number for error reporting.
///
/// # Returns
/// The computed `Value` wrapped in `EvalResult`.
///
/// # Errors
/// `RuntimeError::UnsupportedOperand` if the operator is not defined for the
/// value's type.
///
/// # Example
/// ```
/// use rubyish::{
///     ast::UnaryOperator,
///     interpreter::{evaluator::unary::eval_unary, value::core::Value},
/// };
///
/// let v = eval_unary(UnaryOperator::Negate, &Value::Number(5.0), 1).unwrap();
/// assert_eq!(v, Value::Number(-5.0));
///
/// let v = eval_unary(UnaryOperator::Not, &Value::Boolean(false), 1).unwrap();
/// assert_eq!(v, Value::Boolean(true));
///
/// assert!(eval_unary(UnaryOperator::Not, &Value::Number(0.0), 1).is_err());
/// ```
pub const fn eval_unary(op: UnaryOperator, value: &Value, line: usize) -> EvalResult<Value> {
    match (op, value) {
        (UnaryOperator::Negate, Value::Number(n)) => Ok(Value::Number(-*n)),
        (UnaryOperator::Not, Value::Boolean(b)) => Ok(Value::Boolean(!*b)),
        _ => Err(RuntimeError::UnsupportedOperand { op,
                                                    operand: value.type_name(),
                                                    line }),
    }
}
