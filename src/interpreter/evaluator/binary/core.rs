use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::{
            binary::{comparison::eval_comparison, scalar::eval_scalar_op},
            core::EvalResult,
        },
        value::core::Value,
    },
};

/// Evaluates a binary operation between two already evaluated values.
///
/// Arithmetic goes to `eval_scalar_op`, relational and equality operators to
/// `eval_comparison`. The logical operators short-circuit and so are handled
/// before their operands are evaluated; given here they are applied eagerly
/// to two booleans.
///
/// # Parameters
/// - `op`: The operator.
/// - `left`: Left operand.
/// - `right`: Right operand.
/// - `line`: Line number for error reporting.
///
/// # Returns
/// An `EvalResult<Value>` containing the evaluated result.
///
/// # Example
/// ```
/// use rubyish::{
///     ast::BinaryOperator,
///     interpreter::{evaluator::binary::core::eval_binary, value::core::Value},
/// };
///
/// let result = eval_binary(BinaryOperator::Add, &Value::Number(3.0), &Value::Number(4.0), 1);
/// assert_eq!(result.unwrap(), Value::Number(7.0));
///
/// let result = eval_binary(BinaryOperator::Add, &Value::from("a"), &Value::Number(1.0), 1);
/// assert!(result.is_err());
/// ```
pub fn eval_binary(op: BinaryOperator,
                   left: &Value,
                   right: &Value,
                   line: usize)
                   -> EvalResult<Value> {
    use BinaryOperator::{
        Add, And, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mod, Mul, NotEqual, Or, Sub,
    };

    match op {
        Add | Sub | Mul | Div | Mod => eval_scalar_op(op, left, right, line),
        Less | Greater | LessEqual | GreaterEqual | Equal | NotEqual => {
            eval_comparison(op, left, right, line)
        },
        And | Or => match (left, right) {
            (Value::Boolean(a), Value::Boolean(b)) => {
                Ok(Value::Boolean(if op == And { *a && *b } else { *a || *b }))
            },
            _ => Err(unsupported(op, left, right, line)),
        },
    }
}

/// Builds the error for an operator applied to operand types it is not
/// defined for.
pub(crate) const fn unsupported(op: BinaryOperator,
                                left: &Value,
                                right: &Value,
                                line: usize)
                                -> RuntimeError {
    RuntimeError::UnsupportedOperation { op,
                                         left: left.type_name(),
                                         right: right.type_name(),
                                         line }
}
