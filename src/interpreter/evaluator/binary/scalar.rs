use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::{binary::core::unsupported, core::EvalResult},
        value::core::Value,
    },
    util::num::truncate_to_i64,
};

/// Applies an arithmetic operator to two numbers.
///
/// `+ - * /` work on the full `f64` values, so dividing by zero gives an
/// infinity or NaN. `%` truncates both operands toward zero and takes the
/// integer remainder, whose sign follows the dividend.
///
/// # Errors
/// - `DivisionByZero` for `%` with a divisor that truncates to zero.
/// - `UnsupportedOperation` if either operand is not a number.
///
/// # Example
/// ```
/// use rubyish::{
///     ast::BinaryOperator,
///     error::RuntimeError,
///     interpreter::{evaluator::binary::scalar::eval_scalar_op, value::core::Value},
/// };
///
/// let v = eval_scalar_op(BinaryOperator::Mod, &Value::Number(-7.5), &Value::Number(2.0), 1);
/// assert_eq!(v.unwrap(), Value::Number(-1.0));
///
/// let v = eval_scalar_op(BinaryOperator::Div, &Value::Number(1.0), &Value::Number(0.0), 4);
/// assert_eq!(v.unwrap(), Value::Number(f64::INFINITY));
///
/// let err = eval_scalar_op(BinaryOperator::Mod, &Value::Number(1.0), &Value::Number(0.0), 4);
/// assert_eq!(err.unwrap_err(), RuntimeError::DivisionByZero { line: 4 });
/// ```
#[allow(clippy::cast_precision_loss)]
pub fn eval_scalar_op(op: BinaryOperator,
                      left: &Value,
                      right: &Value,
                      line: usize)
                      -> EvalResult<Value> {
    let (Value::Number(a), Value::Number(b)) = (left, right) else {
        return Err(unsupported(op, left, right, line));
    };
    let (a, b) = (*a, *b);

    let result = match op {
        BinaryOperator::Add => a + b,
        BinaryOperator::Sub => a - b,
        BinaryOperator::Mul => a * b,
        BinaryOperator::Div => a / b,
        BinaryOperator::Mod => {
            let divisor = truncate_to_i64(b, line)?;
            if divisor == 0 {
                return Err(RuntimeError::DivisionByZero { line });
            }
            truncate_to_i64(a, line)?.wrapping_rem(divisor) as f64
        },
        _ => return Err(unsupported(op, left, right, line)),
    };

    Ok(Value::Number(result))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn num(value: f64) -> Value {
        Value::Number(value)
    }

    #[test]
    fn arithmetic_on_numbers() {
        assert_eq!(eval_scalar_op(BinaryOperator::Sub, &num(2.0), &num(5.0), 1), Ok(num(-3.0)));
        assert_eq!(eval_scalar_op(BinaryOperator::Mul, &num(1.5), &num(4.0), 1), Ok(num(6.0)));
        assert_eq!(eval_scalar_op(BinaryOperator::Div, &num(7.0), &num(2.0), 1), Ok(num(3.5)));
    }

    #[test]
    fn division_by_zero_follows_ieee() {
        assert_eq!(eval_scalar_op(BinaryOperator::Div, &num(1.0), &num(0.0), 1),
                   Ok(num(f64::INFINITY)));
        assert_eq!(eval_scalar_op(BinaryOperator::Div, &num(-1.0), &num(0.0), 1),
                   Ok(num(f64::NEG_INFINITY)));
        let Ok(Value::Number(nan)) = eval_scalar_op(BinaryOperator::Div, &num(0.0), &num(0.0), 1)
        else {
            panic!("0 / 0 should be a number");
        };
        assert!(nan.is_nan());
    }

    #[test]
    fn modulo_truncates_operands() {
        assert_eq!(eval_scalar_op(BinaryOperator::Mod, &num(10.9), &num(3.2), 1), Ok(num(1.0)));
        assert_eq!(eval_scalar_op(BinaryOperator::Mod, &num(5.0), &num(0.5), 2),
                   Err(RuntimeError::DivisionByZero { line: 2 }));
    }

    #[test]
    fn strings_are_not_numbers() {
        assert_eq!(eval_scalar_op(BinaryOperator::Add, &Value::from("a"), &num(1.0), 3),
                   Err(RuntimeError::UnsupportedOperation { op:    BinaryOperator::Add,
                                                            left:  "String",
                                                            right: "Number",
                                                            line:  3, }));
    }
}
