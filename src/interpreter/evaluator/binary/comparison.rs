use std::rc::Rc;

use crate::{
    ast::BinaryOperator,
    interpreter::{
        evaluator::{binary::core::unsupported, core::EvalResult},
        value::core::Value,
    },
};

/// Maps an equality operator and an equality result to the final boolean.
///
/// This function does not compare anything itself; `NotEqual` simply
/// inverts the result.
#[must_use]
pub const fn equality_op_result(op: BinaryOperator, is_equal: bool) -> bool {
    match op {
        BinaryOperator::NotEqual => !is_equal,
        _ => is_equal,
    }
}

/// Strict equality over every value kind.
///
/// Values of different kinds are never equal. Numbers compare as `f64`,
/// strings by content, ranges by kind and bounds, and functions by identity:
/// two bindings are equal only if they hold the same definition.
///
/// # Example
/// ```
/// use rubyish::interpreter::{evaluator::binary::comparison::strict_eq, value::core::Value};
///
/// assert!(strict_eq(&Value::from("hi"), &Value::from("hi")));
/// assert!(!strict_eq(&Value::Number(1.0), &Value::Boolean(true)));
/// assert!(strict_eq(&Value::Nil, &Value::Nil));
/// ```
#[must_use]
pub fn strict_eq(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Function(a), Value::Function(b)) => Rc::ptr_eq(a, b),
        (Value::Number(a), Value::Number(b)) => a == b,
        (Value::Str(a), Value::Str(b)) => a == b,
        (Value::Boolean(a), Value::Boolean(b)) => a == b,
        (Value::Range { kind: ka,
                        start: sa,
                        end: ea, },
         Value::Range { kind: kb,
                        start: sb,
                        end: eb, }) => ka == kb && sa == sb && ea == eb,
        (Value::Nil, Value::Nil) => true,
        _ => false,
    }
}

/// Evaluates a comparison of the form `Value <Operator> Value`.
///
/// `==` and `!=` are defined for all values through [`strict_eq`]. The
/// ordering operators require two numbers.
///
/// # Parameters
/// - `op`: The comparison operator.
/// - `left`: The left-hand value.
/// - `right`: The right-hand value.
/// - `line`: Current line number used for error reporting.
///
/// # Returns
/// An `EvalResult<Value>` containing a boolean result.
///
/// # Example
/// ```
/// use rubyish::{
///     ast::BinaryOperator,
///     interpreter::{evaluator::binary::comparison::eval_comparison, value::core::Value},
/// };
///
/// let result = eval_comparison(BinaryOperator::Less, &Value::Number(3.0), &Value::Number(5.0), 1);
/// assert_eq!(result.unwrap(), Value::Boolean(true));
///
/// let result = eval_comparison(BinaryOperator::Less, &Value::from("a"), &Value::from("b"), 1);
/// assert!(result.is_err());
/// ```
pub fn eval_comparison(op: BinaryOperator,
                       left: &Value,
                       right: &Value,
                       line: usize)
                       -> EvalResult<Value> {
    let result = match op {
        BinaryOperator::Equal | BinaryOperator::NotEqual => {
            equality_op_result(op, strict_eq(left, right))
        },
        _ => {
            let (Value::Number(a), Value::Number(b)) = (left, right) else {
                return Err(unsupported(op, left, right, line));
            };
            match op {
                BinaryOperator::Less => a < b,
                BinaryOperator::Greater => a > b,
                BinaryOperator::LessEqual => a <= b,
                BinaryOperator::GreaterEqual => a >= b,
                _ => return Err(unsupported(op, left, right, line)),
            }
        },
    };

    Ok(Value::Boolean(result))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::FunctionDef;

    fn def(name: &str) -> FunctionDef {
        FunctionDef { name:   name.to_string(),
                      params: Vec::new(),
                      body:   Vec::new(),
                      line:   1, }
    }

    #[test]
    fn functions_compare_by_identity() {
        let f = Value::from(def("f"));
        let same = f.clone();
        let twin = Value::from(def("f"));

        assert!(strict_eq(&f, &same));
        assert!(!strict_eq(&f, &twin));
    }

    #[test]
    fn mixed_kinds_are_unequal_not_errors() {
        let result = eval_comparison(BinaryOperator::NotEqual,
                                     &Value::Number(1.0),
                                     &Value::from("1"),
                                     1);
        assert_eq!(result, Ok(Value::Boolean(true)));
    }

    #[test]
    fn ordering_needs_numbers() {
        let result = eval_comparison(BinaryOperator::GreaterEqual,
                                     &Value::Boolean(true),
                                     &Value::Number(1.0),
                                     6);
        assert!(result.is_err());
        assert_eq!(result.unwrap_err().line(), 6);
    }
}
