use std::io::Write;

use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        environment::Environment,
        evaluator::{
            binary::core::unsupported,
            core::{EvalResult, Interpreter},
        },
        value::core::Value,
    },
};

impl<W: Write> Interpreter<W> {
    /// Evaluates `&&` or `||` with short-circuiting.
    ///
    /// The left operand must be a boolean (`ExpectedBoolean` otherwise). If
    /// it alone decides the result (`false && _`, `true || _`) the right
    /// operand is never evaluated; otherwise the right operand must also be
    /// a boolean and becomes the result.
    ///
    /// # Parameters
    /// - `op`: `And` or `Or`.
    /// - `left`: Left operand expression.
    /// - `right`: Right operand expression.
    /// - `line`: Line number for error reporting.
    /// - `env`: Environment the operands are evaluated in.
    ///
    /// # Returns
    /// A `Value::Boolean`.
    ///
    /// # Example
    /// ```
    /// use rubyish::run;
    ///
    /// // `missing` is never looked up.
    /// let mut out = Vec::new();
    /// run("puts false && missing", &mut out).unwrap();
    /// assert_eq!(String::from_utf8(out).unwrap(), "false\n");
    /// ```
    pub fn eval_logic(&mut self,
                      op: BinaryOperator,
                      left: &Expr,
                      right: &Expr,
                      line: usize,
                      env: &mut Environment<'_>)
                      -> EvalResult<Value> {
        let lhs = self.evaluate(left, env)?;
        let decided = lhs.as_bool(line)?;

        let short_circuits = match op {
            BinaryOperator::And => !decided,
            _ => decided,
        };
        if short_circuits {
            return Ok(Value::Boolean(decided));
        }

        let rhs = self.evaluate(right, env)?;
        match rhs {
            Value::Boolean(b) => Ok(Value::Boolean(b)),
            _ => Err(unsupported(op, &lhs, &rhs, line)),
        }
    }
}
