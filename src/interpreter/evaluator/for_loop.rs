use std::io::Write;

use crate::{
    ast::{Expr, RangeKind, Statement},
    error::RuntimeError,
    interpreter::{
        environment::Environment,
        evaluator::core::{EvalResult, Interpreter},
        value::core::Value,
    },
    util::num::i64_to_f64_checked,
};

impl<W: Write> Interpreter<W> {
    /// Executes a `for` loop.
    ///
    /// The iterand is evaluated once and must be a range. Before every pass
    /// the loop variable is bound as a Number in the current environment, so
    /// it stays visible after the loop with the last value it took. An
    /// inclusive range `a..b` visits `a` through `b`; an exclusive range
    /// `a...b` stops before `b`. A range whose start lies past its end runs
    /// zero times.
    ///
    /// # Parameters
    /// - `var`: Name of the loop variable.
    /// - `range`: Iterand expression.
    /// - `body`: Loop body.
    /// - `line`: Line of the `for` keyword.
    /// - `env`: Current environment.
    ///
    /// # Returns
    /// Always `Value::Nil`.
    ///
    /// # Errors
    /// `RuntimeError::TypeError` if the iterand is not a range, and any error
    /// raised by the body.
    ///
    /// # Example
    /// ```
    /// use rubyish::run;
    ///
    /// let mut out = Vec::new();
    /// run("for i in 1...3\nputs i\nend\nputs i", &mut out).unwrap();
    ///
    /// assert_eq!(String::from_utf8(out).unwrap(), "1.000000\n2.000000\n2.000000\n");
    /// ```
    pub fn execute_for(&mut self,
                       var: &str,
                       range: &Expr,
                       body: &[Statement],
                       line: usize,
                       env: &mut Environment<'_>)
                       -> EvalResult<Value> {
        let iterand = self.evaluate(range, env)?;
        let Value::Range { kind, start, end } = iterand else {
            return Err(RuntimeError::TypeError { details: format!("Cannot iterate over {}",
                                                                  iterand.type_name()),
                                                 line });
        };

        let values: Box<dyn Iterator<Item = i64>> = match kind {
            RangeKind::Inclusive => Box::new(start..=end),
            RangeKind::Exclusive => Box::new(start..end),
        };

        for i in values {
            env.insert(var, Value::Number(i64_to_f64_checked(i, line)?));
            self.execute_block(body, env)?;
        }

        Ok(Value::Nil)
    }
}
