use std::{io::Write, rc::Rc};

use tracing::debug;

use crate::{
    ast::{Conditional, Expr, Statement},
    error::RuntimeError,
    interpreter::{
        environment::Environment,
        evaluator::{binary::core::eval_binary, unary::eval_unary},
        value::core::Value,
    },
    util::stack::ensure_sufficient_stack,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Deepest allowed nesting of function calls.
pub const MAX_CALL_DEPTH: usize = 1000;

/// The tree-walking interpreter.
///
/// Owns the global environment and the sink that `puts` writes to. Top-level
/// statements run directly in the global environment; every function call
/// gets a fresh frame whose enclosing scope is the global environment, so
/// recursive calls never see each other's parameters.
///
/// ## Usage
///
/// An `Interpreter` is created once per run. Bindings made by earlier calls
/// to [`Interpreter::interpret`] stay visible to later ones.
///
/// # Example
/// ```
/// use rubyish::{interpreter::evaluator::core::Interpreter, parse};
///
/// let program = parse("x = 2\nputs x * 3").unwrap();
///
/// let mut interpreter = Interpreter::new(Vec::new());
/// interpreter.interpret(&program).unwrap();
///
/// assert_eq!(String::from_utf8(interpreter.into_output()).unwrap(), "6.000000\n");
/// ```
pub struct Interpreter<W: Write> {
    globals:          Environment<'static>,
    pub(crate) out:   W,
    pub(crate) depth: usize,
}

impl<W: Write> Interpreter<W> {
    /// Creates an interpreter with an empty global environment writing to
    /// `out`.
    #[must_use]
    pub fn new(out: W) -> Self {
        Self { globals: Environment::new(),
               out,
               depth: 0 }
    }

    /// The global environment.
    #[must_use]
    pub const fn globals(&self) -> &Environment<'static> {
        &self.globals
    }

    /// Consumes the interpreter and returns its output sink.
    pub fn into_output(self) -> W {
        self.out
    }

    /// Executes a whole program in the global environment.
    ///
    /// Statements run in order; the first error stops the run. Bindings made
    /// before the failing statement are kept.
    ///
    /// # Errors
    /// The first `RuntimeError` raised by any statement.
    pub fn interpret(&mut self, program: &[Statement]) -> EvalResult<()> {
        debug!(statements = program.len(), "interpreting program");

        let mut globals = std::mem::take(&mut self.globals);
        let result = program.iter()
                            .try_for_each(|statement| {
                                self.execute(statement, &mut globals).map(|_| ())
                            });
        self.globals = globals;
        result
    }

    /// Executes a single statement in `env`.
    ///
    /// Statement forms without an intrinsic value (`puts`, `if`, `while`,
    /// `for`, `def`) produce [`Value::Nil`]; an expression statement produces
    /// the expression's value.
    ///
    /// # Parameters
    /// - `statement`: Statement to execute.
    /// - `env`: Environment that lookups and assignments go to.
    ///
    /// # Returns
    /// The statement's value.
    pub fn execute(&mut self,
                   statement: &Statement,
                   env: &mut Environment<'_>)
                   -> EvalResult<Value> {
        ensure_sufficient_stack(|| self.execute_statement(statement, env))
    }

    fn execute_statement(&mut self,
                         statement: &Statement,
                         env: &mut Environment<'_>)
                         -> EvalResult<Value> {
        match statement {
            Statement::Puts { expr, line } => {
                let value = self.evaluate(expr, env)?;
                self.print(&value, *line)?;
                Ok(Value::Nil)
            },
            Statement::If { conditionals, .. } => self.execute_if(conditionals, env),
            Statement::While { condition, body, .. } => {
                while self.evaluate(condition, env)?
                          .as_bool(condition.line_number())?
                {
                    self.execute_block(body, env)?;
                }
                Ok(Value::Nil)
            },
            Statement::For { var,
                             range,
                             body,
                             line, } => self.execute_for(var, range, body, *line, env),
            Statement::Def(def) => {
                env.insert(&def.name, Value::Function(Rc::new(def.clone())));
                Ok(Value::Nil)
            },
            Statement::Expression { expr, .. } => self.evaluate(expr, env),
        }
    }

    /// Evaluates an expression in `env`.
    ///
    /// This is the main entry point for expression evaluation. Literals
    /// construct values directly, identifiers are looked up through the
    /// environment chain, assignments bind in `env` itself, and operators
    /// evaluate their operands left to right.
    ///
    /// # Parameters
    /// - `expr`: Expression to evaluate.
    /// - `env`: Environment for lookups and assignments.
    ///
    /// # Returns
    /// The resulting value.
    ///
    /// # Example
    /// ```
    /// use rubyish::{
    ///     ast::{BinaryOperator, Expr},
    ///     interpreter::{
    ///         environment::Environment, evaluator::core::Interpreter, value::core::Value,
    ///     },
    /// };
    ///
    /// let mut interpreter = Interpreter::new(std::io::sink());
    /// let mut env = Environment::new();
    ///
    /// // 7 % 3
    /// let expr = Expr::Binary { left:  Box::new(Expr::Number { value: 7.0,
    ///                                                          line:  1, }),
    ///                           op:    BinaryOperator::Mod,
    ///                           right: Box::new(Expr::Number { value: 3.0,
    ///                                                          line:  1, }),
    ///                           line:  1, };
    ///
    /// assert_eq!(interpreter.evaluate(&expr, &mut env).unwrap(), Value::Number(1.0));
    /// ```
    pub fn evaluate(&mut self, expr: &Expr, env: &mut Environment<'_>) -> EvalResult<Value> {
        ensure_sufficient_stack(|| self.evaluate_expr(expr, env))
    }

    fn evaluate_expr(&mut self, expr: &Expr, env: &mut Environment<'_>) -> EvalResult<Value> {
        match expr {
            Expr::Number { value, .. } => Ok(Value::Number(*value)),
            Expr::Str { value, .. } => Ok(Value::from(value.as_str())),
            Expr::Boolean { value, .. } => Ok(Value::Boolean(*value)),
            Expr::Range { kind, start, end, .. } => Ok(Value::Range { kind:  *kind,
                                                                      start: *start,
                                                                      end:   *end, }),
            Expr::Identifier { name, line } => env.lookup(name, *line).cloned(),
            Expr::Unary { op, expr, line } => {
                let operand = self.evaluate(expr, env)?;
                eval_unary(*op, &operand, *line)
            },
            Expr::Binary { left,
                           op,
                           right,
                           line, } => {
                if op.is_logical() {
                    return self.eval_logic(*op, left, right, *line, env);
                }
                let left = self.evaluate(left, env)?;
                let right = self.evaluate(right, env)?;
                eval_binary(*op, &left, &right, *line)
            },
            Expr::MethodCall { name,
                               arguments,
                               line, } => self.eval_method_call(name, arguments, *line, env),
            Expr::Assignment { name, value, .. } => {
                let value = self.evaluate(value, env)?;
                env.insert(name, value.clone());
                Ok(value)
            },
        }
    }

    /// Executes a list of statements in order and returns the value of the
    /// last one, or [`Value::Nil`] for an empty list.
    pub(crate) fn execute_block(&mut self,
                                statements: &[Statement],
                                env: &mut Environment<'_>)
                                -> EvalResult<Value> {
        let mut last = Value::Nil;
        for statement in statements {
            last = self.execute(statement, env)?;
        }
        Ok(last)
    }

    /// Runs the body of the first conditional whose condition is `true`.
    ///
    /// Conditions are evaluated in order and only until one holds; an `else`
    /// branch is represented by a literal `true` condition.
    fn execute_if(&mut self,
                  conditionals: &[Conditional],
                  env: &mut Environment<'_>)
                  -> EvalResult<Value> {
        for Conditional { condition, body } in conditionals {
            if self.evaluate(condition, env)?
                   .as_bool(condition.line_number())?
            {
                self.execute_block(body, env)?;
                break;
            }
        }
        Ok(Value::Nil)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::parse;

    fn run_to_string(source: &str) -> EvalResult<String> {
        let program = parse(source).unwrap();
        let mut interpreter = Interpreter::new(Vec::new());
        interpreter.interpret(&program)?;
        Ok(String::from_utf8(interpreter.into_output()).unwrap())
    }

    #[test]
    fn expression_statements_yield_their_value() {
        let program = parse("x = 4\nx * 2").unwrap();
        let mut interpreter = Interpreter::new(Vec::new());
        let mut env = Environment::new();

        interpreter.execute(&program[0], &mut env).unwrap();
        let value = interpreter.execute(&program[1], &mut env).unwrap();

        assert_eq!(value, Value::Number(8.0));
    }

    #[test]
    fn block_forms_yield_nil() {
        let program = parse("if true\n1\nend\nputs 1\ndef f\nend").unwrap();
        let mut interpreter = Interpreter::new(std::io::sink());
        let mut env = Environment::new();

        for statement in &program {
            assert_eq!(interpreter.execute(statement, &mut env).unwrap(), Value::Nil);
        }
    }

    #[test]
    fn assignment_evaluates_to_the_assigned_value() {
        assert_eq!(run_to_string("puts y = 3").unwrap(), "3.000000\n");
    }

    #[test]
    fn globals_survive_between_runs() {
        let mut interpreter = Interpreter::new(Vec::new());
        interpreter.interpret(&parse("x = 10").unwrap()).unwrap();
        interpreter.interpret(&parse("puts x + 1").unwrap()).unwrap();

        assert_eq!(interpreter.globals().get("x"), Some(&Value::Number(10.0)));
        assert_eq!(String::from_utf8(interpreter.into_output()).unwrap(), "11.000000\n");
    }

    #[test]
    fn failed_run_keeps_earlier_bindings() {
        let mut interpreter = Interpreter::new(std::io::sink());
        let err = interpreter.interpret(&parse("a = 1\nputs b").unwrap())
                             .unwrap_err();

        assert_eq!(err,
                   RuntimeError::UnknownName { name: "b".to_string(),
                                               line: 2, });
        assert_eq!(interpreter.globals().get("a"), Some(&Value::Number(1.0)));
    }

    #[test]
    fn while_loop_counts() {
        let out = run_to_string("i = 0\nwhile i < 3\nputs i\ni = i + 1\nend").unwrap();
        assert_eq!(out, "0.000000\n1.000000\n2.000000\n");
    }

    #[test]
    fn while_condition_must_be_boolean() {
        let err = run_to_string("while 1\nend").unwrap_err();
        assert_eq!(err,
                   RuntimeError::ExpectedBoolean { found: "Number",
                                                   line:  1, });
    }

    #[test]
    fn if_runs_only_the_first_true_branch() {
        let source = "if false\nputs 1\nelsif true\nputs 2\nelsif true\nputs 3\nelse\nputs 4\nend";
        assert_eq!(run_to_string(source).unwrap(), "2.000000\n");
    }

    #[test]
    fn if_condition_error_reports_its_line() {
        let err = run_to_string("if false\nputs 1\nelsif \"yes\"\nputs 2\nend").unwrap_err();
        assert_eq!(err,
                   RuntimeError::ExpectedBoolean { found: "String",
                                                   line:  3, });
    }
}
