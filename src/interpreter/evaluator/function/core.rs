use std::{io::Write, rc::Rc};

use tracing::trace;

use crate::{
    ast::{Expr, FunctionDef},
    error::RuntimeError,
    interpreter::{
        environment::Environment,
        evaluator::core::{EvalResult, Interpreter, MAX_CALL_DEPTH},
        value::core::Value,
    },
};

impl<W: Write> Interpreter<W> {
    /// Evaluates a call expression `name(arg, ...)`.
    ///
    /// The name is resolved through the environment chain and must be bound
    /// to a function whose parameter count matches the number of arguments.
    /// Arguments are then evaluated left to right in the caller's
    /// environment and handed to [`Interpreter::call_function`].
    ///
    /// # Errors
    /// - `UnknownName` if `name` is not bound.
    /// - `NotCallable` if it is bound to something other than a function.
    /// - `ArgumentCountMismatch` if the argument count is wrong.
    #[tracing::instrument(level = "trace", skip(self, arguments, env), fields(depth = self.depth))]
    pub fn eval_method_call(&mut self,
                            name: &str,
                            arguments: &[Expr],
                            line: usize,
                            env: &mut Environment<'_>)
                            -> EvalResult<Value> {
        let def = match env.lookup(name, line)? {
            Value::Function(def) => Rc::clone(def),
            other => {
                return Err(RuntimeError::NotCallable { name:      name.to_string(),
                                                       type_name: other.type_name(),
                                                       line });
            },
        };

        if arguments.len() != def.params.len() {
            return Err(RuntimeError::ArgumentCountMismatch { name:     name.to_string(),
                                                             expected: def.params.len(),
                                                             found:    arguments.len(),
                                                             line });
        }

        let values = arguments.iter()
                              .map(|argument| self.evaluate(argument, env))
                              .collect::<EvalResult<Vec<_>>>()?;

        self.call_function(&def, values, line, env)
    }

    /// Runs a function body on already evaluated arguments.
    ///
    /// The parameters are bound in a fresh frame whose enclosing scope is the
    /// global environment at the root of `env`. The body can read globals,
    /// including the function itself for recursion, but its own assignments
    /// stay in the frame, which is dropped when the call returns.
    ///
    /// # Parameters
    /// - `def`: The function to run.
    /// - `arguments`: One value per parameter, in order.
    /// - `line`: Line of the call, for error reporting.
    /// - `env`: The caller's environment.
    ///
    /// # Returns
    /// The value of the last statement in the body, or `Value::Nil` for an
    /// empty body.
    ///
    /// # Errors
    /// `RuntimeError::StackOverflow` when calls nest deeper than
    /// [`MAX_CALL_DEPTH`], and any error raised by the body.
    pub fn call_function(&mut self,
                         def: &FunctionDef,
                         arguments: Vec<Value>,
                         line: usize,
                         env: &Environment<'_>)
                         -> EvalResult<Value> {
        if self.depth >= MAX_CALL_DEPTH {
            return Err(RuntimeError::StackOverflow { depth: MAX_CALL_DEPTH,
                                                     line });
        }

        let mut frame = Environment::with_enclosing(env.root());
        for (param, value) in def.params.iter().zip(arguments) {
            frame.insert(param, value);
        }
        trace!(function = %def.name, depth = self.depth + 1, "entering call frame");

        self.depth += 1;
        let result = self.execute_block(&def.body, &mut frame);
        self.depth -= 1;
        result
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::parse;

    fn run_program(source: &str) -> (EvalResult<()>, String) {
        let program = parse(source).unwrap();
        let mut interpreter = Interpreter::new(Vec::new());
        let result = interpreter.interpret(&program);
        (result, String::from_utf8(interpreter.into_output()).unwrap())
    }

    #[test]
    fn call_returns_last_statement_value() {
        let (result, out) = run_program("def add(a, b)\na + b\nend\nputs add(2, 3)");
        result.unwrap();
        assert_eq!(out, "5.000000\n");
    }

    #[test]
    fn empty_body_returns_nil() {
        let (result, out) = run_program("def nothing\nend\nputs nothing()");
        result.unwrap();
        assert_eq!(out, "nil\n");
    }

    #[test]
    fn wrong_argument_count() {
        let (result, _) = run_program("def add(a, b)\na + b\nend\nadd(1)");
        assert_eq!(result,
                   Err(RuntimeError::ArgumentCountMismatch { name:     "add".to_string(),
                                                             expected: 2,
                                                             found:    1,
                                                             line:     4, }));
    }

    #[test]
    fn calling_a_number_is_not_callable() {
        let (result, _) = run_program("x = 1\nx()");
        assert_eq!(result,
                   Err(RuntimeError::NotCallable { name:      "x".to_string(),
                                                   type_name: "Number",
                                                   line:      2, }));
    }

    #[test]
    fn frame_assignments_do_not_leak_into_globals() {
        let (result, out) =
            run_program("x = 1\ndef set\nx = 99\ny = 2\nend\nset()\nputs x\nputs y");
        assert_eq!(out, "1.000000\n");
        assert_eq!(result,
                   Err(RuntimeError::UnknownName { name: "y".to_string(),
                                                   line: 8, }));
    }

    #[test]
    fn recursion_keeps_parameters_per_call() {
        let source = "def count(n)\n\
                      if n > 0\n\
                      count(n - 1)\n\
                      end\n\
                      puts n\n\
                      end\n\
                      count(3)";
        let (result, out) = run_program(source);
        result.unwrap();
        assert_eq!(out, "0.000000\n1.000000\n2.000000\n3.000000\n");
    }

    #[test]
    fn parameter_survives_nested_call() {
        let source = "def inner(n)\nn * 100\nend\n\
                      def outer(n)\ninner(n + 1)\nputs n\nend\n\
                      outer(5)";
        let (result, out) = run_program(source);
        result.unwrap();
        assert_eq!(out, "5.000000\n");
    }

    #[test]
    fn runaway_recursion_overflows() {
        let (result, _) = run_program("def f(n)\nf(n + 1)\nend\nf(0)");
        assert_eq!(result,
                   Err(RuntimeError::StackOverflow { depth: MAX_CALL_DEPTH,
                                                     line:  2, }));
    }

    #[test]
    fn recursion_just_below_the_limit_completes() {
        let source = format!("def f(n)\nif n > 0\nf(n - 1)\nend\nn\nend\nputs f({})",
                             MAX_CALL_DEPTH - 1);
        let (result, out) = run_program(&source);
        result.unwrap();
        assert_eq!(out, format!("{:.6}\n", (MAX_CALL_DEPTH - 1) as f64));
    }

    #[test]
    fn depth_is_restored_after_a_failed_call() {
        let mut interpreter = Interpreter::new(Vec::new());

        let failing = parse("def f(n)\nif n > 0\nf(n - 1)\nend\nmissing\nend\nf(5)").unwrap();
        assert_eq!(interpreter.interpret(&failing),
                   Err(RuntimeError::UnknownName { name: "missing".to_string(),
                                                   line: 5, }));
        assert_eq!(interpreter.depth, 0);

        let runaway = parse("def g(n)\ng(n + 1)\nend\ng(0)").unwrap();
        assert!(matches!(interpreter.interpret(&runaway),
                         Err(RuntimeError::StackOverflow { .. })));
        assert_eq!(interpreter.depth, 0);

        let countdown = parse("def h(n)\nif n > 0\nh(n - 1)\nend\nn\nend\nputs h(3)").unwrap();
        interpreter.interpret(&countdown).unwrap();
        assert_eq!(interpreter.depth, 0);
        assert_eq!(String::from_utf8(interpreter.into_output()).unwrap(), "3.000000\n");
    }
}
