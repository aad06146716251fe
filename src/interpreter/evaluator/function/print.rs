use std::io::Write;

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        value::core::Value,
    },
};

impl<W: Write> Interpreter<W> {
    /// Writes a value to the output sink followed by a newline.
    ///
    /// The value is formatted using its `Display` implementation, which is
    /// defined for every `Value` variant.
    ///
    /// # Parameters
    /// - `value`: Value to print.
    /// - `line`: Line number of the `puts` statement.
    ///
    /// # Errors
    /// `RuntimeError::Output` if the sink rejects the write.
    ///
    /// # Example
    /// ```
    /// use rubyish::interpreter::{evaluator::core::Interpreter, value::core::Value};
    ///
    /// let mut interpreter = Interpreter::new(Vec::new());
    /// interpreter.print(&Value::from("hello"), 1).unwrap();
    /// interpreter.print(&Value::Number(42.0), 2).unwrap();
    ///
    /// assert_eq!(String::from_utf8(interpreter.into_output()).unwrap(),
    ///            "hello\n42.000000\n");
    /// ```
    pub fn print(&mut self, value: &Value, line: usize) -> EvalResult<()> {
        writeln!(self.out, "{value}").map_err(|e| RuntimeError::Output { details: e.to_string(),
                                                                          line })
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use super::*;

    struct Closed;

    impl Write for Closed {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn write_failure_is_an_output_error() {
        let mut interpreter = Interpreter::new(Closed);
        let err = interpreter.print(&Value::Nil, 9).unwrap_err();

        assert!(matches!(err, RuntimeError::Output { line: 9, .. }));
    }
}
