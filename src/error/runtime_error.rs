use crate::ast::{BinaryOperator, UnaryOperator};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation and runtime.
pub enum RuntimeError {
    /// A variable or function name is not bound in the active environment.
    UnknownName {
        /// The name that was looked up.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// The wrong number of arguments was supplied to a function.
    ArgumentCountMismatch {
        /// The function being called.
        name:     String,
        /// Number of declared parameters.
        expected: usize,
        /// Number of arguments supplied.
        found:    usize,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// A call was made through a name bound to something other than a
    /// function.
    NotCallable {
        /// The name that was called.
        name:      String,
        /// The type of the value it is bound to.
        type_name: &'static str,
        /// The source line where the error occurred.
        line:      usize,
    },
    /// A boolean value was expected, but not found.
    ExpectedBoolean {
        /// The type that was found instead.
        found: &'static str,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A value had an unexpected or incompatible type.
    TypeError {
        /// Details about the type mismatch.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// A binary operator was applied to operand types it is not defined for.
    UnsupportedOperation {
        /// The operator.
        op:    BinaryOperator,
        /// Type of the left operand.
        left:  &'static str,
        /// Type of the right operand.
        right: &'static str,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A unary operator was applied to an operand type it is not defined for.
    UnsupportedOperand {
        /// The operator.
        op:      UnaryOperator,
        /// Type of the operand.
        operand: &'static str,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// Attempted division (or modulo) by zero.
    DivisionByZero {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Calls nested deeper than the interpreter allows.
    StackOverflow {
        /// The configured call depth limit.
        depth: usize,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Writing to the output sink failed.
    Output {
        /// The I/O error message.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
}

impl RuntimeError {
    /// The line the error was reported on.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UnknownName { line, .. }
            | Self::ArgumentCountMismatch { line, .. }
            | Self::NotCallable { line, .. }
            | Self::ExpectedBoolean { line, .. }
            | Self::TypeError { line, .. }
            | Self::UnsupportedOperation { line, .. }
            | Self::UnsupportedOperand { line, .. }
            | Self::DivisionByZero { line }
            | Self::StackOverflow { line, .. }
            | Self::Output { line, .. } => *line,
        }
    }
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownName { name, line } => {
                write!(f, "Error on line {line}: Undefined name '{name}'.")
            },
            Self::ArgumentCountMismatch { name,
                                          expected,
                                          found,
                                          line, } => write!(f,
                                                            "Error on line {line}: Wrong number of arguments for '{name}' (given {found}, expected {expected})."),
            Self::NotCallable { name,
                                type_name,
                                line, } => write!(f,
                                                  "Error on line {line}: '{name}' is a {type_name}, not a function."),
            Self::ExpectedBoolean { found, line } => write!(f,
                                                            "Error on line {line}: Expected boolean condition but found {found}."),
            Self::TypeError { details, line } => {
                write!(f, "Error on line {line}: Type error: {details}.")
            },
            Self::UnsupportedOperation { op,
                                         left,
                                         right,
                                         line, } => write!(f,
                                                           "Error on line {line}: Operator '{op}' is not defined for {left} and {right}."),
            Self::UnsupportedOperand { op, operand, line } => write!(f,
                                                                     "Error on line {line}: Operator '{op}' is not defined for {operand}."),
            Self::DivisionByZero { line } => write!(f, "Error on line {line}: Division by zero."),
            Self::StackOverflow { depth, line } => write!(f,
                                                          "Error on line {line}: Stack level too deep (more than {depth} nested calls)."),
            Self::Output { details, line } => {
                write!(f, "Error on line {line}: Failed to write output: {details}.")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
