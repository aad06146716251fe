/// Parsing errors.
///
/// Defines all error types that can occur during scanning and parsing of
/// source code: characters that start no token, unterminated strings, missing
/// keywords and malformed constructs. Any of these stops the run before a
/// single statement executes.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during execution: unknown
/// names, arity mismatches, type errors on operators and conditions, and
/// division by zero.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Any error that can end a run, from either phase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The program failed to scan or parse.
    Parse(ParseError),
    /// The program failed while executing.
    Runtime(RuntimeError),
}

impl From<ParseError> for Error {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

impl From<RuntimeError> for Error {
    fn from(e: RuntimeError) -> Self {
        Self::Runtime(e)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "{e}"),
            Self::Runtime(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Runtime(e) => Some(e),
        }
    }
}
