use crate::interpreter::scanner::TokenKind;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during lexing or parsing.
pub enum ParseError {
    /// The scanner met a character that starts no token.
    UnexpectedCharacter {
        /// The offending text.
        character: String,
        /// The source line where the error occurred.
        line:      usize,
    },
    /// A string literal was opened but never closed.
    UnterminatedString {
        /// The source line where the string started.
        line: usize,
    },
    /// Found a token that cannot start the expected construct.
    UnexpectedToken {
        /// The token encountered.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A specific token kind was required but another one was found.
    ExpectedToken {
        /// The kind the grammar required.
        expected: TokenKind,
        /// The text of the token actually found.
        found:    String,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// Reached the end of input inside an unfinished construct.
    UnexpectedEndOfInput {
        /// The source line where the error occurred.
        line: usize,
    },
    /// The left side of `=` was not a plain identifier.
    InvalidAssignmentTarget {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A range bound did not fit in a 64 bit integer.
    LiteralTooLarge {
        /// The literal text.
        literal: String,
        /// The source line where the error occurred.
        line:    usize,
    },
}

impl ParseError {
    /// The line the error was reported on.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UnexpectedCharacter { line, .. }
            | Self::UnterminatedString { line }
            | Self::UnexpectedToken { line, .. }
            | Self::ExpectedToken { line, .. }
            | Self::UnexpectedEndOfInput { line }
            | Self::InvalidAssignmentTarget { line }
            | Self::LiteralTooLarge { line, .. } => *line,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedCharacter { character, line } => {
                write!(f, "Error on line {line}: Unexpected character '{character}'.")
            },
            Self::UnterminatedString { line } => {
                write!(f, "Error on line {line}: Unterminated string literal.")
            },
            Self::UnexpectedToken { token, line } => {
                write!(f, "Error on line {line}: Unexpected token: {token}.")
            },
            Self::ExpectedToken { expected,
                                  found,
                                  line, } => write!(f,
                                                    "Error on line {line}: Expected {expected} but found '{found}'."),
            Self::UnexpectedEndOfInput { line } => {
                write!(f, "Error on line {line}: Unexpected end of input.")
            },
            Self::InvalidAssignmentTarget { line } => write!(f,
                                                             "Error on line {line}: Only identifiers can be assigned to."),
            Self::LiteralTooLarge { literal, line } => {
                write!(f, "Error on line {line}: Literal {literal} is too large.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
