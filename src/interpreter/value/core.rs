use std::rc::Rc;

use crate::{
    ast::{FunctionDef, RangeKind},
    error::RuntimeError,
    interpreter::evaluator::core::EvalResult,
};

/// Represents a runtime value in the interpreter.
///
/// Values are produced by evaluation only, never by parsing. Every statement
/// form without an intrinsic result evaluates to [`Value::Nil`].
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A numeric value (double precision floating-point).
    Number(f64),
    /// An immutable string.
    Str(Rc<str>),
    /// A boolean value (`true` or `false`).
    /// Produced by comparison and logical operators. Used as conditions in
    /// `if` and `while`, where the condition must evaluate to `Boolean`.
    Boolean(bool),
    /// An integer interval.
    Range {
        /// Inclusive or exclusive upper bound.
        kind:  RangeKind,
        /// Lower bound.
        start: i64,
        /// Upper bound.
        end:   i64,
    },
    /// A user-defined function.
    Function(Rc<FunctionDef>),
    /// The absence of a value.
    Nil,
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Str(Rc::from(v))
    }
}

impl From<FunctionDef> for Value {
    fn from(def: FunctionDef) -> Self {
        Self::Function(Rc::new(def))
    }
}

impl Value {
    /// A short, user-facing name for the value's type, used in error
    /// messages.
    ///
    /// # Example
    /// ```
    /// use rubyish::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::Number(1.0).type_name(), "Number");
    /// assert_eq!(Value::Nil.type_name(), "nil");
    /// ```
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Number(_) => "Number",
            Self::Str(_) => "String",
            Self::Boolean(_) => "Boolean",
            Self::Range { .. } => "Range",
            Self::Function(_) => "Function",
            Self::Nil => "nil",
        }
    }

    /// Converts the value to `bool`, or returns an error if not boolean.
    ///
    /// Used for conditions in `if` and `while`. No other type is truthy or
    /// falsy.
    ///
    /// # Errors
    /// `RuntimeError::ExpectedBoolean` naming the type that was found.
    pub const fn as_bool(&self, line: usize) -> EvalResult<bool> {
        match self {
            Self::Boolean(b) => Ok(*b),
            _ => Err(RuntimeError::ExpectedBoolean { found: self.type_name(),
                                                     line }),
        }
    }
}

impl std::fmt::Display for Value {
    /// Formats the value the way `puts` prints it.
    ///
    /// Numbers always carry six decimals (`3` prints as `3.000000`), strings
    /// print without quotes, and `Nil` prints as `nil`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n:.6}"),
            Self::Str(s) => write!(f, "{s}"),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::Range { kind, start, end } => write!(f, "{start}{}{end}", kind.separator()),
            Self::Function(def) => write!(f, "#<def {}>", def.name),
            Self::Nil => write!(f, "nil"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_puts_format() {
        assert_eq!(Value::Number(3.5).to_string(), "3.500000");
        assert_eq!(Value::Number(-2.0).to_string(), "-2.000000");
        assert_eq!(Value::from("plain").to_string(), "plain");
        assert_eq!(Value::Boolean(false).to_string(), "false");
        assert_eq!(Value::Nil.to_string(), "nil");
        assert_eq!(Value::Range { kind:  RangeKind::Exclusive,
                                  start: 1,
                                  end:   4, }.to_string(),
                   "1...4");
    }

    #[test]
    fn only_booleans_are_conditions() {
        assert_eq!(Value::Boolean(true).as_bool(1), Ok(true));
        assert_eq!(Value::Number(0.0).as_bool(7),
                   Err(RuntimeError::ExpectedBoolean { found: "Number",
                                                       line:  7, }));
    }
}
