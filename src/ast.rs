/// Whether a range literal includes its upper bound.
///
/// `1..3` is inclusive and yields `1, 2, 3`; `1...3` is exclusive and yields
/// `1, 2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeKind {
    /// `a..b`
    Inclusive,
    /// `a...b`
    Exclusive,
}

impl RangeKind {
    /// The operator text separating the two bounds.
    #[must_use]
    pub const fn separator(self) -> &'static str {
        match self {
            Self::Inclusive => "..",
            Self::Exclusive => "...",
        }
    }
}

/// An abstract syntax tree (AST) node representing an expression in the
/// language.
///
/// Expressions are immutable once the parser has built them. Every variant
/// carries the source line it started on so runtime errors can point back at
/// the script.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal such as `3` or `1.5`.
    Number {
        /// The literal value.
        value: f64,
        /// Line number in the source code.
        line:  usize,
    },
    /// A string literal, stored without its surrounding quotes.
    Str {
        /// The characters between the quotes.
        value: String,
        /// Line number in the source code.
        line:  usize,
    },
    /// `true` or `false`.
    Boolean {
        /// The literal value.
        value: bool,
        /// Line number in the source code.
        line:  usize,
    },
    /// A range literal with integer bounds fixed at parse time.
    Range {
        /// Inclusive (`..`) or exclusive (`...`).
        kind:  RangeKind,
        /// Lower bound.
        start: i64,
        /// Upper bound.
        end:   i64,
        /// Line number in the source code.
        line:  usize,
    },
    /// Reference to a variable or function by name.
    Identifier {
        /// Name being referenced.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
    /// A unary operation (`-x`, `!x`).
    Unary {
        /// The operator.
        op:   UnaryOperator,
        /// The operand.
        expr: Box<Self>,
        /// Line number in the source code.
        line: usize,
    },
    /// A binary operation (arithmetic, comparison, logic).
    Binary {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
    /// A call such as `add(1, 2)`.
    MethodCall {
        /// Name of the callee.
        name:      String,
        /// Argument expressions, in call order.
        arguments: Vec<Self>,
        /// Line number in the source code.
        line:      usize,
    },
    /// `name = value`; evaluates to the assigned value.
    Assignment {
        /// Name being bound.
        name:  String,
        /// Right-hand side.
        value: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
}

impl Expr {
    /// Gets the line number from `self`.
    /// ## Example
    /// ```
    /// use rubyish::ast::Expr;
    ///
    /// let expr = Expr::Identifier { name: "x".to_string(),
    ///                               line: 5, };
    ///
    /// assert_eq!(expr.line_number(), 5);
    /// ```
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::Number { line, .. }
            | Self::Str { line, .. }
            | Self::Boolean { line, .. }
            | Self::Range { line, .. }
            | Self::Identifier { line, .. }
            | Self::Unary { line, .. }
            | Self::Binary { line, .. }
            | Self::MethodCall { line, .. }
            | Self::Assignment { line, .. } => *line,
        }
    }
}

/// One `condition` / `body` pair of an `if` statement.
///
/// `elsif` adds another entry; `else` is stored as an entry whose condition is
/// the literal `true`.
#[derive(Debug, Clone, PartialEq)]
pub struct Conditional {
    /// Guard expression; must evaluate to a boolean.
    pub condition: Expr,
    /// Statements executed when the guard holds.
    pub body:      Vec<Statement>,
}

/// A user-defined function (`def name(a, b) ... end`).
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDef {
    /// The name of the function.
    pub name:   String,
    /// The parameter names, in declaration order.
    pub params: Vec<String>,
    /// The statements executed on each call. The value of the last one is the
    /// call's result.
    pub body:   Vec<Statement>,
    /// Line number of the `def` keyword.
    pub line:   usize,
}

/// Represents a statement.
///
/// A program is a flat list of statements; block forms nest further lists.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// `puts <expr>`
    Puts {
        /// The expression to print.
        expr: Expr,
        /// Line number in the source code.
        line: usize,
    },
    /// `if ... elsif ... else ... end`
    If {
        /// Branches in source order.
        conditionals: Vec<Conditional>,
        /// Line number in the source code.
        line:         usize,
    },
    /// `while <condition> ... end`
    While {
        /// Re-evaluated before every iteration.
        condition: Expr,
        /// Loop body.
        body:      Vec<Statement>,
        /// Line number in the source code.
        line:      usize,
    },
    /// `for <var> in <range> ... end`
    For {
        /// The loop variable name.
        var:   String,
        /// The range being iterated.
        range: Expr,
        /// Loop body.
        body:  Vec<Statement>,
        /// Line number in the source code.
        line:  usize,
    },
    /// A function definition.
    Def(FunctionDef),
    /// A standalone expression evaluated for its result.
    Expression {
        /// The expression to evaluate.
        expr: Expr,
        /// Line number in the source code.
        line: usize,
    },
}

/// Represents a binary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Modulo (`%`), taken over the truncated integer operands.
    Mod,
    /// Less than (`<`)
    Less,
    /// Greater than (`>`)
    Greater,
    /// Less than or equal (`<=`)
    LessEqual,
    /// Greater than or equal (`>=`)
    GreaterEqual,
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`!=`)
    NotEqual,
    /// Logical and (`&&`), short-circuiting.
    And,
    /// Logical or (`||`), short-circuiting.
    Or,
}

/// Represents a unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Arithmetic negation (`-x`).
    Negate,
    /// Logical NOT (`!x`).
    Not,
}

impl BinaryOperator {
    /// True for the short-circuiting operators `&&` and `||`, whose right
    /// operand may go unevaluated.
    #[must_use]
    pub const fn is_logical(self) -> bool {
        matches!(self, Self::And | Self::Or)
    }
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use BinaryOperator::{
            Add, And, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mod, Mul, NotEqual, Or,
            Sub,
        };
        let operator = match self {
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            Mod => "%",
            Less => "<",
            Greater => ">",
            LessEqual => "<=",
            GreaterEqual => ">=",
            Equal => "==",
            NotEqual => "!=",
            And => "&&",
            Or => "||",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Negate => write!(f, "-"),
            Self::Not => write!(f, "!"),
        }
    }
}
