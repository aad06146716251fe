use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        parser::{core::ParseResult, unary::parse_unary},
        scanner::{Scanner, TokenKind},
    },
};

/// Maps a token kind to its corresponding binary operator.
///
/// Returns `None` for every token that is not a binary operator.
///
/// # Example
/// ```
/// use rubyish::{
///     ast::BinaryOperator,
///     interpreter::{parser::binary::token_to_binary_operator, scanner::TokenKind},
/// };
///
/// assert_eq!(token_to_binary_operator(TokenKind::Plus),
///            Some(BinaryOperator::Add));
/// assert_eq!(token_to_binary_operator(TokenKind::Comma), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(kind: TokenKind) -> Option<BinaryOperator> {
    match kind {
        TokenKind::Plus => Some(BinaryOperator::Add),
        TokenKind::Minus => Some(BinaryOperator::Sub),
        TokenKind::Star => Some(BinaryOperator::Mul),
        TokenKind::Slash => Some(BinaryOperator::Div),
        TokenKind::Percent => Some(BinaryOperator::Mod),
        TokenKind::Less => Some(BinaryOperator::Less),
        TokenKind::Greater => Some(BinaryOperator::Greater),
        TokenKind::LessEqual => Some(BinaryOperator::LessEqual),
        TokenKind::GreaterEqual => Some(BinaryOperator::GreaterEqual),
        TokenKind::EqualEqual => Some(BinaryOperator::Equal),
        TokenKind::BangEqual => Some(BinaryOperator::NotEqual),
        TokenKind::AndAnd => Some(BinaryOperator::And),
        TokenKind::OrOr => Some(BinaryOperator::Or),
        _ => None,
    }
}

/// Parses one left-associative precedence level.
///
/// `operand` parses the next-higher level; `accepts` decides which operators
/// belong to this level.
fn parse_left_assoc(scanner: &mut Scanner<'_>,
                    operand: fn(&mut Scanner<'_>) -> ParseResult<Expr>,
                    accepts: fn(BinaryOperator) -> bool)
                    -> ParseResult<Expr> {
    let mut left = operand(scanner)?;
    loop {
        if let Some(op) = token_to_binary_operator(scanner.peek().kind)
           && accepts(op)
        {
            let line = scanner.advance()?.line;
            let right = operand(scanner)?;
            left = Expr::Binary { left: Box::new(left),
                                  op,
                                  right: Box::new(right),
                                  line };
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses logical OR expressions.
///
/// Grammar: `logical_or := logical_and ("||" logical_and)*`
pub fn parse_logical_or(scanner: &mut Scanner<'_>) -> ParseResult<Expr> {
    parse_left_assoc(scanner, parse_logical_and, |op| {
        matches!(op, BinaryOperator::Or)
    })
}

/// Parses logical AND expressions.
///
/// Precedence is higher than `||` and lower than equality.
///
/// Grammar: `logical_and := equality ("&&" equality)*`
pub fn parse_logical_and(scanner: &mut Scanner<'_>) -> ParseResult<Expr> {
    parse_left_assoc(scanner, parse_equality, |op| {
        matches!(op, BinaryOperator::And)
    })
}

/// Parses `==` and `!=`.
///
/// Grammar: `equality := comparison (("==" | "!=") comparison)*`
pub fn parse_equality(scanner: &mut Scanner<'_>) -> ParseResult<Expr> {
    parse_left_assoc(scanner, parse_comparison, |op| {
        matches!(op, BinaryOperator::Equal | BinaryOperator::NotEqual)
    })
}

/// Parses the ordering comparisons.
///
/// Grammar: `comparison := term ((">" | ">=" | "<" | "<=") term)*`
pub fn parse_comparison(scanner: &mut Scanner<'_>) -> ParseResult<Expr> {
    parse_left_assoc(scanner, parse_term, |op| {
        matches!(op,
                 BinaryOperator::Greater
                 | BinaryOperator::GreaterEqual
                 | BinaryOperator::Less
                 | BinaryOperator::LessEqual)
    })
}

/// Parses addition and subtraction expressions.
///
/// Grammar: `term := factor (("+" | "-") factor)*`
pub fn parse_term(scanner: &mut Scanner<'_>) -> ParseResult<Expr> {
    parse_left_assoc(scanner, parse_factor, |op| {
        matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
    })
}

/// Parses multiplication-level expressions.
///
/// Grammar: `factor := unary (("*" | "/" | "%") unary)*`
pub fn parse_factor(scanner: &mut Scanner<'_>) -> ParseResult<Expr> {
    parse_left_assoc(scanner, parse_unary, |op| {
        matches!(op, BinaryOperator::Mul | BinaryOperator::Div | BinaryOperator::Mod)
    })
}
