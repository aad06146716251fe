use crate::{
    ast::{Expr, UnaryOperator},
    error::ParseError,
    interpreter::{
        parser::{
            core::{ParseResult, parse_expression},
            utils::{parse_comma_separated, parse_range_literal},
        },
        scanner::{Scanner, TokenKind},
    },
    util::stack::ensure_sufficient_stack,
};

/// Parses a unary expression.
///
/// Supports prefix operators:
/// - `-`  (numeric negation)
/// - `!`  (logical not)
///
/// Unary operators are right-associative, so `!-x` parses as `!(-x)`.
///
/// Grammar:
/// ```text
///     unary := ("-" | "!") unary
///            | primary
/// ```
pub(crate) fn parse_unary(scanner: &mut Scanner<'_>) -> ParseResult<Expr> {
    let op = match scanner.peek().kind {
        TokenKind::Minus => UnaryOperator::Negate,
        TokenKind::Bang => UnaryOperator::Not,
        _ => return parse_primary(scanner),
    };
    let line = scanner.advance()?.line;
    let expr = ensure_sufficient_stack(|| parse_unary(scanner))?;
    Ok(Expr::Unary { op,
                     expr: Box::new(expr),
                     line })
}

/// Parses a primary (atomic) expression.
///
/// Primary expressions form the base of the expression grammar:
/// - string, number, range and boolean literals
/// - identifiers and method calls
/// - parenthesized expressions
///
/// Grammar:
/// ```text
///     primary := STRING | NUMBER | RANGE | "true" | "false"
///              | IDENTIFIER ("(" arguments ")")?
///              | "(" expression ")"
/// ```
///
/// # Errors
/// - `UnexpectedEndOfInput` when the input ends where an expression is
///   required.
/// - `UnexpectedToken` for any token that cannot start an expression.
pub(crate) fn parse_primary(scanner: &mut Scanner<'_>) -> ParseResult<Expr> {
    let token = scanner.advance()?;
    let line = token.line;

    match token.kind {
        TokenKind::Number => {
            let value =
                token.lexeme
                     .parse::<f64>()
                     .map_err(|_| ParseError::UnexpectedToken { token: token.lexeme.clone(),
                                                                line })?;
            Ok(Expr::Number { value, line })
        },
        TokenKind::Str => {
            let inner = &token.lexeme[1..token.lexeme.len() - 1];
            Ok(Expr::Str { value: inner.to_string(),
                           line })
        },
        TokenKind::InclusiveRange | TokenKind::ExclusiveRange => parse_range_literal(&token),
        TokenKind::True => Ok(Expr::Boolean { value: true,
                                              line }),
        TokenKind::False => Ok(Expr::Boolean { value: false,
                                               line }),
        TokenKind::Identifier => parse_identifier_or_call(scanner, token.lexeme, line),
        TokenKind::LParen => parse_grouping(scanner),
        TokenKind::EndOfFile => Err(ParseError::UnexpectedEndOfInput { line }),
        _ => Err(ParseError::UnexpectedToken { token: token.lexeme,
                                               line }),
    }
}

/// Parses either a plain identifier or a method call.
///
/// An identifier immediately followed by `(` starts a call whose arguments
/// are comma separated expressions closed by `)`.
fn parse_identifier_or_call(scanner: &mut Scanner<'_>,
                            name: String,
                            line: usize)
                            -> ParseResult<Expr> {
    if scanner.match_kind(TokenKind::LParen)? {
        let arguments = parse_comma_separated(scanner, parse_expression, TokenKind::RParen)?;
        return Ok(Expr::MethodCall { name,
                                     arguments,
                                     line });
    }
    Ok(Expr::Identifier { name, line })
}

/// Parses `( expression )`; the opening parenthesis is already consumed.
fn parse_grouping(scanner: &mut Scanner<'_>) -> ParseResult<Expr> {
    let expr = parse_expression(scanner)?;
    scanner.expect(TokenKind::RParen)?;
    Ok(expr)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::BinaryOperator;

    fn expr(source: &str) -> Expr {
        let mut scanner = Scanner::new(source).unwrap();
        parse_expression(&mut scanner).unwrap()
    }

    #[test]
    fn negation_nests() {
        let parsed = expr("!-x");
        let Expr::Unary { op: UnaryOperator::Not,
                          expr: inner,
                          .. } = parsed
        else {
            panic!("expected not");
        };
        assert!(matches!(*inner,
                         Expr::Unary { op: UnaryOperator::Negate,
                                       .. }));
    }

    #[test]
    fn grouping_overrides_precedence() {
        let parsed = expr("(1 + 2) * 3");
        assert!(matches!(parsed,
                         Expr::Binary { op: BinaryOperator::Mul,
                                        .. }));
    }

    #[test]
    fn empty_argument_list() {
        assert_eq!(expr("now()"),
                   Expr::MethodCall { name:      "now".to_string(),
                                      arguments: Vec::new(),
                                      line:      1, });
    }

    #[test]
    fn unclosed_group_reports_end_of_input() {
        let mut scanner = Scanner::new("(1 + 2").unwrap();
        assert_eq!(parse_expression(&mut scanner),
                   Err(ParseError::UnexpectedEndOfInput { line: 1 }));
    }
}
