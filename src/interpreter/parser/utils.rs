use crate::{
    ast::{Expr, RangeKind},
    error::ParseError,
    interpreter::{
        parser::core::ParseResult,
        scanner::{Scanner, Token, TokenKind},
    },
};

/// Parses a comma-separated list of items until a closing token.
///
/// This utility is shared by method-call argument lists and `def` parameter
/// lists. It repeatedly calls `parse_item` to parse one element, expecting
/// either:
///
/// - a comma, to continue the list, or
/// - the specified closing token, to end it.
///
/// An immediately encountered closing token produces an empty list.
///
/// Grammar (simplified): `list := item ("," item)*`
///
/// # Errors
/// Returns a `ParseError` if:
/// - an item fails to parse,
/// - an unexpected token is encountered,
/// - the stream ends before the closing token.
pub(in crate::interpreter::parser) fn parse_comma_separated<T>(
    scanner: &mut Scanner<'_>,
    parse_item: impl Fn(&mut Scanner<'_>) -> ParseResult<T>,
    closing: TokenKind)
    -> ParseResult<Vec<T>> {
    let mut items = Vec::new();
    if scanner.match_kind(closing)? {
        return Ok(items);
    }
    loop {
        items.push(parse_item(scanner)?);
        if scanner.match_kind(TokenKind::Comma)? {
            continue;
        }
        scanner.expect(closing)?;
        break;
    }
    Ok(items)
}

/// Decodes a range token such as `1..10` or `0...4` into an [`Expr::Range`].
///
/// The lexeme spans both bounds; they are split on the range operator and
/// parsed as integers here, so the evaluator only ever sees concrete bounds.
///
/// # Errors
/// Returns `ParseError::LiteralTooLarge` if a bound does not fit in `i64`,
/// or `UnexpectedToken` if the token is not a range.
pub(in crate::interpreter::parser) fn parse_range_literal(token: &Token) -> ParseResult<Expr> {
    let kind = match token.kind {
        TokenKind::InclusiveRange => RangeKind::Inclusive,
        TokenKind::ExclusiveRange => RangeKind::Exclusive,
        _ => {
            return Err(ParseError::UnexpectedToken { token: token.lexeme.clone(),
                                                     line:  token.line, });
        },
    };

    let (start, end) =
        token.lexeme
             .split_once(kind.separator())
             .ok_or_else(|| ParseError::UnexpectedToken { token: token.lexeme.clone(),
                                                          line:  token.line, })?;

    let bound = |text: &str| {
        text.parse::<i64>()
            .map_err(|_| ParseError::LiteralTooLarge { literal: token.lexeme.clone(),
                                                       line:    token.line, })
    };

    Ok(Expr::Range { kind,
                     start: bound(start)?,
                     end: bound(end)?,
                     line: token.line })
}

/// Consumes a range literal token, or fails naming the expected kind.
pub(in crate::interpreter::parser) fn expect_range(scanner: &mut Scanner<'_>) -> ParseResult<Expr> {
    if scanner.check(TokenKind::InclusiveRange) || scanner.check(TokenKind::ExclusiveRange) {
        let token = scanner.advance()?;
        return parse_range_literal(&token);
    }
    if scanner.at_end() {
        return Err(ParseError::UnexpectedEndOfInput { line: scanner.line() });
    }
    Err(ParseError::ExpectedToken { expected: TokenKind::InclusiveRange,
                                    found:    scanner.peek().lexeme.clone(),
                                    line:     scanner.line(), })
}

/// Consumes an identifier token and returns its name.
pub(in crate::interpreter::parser) fn parse_identifier(scanner: &mut Scanner<'_>)
                                                       -> ParseResult<String> {
    Ok(scanner.expect(TokenKind::Identifier)?.lexeme)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token(kind: TokenKind, lexeme: &str) -> Token {
        Token { kind,
                line: 3,
                lexeme: lexeme.to_string() }
    }

    #[test]
    fn splits_inclusive_range() {
        assert_eq!(parse_range_literal(&token(TokenKind::InclusiveRange, "10..25")),
                   Ok(Expr::Range { kind:  RangeKind::Inclusive,
                                    start: 10,
                                    end:   25,
                                    line:  3, }));
    }

    #[test]
    fn oversized_bound_is_rejected() {
        let err =
            parse_range_literal(&token(TokenKind::ExclusiveRange, "1...99999999999999999999")).unwrap_err();
        assert!(matches!(err, ParseError::LiteralTooLarge { line: 3, .. }));
    }

    #[test]
    fn parameter_list_must_be_identifiers() {
        let mut scanner = Scanner::new("a, 2)").unwrap();
        let err = parse_comma_separated(&mut scanner, parse_identifier, TokenKind::RParen).unwrap_err();
        assert!(matches!(err,
                         ParseError::ExpectedToken { expected: TokenKind::Identifier,
                                                     .. }));
    }
}
