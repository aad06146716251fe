use crate::{
    ast::Statement,
    error::ParseError,
    interpreter::{
        parser::{core::ParseResult, statement::parse_statement},
        scanner::{Scanner, TokenKind},
    },
};

/// Parses the statements of a block body.
///
/// Statements are collected until the lookahead is one of `terminators`
/// (for example `end`, or `elsif`/`else` inside an `if`). The terminator is
/// left in place for the caller to consume.
///
/// Grammar: `block := statement* <terminator>`
///
/// # Errors
/// Returns `ParseError::UnexpectedEndOfInput` if the input ends before any
/// terminator is seen.
pub fn parse_block(scanner: &mut Scanner<'_>,
                   terminators: &[TokenKind])
                   -> ParseResult<Vec<Statement>> {
    let mut statements = Vec::new();

    loop {
        if terminators.contains(&scanner.peek().kind) {
            break;
        }
        if scanner.at_end() {
            return Err(ParseError::UnexpectedEndOfInput { line: scanner.line() });
        }
        statements.push(parse_statement(scanner)?);
    }

    Ok(statements)
}
