use crate::{
    ast::{FunctionDef, Statement},
    interpreter::{
        parser::{
            block::parse_block,
            core::{ParseResult, parse_expression, parse_if},
            utils::{expect_range, parse_comma_separated, parse_identifier},
        },
        scanner::{Scanner, TokenKind},
    },
    util::stack::ensure_sufficient_stack,
};

/// Parses a single statement.
///
/// Dispatches on the leading keyword; anything that does not start with a
/// statement keyword is parsed as an expression statement.
///
/// Grammar:
/// ```text
///     statement := puts | if | while | for | def | expression
/// ```
pub fn parse_statement(scanner: &mut Scanner<'_>) -> ParseResult<Statement> {
    ensure_sufficient_stack(|| parse_keyword_statement(scanner))
}

fn parse_keyword_statement(scanner: &mut Scanner<'_>) -> ParseResult<Statement> {
    let line = scanner.line();

    if scanner.match_kind(TokenKind::Puts)? {
        let expr = parse_expression(scanner)?;
        return Ok(Statement::Puts { expr, line });
    }
    if scanner.match_kind(TokenKind::If)? {
        return parse_if(scanner, line);
    }
    if scanner.match_kind(TokenKind::While)? {
        return parse_while(scanner, line);
    }
    if scanner.match_kind(TokenKind::For)? {
        return parse_for(scanner, line);
    }
    if scanner.match_kind(TokenKind::Def)? {
        return parse_def(scanner, line);
    }

    let expr = parse_expression(scanner)?;
    Ok(Statement::Expression { expr, line })
}

/// Parses `while <condition> <statements> end`; `while` is already consumed.
fn parse_while(scanner: &mut Scanner<'_>, line: usize) -> ParseResult<Statement> {
    let condition = parse_expression(scanner)?;
    let body = parse_block(scanner, &[TokenKind::End])?;
    scanner.expect(TokenKind::End)?;

    Ok(Statement::While { condition,
                          body,
                          line })
}

/// Parses `for <identifier> in <range> <statements> end`.
///
/// Only a range literal is accepted as the iterand.
///
/// # Errors
/// - `ExpectedToken` if the loop variable, `in`, the range or `end` is
///   missing.
fn parse_for(scanner: &mut Scanner<'_>, line: usize) -> ParseResult<Statement> {
    let var = parse_identifier(scanner)?;
    scanner.expect(TokenKind::In)?;
    let range = expect_range(scanner)?;
    let body = parse_block(scanner, &[TokenKind::End])?;
    scanner.expect(TokenKind::End)?;

    Ok(Statement::For { var,
                        range,
                        body,
                        line })
}

/// Parses a function definition.
///
/// Syntax:
/// ```text
///     def <name>(<param>, <param>, ...)
///       <statements>
///     end
/// ```
/// The parameter list is optional; `def name ... end` declares a function
/// with no parameters. Parameters must be bare identifiers.
fn parse_def(scanner: &mut Scanner<'_>, line: usize) -> ParseResult<Statement> {
    let name = parse_identifier(scanner)?;

    let params = if scanner.match_kind(TokenKind::LParen)? {
        parse_comma_separated(scanner, parse_identifier, TokenKind::RParen)?
    } else {
        Vec::new()
    };

    let body = parse_block(scanner, &[TokenKind::End])?;
    scanner.expect(TokenKind::End)?;

    Ok(Statement::Def(FunctionDef { name,
                                    params,
                                    body,
                                    line }))
}
