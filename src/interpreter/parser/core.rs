use tracing::debug;

use crate::{
    ast::{Conditional, Expr, Statement},
    error::ParseError,
    interpreter::{
        parser::{binary::parse_logical_or, block::parse_block, statement::parse_statement},
        scanner::{Scanner, TokenKind},
    },
    util::stack::ensure_sufficient_stack,
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a whole program into its top-level statements.
///
/// Parsing stops at the first error; no partial program is returned.
///
/// Grammar: `program := statement* EOF`
///
/// # Example
/// ```
/// use rubyish::interpreter::{parser::core::parse_program, scanner::Scanner};
///
/// let mut scanner = Scanner::new("x = 1\nputs x").unwrap();
/// let statements = parse_program(&mut scanner).unwrap();
///
/// assert_eq!(statements.len(), 2);
/// ```
pub fn parse_program(scanner: &mut Scanner<'_>) -> ParseResult<Vec<Statement>> {
    let mut statements = Vec::new();
    while !scanner.at_end() {
        statements.push(parse_statement(scanner)?);
    }
    debug!(count = statements.len(), "parsed program");
    Ok(statements)
}

/// Parses a full expression.
///
/// This is the entry point for expression parsing. It begins at the
/// lowest-precedence level, assignment, and recursively descends through the
/// precedence hierarchy.
///
/// Grammar: `expression := assignment`
pub fn parse_expression(scanner: &mut Scanner<'_>) -> ParseResult<Expr> {
    ensure_sufficient_stack(|| parse_assignment(scanner))
}

/// Parses an assignment.
///
/// Assignment is right-associative, so `a = b = 1` binds `b` first and then
/// `a` to the same value. The target must be a bare identifier.
///
/// Grammar: `assignment := logical_or ("=" assignment)?`
///
/// # Errors
/// Returns `ParseError::InvalidAssignmentTarget` if the left-hand side is not
/// an identifier.
fn parse_assignment(scanner: &mut Scanner<'_>) -> ParseResult<Expr> {
    let target = parse_logical_or(scanner)?;

    if scanner.match_kind(TokenKind::Equal)? {
        let value = parse_assignment(scanner)?;
        return match target {
            Expr::Identifier { name, line } => Ok(Expr::Assignment { name,
                                                                     value: Box::new(value),
                                                                     line }),
            other => Err(ParseError::InvalidAssignmentTarget { line: other.line_number() }),
        };
    }

    Ok(target)
}

/// Parses an `if` statement with optional `elsif` and `else` branches.
///
/// Syntax:
/// ```text
///     if <condition>
///       <statements>
///     elsif <condition>
///       <statements>
///     else
///       <statements>
///     end
/// ```
/// Every branch becomes one [`Conditional`], in source order. The `else`
/// branch is stored with a literal `true` condition so that evaluation can
/// treat all branches alike.
///
/// # Parameters
/// - `scanner`: Positioned after the `if` keyword.
/// - `line`: Line number of the `if` token.
///
/// # Errors
/// - `UnexpectedEndOfInput` if the input ends before `end`.
/// - Propagates any errors from condition or body parsing.
pub fn parse_if(scanner: &mut Scanner<'_>, line: usize) -> ParseResult<Statement> {
    let mut conditionals = Vec::new();

    let condition = parse_expression(scanner)?;
    let body = parse_block(scanner, &[TokenKind::Elsif, TokenKind::Else, TokenKind::End])?;
    conditionals.push(Conditional { condition, body });

    while scanner.match_kind(TokenKind::Elsif)? {
        let condition = parse_expression(scanner)?;
        let body = parse_block(scanner, &[TokenKind::Elsif, TokenKind::Else, TokenKind::End])?;
        conditionals.push(Conditional { condition, body });
    }

    if scanner.check(TokenKind::Else) {
        let else_token = scanner.advance()?;
        let body = parse_block(scanner, &[TokenKind::End])?;
        conditionals.push(Conditional { condition: Expr::Boolean { value: true,
                                                                   line:  else_token.line, },
                                        body });
    }

    scanner.expect(TokenKind::End)?;

    Ok(Statement::If { conditionals, line })
}
