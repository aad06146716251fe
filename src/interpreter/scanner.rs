use logos::Logos;
use tracing::trace;

use crate::{
    error::ParseError,
    interpreter::lexer::{LexerExtras, RawToken},
};

/// The kind of a scanned token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    Equal,
    EqualEqual,
    Bang,
    BangEqual,
    Greater,
    GreaterEqual,
    Less,
    LessEqual,
    AndAnd,
    OrOr,
    LParen,
    RParen,
    Comma,
    Number,
    Str,
    InclusiveRange,
    ExclusiveRange,
    Identifier,
    Puts,
    If,
    Elsif,
    Else,
    End,
    While,
    For,
    In,
    Def,
    True,
    False,
    EndOfFile,
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            Self::Plus => "'+'",
            Self::Minus => "'-'",
            Self::Star => "'*'",
            Self::Slash => "'/'",
            Self::Percent => "'%'",
            Self::Equal => "'='",
            Self::EqualEqual => "'=='",
            Self::Bang => "'!'",
            Self::BangEqual => "'!='",
            Self::Greater => "'>'",
            Self::GreaterEqual => "'>='",
            Self::Less => "'<'",
            Self::LessEqual => "'<='",
            Self::AndAnd => "'&&'",
            Self::OrOr => "'||'",
            Self::LParen => "'('",
            Self::RParen => "')'",
            Self::Comma => "','",
            Self::Number => "number",
            Self::Str => "string",
            Self::InclusiveRange | Self::ExclusiveRange => "range",
            Self::Identifier => "identifier",
            Self::Puts => "'puts'",
            Self::If => "'if'",
            Self::Elsif => "'elsif'",
            Self::Else => "'else'",
            Self::End => "'end'",
            Self::While => "'while'",
            Self::For => "'for'",
            Self::In => "'in'",
            Self::Def => "'def'",
            Self::True => "'true'",
            Self::False => "'false'",
            Self::EndOfFile => "end of input",
        };
        write!(f, "{text}")
    }
}

/// Reserved words, matched exactly against a scanned identifier.
const KEYWORDS: &[(&str, TokenKind)] = &[("puts", TokenKind::Puts),
                                         ("true", TokenKind::True),
                                         ("false", TokenKind::False),
                                         ("if", TokenKind::If),
                                         ("elsif", TokenKind::Elsif),
                                         ("else", TokenKind::Else),
                                         ("end", TokenKind::End),
                                         ("while", TokenKind::While),
                                         ("for", TokenKind::For),
                                         ("in", TokenKind::In),
                                         ("def", TokenKind::Def)];

/// Returns the keyword kind for `word`, if it is reserved.
///
/// # Example
/// ```
/// use rubyish::interpreter::scanner::{TokenKind, keyword};
///
/// assert_eq!(keyword("elsif"), Some(TokenKind::Elsif));
/// assert_eq!(keyword("elsewhere"), None);
/// ```
#[must_use]
pub fn keyword(word: &str) -> Option<TokenKind> {
    KEYWORDS.iter()
            .find(|(name, _)| *name == word)
            .map(|(_, kind)| *kind)
}

/// A scanned token.
///
/// The lexeme is the exact source text of the token; string lexemes keep
/// their surrounding quotes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// What kind of token this is.
    pub kind:   TokenKind,
    /// Source line the token ended on.
    pub line:   usize,
    /// The token's source text.
    pub lexeme: String,
}

impl Token {
    fn end_of_file(line: usize) -> Self {
        Self { kind: TokenKind::EndOfFile,
               line,
               lexeme: String::new() }
    }
}

const fn raw_to_kind(raw: RawToken) -> TokenKind {
    match raw {
        RawToken::InclusiveRange => TokenKind::InclusiveRange,
        RawToken::ExclusiveRange => TokenKind::ExclusiveRange,
        RawToken::Number => TokenKind::Number,
        RawToken::Str => TokenKind::Str,
        RawToken::Plus => TokenKind::Plus,
        RawToken::Minus => TokenKind::Minus,
        RawToken::Star => TokenKind::Star,
        RawToken::Slash => TokenKind::Slash,
        RawToken::Percent => TokenKind::Percent,
        RawToken::Equals => TokenKind::Equal,
        RawToken::EqualEqual => TokenKind::EqualEqual,
        RawToken::Bang => TokenKind::Bang,
        RawToken::BangEqual => TokenKind::BangEqual,
        RawToken::Greater => TokenKind::Greater,
        RawToken::GreaterEqual => TokenKind::GreaterEqual,
        RawToken::Less => TokenKind::Less,
        RawToken::LessEqual => TokenKind::LessEqual,
        RawToken::AndAnd => TokenKind::AndAnd,
        RawToken::OrOr => TokenKind::OrOr,
        RawToken::LParen => TokenKind::LParen,
        RawToken::RParen => TokenKind::RParen,
        RawToken::Comma => TokenKind::Comma,
        // Skipped variants never reach the scanner; identifiers are resolved
        // against the keyword table by the caller.
        RawToken::Identifier | RawToken::Comment | RawToken::NewLine | RawToken::Ignored => {
            TokenKind::Identifier
        },
    }
}

/// On-demand token stream with one token of lookahead and one of lookback.
///
/// The scanner always holds the next token (`peek`) already computed. Lexical
/// errors are reported when the offending token would become the lookahead.
pub struct Scanner<'src> {
    lexer:    logos::Lexer<'src, RawToken>,
    current:  Token,
    previous: Option<Token>,
    /// Token that `rewind` pushed back; served before the lexer is consulted.
    pending:  Option<Token>,
}

impl<'src> Scanner<'src> {
    /// Creates a scanner at line 1 and computes the first lookahead token.
    ///
    /// # Errors
    /// Returns a `ParseError` if the first token is malformed.
    pub fn new(source: &'src str) -> Result<Self, ParseError> {
        let mut lexer = RawToken::lexer_with_extras(source, LexerExtras { line: 1 });
        let current = Self::compute(&mut lexer)?;
        Ok(Self { lexer,
                  current,
                  previous: None,
                  pending: None })
    }

    fn compute(lexer: &mut logos::Lexer<'src, RawToken>) -> Result<Token, ParseError> {
        let Some(raw) = lexer.next() else {
            return Ok(Token::end_of_file(lexer.extras.line));
        };
        let slice = lexer.slice();
        let line = lexer.extras.line;

        let Ok(raw) = raw else {
            if slice.starts_with('"') {
                return Err(ParseError::UnterminatedString { line });
            }
            return Err(ParseError::UnexpectedCharacter { character: slice.to_string(),
                                                         line });
        };

        let kind = if raw == RawToken::Identifier {
            keyword(slice).unwrap_or(TokenKind::Identifier)
        } else {
            raw_to_kind(raw)
        };
        trace!(?kind, lexeme = slice, line, "scanned token");

        Ok(Token { kind,
                   line,
                   lexeme: slice.to_string() })
    }

    /// Returns the lookahead token without consuming it.
    #[must_use]
    pub const fn peek(&self) -> &Token {
        &self.current
    }

    /// Returns the most recently consumed token, if any.
    #[must_use]
    pub const fn previous(&self) -> Option<&Token> {
        self.previous.as_ref()
    }

    /// The line of the lookahead token.
    #[must_use]
    pub const fn line(&self) -> usize {
        self.current.line
    }

    /// Consumes the lookahead token and returns it.
    ///
    /// At end of input the end-of-file token is returned repeatedly.
    ///
    /// # Errors
    /// Returns a `ParseError` if the token after the consumed one is
    /// malformed.
    pub fn advance(&mut self) -> Result<Token, ParseError> {
        let next = match self.pending.take() {
            Some(token) => token,
            None if self.current.kind == TokenKind::EndOfFile => self.current.clone(),
            None => Self::compute(&mut self.lexer)?,
        };
        let consumed = std::mem::replace(&mut self.current, next);
        self.previous = Some(consumed.clone());
        Ok(consumed)
    }

    /// Steps back one token: the previously consumed token becomes the
    /// lookahead again. Only a single step is remembered.
    ///
    /// Returns `false` if there is nothing to rewind to.
    pub fn rewind(&mut self) -> bool {
        let Some(previous) = self.previous.take() else {
            return false;
        };
        let lookahead = std::mem::replace(&mut self.current, previous);
        self.pending = Some(lookahead);
        true
    }

    /// Consumes the lookahead token if it has the given kind.
    ///
    /// # Errors
    /// Propagates scanning errors from [`Scanner::advance`].
    pub fn match_kind(&mut self, kind: TokenKind) -> Result<bool, ParseError> {
        if self.current.kind == kind {
            self.advance()?;
            return Ok(true);
        }
        Ok(false)
    }

    /// Consumes the lookahead token, which must have the given kind.
    ///
    /// # Errors
    /// Returns `ParseError::ExpectedToken` naming the expected kind and the
    /// line of the offending token, or `UnexpectedEndOfInput` if the input
    /// ran out.
    pub fn expect(&mut self, kind: TokenKind) -> Result<Token, ParseError> {
        if self.current.kind == kind {
            return self.advance();
        }
        if self.current.kind == TokenKind::EndOfFile {
            return Err(ParseError::UnexpectedEndOfInput { line: self.current.line });
        }
        Err(ParseError::ExpectedToken { expected: kind,
                                        found:    self.current.lexeme.clone(),
                                        line:     self.current.line, })
    }

    /// True once the lookahead is the end-of-file token.
    #[must_use]
    pub fn at_end(&self) -> bool {
        self.current.kind == TokenKind::EndOfFile
    }

    /// True if the lookahead has the given kind.
    #[must_use]
    pub fn check(&self, kind: TokenKind) -> bool {
        self.current.kind == kind
    }
}
