use logos::Logos;

/// Raw token produced by logos before keyword resolution.
///
/// Keywords are not listed here: they scan as [`RawToken::Identifier`] and the
/// scanner resolves them against its keyword table. Whitespace, newlines and
/// `#` comments are skipped, with newlines (including those inside string
/// literals) counted into [`LexerExtras::line`].
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
#[logos(extras = LexerExtras)]
pub enum RawToken {
    /// Inclusive range literal such as `1..10`.
    #[regex(r"[0-9]+\.\.[0-9]+")]
    InclusiveRange,
    /// Exclusive range literal such as `1...10`.
    #[regex(r"[0-9]+\.\.\.[0-9]+")]
    ExclusiveRange,
    /// Numeric literal such as `42` or `3.5`.
    #[regex(r"[0-9]+(\.[0-9]+)?")]
    Number,
    /// Double-quoted string literal. The slice keeps both quotes.
    #[regex(r#""[^"]*""#, count_newlines, allow_greedy = true)]
    Str,
    /// Identifier or keyword.
    #[regex(r"[a-zA-Z][a-zA-Z0-9_]*")]
    Identifier,
    /// `# Comments.`
    #[regex(r"#[^\n]*", logos::skip, allow_greedy = true)]
    Comment,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `%`
    #[token("%")]
    Percent,
    /// `=`
    #[token("=")]
    Equals,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `!`
    #[token("!")]
    Bang,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `>`
    #[token(">")]
    Greater,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `<`
    #[token("<")]
    Less,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `&&`
    #[token("&&")]
    AndAnd,
    /// `||`
    #[token("||")]
    OrOr,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `,`
    #[token(",")]
    Comma,
    /// Line breaks.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        logos::Skip
    })]
    NewLine,
    /// Spaces, tabs and carriage returns.
    #[regex(r"[ \t\r\f]+", logos::skip)]
    Ignored,
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting and diagnostics.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

/// Advances the line counter past newlines embedded in a string literal.
fn count_newlines(lex: &mut logos::Lexer<RawToken>) {
    let newlines = lex.slice().chars().filter(|&c| c == '\n').count();
    lex.extras.line += newlines;
}
