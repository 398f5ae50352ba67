/// The fixed set of token categories a `RawLexer` may produce.
///
/// `Op` covers every operator/punctuation spelling (the exact text lives in
/// `Token::bytes`); `Async`/`Await` are keyword specializations the lexer is
/// expected to distinguish from a plain `Name` the way CPython's tokenizer
/// does once `async`/`await` became soft keywords.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Name,
    Number,
    String,
    Newline,
    Indent,
    Dedent,
    EndMarker,
    Error,
    Op,
    Async,
    Await,
    Dot,
    Ellipsis,
}

impl TokenKind {
    pub fn is_eof(&self) -> bool {
        matches!(self, TokenKind::EndMarker)
    }
}

/// An immutable record produced by the [`LexerAdapter`](crate::lexer::LexerAdapter).
///
/// `start_line`/`start_col` and `end_line`/`end_col` are 1-based line and
/// 0-based column. For a multi-line `String` token, `start_line` is the
/// lexer's `first_lineno` and `start_col` is relative to that anchor line,
/// not the line the token physically ends on.
#[derive(Debug, Clone, Copy)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub bytes: &'a [u8],
    pub start_line: usize,
    pub start_col: usize,
    pub end_line: usize,
    pub end_col: usize,
}

impl<'a> Token<'a> {
    pub fn text(&self) -> &'a str {
        std::str::from_utf8(self.bytes).unwrap_or("")
    }

    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}
