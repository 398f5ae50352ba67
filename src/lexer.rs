use crate::arena::Arena;
use crate::error::ParseError;
use crate::source::Position;
use crate::token::{Token, TokenKind};

/// A token as reported by an external tokenizer, before its lexeme bytes
/// are interned into the parser's arena.
#[derive(Debug, Clone)]
pub struct RawToken {
    pub kind: TokenKind,
    pub bytes: Vec<u8>,
    pub start_line: usize,
    pub start_col: usize,
    pub end_line: usize,
    pub end_col: usize,
}

/// The narrow external interface this runtime depends on: something that
/// can be asked, repeatedly, for the next token of the source it was
/// constructed over. A `RawLexer` reporting `TokenKind::Error` signals an
/// irrecoverable lexing failure (CPython's `ERRORTOKEN`); the adapter turns
/// that into a fatal [`ParseError`].
///
/// Production tokenizers for the source language are out of scope for this
/// crate; `#[cfg(test)]`/integration tests drive the runtime with a small
/// reference lexer instead (see `tests/common`).
pub trait RawLexer {
    fn next_token(&mut self) -> RawToken;
}

/// Pulls tokens from a [`RawLexer`] one at a time and interns each one's
/// lexeme bytes into the arena, attaching source position.
pub struct LexerAdapter<'a, L> {
    lexer: L,
    arena: &'a Arena,
    exhausted: bool,
}

impl<'a, L: RawLexer> LexerAdapter<'a, L> {
    pub fn new(lexer: L, arena: &'a Arena) -> Self {
        Self {
            lexer,
            arena,
            exhausted: false,
        }
    }

    /// Pull the next token. Returns `Ok(None)` once an `EndMarker` has
    /// already been consumed (invariant 6: no further lex calls past EOF).
    pub fn next(&mut self) -> Result<Option<Token<'a>>, ParseError> {
        if self.exhausted {
            return Ok(None);
        }
        let raw = self.lexer.next_token();
        if raw.kind == TokenKind::Error {
            // §7 LexerFatal: position is (lineno, col=0) — the lexer failed
            // to even identify a token, so only the line is trustworthy.
            return Err(ParseError::lexer_fatal(
                Position::new(raw.start_line, 0),
                format!(
                    "invalid syntax at line {}, column {}",
                    raw.start_line, raw.start_col
                ),
            ));
        }
        let is_eof = raw.kind.is_eof();
        let bytes = self.arena.alloc_slice_copy(&raw.bytes);
        let token = Token {
            kind: raw.kind,
            bytes,
            start_line: raw.start_line,
            start_col: raw.start_col,
            end_line: raw.end_line,
            end_col: raw.end_col,
        };
        if is_eof {
            self.exhausted = true;
        }
        Ok(Some(token))
    }
}
