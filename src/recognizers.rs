//! Primitive matchers (§4.5) that every grammar-generated rule procedure is
//! built out of. Each one either advances [`Cursor`] and returns a value, or
//! leaves the mark untouched and returns `None` — the uniform failure
//! convention every builder and rule procedure downstream relies on.

use crate::ast::Expr;
use crate::builders;
use crate::cursor::Cursor;
use crate::lexer::RawLexer;
use crate::token::{Token, TokenKind};

/// Ensure a token exists at the current mark (demand-filling), and consume
/// it if its kind matches. Leaves the mark unchanged on a mismatch.
pub fn expect<'a, L: RawLexer>(cursor: &mut Cursor<'a, L>, kind: TokenKind) -> Option<Token<'a>> {
    let mark = cursor.save();
    let tok = cursor.peek()?;
    if tok.kind == kind {
        cursor.advance();
        Some(tok)
    } else {
        cursor.restore(mark);
        None
    }
}

/// `expect(NAME)` plus a byte-exact lexeme match, for matching hard
/// keywords that the lexer tokenizes indistinguishably from identifiers
/// (`def`, `import`, `pass`, ...).
pub fn keyword<'a, L: RawLexer>(cursor: &mut Cursor<'a, L>, text: &str) -> Option<Token<'a>> {
    let mark = cursor.save();
    match expect(cursor, TokenKind::Name) {
        Some(tok) if tok.text() == text => Some(tok),
        _ => {
            cursor.restore(mark);
            None
        }
    }
}

/// Save, run `f`, restore — `f`'s consumption never survives a lookahead.
/// Returns `(f succeeded) == positive`, matching both `&` (positive) and
/// `!` (negative) PEG lookahead operators.
pub fn lookahead<'a, L, T, F>(cursor: &mut Cursor<'a, L>, positive: bool, f: F) -> bool
where
    L: RawLexer,
    F: FnOnce(&mut Cursor<'a, L>) -> Option<T>,
{
    let mark = cursor.save();
    let matched = f(cursor).is_some();
    cursor.restore(mark);
    matched == positive
}

/// `name()` — wraps `expect(NAME)` and materializes a `Name` AST leaf in
/// `Load` context (see [`builders::name_node`]).
pub fn name<'a, L: RawLexer>(cursor: &mut Cursor<'a, L>) -> Option<&'a Expr<'a>> {
    let tok = expect(cursor, TokenKind::Name)?;
    builders::name_node(cursor.arena(), tok)
}

/// `number()` — wraps `expect(NUMBER)` and materializes a `Constant` leaf
/// (see [`builders::number_node`]).
pub fn number<'a, L: RawLexer>(cursor: &mut Cursor<'a, L>) -> Option<&'a Expr<'a>> {
    let tok = expect(cursor, TokenKind::Number)?;
    builders::number_node(cursor.arena(), tok)
}

/// `string()` — wraps `expect(STRING)` and materializes a `Constant` leaf,
/// decoding prefix flags and escapes (see [`builders::string_node`]).
pub fn string<'a, L: RawLexer>(cursor: &mut Cursor<'a, L>) -> Option<&'a Expr<'a>> {
    let tok = expect(cursor, TokenKind::String)?;
    builders::string_node(cursor, tok)
}

macro_rules! fixed_kind_matcher {
    ($(#[$meta:meta])* $name:ident, $kind:expr) => {
        $(#[$meta])*
        pub fn $name<'a, L: RawLexer>(cursor: &mut Cursor<'a, L>) -> Option<Token<'a>> {
            expect(cursor, $kind)
        }
    };
}

fixed_kind_matcher!(
    /// `async_tok()` — `expect(ASYNC)`.
    async_tok,
    TokenKind::Async
);
fixed_kind_matcher!(
    /// `await_tok()` — `expect(AWAIT)`.
    await_tok,
    TokenKind::Await
);
fixed_kind_matcher!(
    /// `endmarker()` — `expect(ENDMARKER)`. Succeeds exactly once; a second
    /// attempt fails without an additional lexer call (invariant 6).
    endmarker,
    TokenKind::EndMarker
);
fixed_kind_matcher!(
    /// `newline()` — `expect(NEWLINE)`.
    newline,
    TokenKind::Newline
);
fixed_kind_matcher!(
    /// `indent()` — `expect(INDENT)`.
    indent,
    TokenKind::Indent
);
fixed_kind_matcher!(
    /// `dedent()` — `expect(DEDENT)`.
    dedent,
    TokenKind::Dedent
);
