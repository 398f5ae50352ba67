//! A small hand-written lexer and grammar used only to drive the runtime
//! end-to-end from the integration tests in this directory.
//!
//! Production tokenizers for the source language are explicitly out of
//! scope for the crate itself (see `src/lexer.rs`); this module plays that
//! role for tests only, in the same anchored-regex idiom a production
//! lexeme matcher would use.

use once_cell::sync::Lazy;
use regex::bytes::Regex;

use pegen_rt::ast::{Alias, CmpOp, Expr, ExprContext, Mod, Node, Span, Stmt};
use pegen_rt::lexer::{RawLexer, RawToken};
use pegen_rt::token::TokenKind;
use pegen_rt::{builders, recognizers, Cursor, RuleId};

struct Pattern {
    kind: TokenKind,
    regex: Regex,
}

impl Pattern {
    fn new(kind: TokenKind, source: &str) -> Self {
        Self {
            kind,
            regex: Regex::new(source).expect("valid pattern"),
        }
    }
}

static PATTERNS: Lazy<Vec<Pattern>> = Lazy::new(|| {
    vec![
        Pattern::new(TokenKind::Number, r"^[0-9]+"),
        Pattern::new(TokenKind::Name, r"^[A-Za-z_][A-Za-z0-9_]*"),
        Pattern::new(TokenKind::Dot, r"^\."),
        Pattern::new(TokenKind::Op, r"^[=(),:<]"),
    ]
});

static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[ \t\r\n]+").unwrap());

/// Tokenizes a byte buffer by trying each of `PATTERNS` in order at the
/// current offset. Covers just enough of the source language's lexical
/// surface for `common::module` below: names, decimal integers, `.`, and
/// the handful of punctuation marks used by assignment, import, comparison,
/// and function-definition syntax.
pub struct ReferenceLexer<'s> {
    source: &'s [u8],
    pos: usize,
    line: usize,
    col: usize,
}

impl<'s> ReferenceLexer<'s> {
    pub fn new(source: &'s [u8]) -> Self {
        Self {
            source,
            pos: 0,
            line: 1,
            col: 0,
        }
    }

    fn skip_whitespace(&mut self) {
        loop {
            let rest = &self.source[self.pos..];
            match WHITESPACE.find(rest) {
                Some(m) if m.start() == 0 && m.end() > 0 => {
                    for &b in &rest[m.start()..m.end()] {
                        if b == b'\n' {
                            self.line += 1;
                            self.col = 0;
                        } else {
                            self.col += 1;
                        }
                    }
                    self.pos += m.end();
                }
                _ => break,
            }
        }
    }
}

impl<'s> RawLexer for ReferenceLexer<'s> {
    fn next_token(&mut self) -> RawToken {
        self.skip_whitespace();
        if self.pos >= self.source.len() {
            return RawToken {
                kind: TokenKind::EndMarker,
                bytes: vec![],
                start_line: self.line,
                start_col: self.col,
                end_line: self.line,
                end_col: self.col,
            };
        }
        let rest = &self.source[self.pos..];
        for pattern in PATTERNS.iter() {
            if let Some(m) = pattern.regex.find(rest) {
                debug_assert_eq!(m.start(), 0, "pattern must match at the cursor");
                let text = &rest[m.start()..m.end()];
                let start_line = self.line;
                let start_col = self.col;
                self.pos += text.len();
                self.col += text.len();
                return RawToken {
                    kind: pattern.kind,
                    bytes: text.to_vec(),
                    start_line,
                    start_col,
                    end_line: self.line,
                    end_col: self.col,
                };
            }
        }
        RawToken {
            kind: TokenKind::Error,
            bytes: rest[..1].to_vec(),
            start_line: self.line,
            start_col: self.col,
            end_line: self.line,
            end_col: self.col + 1,
        }
    }
}

const ATOM_RULE: RuleId = 1;

fn punct<'a, L: RawLexer>(cursor: &mut Cursor<'a, L>, text: &str) -> Option<()> {
    let mark = cursor.save();
    match recognizers::expect(cursor, TokenKind::Op) {
        Some(tok) if tok.text() == text => Some(()),
        _ => {
            cursor.restore(mark);
            None
        }
    }
}

fn dot<'a, L: RawLexer>(cursor: &mut Cursor<'a, L>) -> Option<()> {
    recognizers::expect(cursor, TokenKind::Dot).map(|_| ())
}

/// `atom := NUMBER | NAME`, memoized — the one rule in this grammar that
/// demonstrates the ordinary (non-left-recursive) packrat protocol end to
/// end; every other rule here is plain recursive descent.
fn atom<'a, L: RawLexer>(cursor: &mut Cursor<'a, L>) -> Option<&'a Expr<'a>> {
    match cursor.memoize(ATOM_RULE, |c| {
        recognizers::number(c).or_else(|| recognizers::name(c)).map(Node::Expr)
    }) {
        Some(Node::Expr(e)) => Some(e),
        _ => None,
    }
}

/// `comparison := atom ('<' atom)*`
fn comparison<'a, L: RawLexer>(cursor: &mut Cursor<'a, L>) -> Option<&'a Expr<'a>> {
    let left = atom(cursor)?;
    let mut pairs = Vec::new();
    loop {
        let mark = cursor.save();
        if punct(cursor, "<").is_some() {
            if let Some(right) = atom(cursor) {
                pairs.push((CmpOp::Lt, right));
                continue;
            }
        }
        cursor.restore(mark);
        break;
    }
    if pairs.is_empty() {
        Some(left)
    } else {
        builders::compare(cursor.arena(), left, &pairs)
    }
}

/// `testlist_star_expr := comparison (',' comparison)*`, wrapping more than
/// one element in a `Load`-context `Tuple` (the grammar always parses
/// targets and values this way; `=` rewrites the target side to `Store`).
fn testlist_star_expr<'a, L: RawLexer>(cursor: &mut Cursor<'a, L>) -> Option<&'a Expr<'a>> {
    let first = comparison(cursor)?;
    let mut elts = vec![first];
    loop {
        let mark = cursor.save();
        if punct(cursor, ",").is_some() {
            if let Some(next) = comparison(cursor) {
                elts.push(next);
                continue;
            }
        }
        cursor.restore(mark);
        break;
    }
    if elts.len() == 1 {
        return Some(elts[0]);
    }
    let arena = cursor.arena();
    let span = Span::join(elts[0].span(), elts.last().unwrap().span());
    let elts = arena.alloc_slice_from_iter(elts);
    Some(arena.alloc(Expr::Tuple {
        elts,
        ctx: ExprContext::Load,
        span,
    }))
}

/// `expr_stmt := testlist_star_expr ('=' testlist_star_expr)?`
fn expr_stmt<'a, L: RawLexer>(cursor: &mut Cursor<'a, L>) -> Option<&'a Stmt<'a>> {
    let first = testlist_star_expr(cursor)?;
    let mark = cursor.save();
    if punct(cursor, "=").is_some() {
        if let Some(value) = testlist_star_expr(cursor) {
            let arena = cursor.arena();
            let target = builders::set_expr_context(arena, first, ExprContext::Store);
            let span = Span::join(target.span(), value.span());
            let targets = arena.alloc_slice_from_iter(std::iter::once(target));
            return Some(arena.alloc(Stmt::Assign { targets, value, span }));
        }
        cursor.restore(mark);
    }
    let span = first.span();
    Some(cursor.arena().alloc(Stmt::Expr { value: first, span }))
}

fn pass_stmt<'a, L: RawLexer>(cursor: &mut Cursor<'a, L>) -> Option<&'a Stmt<'a>> {
    let tok = recognizers::keyword(cursor, "pass")?;
    let span = Span::from_tokens(&tok, &tok);
    Some(cursor.arena().alloc(Stmt::Pass { span }))
}

/// `dotted_name := NAME ('.' NAME)*`, folded into a single `Name` whose
/// identifier is the dotted path, via `join_names_with_dot`.
fn dotted_name<'a, L: RawLexer>(cursor: &mut Cursor<'a, L>) -> Option<&'a Expr<'a>> {
    let mut name = recognizers::name(cursor)?;
    loop {
        let mark = cursor.save();
        if dot(cursor).is_some() {
            if let Some(next) = recognizers::name(cursor) {
                name = builders::join_names_with_dot(cursor.arena(), name, next)?;
                continue;
            }
        }
        cursor.restore(mark);
        break;
    }
    Some(name)
}

fn import_stmt<'a, L: RawLexer>(cursor: &mut Cursor<'a, L>) -> Option<&'a Stmt<'a>> {
    let import_tok = recognizers::keyword(cursor, "import")?;
    let dotted = dotted_name(cursor)?;
    let arena = cursor.arena();
    let id = match *dotted {
        Expr::Name { id, .. } => id,
        _ => return None,
    };
    let alias = arena.alloc(Alias { name: id, asname: None });
    let names = arena.alloc_slice_from_iter(std::iter::once(&*alias));
    let span = Span::join(Span::from_tokens(&import_tok, &import_tok), dotted.span());
    Some(arena.alloc(Stmt::Import { names, span }))
}

/// `funcdef := 'def' NAME '(' ')' ':' pass_stmt`
///
/// Only a `pass` suite is supported — enough to exercise `FunctionDef`
/// construction and `empty_arguments()` without a real block/indentation
/// grammar, which is out of scope here.
fn funcdef<'a, L: RawLexer>(cursor: &mut Cursor<'a, L>) -> Option<&'a Stmt<'a>> {
    let mark = cursor.save();
    let def_tok = recognizers::keyword(cursor, "def")?;
    let name_tok = match recognizers::expect(cursor, TokenKind::Name) {
        Some(tok) => tok,
        None => {
            cursor.restore(mark);
            return None;
        }
    };
    if punct(cursor, "(").is_none() || punct(cursor, ")").is_none() || punct(cursor, ":").is_none() {
        cursor.restore(mark);
        return None;
    }
    let body_stmt = match pass_stmt(cursor) {
        Some(s) => s,
        None => {
            cursor.restore(mark);
            return None;
        }
    };
    let arena = cursor.arena();
    let name = arena.alloc_str(name_tok.text());
    let args = arena.alloc(builders::empty_arguments());
    let body = arena.alloc_slice_from_iter(std::iter::once(&*body_stmt));
    let span = Span::join(Span::from_tokens(&def_tok, &def_tok), body_stmt.span());
    Some(arena.alloc(Stmt::FunctionDef {
        name,
        args,
        body,
        decorator_list: &[],
        span,
    }))
}

fn stmt<'a, L: RawLexer>(cursor: &mut Cursor<'a, L>) -> Option<&'a Stmt<'a>> {
    funcdef(cursor)
        .or_else(|| import_stmt(cursor))
        .or_else(|| pass_stmt(cursor))
        .or_else(|| expr_stmt(cursor))
}

/// `module := stmt ENDMARKER` — the start rule handed to `Driver::parse_string`
/// in every test in this directory. One statement only; this grammar never
/// needed NEWLINE-separated statement sequences to exercise the six
/// end-to-end scenarios it drives.
pub fn module<'a, L: RawLexer>(cursor: &mut Cursor<'a, L>) -> Option<&'a Mod<'a>> {
    let s = stmt(cursor)?;
    let arena = cursor.arena();
    let body = arena.alloc_slice_from_iter(std::iter::once(&*s));
    recognizers::endmarker(cursor)?;
    Some(arena.alloc(Mod { body }))
}
