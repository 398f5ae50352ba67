//! AST-construction helpers invoked by grammar actions (§4.6).
//!
//! Every builder here allocates its output from the arena and returns
//! `None` on failure (bad UTF-8, an unparseable numeric literal, a semantic
//! constraint violation) — the caller treats a `None` exactly like a failed
//! recognizer, so a builder never needs its own error-recovery path.

use crate::arena::Arena;
use crate::ast::{Alias, Arguments, CmpOp, Constant, Expr, ExprContext, Node, Span, Stmt};
use crate::cursor::Cursor;
use crate::lexer::RawLexer;
use crate::source::Position;
use crate::token::{Token, TokenKind};

// ---------------------------------------------------------------------
// Leaf builders: name(), number(), string()
// ---------------------------------------------------------------------

/// Decode a `NAME` token's lexeme as UTF-8 and produce a `Name` leaf in
/// `Load` context spanning exactly that token.
pub fn name_node<'a>(arena: &'a Arena, tok: Token<'a>) -> Option<&'a Expr<'a>> {
    let text = std::str::from_utf8(tok.bytes).ok()?;
    let id = arena.alloc_str(text);
    let span = Span::from_tokens(&tok, &tok);
    Some(arena.alloc(Expr::Name {
        id,
        ctx: ExprContext::Load,
        span,
    }))
}

/// Parse a `NUMBER` token: integer (base auto-detected from a `0x`/`0o`/`0b`
/// prefix), else float, else — if the lexeme ends in `j`/`J` — a complex
/// constant with the float-parsed prefix as its imaginary part and a zero
/// real part.
pub fn number_node<'a>(arena: &'a Arena, tok: Token<'a>) -> Option<&'a Expr<'a>> {
    let text = tok.text();
    let span = Span::from_tokens(&tok, &tok);
    if text.ends_with('j') || text.ends_with('J') {
        let imag = parse_float_literal(&text[..text.len() - 1])?;
        return Some(arena.alloc(Expr::Constant {
            value: Constant::Complex(0.0, imag),
            kind: None,
            span,
        }));
    }
    if let Some(v) = parse_int_literal(text) {
        return Some(arena.alloc(Expr::Constant {
            value: Constant::Int(v),
            kind: None,
            span,
        }));
    }
    let f = parse_float_literal(text)?;
    Some(arena.alloc(Expr::Constant {
        value: Constant::Float(f),
        kind: None,
        span,
    }))
}

fn parse_int_literal(text: &str) -> Option<i64> {
    let cleaned: String = text.chars().filter(|c| *c != '_').collect();
    let (radix, digits) = if let Some(rest) = cleaned.strip_prefix("0x").or(cleaned.strip_prefix("0X")) {
        (16, rest)
    } else if let Some(rest) = cleaned.strip_prefix("0o").or(cleaned.strip_prefix("0O")) {
        (8, rest)
    } else if let Some(rest) = cleaned.strip_prefix("0b").or(cleaned.strip_prefix("0B")) {
        (2, rest)
    } else {
        (10, cleaned.as_str())
    };
    if digits.is_empty() {
        return None;
    }
    i64::from_str_radix(digits, radix).ok()
}

fn parse_float_literal(text: &str) -> Option<f64> {
    let cleaned: String = text.chars().filter(|c| *c != '_').collect();
    cleaned.parse::<f64>().ok()
}

#[derive(Debug, Clone, Copy, Default)]
struct StringPrefix {
    raw: bool,
    bytes: bool,
    fstring: bool,
    u: bool,
}

/// Scan the `b`/`B`/`u`/`U`/`r`/`R`/`f`/`F` prefix flags off the front of a
/// `STRING` lexeme (any case, combinable except `b`+`f`), returning the
/// parsed flags and the remainder starting at the opening quote.
fn scan_prefix(text: &str) -> (StringPrefix, &str) {
    let mut prefix = StringPrefix::default();
    let mut idx = 0;
    for ch in text.chars() {
        match ch {
            'r' | 'R' => prefix.raw = true,
            'b' | 'B' => prefix.bytes = true,
            'u' | 'U' => prefix.u = true,
            'f' | 'F' => prefix.fstring = true,
            _ => break,
        }
        idx += ch.len_utf8();
    }
    (prefix, &text[idx..])
}

/// Strip the bracketing quote style (triple or single) off a prefix-free
/// string body, returning the inner text.
fn strip_quotes(rest: &str) -> Option<&str> {
    if (rest.starts_with("\"\"\"") || rest.starts_with("'''")) && rest.len() >= 6 {
        let quote = &rest[0..3];
        if rest.ends_with(quote) {
            return Some(&rest[3..rest.len() - 3]);
        }
        return None;
    }
    let mut chars = rest.chars();
    match chars.next() {
        Some(q @ ('"' | '\'')) if rest.len() >= 2 && rest.ends_with(q) => {
            Some(&rest[1..rest.len() - 1])
        }
        _ => None,
    }
}

/// `string()` (§4.6): decode a `STRING` token into a `Constant` leaf.
///
/// Raw mode (`r`/`R` prefix) bypasses escape decoding entirely. Non-raw
/// bytes literals go through [`decode_bytes_escapes`]; non-raw text through
/// [`decode_unicode_escapes`]. F-strings are recognized (so the grammar
/// accepts them) but materialize only a placeholder empty-string constant —
/// acknowledged incomplete per §9's open questions. `kind` is set to
/// `Some("u")` when the lexeme carries a `u`/`U` prefix, mirroring CPython's
/// AST.
pub fn string_node<'a, L: RawLexer>(cursor: &mut Cursor<'a, L>, tok: Token<'a>) -> Option<&'a Expr<'a>> {
    let arena = cursor.arena();
    let text = tok.text();
    let span = Span::from_tokens(&tok, &tok);
    let (prefix, rest) = scan_prefix(text);
    let position = Position::new(tok.start_line, tok.start_col + 1);
    if prefix.bytes && prefix.fstring {
        cursor.flag_syntax_violation(position, "cannot combine 'b' and 'f' string prefixes");
        return None;
    }
    let body = strip_quotes(rest)?;
    let kind = if prefix.u { Some("u") } else { None };

    if prefix.fstring {
        return Some(arena.alloc(Expr::Constant {
            value: Constant::Str(arena.alloc_str("")),
            kind,
            span,
        }));
    }

    if prefix.bytes {
        if !body.is_ascii() {
            cursor.flag_syntax_violation(position, "bytes can only contain ASCII literal characters");
            return None;
        }
        let bytes = if prefix.raw {
            arena.alloc_slice_copy(body.as_bytes())
        } else {
            let decoded = decode_bytes_escapes(cursor, position, body)?;
            cursor.arena().alloc_slice_copy(&decoded)
        };
        return Some(arena.alloc(Expr::Constant {
            value: Constant::Bytes(bytes),
            kind: None,
            span,
        }));
    }

    let decoded = if prefix.raw {
        body.to_string()
    } else {
        decode_unicode_escapes(cursor, position, body)?
    };
    let text = cursor.arena().alloc_str(&decoded);
    Some(arena.alloc(Expr::Constant {
        value: Constant::Str(text),
        kind,
        span,
    }))
}

/// Escape-decode a non-raw text literal body (unicode-escape form: `\n`,
/// `\t`, `\xHH`, `\uHHHH`, `\UHHHHHHHH`, octal, and a backslash-newline
/// line continuation). Unrecognized escapes are passed through verbatim and
/// flagged via [`Cursor::flag_invalid_escape`] (§7 `InvalidEscape`).
fn decode_unicode_escapes<L: RawLexer>(cursor: &mut Cursor<'_, L>, position: Position, body: &str) -> Option<String> {
    let mut out = String::with_capacity(body.len());
    let mut chars = body.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('\n') => {} // line continuation: escaped newline vanishes
            Some('\\') => out.push('\\'),
            Some('\'') => out.push('\''),
            Some('"') => out.push('"'),
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('r') => out.push('\r'),
            Some('a') => out.push('\u{7}'),
            Some('b') => out.push('\u{8}'),
            Some('f') => out.push('\u{c}'),
            Some('v') => out.push('\u{b}'),
            Some('0') => out.push('\0'),
            Some('x') => match take_hex(&mut chars, 2).and_then(|v| u8::try_from(v).ok()) {
                Some(v) => out.push(v as char),
                None => cursor.flag_invalid_escape(position, "invalid \\x escape"),
            },
            Some('u') => match take_hex(&mut chars, 4).and_then(char::from_u32) {
                Some(ch) => out.push(ch),
                None => cursor.flag_invalid_escape(position, "invalid \\u escape"),
            },
            Some('U') => match take_hex(&mut chars, 8).and_then(char::from_u32) {
                Some(ch) => out.push(ch),
                None => cursor.flag_invalid_escape(position, "invalid \\U escape"),
            },
            Some(other) => {
                cursor.flag_invalid_escape(position, format!("invalid escape sequence '\\{}'", other));
                out.push('\\');
                out.push(other);
            }
            None => cursor.flag_invalid_escape(position, "trailing backslash in string literal"),
        }
    }
    Some(out)
}

/// Escape-decode a non-raw bytes literal body: the same escape set as
/// [`decode_unicode_escapes`] except `\u`/`\U`, which have no meaning in a
/// bytes literal and are passed through as an invalid escape.
fn decode_bytes_escapes<L: RawLexer>(cursor: &mut Cursor<'_, L>, position: Position, body: &str) -> Option<Vec<u8>> {
    let mut out = Vec::with_capacity(body.len());
    let mut chars = body.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '\\' {
            let mut buf = [0u8; 4];
            out.extend_from_slice(c.encode_utf8(&mut buf).as_bytes());
            continue;
        }
        match chars.next() {
            Some('\n') => {}
            Some('\\') => out.push(b'\\'),
            Some('\'') => out.push(b'\''),
            Some('"') => out.push(b'"'),
            Some('n') => out.push(b'\n'),
            Some('t') => out.push(b'\t'),
            Some('r') => out.push(b'\r'),
            Some('a') => out.push(0x07),
            Some('b') => out.push(0x08),
            Some('f') => out.push(0x0c),
            Some('v') => out.push(0x0b),
            Some('0') => out.push(0),
            Some('x') => match take_hex(&mut chars, 2).and_then(|v| u8::try_from(v).ok()) {
                Some(v) => out.push(v),
                None => cursor.flag_invalid_escape(position, "invalid \\x escape"),
            },
            Some(other) => {
                cursor.flag_invalid_escape(position, format!("invalid escape sequence '\\{}'", other));
                out.push(b'\\');
                let mut buf = [0u8; 4];
                out.extend_from_slice(other.encode_utf8(&mut buf).as_bytes());
            }
            None => cursor.flag_invalid_escape(position, "trailing backslash in bytes literal"),
        }
    }
    Some(out)
}

fn take_hex(chars: &mut std::iter::Peekable<std::str::Chars>, count: usize) -> Option<u32> {
    let mut digits = String::with_capacity(count);
    for _ in 0..count {
        digits.push(chars.next()?);
    }
    u32::from_str_radix(&digits, 16).ok()
}

/// Where to anchor a `concatenate_strings` mixing violation: the start of
/// the piece that broke the bytes/text run.
fn piece_position(piece: &Expr) -> Position {
    let span = piece.span();
    Position::new(span.start_line, span.start_col + 1)
}

/// `concatenate_strings` (§4.6): combine adjacent string-literal pieces.
/// Bytes concatenate as bytes, text as text; mixing the two is a syntax
/// violation. The `kind` of the result is `Some("u")` if any piece carries
/// it.
pub fn concatenate_strings<'a, L: RawLexer>(
    cursor: &mut Cursor<'a, L>,
    pieces: &[&'a Expr<'a>],
) -> Option<&'a Expr<'a>> {
    let arena = cursor.arena();
    let (first, rest) = pieces.split_first()?;
    let first = *first;
    if rest.is_empty() {
        return Some(first);
    }
    let span = Span::join(first.span(), pieces.last().unwrap().span());
    let mut any_u = false;
    let mut text = String::new();
    let mut bytes: Vec<u8> = Vec::new();
    let mut is_bytes: Option<bool> = None;
    for piece in pieces {
        match **piece {
            Expr::Constant {
                value: Constant::Str(s),
                kind,
                ..
            } => {
                if kind.is_some() {
                    any_u = true;
                }
                match is_bytes {
                    Some(true) => {
                        cursor.flag_syntax_violation(piece_position(*piece), "cannot mix bytes and nonbytes literals");
                        return None;
                    }
                    _ => is_bytes = Some(false),
                }
                text.push_str(s);
            }
            Expr::Constant {
                value: Constant::Bytes(b),
                ..
            } => match is_bytes {
                Some(false) => {
                    cursor.flag_syntax_violation(piece_position(*piece), "cannot mix bytes and nonbytes literals");
                    return None;
                }
                _ => {
                    is_bytes = Some(true);
                    bytes.extend_from_slice(b);
                }
            },
            _ => return None,
        }
    }
    let kind = if any_u { Some("u") } else { None };
    Some(match is_bytes {
        Some(true) => arena.alloc(Expr::Constant {
            value: Constant::Bytes(arena.alloc_slice_copy(&bytes)),
            kind: None,
            span,
        }),
        _ => arena.alloc(Expr::Constant {
            value: Constant::Str(arena.alloc_str(&text)),
            kind,
            span,
        }),
    })
}

// ---------------------------------------------------------------------
// Sequence ops
// ---------------------------------------------------------------------

/// `singleton_seq(x)` → a length-1 arena sequence.
pub fn singleton_seq<'a, T: Copy>(arena: &'a Arena, x: T) -> &'a [T] {
    arena.alloc_slice_from_iter(std::iter::once(x))
}

/// `seq_insert_front(x, s)` → a new sequence of length `|s|+1` with `x`
/// first.
pub fn seq_insert_front<'a, T: Copy>(arena: &'a Arena, x: T, s: &[T]) -> &'a [T] {
    arena.alloc_slice_from_iter(std::iter::once(x).chain(s.iter().copied()))
}

/// `seq_flatten(ss)` → the concatenation of a sequence of `Node` sequences,
/// skipping any inner sequence whose first element is the `Placeholder`
/// sentinel (§9's `CONSTRUCTOR` sentinel, made an explicit tagged variant).
pub fn seq_flatten<'a>(arena: &'a Arena, ss: &[&[Node<'a>]]) -> &'a [Node<'a>] {
    let mut out = Vec::new();
    for inner in ss {
        if matches!(inner.first(), Some(Node::Placeholder)) {
            continue;
        }
        out.extend_from_slice(inner);
    }
    arena.alloc_slice_from_iter(out)
}

/// `seq_count_dots(ts)`: 3 per `ELLIPSIS`, 1 per `DOT`, any other token
/// kind fails the whole call (returns `None`) — used to validate the dot
/// run at the front of a relative `from ... import` clause.
pub fn seq_count_dots(ts: &[Token]) -> Option<i64> {
    let mut total = 0i64;
    for t in ts {
        total += match t.kind {
            TokenKind::Ellipsis => 3,
            TokenKind::Dot => 1,
            _ => return None,
        };
    }
    Some(total)
}

/// `seq_get_tail(default, s)` → the final element, or `default` if `s` is
/// empty.
pub fn seq_get_tail<T: Copy>(default: T, s: &[T]) -> T {
    s.last().copied().unwrap_or(default)
}

/// `seq_get_head(default, s)` → the first element, or `default` if `s` is
/// empty.
pub fn seq_get_head<T: Copy>(default: T, s: &[T]) -> T {
    s.first().copied().unwrap_or(default)
}

/// `map_names_to_ids`: project a sequence of `Name` expressions to their
/// identifier strings.
pub fn map_names_to_ids<'a>(arena: &'a Arena, names: &[&'a Expr<'a>]) -> &'a [&'a str] {
    arena.alloc_slice_from_iter(names.iter().filter_map(|e| match **e {
        Expr::Name { id, .. } => Some(id),
        _ => None,
    }))
}

/// `get_keys`: project the key half of a sequence of `(key, value)` pairs
/// (a `None` key marks a `**`-unpacked mapping entry).
pub fn get_keys<'a>(
    arena: &'a Arena,
    pairs: &[(Option<&'a Expr<'a>>, &'a Expr<'a>)],
) -> &'a [Option<&'a Expr<'a>>] {
    arena.alloc_slice_from_iter(pairs.iter().map(|(k, _)| *k))
}

/// `get_values`: project the value half of a sequence of `(key, value)`
/// pairs.
pub fn get_values<'a>(arena: &'a Arena, pairs: &[(Option<&'a Expr<'a>>, &'a Expr<'a>)]) -> &'a [&'a Expr<'a>] {
    arena.alloc_slice_from_iter(pairs.iter().map(|(_, v)| *v))
}

/// `get_cmpops`: project the operator half of a sequence of
/// `(cmpop, expr)` comparison pairs.
pub fn get_cmpops<'a>(arena: &'a Arena, pairs: &[(CmpOp, &'a Expr<'a>)]) -> &'a [CmpOp] {
    arena.alloc_slice_from_iter(pairs.iter().map(|(op, _)| *op))
}

/// `get_exprs`: project the expression half of a sequence of
/// `(cmpop, expr)` comparison pairs.
pub fn get_exprs<'a>(arena: &'a Arena, pairs: &[(CmpOp, &'a Expr<'a>)]) -> &'a [&'a Expr<'a>] {
    arena.alloc_slice_from_iter(pairs.iter().map(|(_, e)| *e))
}

/// `map_targets_to_del_names`: rewrite every target's context to `Del`,
/// for a `del a, b, c` statement's target list.
pub fn map_targets_to_del_names<'a>(arena: &'a Arena, targets: &[&'a Expr<'a>]) -> &'a [&'a Expr<'a>] {
    arena.alloc_slice_from_iter(targets.iter().map(|t| set_expr_context(arena, *t, ExprContext::Del)))
}

/// `extract_orig_aliases`: project the original (pre-`as`) dotted name of
/// each alias in an import list.
pub fn extract_orig_aliases<'a>(arena: &'a Arena, aliases: &[&'a Alias<'a>]) -> &'a [&'a str] {
    arena.alloc_slice_from_iter(aliases.iter().map(|a| a.name))
}

/// `join_names_with_dot(a, b)`: synthesize a `Name` whose identifier is
/// `a.id + '.' + b.id`, spanning from `a`'s start to `b`'s end — used to
/// assemble dotted module names during import parsing.
pub fn join_names_with_dot<'a>(arena: &'a Arena, a: &'a Expr<'a>, b: &'a Expr<'a>) -> Option<&'a Expr<'a>> {
    let (a_id, a_span) = match a {
        Expr::Name { id, span, .. } => (*id, *span),
        _ => return None,
    };
    let (b_id, b_span) = match b {
        Expr::Name { id, span, .. } => (*id, *span),
        _ => return None,
    };
    let mut joined = String::with_capacity(a_id.len() + 1 + b_id.len());
    joined.push_str(a_id);
    joined.push('.');
    joined.push_str(b_id);
    let id = arena.alloc_str(&joined);
    Some(arena.alloc(Expr::Name {
        id,
        ctx: ExprContext::Load,
        span: Span::join(a_span, b_span),
    }))
}

/// `set_expr_context(e, ctx)`: rebuild `e` with its expression-context field
/// set to `ctx`. Recursive on `Tuple`/`List` (every element is rewritten
/// too); shallow on `Name`/`Attribute`/`Subscript`/`Starred`; any other
/// expression kind is returned unchanged. The grammar parses assignment
/// targets in `Load` context and rewrites them to `Store`/`Del` here, at the
/// assignment or deletion point.
pub fn set_expr_context<'a>(arena: &'a Arena, e: &'a Expr<'a>, ctx: ExprContext) -> &'a Expr<'a> {
    match *e {
        Expr::Name { id, span, .. } => arena.alloc(Expr::Name { id, ctx, span }),
        Expr::Attribute {
            value, attr, span, ..
        } => arena.alloc(Expr::Attribute {
            value,
            attr,
            ctx,
            span,
        }),
        Expr::Subscript {
            value, slice, span, ..
        } => arena.alloc(Expr::Subscript {
            value,
            slice,
            ctx,
            span,
        }),
        Expr::Starred { value, span, .. } => arena.alloc(Expr::Starred {
            value: set_expr_context(arena, value, ctx),
            ctx,
            span,
        }),
        Expr::Tuple { elts, span, .. } => {
            let rewritten = arena.alloc_slice_from_iter(elts.iter().map(|el| set_expr_context(arena, *el, ctx)));
            arena.alloc(Expr::Tuple {
                elts: rewritten,
                ctx,
                span,
            })
        }
        Expr::List { elts, span, .. } => {
            let rewritten = arena.alloc_slice_from_iter(elts.iter().map(|el| set_expr_context(arena, *el, ctx)));
            arena.alloc(Expr::List {
                elts: rewritten,
                ctx,
                span,
            })
        }
        _ => e,
    }
}

// ---------------------------------------------------------------------
// Parameter assembly (§4.6.1)
// ---------------------------------------------------------------------

/// A plain parameter name paired with its default value, as produced by
/// the grammar for `names_with_default` and the `named_defaulted` half of
/// `slash_with_default`.
#[derive(Debug, Clone, Copy)]
pub struct NameWithDefault<'a> {
    pub name: &'a str,
    pub default: &'a Expr<'a>,
}

/// The `slash_with_default` grouping: plain names before the default run,
/// plus the defaulted run itself, both positional-only (separated from the
/// rest of the signature by a bare `/`).
#[derive(Debug, Clone, Copy)]
pub struct SlashWithDefault<'a> {
    pub plain: &'a [&'a str],
    pub named_defaulted: &'a [NameWithDefault<'a>],
}

/// A keyword-only parameter name with an optional default.
#[derive(Debug, Clone, Copy)]
pub struct KwOnlyParam<'a> {
    pub name: &'a str,
    pub default: Option<&'a Expr<'a>>,
}

/// The `star_etc` grouping: `*args`, keyword-only parameters, and
/// `**kwargs`, as assembled from the grammar's `star_etc` alternative.
#[derive(Debug, Clone, Copy)]
pub struct StarEtc<'a> {
    pub vararg: Option<&'a str>,
    pub kwonly: &'a [KwOnlyParam<'a>],
    pub kwarg: Option<&'a str>,
}

/// `make_arguments` (§4.6.1): combine the five parameter groupings — any of
/// which may be absent — into a canonical `arguments` node.
pub fn make_arguments<'a>(
    arena: &'a Arena,
    slash_without_default: Option<&'a [&'a str]>,
    slash_with_default: Option<&'a SlashWithDefault<'a>>,
    plain_names: Option<&'a [&'a str]>,
    names_with_default: Option<&'a [NameWithDefault<'a>]>,
    star_etc: Option<&'a StarEtc<'a>>,
) -> &'a Arguments<'a> {
    let posonlyargs: Vec<&'a str> = if let Some(s) = slash_without_default {
        s.to_vec()
    } else if let Some(swd) = slash_with_default {
        swd.plain
            .iter()
            .copied()
            .chain(swd.named_defaulted.iter().map(|nd| nd.name))
            .collect()
    } else {
        Vec::new()
    };

    let positional: Vec<&'a str> = plain_names
        .unwrap_or(&[])
        .iter()
        .copied()
        .chain(names_with_default.unwrap_or(&[]).iter().map(|nd| nd.name))
        .collect();

    let pos_defaults: Vec<&'a Expr<'a>> = slash_with_default
        .map(|swd| swd.named_defaulted)
        .unwrap_or(&[])
        .iter()
        .map(|nd| nd.default)
        .chain(names_with_default.unwrap_or(&[]).iter().map(|nd| nd.default))
        .collect();

    let (vararg, kwarg) = star_etc
        .map(|se| (se.vararg, se.kwarg))
        .unwrap_or((None, None));
    let kwonlyargs: Vec<&'a str> = star_etc
        .map(|se| se.kwonly)
        .unwrap_or(&[])
        .iter()
        .map(|p| p.name)
        .collect();
    let kw_defaults: Vec<Option<&'a Expr<'a>>> = star_etc
        .map(|se| se.kwonly)
        .unwrap_or(&[])
        .iter()
        .map(|p| p.default)
        .collect();

    arena.alloc(Arguments {
        posonlyargs: arena.alloc_slice_from_iter(posonlyargs),
        args: arena.alloc_slice_from_iter(positional),
        vararg,
        kwonlyargs: arena.alloc_slice_from_iter(kwonlyargs),
        kw_defaults: arena.alloc_slice_from_iter(kw_defaults),
        kwarg,
        defaults: arena.alloc_slice_from_iter(pos_defaults),
    })
}

/// The empty-arguments factory: all six sequences empty, both optional
/// fields `None`. Used for e.g. `def f(): ...`.
pub fn empty_arguments() -> Arguments<'static> {
    Arguments::EMPTY
}

// ---------------------------------------------------------------------
// Decorator attachment, comparison, starred/keyword split, star-import alias
// ---------------------------------------------------------------------

/// `function_def_decorators`: return a copy of `function_def` with its
/// `decorator_list` replaced. `None` if `function_def` is not a
/// `Stmt::FunctionDef`.
pub fn function_def_decorators<'a>(
    arena: &'a Arena,
    decorators: &'a [&'a Expr<'a>],
    function_def: &'a Stmt<'a>,
) -> Option<&'a Stmt<'a>> {
    match *function_def {
        Stmt::FunctionDef {
            name,
            args,
            body,
            span,
            ..
        } => Some(arena.alloc(Stmt::FunctionDef {
            name,
            args,
            body,
            decorator_list: decorators,
            span,
        })),
        _ => None,
    }
}

/// `class_def_decorators`: return a copy of `class_def` with its
/// `decorator_list` replaced. `None` if `class_def` is not a
/// `Stmt::ClassDef`.
pub fn class_def_decorators<'a>(
    arena: &'a Arena,
    decorators: &'a [&'a Expr<'a>],
    class_def: &'a Stmt<'a>,
) -> Option<&'a Stmt<'a>> {
    match *class_def {
        Stmt::ClassDef {
            name,
            bases,
            body,
            span,
            ..
        } => Some(arena.alloc(Stmt::ClassDef {
            name,
            bases,
            body,
            decorator_list: decorators,
            span,
        })),
        _ => None,
    }
}

/// `compare(expr, pairs)`: build a `Compare` node from a left operand and a
/// left-to-right list of `(cmpop, expr)` pairs, e.g. `1 < 2 < 3` becomes
/// `Compare(left=1, ops=[Lt, Lt], comparators=[2, 3])`.
pub fn compare<'a>(arena: &'a Arena, left: &'a Expr<'a>, pairs: &[(CmpOp, &'a Expr<'a>)]) -> Option<&'a Expr<'a>> {
    let (_, last_expr) = pairs.last()?;
    let span = Span::join(left.span(), last_expr.span());
    let ops = get_cmpops(arena, pairs);
    let comparators = get_exprs(arena, pairs);
    Some(arena.alloc(Expr::Compare {
        left,
        ops,
        comparators,
        span,
    }))
}

/// `seq_extract_starred_exprs`: keep only the `Starred` (`*args`-style)
/// elements of a mixed call-argument sequence.
pub fn seq_extract_starred_exprs<'a>(arena: &'a Arena, items: &[&'a Expr<'a>]) -> &'a [&'a Expr<'a>] {
    arena.alloc_slice_from_iter(
        items
            .iter()
            .filter(|e| matches!(e, Expr::Starred { .. }))
            .copied(),
    )
}

/// `seq_delete_starred_exprs`: keep only the non-`Starred` elements of a
/// mixed call-argument sequence.
pub fn seq_delete_starred_exprs<'a>(arena: &'a Arena, items: &[&'a Expr<'a>]) -> &'a [&'a Expr<'a>] {
    arena.alloc_slice_from_iter(
        items
            .iter()
            .filter(|e| !matches!(e, Expr::Starred { .. }))
            .copied(),
    )
}

/// The `alias('*', None)` node produced for a `from mod import *` clause.
pub fn star_import_alias<'a>(arena: &'a Arena) -> &'a Alias<'a> {
    arena.alloc(Alias {
        name: "*",
        asname: None,
    })
}
