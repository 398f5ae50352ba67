use crate::arena::Arena;
use crate::ast::Node;
use crate::config::ParserConfig;
use crate::error::ParseError;
use crate::lexer::{LexerAdapter, RawLexer};
use crate::logger::Log;
use crate::memo::{MemoTable, RuleId};
use crate::source::Position;
use crate::token::Token;
use crate::token_buffer::TokenBuffer;

/// The parser's single mutable piece of state, threaded by `&mut` through
/// every rule procedure, recognizer, and builder invoked during one parse.
///
/// Owns the token buffer, memo table, and lexer adapter, and exposes the
/// save/restore/memoize protocol rule procedures are written against.
pub struct Cursor<'a, L> {
    mark: usize,
    tokens: TokenBuffer<'a>,
    memo: MemoTable<'a>,
    lexer: LexerAdapter<'a, L>,
    arena: &'a Arena,
    last_error: Option<ParseError>,
    recursion_depth: usize,
    recursion_limit: usize,
    max_tokens: Option<usize>,
    invalid_escape_is_error: bool,
    pub log: Log<&'static str>,
}

impl<'a, L: RawLexer> Cursor<'a, L> {
    pub fn new(lexer: L, arena: &'a Arena, config: ParserConfig) -> Self {
        Self {
            mark: 0,
            tokens: TokenBuffer::with_capacity(config.initial_token_capacity),
            memo: MemoTable::new(),
            lexer: LexerAdapter::new(lexer, arena),
            arena,
            last_error: None,
            recursion_depth: 0,
            recursion_limit: config.recursion_limit,
            max_tokens: config.max_tokens,
            invalid_escape_is_error: config.invalid_escape_is_error,
            log: Log::None,
        }
    }

    pub fn arena(&self) -> &'a Arena {
        self.arena
    }

    pub fn mark(&self) -> usize {
        self.mark
    }

    /// Save the current position; always paired with a later `restore`.
    pub fn save(&self) -> usize {
        self.mark
    }

    pub fn restore(&mut self, mark: usize) {
        self.mark = mark;
    }

    pub fn last_error(&self) -> Option<&ParseError> {
        self.last_error.as_ref()
    }

    /// Record a fatal error if none is recorded yet — first error wins, per
    /// the propagation policy: a later null-return must not overwrite the
    /// diagnosis of what actually went wrong first.
    fn set_error_if_absent(&mut self, err: ParseError) {
        if self.last_error.is_none() {
            self.last_error = Some(err);
        }
    }

    /// A builder detected a deprecated/invalid string escape. Per §7
    /// `InvalidEscape`, this is only a warning unless the embedder's
    /// [`ParserConfig::invalid_escape_is_error`] promotes it to a hard error.
    pub fn flag_invalid_escape(&mut self, position: Position, message: impl Into<String>) {
        if self.invalid_escape_is_error {
            self.set_error_if_absent(ParseError::invalid_escape(position, message));
        }
    }

    /// A builder detected a semantic constraint violation (§7
    /// `SyntaxViolation`) — e.g. mixed bytes/text string concatenation, an
    /// invalid annotated target, a malformed relative-import dot count.
    /// Reported immediately; first violation wins like any other error.
    pub fn flag_syntax_violation(&mut self, position: Position, message: impl Into<String>) {
        self.set_error_if_absent(ParseError::syntax_violation(position, message));
    }

    /// Ensure a token exists at `mark`, demand-pulling from the lexer if the
    /// buffer hasn't realized that far yet. Returns `false` (leaving
    /// `last_error` set) on a fatal lexer error or a configured token-count
    /// ceiling.
    fn demand_fill(&mut self) -> bool {
        while self.mark >= self.tokens.len() {
            if let Some(limit) = self.max_tokens {
                if self.tokens.len() >= limit {
                    let position = self.position_at(self.mark);
                    self.set_error_if_absent(ParseError::parse_failure(
                        position,
                        "token limit exceeded",
                    ));
                    return false;
                }
            }
            match self.lexer.next() {
                Ok(Some(token)) => {
                    self.tokens.push(token);
                }
                Ok(None) => {
                    // Lexer already exhausted (EndMarker previously consumed)
                    // and we're asking past it; invariant 6 forbids this from
                    // happening in a well-formed rule, but fail safely.
                    return self.mark < self.tokens.len();
                }
                Err(err) => {
                    self.set_error_if_absent(err);
                    return false;
                }
            }
        }
        true
    }

    /// The token at the current mark, realizing it on demand.
    pub fn peek(&mut self) -> Option<Token<'a>> {
        if !self.demand_fill() {
            return None;
        }
        self.tokens.get(self.mark).copied()
    }

    pub fn advance(&mut self) {
        self.mark += 1;
    }

    /// Furthest mark any memoized rule has consumed up to — the anchor for
    /// the "unexpected token" diagnostic when the start rule fails outright.
    pub fn furthest_mark(&self) -> usize {
        self.memo.max_parsed_mark().max(self.tokens.len().min(self.mark))
    }

    pub fn token_at(&self, index: usize) -> Option<&Token<'a>> {
        self.tokens.get(index)
    }

    pub fn token_count(&self) -> usize {
        self.tokens.len()
    }

    /// Resolve a mark to the position of the token realized there, or to
    /// `(1, 1)` if nothing has been realized that far yet.
    fn position_at(&self, mark: usize) -> Position {
        match self.tokens.get(mark) {
            Some(tok) => Position::new(tok.start_line, tok.start_col + 1),
            None => Position::new(1, 1),
        }
    }

    /// Guard against runaway direct/mutual recursion across rule
    /// procedures. Pair every call with [`exit_rule`](Self::exit_rule).
    pub fn enter_rule(&mut self) -> Result<(), ParseError> {
        self.recursion_depth += 1;
        if self.recursion_depth > self.recursion_limit {
            let position = self.position_at(self.mark);
            let err = ParseError::recursion_limit_exceeded(position, self.recursion_limit);
            self.set_error_if_absent(err.clone());
            return Err(err);
        }
        Ok(())
    }

    pub fn exit_rule(&mut self) {
        self.recursion_depth -= 1;
    }

    /// The memoization protocol of §4.4 for an ordinary (non-left-recursive)
    /// rule: on a cache hit, jump straight to the memoized post-mark and
    /// return the memoized result without invoking `f`; on a miss, run `f`,
    /// then install the result under `(mark0, rule_id)`.
    pub fn memoize<F>(&mut self, rule_id: RuleId, f: F) -> Option<Node<'a>>
    where
        F: FnOnce(&mut Self) -> Option<Node<'a>>,
    {
        let mark0 = self.mark;
        if !self.demand_fill() && self.last_error.is_some() {
            return None;
        }
        if let Some((result, post_mark)) = self.memo.find(mark0, rule_id) {
            self.mark = post_mark;
            #[cfg(debug_assertions)]
            self.log
                .log_memo_hit(&format!("#{}", rule_id), self.position_at(mark0), true);
            return result;
        }
        #[cfg(debug_assertions)]
        self.log
            .log_memo_hit(&format!("#{}", rule_id), self.position_at(mark0), false);
        let result = f(self);
        let post_mark = self.mark;
        #[cfg(debug_assertions)]
        self.log.log_rule_result(
            &format!("#{}", rule_id),
            self.position_at(mark0),
            result.is_some(),
        );
        self.memo.insert_memo(mark0, rule_id, result, post_mark);
        result
    }

    /// Warth's seed-and-grow algorithm for a left-recursive rule: install a
    /// failing seed, then re-run the rule body from the same start mark,
    /// replacing the memo entry each time the consumed range strictly grows,
    /// until an iteration fails to grow further (a fixed point).
    pub fn memoize_left_rec<F>(&mut self, rule_id: RuleId, mut f: F) -> Option<Node<'a>>
    where
        F: FnMut(&mut Self) -> Option<Node<'a>>,
    {
        let mark0 = self.mark;
        if let Some((result, post_mark)) = self.memo.find(mark0, rule_id) {
            self.mark = post_mark;
            #[cfg(debug_assertions)]
            self.log
                .log_memo_hit(&format!("#{} (left-rec)", rule_id), self.position_at(mark0), true);
            return result;
        }
        self.memo.insert_memo(mark0, rule_id, None, mark0);
        let mut best_result = None;
        let mut best_mark = mark0;
        loop {
            self.mark = mark0;
            let result = f(self);
            let grown_mark = self.mark;
            match &result {
                Some(_) if grown_mark > best_mark => {
                    best_result = result;
                    best_mark = grown_mark;
                    self.memo.update_memo(mark0, rule_id, best_result, best_mark);
                }
                _ => break,
            }
        }
        self.mark = best_mark;
        #[cfg(debug_assertions)]
        self.log.log_rule_result(
            &format!("#{} (left-rec)", rule_id),
            self.position_at(mark0),
            best_result.is_some(),
        );
        best_result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::RawToken;
    use crate::token::TokenKind;

    struct FixedLexer {
        tokens: std::vec::IntoIter<RawToken>,
    }
    impl RawLexer for FixedLexer {
        fn next_token(&mut self) -> RawToken {
            self.tokens.next().unwrap_or(RawToken {
                kind: TokenKind::EndMarker,
                bytes: vec![],
                start_line: 1,
                start_col: 0,
                end_line: 1,
                end_col: 0,
            })
        }
    }

    fn name_tok(text: &str) -> RawToken {
        RawToken {
            kind: TokenKind::Name,
            bytes: text.as_bytes().to_vec(),
            start_line: 1,
            start_col: 0,
            end_line: 1,
            end_col: text.len(),
        }
    }

    #[test]
    fn memo_hit_skips_recompute() {
        let arena = Arena::new(1024);
        let lexer = FixedLexer {
            tokens: vec![name_tok("x")].into_iter(),
        };
        let mut cursor = Cursor::new(lexer, &arena, ParserConfig::default());
        let mut calls = 0;
        let first = cursor.memoize(1, |c| {
            calls += 1;
            c.peek().map(|t| Node::Token(t))
        });
        cursor.restore(0);
        let second = cursor.memoize(1, |c| {
            calls += 1;
            c.peek().map(|t| Node::Token(t))
        });
        assert_eq!(calls, 1);
        match (first, second) {
            (Some(Node::Token(a)), Some(Node::Token(b))) => assert_eq!(a.bytes, b.bytes),
            _ => panic!("expected memoized token hit"),
        }
    }

    #[test]
    fn failed_rule_leaves_mark_unchanged() {
        let arena = Arena::new(1024);
        let lexer = FixedLexer {
            tokens: vec![name_tok("x")].into_iter(),
        };
        let mut cursor = Cursor::new(lexer, &arena, ParserConfig::default());
        let mark0 = cursor.save();
        let result = cursor.memoize(2, |c| {
            let m = c.save();
            let tok = c.peek();
            if tok.map(|t| t.is(TokenKind::Number)).unwrap_or(false) {
                c.advance();
                tok.map(Node::Token)
            } else {
                c.restore(m);
                None
            }
        });
        assert!(result.is_none());
        assert_eq!(cursor.mark(), mark0);
    }

    #[test]
    fn recursion_guard_trips() {
        let arena = Arena::new(1024);
        let lexer = FixedLexer {
            tokens: vec![].into_iter(),
        };
        let mut config = ParserConfig::default();
        config.recursion_limit = 3;
        let mut cursor = Cursor::new(lexer, &arena, config);
        for _ in 0..3 {
            cursor.enter_rule().unwrap();
        }
        assert!(cursor.enter_rule().is_err());
    }
}
