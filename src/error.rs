use std::fmt::{Display, Formatter};

use crate::source::Position;

/// A grammar-wiring defect detected once, at registry/driver construction
/// time, rather than during an actual parse (e.g. two rule procedures
/// registered under the same [`RuleId`](crate::memo::RuleId)).
#[derive(Debug)]
pub struct ImplementationError {
    what: String,
    message: String,
}

impl ImplementationError {
    pub fn new(what: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            what: what.into(),
            message: message.into(),
        }
    }
}

impl Display for ImplementationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "ImplementationError: {}-{}", self.what, self.message)
    }
}

/// The per-parse error taxonomy.
///
/// Every recognizer and builder signals failure through `Option`/`Result`
/// without itself raising; fatal kinds are recorded once on the cursor's
/// `last_error` slot (first write wins) and re-surfaced by the Driver after
/// the start rule returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// The lexer produced an ERRORTOKEN; unrecoverable.
    LexerFatal,
    /// An arena allocation failed; unrecoverable.
    OutOfMemory,
    /// The start rule returned no result and no fatal error was set.
    ParseFailure,
    /// A builder detected a semantic constraint violation (e.g. mixed
    /// bytes/text string concatenation, invalid annotated target).
    SyntaxViolation,
    /// A string literal contained an escape sequence deprecated for
    /// removal; promoted to a hard error only when so configured.
    InvalidEscape,
    /// Nested rule-procedure calls exceeded the configured recursion
    /// guard (see `ParserConfig::recursion_limit`); a resource ceiling,
    /// not a grammar-correctness signal.
    RecursionLimitExceeded,
}

#[derive(Debug, Clone)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    /// Where in the source this error was raised — the Driver prefers this
    /// over its own last-realized-token fallback when synthesizing the
    /// final diagnostic, since a builder error (an invalid escape inside a
    /// STRING token, say) often pinpoints a location the last token alone
    /// wouldn't.
    pub position: Position,
    pub message: String,
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, position: Position, message: impl Into<String>) -> Self {
        Self {
            kind,
            position,
            message: message.into(),
        }
    }

    pub fn lexer_fatal(position: Position, message: impl Into<String>) -> Self {
        Self::new(ParseErrorKind::LexerFatal, position, message)
    }
    pub fn out_of_memory(position: Position) -> Self {
        Self::new(ParseErrorKind::OutOfMemory, position, "out of memory")
    }
    pub fn parse_failure(position: Position, message: impl Into<String>) -> Self {
        Self::new(ParseErrorKind::ParseFailure, position, message)
    }
    pub fn syntax_violation(position: Position, message: impl Into<String>) -> Self {
        Self::new(ParseErrorKind::SyntaxViolation, position, message)
    }
    pub fn invalid_escape(position: Position, message: impl Into<String>) -> Self {
        Self::new(ParseErrorKind::InvalidEscape, position, message)
    }
    pub fn recursion_limit_exceeded(position: Position, limit: usize) -> Self {
        Self::new(
            ParseErrorKind::RecursionLimitExceeded,
            position,
            format!("maximum recursion depth exceeded ({} nested rules)", limit),
        )
    }

    pub fn is_fatal(&self) -> bool {
        matches!(
            self.kind,
            ParseErrorKind::LexerFatal | ParseErrorKind::OutOfMemory
        )
    }
}

impl Display for ParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "SyntaxError: {}", self.message)
    }
}
