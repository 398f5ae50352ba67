/// Resource ceilings and tunables for a single [`Driver`](crate::driver::Driver) parse.
///
/// None of these fields change parse *semantics* — only the point at which a
/// runaway grammar is turned into a clean [`ParseError`](crate::error::ParseError)
/// instead of a stack overflow or unbounded allocation.
#[derive(Debug, Clone, Copy)]
pub struct ParserConfig {
    /// Maximum depth of nested rule-procedure calls before `enter_rule`
    /// returns a recursion-limit error. Mirrors the kind of guard apollo-rs
    /// keeps around its own recursive-descent parser.
    pub recursion_limit: usize,
    /// Optional ceiling on the number of tokens realized from the lexer
    /// during a single parse; `None` means unbounded.
    pub max_tokens: Option<usize>,
    /// Initial capacity reserved in the [`TokenBuffer`](crate::token_buffer::TokenBuffer).
    pub initial_token_capacity: usize,
    /// Whether a deprecated/invalid string escape (§7 `InvalidEscape`) is
    /// promoted from a warning to a hard [`ParseError`](crate::error::ParseError).
    /// CPython defaults this to a warning; a linter embedding this runtime
    /// may want it promoted.
    pub invalid_escape_is_error: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            recursion_limit: 500,
            max_tokens: None,
            initial_token_capacity: 1,
            invalid_escape_is_error: false,
        }
    }
}
