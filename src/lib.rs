//! `pegen-rt` is the runtime support library for a generated packrat PEG
//! parser that produces an abstract syntax tree (AST) for a Python-like
//! source language.
//!
//! # Overview
//!
//! Grammar compilers for PEG-based parsers are usually paired with a small
//! hand-written runtime that every generated rule procedure is compiled
//! against: something that pulls tokens from a lexer on demand, remembers
//! what each rule already produced at each position (packrat memoization),
//! and gives rule bodies a uniform way to fail without throwing. That
//! runtime is what this crate is. It does not parse anything itself —
//! there is no grammar compiler here, and no Python tokenizer — it defines
//! the contract generated code is written against:
//!
//! - [`Arena`] is the bulk-lifetime allocator every other piece of parser
//!   state, every token lexeme, and every AST node is allocated from.
//! - [`token_buffer::TokenBuffer`] and [`lexer::LexerAdapter`] realize
//!   tokens from a caller-supplied [`RawLexer`] lazily, one at a time.
//! - [`Cursor`] is the parser's position: a `mark` that can be saved and
//!   restored for free, backed by [`memo::MemoTable`] so a rule is never
//!   re-run at a position it has already been evaluated at.
//! - [`recognizers`] are the small, deterministic matchers
//!   (`expect`, `keyword`, `lookahead`, `name`, `number`, `string`, ...)
//!   every generated rule procedure is built out of.
//! - [`builders`] are the AST-construction helpers a grammar's actions
//!   call — sequence ops, context rewrites (`Load`/`Store`/`Del`),
//!   parameter-list assembly, string/number literal decoding.
//! - [`Driver`] wires all of the above together behind two entry points,
//!   `parse_string` and `parse_file`.
//!
//! # Design
//!
//! Every generated rule procedure obeys the same protocol against
//! [`Cursor`]: capture the entry mark, check the memo table, run the rule
//! body if it missed, and install the result — `None` included, since a
//! negative result is just as valid to cache as a positive one — before
//! returning. [`Cursor::memoize`] implements this for ordinary rules;
//! [`Cursor::memoize_left_rec`] implements Warth's seed-and-grow algorithm
//! for left-recursive ones. A rule that fails leaves the cursor exactly
//! where it found it; backtracking is free in time because undoing a
//! failed alternative is nothing more than restoring a saved `usize`.
//!
//! Because every object a parse produces — tokens, AST nodes, the small
//! helper structs builders use to thread partial results between grammar
//! actions — is allocated from the same [`Arena`], nothing in the core
//! ever frees a node individually. Backtracking abandons allocations made
//! by a rejected alternative rather than reclaiming them; the whole arena
//! is torn down once, when the top-level parse call returns.
//!
//! # Example
//!
//! The crate ships no production tokenizer, so driving it end-to-end means
//! supplying a [`RawLexer`] and a handful of rule procedures built out of
//! [`recognizers`] and [`builders`] — exactly what a grammar compiler would
//! generate. A minimal "parse a single NAME as an expression statement"
//! module rule looks like:
//!
//! ```
//! use pegen_rt::ast::{Mod, Stmt};
//! use pegen_rt::lexer::{RawLexer, RawToken};
//! use pegen_rt::token::TokenKind;
//! use pegen_rt::{recognizers, Arena, Cursor, Driver, Mode, ParserConfig};
//!
//! struct OneNameLexer {
//!     done: bool,
//! }
//! impl RawLexer for OneNameLexer {
//!     fn next_token(&mut self) -> RawToken {
//!         if !self.done {
//!             self.done = true;
//!             RawToken {
//!                 kind: TokenKind::Name,
//!                 bytes: b"x".to_vec(),
//!                 start_line: 1,
//!                 start_col: 0,
//!                 end_line: 1,
//!                 end_col: 1,
//!             }
//!         } else {
//!             RawToken {
//!                 kind: TokenKind::EndMarker,
//!                 bytes: vec![],
//!                 start_line: 1,
//!                 start_col: 1,
//!                 end_line: 1,
//!                 end_col: 1,
//!             }
//!         }
//!     }
//! }
//!
//! fn module<'a>(cursor: &mut Cursor<'a, OneNameLexer>) -> Option<&'a Mod<'a>> {
//!     let arena = cursor.arena();
//!     let value = recognizers::name(cursor)?;
//!     let span = value.span();
//!     let stmt = arena.alloc(Stmt::Expr { value, span });
//!     let body = arena.alloc_slice_from_iter(std::iter::once(&*stmt));
//!     Some(arena.alloc(Mod { body }))
//! }
//!
//! let arena = Arena::new(4096);
//! let module = Driver::parse_string(
//!     &arena,
//!     b"x",
//!     OneNameLexer { done: false },
//!     ParserConfig::default(),
//!     Mode::Ast,
//!     module,
//! )
//! .unwrap()
//! .unwrap();
//! assert_eq!(module.body.len(), 1);
//! ```
//!
//! # License
//! `pegen-rt` is provided under the MIT license. See the repository's
//! LICENSE file.

pub mod arena;
pub mod ast;
pub mod builders;
pub mod config;
pub mod cursor;
pub mod driver;
pub mod error;
pub mod lexer;
pub mod logger;
pub mod memo;
pub mod recognizers;
pub mod source;
pub mod token;
pub mod token_buffer;
pub mod tree;

pub use arena::Arena;
pub use config::ParserConfig;
pub use cursor::Cursor;
pub use driver::{BytecodeCompiler, Diagnostic, Driver, DriverError, Mode};
pub use error::{ImplementationError, ParseError, ParseErrorKind};
pub use lexer::{LexerAdapter, RawLexer, RawToken};
pub use logger::Log;
pub use memo::{MemoTable, RuleId, RuleRegistry};
pub use source::{Code, Position};
pub use token::{Token, TokenKind};
pub use token_buffer::TokenBuffer;
pub use tree::{print_tree, TreeNode};
