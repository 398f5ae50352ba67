//! The one-shot entry point (§4.7): wires Arena + LexerAdapter + TokenBuffer +
//! MemoTable + Cursor, demand-fills one token to prime the buffer, runs the
//! caller-supplied start rule, and turns the outcome into an AST or a
//! [`Diagnostic`].
//!
//! The grammar-generated rule procedures themselves are out of scope (§1);
//! the `start_rule` closure stands in for whatever a generated `module()`
//! entry rule would be.

use std::fmt::{Display, Formatter};
use std::fs;
use std::io;
use std::path::Path;

use crate::arena::Arena;
use crate::ast::Mod;
use crate::config::ParserConfig;
use crate::cursor::Cursor;
use crate::lexer::RawLexer;
use crate::source::{Code, Position};

/// What a finished parse should produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Run the start rule and throw away the result; only success/failure
    /// matters. Lets a caller validate a source without paying for an AST
    /// it won't keep.
    Validate,
    /// Run the start rule and return the resulting module.
    Ast,
}

/// The external "compile a finished AST to bytecode" collaborator mode=2
/// delegates to (§4.7 ADDED). The crate ships the trait, not an
/// implementation — matching §1's scope boundary on anything past AST
/// production.
pub trait BytecodeCompiler<'a> {
    type Output;
    fn compile(&self, arena: &'a Arena, module: &'a Mod<'a>) -> Self::Output;
}

/// The `raise_syntax_error(filename?, lineno, col_1based, message, line_text?)`
/// contract of §6, reified as a value instead of a side-effecting call.
#[derive(Debug, Clone)]
pub struct Diagnostic {
    pub filename: Option<String>,
    pub position: Position,
    pub message: String,
    pub line_text: Option<String>,
}

impl Display for Diagnostic {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.filename {
            Some(name) => writeln!(
                f,
                "SyntaxError: {} ({}:{}:{})",
                self.message, name, self.position.line, self.position.column
            )?,
            None => writeln!(
                f,
                "SyntaxError: {} ({}:{})",
                self.message, self.position.line, self.position.column
            )?,
        }
        if let Some(line) = &self.line_text {
            writeln!(f, "    {}", line)?;
        }
        Ok(())
    }
}

/// Errors that can prevent `parse_file` from ever reaching the parser.
#[derive(Debug)]
pub enum DriverError {
    Io(io::Error),
    Diagnostic(Diagnostic),
}

impl From<io::Error> for DriverError {
    fn from(err: io::Error) -> Self {
        DriverError::Io(err)
    }
}

impl From<Diagnostic> for DriverError {
    fn from(err: Diagnostic) -> Self {
        DriverError::Diagnostic(err)
    }
}

impl Display for DriverError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            DriverError::Io(err) => write!(f, "{}", err),
            DriverError::Diagnostic(err) => write!(f, "{}", err),
        }
    }
}

/// Parses a single source, owning none of its own state: the caller supplies
/// the [`Arena`] the result is bound to (and, by Rust's ordinary drop order,
/// controls when it tears down — the same "arena dies at parse teardown"
/// contract as step 7 of §4.7, just expressed as ownership instead of an
/// explicit free call).
pub struct Driver;

impl Driver {
    /// §4.7 `parse_string`, modes 0 (validate) and 1 (return AST).
    ///
    /// `start_rule` stands in for a generated grammar's entry production; it
    /// receives the primed [`Cursor`] and returns the parsed module, or
    /// `None` on failure (in which case `cursor.last_error()` is consulted
    /// first, falling back to a generic `ParseFailure` at the last realized
    /// token).
    pub fn parse_string<'a, L, F>(
        arena: &'a Arena,
        source: &[u8],
        lexer: L,
        config: ParserConfig,
        mode: Mode,
        start_rule: F,
    ) -> Result<Option<&'a Mod<'a>>, Diagnostic>
    where
        L: RawLexer,
        F: FnOnce(&mut Cursor<'a, L>) -> Option<&'a Mod<'a>>,
    {
        let mut cursor = Cursor::new(lexer, arena, config);
        // Prime the buffer: realize exactly one token before the start rule
        // runs, matching step 3 of §4.7. A failure here (fatal lexer error,
        // or an empty source) still needs to flow through the same
        // diagnostic path as any other failed rule.
        let _ = cursor.peek();

        match start_rule(&mut cursor) {
            Some(module) => match mode {
                Mode::Validate => Ok(None),
                Mode::Ast => Ok(Some(module)),
            },
            None => Err(Self::synthesize_diagnostic(&cursor, source, None)),
        }
    }

    /// §4.7 `parse_file`: reads `path`, then delegates to [`parse_string`](Self::parse_string).
    pub fn parse_file<'a, L, F>(
        arena: &'a Arena,
        path: &Path,
        lexer: L,
        config: ParserConfig,
        mode: Mode,
        start_rule: F,
    ) -> Result<Option<&'a Mod<'a>>, DriverError>
    where
        L: RawLexer,
        F: FnOnce(&mut Cursor<'a, L>) -> Option<&'a Mod<'a>>,
    {
        let source = fs::read(path)?;
        let filename = path.display().to_string();
        Self::parse_string(arena, &source, lexer, config, mode, start_rule).map_err(|mut diag| {
            diag.filename = Some(filename);
            DriverError::Diagnostic(diag)
        })
    }

    /// Mode 2: run the start rule, then hand the resulting module to an
    /// external [`BytecodeCompiler`].
    pub fn compile_string<'a, L, F, C>(
        arena: &'a Arena,
        source: &[u8],
        lexer: L,
        config: ParserConfig,
        start_rule: F,
        compiler: &C,
    ) -> Result<C::Output, Diagnostic>
    where
        L: RawLexer,
        F: FnOnce(&mut Cursor<'a, L>) -> Option<&'a Mod<'a>>,
        C: BytecodeCompiler<'a>,
    {
        let module = Self::parse_string(arena, source, lexer, config, Mode::Ast, start_rule)?
            .expect("Mode::Ast always returns Some on success");
        Ok(compiler.compile(arena, module))
    }

    /// Step 6 of §4.7: on failure, prefer whatever fatal/builder error the
    /// cursor already recorded — kind, message, *and* position, since a
    /// builder error often pinpoints a location more precise than "the last
    /// realized token" (an invalid escape partway through a STRING, say) —
    /// falling back to the last realized token's position, or line 1 col 1
    /// ("at start, before reading any input") when no token was ever
    /// realized and no error was recorded either.
    fn synthesize_diagnostic<L: RawLexer>(
        cursor: &Cursor<L>,
        source: &[u8],
        filename: Option<String>,
    ) -> Diagnostic {
        let (message, position) = match cursor.last_error() {
            Some(err) => (err.message.clone(), err.position),
            None => {
                let position = match cursor.token_count() {
                    0 => Position::new(1, 1),
                    n => {
                        let last = cursor.token_at(n - 1).expect("token_count() > 0");
                        Position::new(last.start_line, last.start_col + 1)
                    }
                };
                ("invalid syntax".to_string(), position)
            }
        };

        let line_text = Code::new(source).line_text(position.line);

        Diagnostic {
            filename,
            position,
            message,
            line_text,
        }
    }
}
