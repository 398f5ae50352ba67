use crate::token::Token;

/// Source span of an AST node: the start of its first token and the end of
/// its last, per invariant 5 — `n.start = token[i].start`, `n.end = token[j-1].end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start_line: usize,
    pub start_col: usize,
    pub end_line: usize,
    pub end_col: usize,
}

impl Span {
    pub fn from_tokens(start: &Token, end: &Token) -> Self {
        Self {
            start_line: start.start_line,
            start_col: start.start_col,
            end_line: end.end_line,
            end_col: end.end_col,
        }
    }

    pub fn join(a: Span, b: Span) -> Self {
        Self {
            start_line: a.start_line,
            start_col: a.start_col,
            end_line: b.end_line,
            end_col: b.end_col,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExprContext {
    Load,
    Store,
    Del,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CmpOp {
    Eq,
    NotEq,
    Lt,
    LtE,
    Gt,
    GtE,
    Is,
    IsNot,
    In,
    NotIn,
}

/// The value carried by a `Constant` expression.
#[derive(Debug, Clone, Copy)]
pub enum Constant<'a> {
    Int(i64),
    Float(f64),
    Complex(f64, f64),
    Str(&'a str),
    Bytes(&'a [u8]),
    Bool(bool),
    None,
    Ellipsis,
}

#[derive(Debug, Clone, Copy)]
pub enum Expr<'a> {
    Name {
        id: &'a str,
        ctx: ExprContext,
        span: Span,
    },
    Constant {
        value: Constant<'a>,
        /// Set to `Some("u")` for a `u`-prefixed string piece, matching the
        /// CPython AST's `kind` field; `None` otherwise.
        kind: Option<&'a str>,
        span: Span,
    },
    Attribute {
        value: &'a Expr<'a>,
        attr: &'a str,
        ctx: ExprContext,
        span: Span,
    },
    Subscript {
        value: &'a Expr<'a>,
        slice: &'a Expr<'a>,
        ctx: ExprContext,
        span: Span,
    },
    Starred {
        value: &'a Expr<'a>,
        ctx: ExprContext,
        span: Span,
    },
    Tuple {
        elts: &'a [&'a Expr<'a>],
        ctx: ExprContext,
        span: Span,
    },
    List {
        elts: &'a [&'a Expr<'a>],
        ctx: ExprContext,
        span: Span,
    },
    Compare {
        left: &'a Expr<'a>,
        ops: &'a [CmpOp],
        comparators: &'a [&'a Expr<'a>],
        span: Span,
    },
    Call {
        func: &'a Expr<'a>,
        args: &'a [&'a Expr<'a>],
        keywords: &'a [(Option<&'a str>, &'a Expr<'a>)],
        span: Span,
    },
}

impl<'a> Expr<'a> {
    pub fn span(&self) -> Span {
        match self {
            Expr::Name { span, .. }
            | Expr::Constant { span, .. }
            | Expr::Attribute { span, .. }
            | Expr::Subscript { span, .. }
            | Expr::Starred { span, .. }
            | Expr::Tuple { span, .. }
            | Expr::List { span, .. }
            | Expr::Compare { span, .. }
            | Expr::Call { span, .. } => *span,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Alias<'a> {
    pub name: &'a str,
    pub asname: Option<&'a str>,
}

#[derive(Debug, Clone, Copy)]
pub struct Arguments<'a> {
    pub posonlyargs: &'a [&'a str],
    pub args: &'a [&'a str],
    pub vararg: Option<&'a str>,
    pub kwonlyargs: &'a [&'a str],
    pub kw_defaults: &'a [Option<&'a Expr<'a>>],
    pub kwarg: Option<&'a str>,
    pub defaults: &'a [&'a Expr<'a>],
}

impl<'a> Arguments<'a> {
    pub const EMPTY: Arguments<'static> = Arguments {
        posonlyargs: &[],
        args: &[],
        vararg: None,
        kwonlyargs: &[],
        kw_defaults: &[],
        kwarg: None,
        defaults: &[],
    };
}

#[derive(Debug, Clone, Copy)]
pub enum Stmt<'a> {
    Expr {
        value: &'a Expr<'a>,
        span: Span,
    },
    Assign {
        targets: &'a [&'a Expr<'a>],
        value: &'a Expr<'a>,
        span: Span,
    },
    Import {
        names: &'a [&'a Alias<'a>],
        span: Span,
    },
    FunctionDef {
        name: &'a str,
        args: &'a Arguments<'a>,
        body: &'a [&'a Stmt<'a>],
        decorator_list: &'a [&'a Expr<'a>],
        span: Span,
    },
    ClassDef {
        name: &'a str,
        bases: &'a [&'a Expr<'a>],
        body: &'a [&'a Stmt<'a>],
        decorator_list: &'a [&'a Expr<'a>],
        span: Span,
    },
    Pass {
        span: Span,
    },
}

impl<'a> Stmt<'a> {
    pub fn span(&self) -> Span {
        match self {
            Stmt::Expr { span, .. }
            | Stmt::Assign { span, .. }
            | Stmt::Import { span, .. }
            | Stmt::FunctionDef { span, .. }
            | Stmt::ClassDef { span, .. }
            | Stmt::Pass { span } => *span,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Mod<'a> {
    pub body: &'a [&'a Stmt<'a>],
}

/// Type-erased carrier for whatever an arbitrary memoized rule produced.
///
/// The memo table is necessarily heterogeneous — different rules build
/// different node shapes — so every rule procedure funnels its result
/// through this tag before handing it to [`Cursor::memoize`](crate::cursor::Cursor::memoize),
/// and unwraps it back with a `match` at the call site. This mirrors, in a
/// type-safe way, how a generated C parser casts a `void*` memo slot back
/// to the concrete node type the caller expects.
#[derive(Debug, Clone, Copy)]
pub enum Node<'a> {
    Token(Token<'a>),
    Mod(&'a Mod<'a>),
    Stmt(&'a Stmt<'a>),
    StmtList(&'a [&'a Stmt<'a>]),
    Expr(&'a Expr<'a>),
    ExprList(&'a [&'a Expr<'a>]),
    Arguments(&'a Arguments<'a>),
    Alias(&'a Alias<'a>),
    AliasList(&'a [&'a Alias<'a>]),
    CmpOp(CmpOp),
    CmpOpList(&'a [CmpOp]),
    /// The `CONSTRUCTOR` sentinel of §9: a grammar action synthesizes this
    /// in place of a real node when the alternative it took carries no
    /// value worth keeping. [`seq_flatten`](crate::builders::seq_flatten)
    /// skips any inner sequence whose first element is this variant,
    /// exactly the role `(void*)1` plays in the source runtime, but as an
    /// explicit tagged variant instead of a raw pointer bit pattern.
    Placeholder,
}
