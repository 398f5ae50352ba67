//! Debug pretty-printing of a parsed AST: an `impl TreeItem` plus
//! `ptree::print_tree`.
//!
//! Nothing here participates in parsing; it exists purely so a caller
//! wiring up a grammar can eyeball a `Mod` while developing it.

use std::borrow::Cow;
use std::io;

use ptree::{Style, TreeItem};

use crate::ast::{Constant, Expr, Mod, Stmt};

/// A homogeneous view over the three heterogeneous AST node families so
/// `ptree` has a single type to walk. Borrowed, not owned: printing a tree
/// never allocates new nodes.
#[derive(Clone)]
pub enum TreeNode<'a> {
    Mod(&'a Mod<'a>),
    Stmt(&'a Stmt<'a>),
    Expr(&'a Expr<'a>),
}

/// Print `module` as an indented tree to stdout.
pub fn print_tree(module: &Mod) -> io::Result<()> {
    ptree::print_tree(&TreeNode::Mod(module))
}

impl<'a> TreeItem for TreeNode<'a> {
    type Child = TreeNode<'a>;

    fn write_self<W: io::Write>(&self, f: &mut W, _style: &Style) -> io::Result<()> {
        match self {
            TreeNode::Mod(_) => write!(f, "Module"),
            TreeNode::Stmt(s) => {
                let span = s.span();
                write!(
                    f,
                    "{} # {}:{}-{}:{}",
                    stmt_label(s),
                    span.start_line,
                    span.start_col,
                    span.end_line,
                    span.end_col
                )
            }
            TreeNode::Expr(e) => {
                let span = e.span();
                write!(
                    f,
                    "{} # {}:{}-{}:{}",
                    expr_label(e),
                    span.start_line,
                    span.start_col,
                    span.end_line,
                    span.end_col
                )
            }
        }
    }

    fn children(&self) -> Cow<[Self::Child]> {
        match self {
            TreeNode::Mod(m) => Cow::from(m.body.iter().map(|s| TreeNode::Stmt(s)).collect::<Vec<_>>()),
            TreeNode::Stmt(s) => Cow::from(stmt_children(s)),
            TreeNode::Expr(e) => Cow::from(expr_children(e)),
        }
    }
}

fn stmt_label(stmt: &Stmt) -> String {
    match stmt {
        Stmt::Expr { .. } => "Expr".to_string(),
        Stmt::Assign { .. } => "Assign".to_string(),
        Stmt::Import { names, .. } => format!("Import[{}]", names.len()),
        Stmt::FunctionDef { name, .. } => format!("FunctionDef({})", name),
        Stmt::ClassDef { name, .. } => format!("ClassDef({})", name),
        Stmt::Pass { .. } => "Pass".to_string(),
    }
}

fn stmt_children<'a>(stmt: &Stmt<'a>) -> Vec<TreeNode<'a>> {
    match *stmt {
        Stmt::Expr { value, .. } => vec![TreeNode::Expr(value)],
        Stmt::Assign { targets, value, .. } => targets
            .iter()
            .map(|t| TreeNode::Expr(t))
            .chain(std::iter::once(TreeNode::Expr(value)))
            .collect(),
        Stmt::Import { .. } => Vec::new(),
        Stmt::FunctionDef { body, .. } | Stmt::ClassDef { body, .. } => {
            body.iter().map(|s| TreeNode::Stmt(s)).collect()
        }
        Stmt::Pass { .. } => Vec::new(),
    }
}

fn expr_label(expr: &Expr) -> String {
    match expr {
        Expr::Name { id, ctx, .. } => format!("Name({}, {:?})", id, ctx),
        Expr::Constant { value, .. } => format!("Constant({})", constant_label(value)),
        Expr::Attribute { attr, ctx, .. } => format!("Attribute(.{}, {:?})", attr, ctx),
        Expr::Subscript { ctx, .. } => format!("Subscript({:?})", ctx),
        Expr::Starred { ctx, .. } => format!("Starred({:?})", ctx),
        Expr::Tuple { ctx, .. } => format!("Tuple({:?})", ctx),
        Expr::List { ctx, .. } => format!("List({:?})", ctx),
        Expr::Compare { ops, .. } => format!("Compare({:?})", ops),
        Expr::Call { .. } => "Call".to_string(),
    }
}

fn constant_label(value: &Constant) -> String {
    match value {
        Constant::Int(v) => v.to_string(),
        Constant::Float(v) => v.to_string(),
        Constant::Complex(re, im) => format!("{}+{}j", re, im),
        Constant::Str(s) => format!("{:?}", s),
        Constant::Bytes(b) => format!("{:?}", b),
        Constant::Bool(b) => b.to_string(),
        Constant::None => "None".to_string(),
        Constant::Ellipsis => "...".to_string(),
    }
}

fn expr_children<'a>(expr: &Expr<'a>) -> Vec<TreeNode<'a>> {
    match *expr {
        Expr::Name { .. } | Expr::Constant { .. } => Vec::new(),
        Expr::Attribute { value, .. } | Expr::Subscript { value, .. } | Expr::Starred { value, .. } => {
            vec![TreeNode::Expr(value)]
        }
        Expr::Tuple { elts, .. } | Expr::List { elts, .. } => {
            elts.iter().map(|e| TreeNode::Expr(e)).collect()
        }
        Expr::Compare {
            left, comparators, ..
        } => std::iter::once(TreeNode::Expr(left))
            .chain(comparators.iter().map(|e| TreeNode::Expr(e)))
            .collect(),
        Expr::Call { func, args, .. } => std::iter::once(TreeNode::Expr(func))
            .chain(args.iter().map(|e| TreeNode::Expr(e)))
            .collect(),
    }
}
