//! Expression nodes.

use std::{fmt, mem};

use super::{BinaryOp, LogicalOp, UnaryOp};
use crate::LiteralValue;

/// An expression together with the line of its defining token.
///
/// `line` is the operator line for unary/binary/logical nodes and the name
/// line for variable and assignment nodes, so runtime errors can cite it.
#[derive(Clone, PartialEq)]
pub struct Expr {
    pub kind: ExprKind,
    pub line: u32,
}

impl Expr {
    #[inline]
    pub fn new(kind: ExprKind, line: u32) -> Self {
        Expr { kind, line }
    }

    /// Move this node's children into `pending`, leaving a leaf.
    fn detach_children(&mut self, pending: &mut Vec<Expr>) {
        match mem::replace(&mut self.kind, ExprKind::Literal(LiteralValue::Nil)) {
            ExprKind::Grouping(inner) => pending.push(*inner),
            ExprKind::Unary { operand, .. } => pending.push(*operand),
            ExprKind::Binary { left, right, .. } | ExprKind::Logical { left, right, .. } => {
                pending.push(*left);
                pending.push(*right);
            }
            ExprKind::Assign { value, .. } => pending.push(*value),
            ExprKind::Literal(_) | ExprKind::Variable(_) => {}
        }
    }
}

/// Frees the tree with an explicit work-list so that dropping a deeply
/// nested expression does not recurse once per level.
impl Drop for Expr {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        self.detach_children(&mut pending);
        while let Some(mut child) = pending.pop() {
            child.detach_children(&mut pending);
        }
    }
}

impl fmt::Debug for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // The line is noise in tree dumps; the kind carries the shape.
        fmt::Debug::fmt(&self.kind, f)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ExprKind {
    Literal(LiteralValue),
    Grouping(Box<Expr>),
    Unary {
        op: UnaryOp,
        operand: Box<Expr>,
    },
    Binary {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    Logical {
        op: LogicalOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    Variable(String),
    Assign {
        name: String,
        value: Box<Expr>,
    },
}

/// Parenthesized prefix rendering, e.g. `(+ 1 (group (* 2 3)))`.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ExprKind::Literal(LiteralValue::Str(s)) => write!(f, "{s:?}"),
            ExprKind::Literal(value) => write!(f, "{value}"),
            ExprKind::Grouping(inner) => write!(f, "(group {inner})"),
            ExprKind::Unary { op, operand } => write!(f, "({} {operand})", op.as_symbol()),
            ExprKind::Binary { op, left, right } => {
                write!(f, "({} {left} {right})", op.as_symbol())
            }
            ExprKind::Logical { op, left, right } => {
                write!(f, "({} {left} {right})", op.as_symbol())
            }
            ExprKind::Variable(name) => f.write_str(name),
            ExprKind::Assign { name, value } => write!(f, "(= {name} {value})"),
        }
    }
}
