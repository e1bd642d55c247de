//! Syntax tree for Lox programs.
//!
//! Expressions and statements are closed sum types; the parser builds them
//! and the evaluator matches on them exhaustively.

mod expr;
mod operators;
mod stmt;

pub use expr::{Expr, ExprKind};
pub use operators::{BinaryOp, LogicalOp, UnaryOp};
pub use stmt::Stmt;
