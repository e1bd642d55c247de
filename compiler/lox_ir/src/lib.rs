//! Lox IR - tokens and syntax tree.
//!
//! This crate holds the data that flows between the pipeline stages:
//! - [`Token`] / [`TokenKind`] produced by the lexer
//! - [`Expr`] / [`Stmt`] produced by the parser and walked by the evaluator
//! - operator enums shared by the parser and evaluator
//!
//! Everything here is immutable once built. Tree nodes own their children
//! through `Box`, so a parsed program is a plain acyclic value.

pub mod ast;
mod token;

pub use ast::{BinaryOp, Expr, ExprKind, LogicalOp, Stmt, UnaryOp};
pub use token::{LiteralValue, Token, TokenKind, TOKEN_KIND_COUNT};
