//! Grammar rules, one method per production.
//!
//! - `mod.rs`: program and statement lists
//! - `stmt.rs`: statement forms
//! - `expr.rs`: the expression precedence chain
//! - `operators.rs`: operator matching helpers

mod expr;
mod operators;
mod stmt;

use lox_ir::{Stmt, TokenKind};

use crate::{ParseOutput, Parser};

impl Parser<'_> {
    /// `program → statement* EOF`
    pub fn parse_program(mut self) -> ParseOutput {
        let mut statements = Vec::new();
        while !self.is_at_end() {
            if let Some(stmt) = self.parse_statement_recovering() {
                statements.push(stmt);
            }
        }
        ParseOutput {
            statements,
            errors: self.errors,
        }
    }

    /// Statements up to (not including) the closing `}` of a block.
    pub(crate) fn parse_statement_list(&mut self) -> Vec<Stmt> {
        let mut statements = Vec::new();
        while !self.check(TokenKind::RightBrace) && !self.is_at_end() {
            if let Some(stmt) = self.parse_statement_recovering() {
                statements.push(stmt);
            }
        }
        statements
    }

    fn parse_statement_recovering(&mut self) -> Option<Stmt> {
        match self.parse_statement() {
            Ok(stmt) => Some(stmt),
            Err(error) => {
                self.recover(error);
                None
            }
        }
    }
}
