//! Statement parsing.

use lox_ir::{Stmt, TokenKind};
use lox_stack::ensure_sufficient_stack;
use tracing::trace;

use crate::{ParseError, ParseErrorKind, Parser};

impl Parser<'_> {
    /// Parse one statement.
    ///
    /// Wrapped in `ensure_sufficient_stack` since blocks and `if`/`while`
    /// bodies nest arbitrarily deep.
    pub(crate) fn parse_statement(&mut self) -> Result<Stmt, ParseError> {
        ensure_sufficient_stack(|| self.parse_statement_inner())
    }

    fn parse_statement_inner(&mut self) -> Result<Stmt, ParseError> {
        trace!(token = ?self.current_kind(), line = self.current().line, "statement");
        match self.current_kind() {
            TokenKind::Print => self.parse_print(),
            TokenKind::Var => self.parse_var(),
            TokenKind::LeftBrace => self.parse_block(),
            TokenKind::If => self.parse_if(),
            TokenKind::While => self.parse_while(),
            _ => self.parse_expression_statement(),
        }
    }

    /// `printStmt → "print" expression ";"`
    fn parse_print(&mut self) -> Result<Stmt, ParseError> {
        self.advance();
        let value = self.parse_expression()?;
        self.expect(TokenKind::Semicolon, "after value")?;
        Ok(Stmt::Print(value))
    }

    /// `varDecl → "var" IDENTIFIER ( "=" expression )? ";"`
    fn parse_var(&mut self) -> Result<Stmt, ParseError> {
        self.advance();
        let Some(name) = self.eat(TokenKind::Identifier) else {
            return Err(ParseError::at(
                ParseErrorKind::ExpectedIdentifier,
                self.current(),
            ));
        };

        let initializer = if self.eat(TokenKind::Equal).is_some() {
            Some(self.parse_expression()?)
        } else {
            None
        };

        self.expect(TokenKind::Semicolon, "after variable declaration")?;
        Ok(Stmt::Var {
            name: name.lexeme.clone(),
            initializer,
        })
    }

    /// `block → "{" statement* "}"`
    fn parse_block(&mut self) -> Result<Stmt, ParseError> {
        self.advance();
        let statements = self.parse_statement_list();
        self.expect(TokenKind::RightBrace, "after block")?;
        Ok(Stmt::Block(statements))
    }

    /// `ifStmt → "if" "(" expression ")" statement ( "else" statement )?`
    ///
    /// A dangling `else` binds to the nearest `if`.
    fn parse_if(&mut self) -> Result<Stmt, ParseError> {
        self.advance();
        self.expect(TokenKind::LeftParen, "after 'if'")?;
        let condition = self.parse_expression()?;
        self.expect(TokenKind::RightParen, "after if condition")?;

        let then_branch = Box::new(self.parse_statement()?);
        let else_branch = if self.eat(TokenKind::Else).is_some() {
            Some(Box::new(self.parse_statement()?))
        } else {
            None
        };

        Ok(Stmt::If {
            condition,
            then_branch,
            else_branch,
        })
    }

    /// `whileStmt → "while" "(" expression ")" statement`
    fn parse_while(&mut self) -> Result<Stmt, ParseError> {
        self.advance();
        self.expect(TokenKind::LeftParen, "after 'while'")?;
        let condition = self.parse_expression()?;
        self.expect(TokenKind::RightParen, "after condition")?;
        let body = Box::new(self.parse_statement()?);
        Ok(Stmt::While { condition, body })
    }

    /// `exprStmt → expression ";"`
    fn parse_expression_statement(&mut self) -> Result<Stmt, ParseError> {
        let expr = self.parse_expression()?;
        self.expect(TokenKind::Semicolon, "after expression")?;
        Ok(Stmt::Expression(expr))
    }
}
