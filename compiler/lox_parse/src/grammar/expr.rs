//! Expression parsing.
//!
//! One method per precedence level, lowest first. Binary levels loop so
//! that operators associate to the left; assignment recurses so that it
//! associates to the right.

use lox_ir::{BinaryOp, Expr, ExprKind, LiteralValue, LogicalOp, TokenKind};
use lox_stack::ensure_sufficient_stack;

use crate::{ParseError, ParseErrorKind, Parser};

impl Parser<'_> {
    /// Parse an expression.
    ///
    /// Uses `ensure_sufficient_stack` to prevent stack overflow
    /// on deeply nested expressions.
    pub(crate) fn parse_expression(&mut self) -> Result<Expr, ParseError> {
        ensure_sufficient_stack(|| self.parse_assignment())
    }

    /// `assignment → IDENTIFIER "=" assignment | logic_or`
    ///
    /// The target is parsed as an ordinary expression first and checked
    /// afterwards, so `a = b = c` needs no extra lookahead.
    fn parse_assignment(&mut self) -> Result<Expr, ParseError> {
        let target = self.parse_logic(LogicalOp::Or)?;

        let Some(equals) = self.eat(TokenKind::Equal) else {
            return Ok(target);
        };
        let value = self.parse_expression()?;

        if let ExprKind::Variable(name) = &target.kind {
            return Ok(Expr::new(
                ExprKind::Assign {
                    name: name.clone(),
                    value: Box::new(value),
                },
                target.line,
            ));
        }

        // Not a desync: record the error and keep the target.
        self.errors.push(ParseError::at(
            ParseErrorKind::InvalidAssignmentTarget,
            equals,
        ));
        Ok(target)
    }

    /// `logic_or → logic_and ( "or" logic_and )*`
    /// `logic_and → equality ( "and" equality )*`
    fn parse_logic(&mut self, op: LogicalOp) -> Result<Expr, ParseError> {
        let operand = |parser: &mut Self| match op {
            LogicalOp::Or => parser.parse_logic(LogicalOp::And),
            LogicalOp::And => parser.parse_equality(),
        };

        let mut left = operand(self)?;
        while self.match_logical_op(op) {
            let line = self.advance().line;
            let right = operand(self)?;
            left = Expr::new(
                ExprKind::Logical {
                    op,
                    left: Box::new(left),
                    right: Box::new(right),
                },
                line,
            );
        }
        Ok(left)
    }

    /// `equality → comparison ( ( "==" | "!=" ) comparison )*`
    fn parse_equality(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_comparison()?;
        while let Some(op) = self.match_equality_op() {
            let line = self.advance().line;
            let right = self.parse_comparison()?;
            left = binary(op, left, right, line);
        }
        Ok(left)
    }

    /// `comparison → term ( ( "<" | "<=" | ">" | ">=" ) term )*`
    fn parse_comparison(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_term()?;
        while let Some(op) = self.match_comparison_op() {
            let line = self.advance().line;
            let right = self.parse_term()?;
            left = binary(op, left, right, line);
        }
        Ok(left)
    }

    /// `term → factor ( ( "+" | "-" ) factor )*`
    fn parse_term(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_factor()?;
        while let Some(op) = self.match_additive_op() {
            let line = self.advance().line;
            let right = self.parse_factor()?;
            left = binary(op, left, right, line);
        }
        Ok(left)
    }

    /// `factor → unary ( ( "*" | "/" ) unary )*`
    fn parse_factor(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_unary()?;
        while let Some(op) = self.match_multiplicative_op() {
            let line = self.advance().line;
            let right = self.parse_unary()?;
            left = binary(op, left, right, line);
        }
        Ok(left)
    }

    /// `unary → ( "!" | "-" ) unary | primary`
    fn parse_unary(&mut self) -> Result<Expr, ParseError> {
        ensure_sufficient_stack(|| {
            let Some(op) = self.match_unary_op() else {
                return self.parse_primary();
            };
            let line = self.advance().line;
            let operand = self.parse_unary()?;
            Ok(Expr::new(
                ExprKind::Unary {
                    op,
                    operand: Box::new(operand),
                },
                line,
            ))
        })
    }

    /// `primary → NUMBER | STRING | "true" | "false" | "nil" | IDENTIFIER | "(" expression ")"`
    fn parse_primary(&mut self) -> Result<Expr, ParseError> {
        let token = self.current();
        let kind = match token.kind {
            TokenKind::False => ExprKind::Literal(LiteralValue::Bool(false)),
            TokenKind::True => ExprKind::Literal(LiteralValue::Bool(true)),
            TokenKind::Nil => ExprKind::Literal(LiteralValue::Nil),
            TokenKind::Number | TokenKind::String => match &token.literal {
                Some(value) => ExprKind::Literal(value.clone()),
                None => {
                    return Err(ParseError::at(ParseErrorKind::ExpectedExpression, token));
                }
            },
            TokenKind::Identifier => ExprKind::Variable(token.lexeme.clone()),
            TokenKind::LeftParen => {
                self.advance();
                let inner = self.parse_expression()?;
                self.expect(TokenKind::RightParen, "after expression")?;
                return Ok(Expr::new(ExprKind::Grouping(Box::new(inner)), token.line));
            }
            _ => return Err(ParseError::at(ParseErrorKind::ExpectedExpression, token)),
        };
        self.advance();
        Ok(Expr::new(kind, token.line))
    }
}

fn binary(op: BinaryOp, left: Expr, right: Expr, line: u32) -> Expr {
    Expr::new(
        ExprKind::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        },
        line,
    )
}
