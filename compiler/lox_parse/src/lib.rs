//! Recursive descent parser for Lox.
//!
//! [`parse`] turns the lexer's token slice into a statement forest. The
//! grammar, from lowest to highest precedence:
//!
//! ```text
//! program    → statement* EOF
//! statement  → exprStmt | printStmt | varDecl | block | ifStmt | whileStmt
//! expression → assignment
//! assignment → IDENTIFIER "=" assignment | logic_or
//! logic_or   → logic_and ( "or" logic_and )*
//! logic_and  → equality ( "and" equality )*
//! equality   → comparison ( ( "==" | "!=" ) comparison )*
//! comparison → term ( ( "<" | "<=" | ">" | ">=" ) term )*
//! term       → factor ( ( "+" | "-" ) factor )*
//! factor     → unary ( ( "*" | "/" ) unary )*
//! unary      → ( "!" | "-" ) unary | primary
//! primary    → NUMBER | STRING | "true" | "false" | "nil" | IDENTIFIER | "(" expression ")"
//! ```
//!
//! A malformed statement is recorded in [`ParseOutput::errors`] and the
//! parser resynchronizes at the next statement boundary.

mod cursor;
mod error;
mod grammar;
mod recovery;

pub use cursor::Cursor;
pub use error::{ParseError, ParseErrorKind};
pub use recovery::{synchronize, TokenSet, STMT_START};

use lox_ir::{Stmt, Token, TokenKind};
use tracing::debug;

/// Statements and parse errors from one parse.
#[derive(Clone, Debug, Default)]
pub struct ParseOutput {
    pub statements: Vec<Stmt>,
    pub errors: Vec<ParseError>,
}

impl ParseOutput {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Parse a token slice produced by `lox_lexer::lex`.
pub fn parse(tokens: &[Token]) -> ParseOutput {
    let output = Parser::new(tokens).parse_program();
    debug!(
        statements = output.statements.len(),
        errors = output.errors.len(),
        "parsed program"
    );
    output
}

/// Parser state.
pub struct Parser<'a> {
    cursor: Cursor<'a>,
    errors: Vec<ParseError>,
}

impl<'a> Parser<'a> {
    /// Create a new parser.
    pub fn new(tokens: &'a [Token]) -> Self {
        Parser {
            cursor: Cursor::new(tokens),
            errors: Vec::new(),
        }
    }

    // Cursor delegation methods

    #[inline]
    fn current(&self) -> &'a Token {
        self.cursor.current()
    }

    #[inline]
    fn current_kind(&self) -> TokenKind {
        self.cursor.current_kind()
    }

    #[inline]
    fn is_at_end(&self) -> bool {
        self.cursor.is_at_end()
    }

    #[inline]
    fn check(&self, kind: TokenKind) -> bool {
        self.cursor.check(kind)
    }

    #[inline]
    fn advance(&mut self) -> &'a Token {
        self.cursor.advance()
    }

    /// Consume the current token if it has the given kind.
    fn eat(&mut self, kind: TokenKind) -> Option<&'a Token> {
        if self.check(kind) {
            Some(self.advance())
        } else {
            None
        }
    }

    /// Consume a required token or fail with `expect <kind> <after>`.
    fn expect(&mut self, kind: TokenKind, after: &'static str) -> Result<&'a Token, ParseError> {
        match self.eat(kind) {
            Some(token) => Ok(token),
            None => Err(ParseError::at(
                ParseErrorKind::ExpectedToken {
                    expected: kind,
                    after,
                },
                self.current(),
            )),
        }
    }

    /// Record `error` and skip to the next statement boundary.
    fn recover(&mut self, error: ParseError) {
        debug!(line = error.line, message = %error.kind, "parse error");
        self.errors.push(error);
        synchronize(&mut self.cursor);
    }
}

#[cfg(test)]
mod tests;
