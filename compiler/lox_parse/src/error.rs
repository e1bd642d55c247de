//! Parse error types.

use lox_diagnostic::{Diagnostic, ErrorCode};
use lox_ir::{Token, TokenKind};

/// A parse error anchored at the offending token.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub line: u32,
    /// `at end` or `at '<lexeme>'`.
    pub location: String,
}

/// What the parser expected, or why the construct is invalid.
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
pub enum ParseErrorKind {
    /// A required punctuation token was missing, e.g. `;` after a value.
    #[error("expect {expected} {after}")]
    ExpectedToken {
        expected: TokenKind,
        after: &'static str,
    },
    #[error("expect expression")]
    ExpectedExpression,
    #[error("expect variable name")]
    ExpectedIdentifier,
    /// Left side of `=` is not a bare variable.
    #[error("invalid assignment target")]
    InvalidAssignmentTarget,
}

impl ParseError {
    /// Build an error pointing at `token`.
    #[cold]
    pub fn at(kind: ParseErrorKind, token: &Token) -> Self {
        ParseError {
            kind,
            line: token.line,
            location: token.location(),
        }
    }

    pub fn message(&self) -> String {
        self.kind.to_string()
    }

    pub fn code(&self) -> ErrorCode {
        match self.kind {
            ParseErrorKind::ExpectedToken { .. } => ErrorCode::E1001,
            ParseErrorKind::ExpectedExpression => ErrorCode::E1002,
            ParseErrorKind::InvalidAssignmentTarget => ErrorCode::E1003,
            ParseErrorKind::ExpectedIdentifier => ErrorCode::E1004,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::error(self.code())
            .with_message(self.message())
            .at_line(self.line)
            .with_location(self.location.clone())
    }
}
