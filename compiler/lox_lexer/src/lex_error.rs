//! Lexer error types.

use lox_diagnostic::{Diagnostic, ErrorCode};

/// A lexical error and the line it was found on.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct LexError {
    pub kind: LexErrorKind,
    pub line: u32,
}

/// What kind of lexical error occurred.
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
pub enum LexErrorKind {
    /// Opening `"` with no closing quote before end of input.
    #[error("unterminated string")]
    UnterminatedString,
    /// A character that starts no token.
    #[error("unexpected character {0:?}")]
    UnexpectedCharacter(char),
}

impl LexError {
    #[cold]
    pub fn new(kind: LexErrorKind, line: u32) -> Self {
        LexError { kind, line }
    }

    pub fn code(&self) -> ErrorCode {
        match self.kind {
            LexErrorKind::UnterminatedString => ErrorCode::E0001,
            LexErrorKind::UnexpectedCharacter(_) => ErrorCode::E0002,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::error(self.code())
            .with_message(self.kind.to_string())
            .at_line(self.line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn messages() {
        assert_eq!(
            LexErrorKind::UnexpectedCharacter('@').to_string(),
            "unexpected character '@'"
        );
        assert_eq!(
            LexErrorKind::UnterminatedString.to_string(),
            "unterminated string"
        );
    }

    #[test]
    fn diagnostic_has_line_and_no_location() {
        let diag = LexError::new(LexErrorKind::UnterminatedString, 4).to_diagnostic();
        assert_eq!(diag.code, ErrorCode::E0001);
        assert_eq!(diag.line, 4);
        assert_eq!(diag.location, None);
        assert_eq!(diag.to_string(), "l4 error: unterminated string");
    }
}
