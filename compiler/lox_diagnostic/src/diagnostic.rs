//! The [`Diagnostic`] record every phase reports through.

use std::fmt;

use crate::{ErrorCode, Phase};

/// A located error report.
///
/// `location` is `None` for runtime errors and lexical errors, which point at
/// a line only; parse errors carry `at end` or `at '<lexeme>'`.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Diagnostic {
    pub code: ErrorCode,
    pub message: String,
    /// 1-based source line.
    pub line: u32,
    pub location: Option<String>,
}

impl Diagnostic {
    /// Create an error diagnostic with an empty message on line 0.
    #[cold]
    pub fn error(code: ErrorCode) -> Self {
        Diagnostic {
            code,
            message: String::new(),
            line: 0,
            location: None,
        }
    }

    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    #[must_use]
    pub fn at_line(mut self, line: u32) -> Self {
        self.line = line;
        self
    }

    #[must_use]
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        self.code.phase()
    }
}

/// Compact single-line form: `l3 error: at ';' expect expression`.
impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "l{} error: ", self.line)?;
        if let Some(location) = &self.location {
            write!(f, "{location} ")?;
        }
        f.write_str(&self.message)
    }
}
