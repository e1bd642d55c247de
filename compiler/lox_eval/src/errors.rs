//! Runtime error types for the evaluator.

use lox_diagnostic::{Diagnostic, ErrorCode};

use crate::Value;

/// Result of evaluating an expression.
pub type EvalResult = Result<Value, EvalError>;

/// A runtime error and the line of the operator or name that raised it.
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
#[error("{kind}")]
pub struct EvalError {
    pub kind: EvalErrorKind,
    pub line: u32,
}

/// What went wrong at runtime.
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
pub enum EvalErrorKind {
    /// Unary `-` on a non-number.
    #[error("operand must be a number")]
    OperandNotNumber,
    /// Arithmetic or comparison on non-numbers.
    #[error("operands must be numbers")]
    OperandsNotNumbers,
    /// `+` where neither both operands are numbers nor either is a string.
    #[error("operands must be numbers or strings")]
    OperandsNotNumbersOrStrings,
    /// Read of or assignment to a name bound in no scope.
    #[error("undefined variable \"{0}\"")]
    UndefinedVariable(String),
}

impl EvalErrorKind {
    /// Attach the source line.
    #[cold]
    pub fn at(self, line: u32) -> EvalError {
        EvalError { kind: self, line }
    }
}

impl EvalError {
    pub fn code(&self) -> ErrorCode {
        match self.kind {
            EvalErrorKind::OperandNotNumber => ErrorCode::E2001,
            EvalErrorKind::OperandsNotNumbers => ErrorCode::E2002,
            EvalErrorKind::OperandsNotNumbersOrStrings => ErrorCode::E2003,
            EvalErrorKind::UndefinedVariable(_) => ErrorCode::E2004,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::error(self.code())
            .with_message(self.kind.to_string())
            .at_line(self.line)
    }
}
