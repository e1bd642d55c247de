//! Diagnostic system for the Lox pipeline.
//!
//! Every phase reports problems as a [`Diagnostic`]: an [`ErrorCode`] naming
//! the phase and kind, the source line, an optional location (`at end`,
//! `at 'x'`) and a message. Presentation belongs to a [`DiagnosticEmitter`]:
//! the terminal emitter for the CLI, or a [`DiagnosticBag`] that collects
//! diagnostics for tests and tooling.

mod bag;
mod diagnostic;
pub mod emitter;
mod error_code;

pub use bag::DiagnosticBag;
pub use diagnostic::Diagnostic;
pub use emitter::{ColorMode, DiagnosticEmitter, TerminalEmitter};
pub use error_code::{ErrorCode, Phase};
