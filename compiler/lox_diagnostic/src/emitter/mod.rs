//! Diagnostic Emitters
//!
//! The sink side of diagnostics. The interpreter core only produces
//! [`Diagnostic`] values; an emitter decides how they are presented.

mod terminal;

pub use terminal::{ColorMode, TerminalEmitter};

use crate::Diagnostic;

/// Trait for presenting diagnostics.
pub trait DiagnosticEmitter {
    /// Emit a single diagnostic.
    fn emit(&mut self, diagnostic: &Diagnostic);

    /// Emit multiple diagnostics.
    fn emit_all(&mut self, diagnostics: &[Diagnostic]) {
        for diag in diagnostics {
            self.emit(diag);
        }
    }

    /// Flush any buffered output.
    fn flush(&mut self);

    /// Emit a closing summary after a run that stopped on static errors.
    fn emit_summary(&mut self, error_count: usize);
}
