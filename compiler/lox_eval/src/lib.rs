//! Lox Eval - tree-walking evaluator for Lox programs.
//!
//! # Architecture
//!
//! The evaluator uses:
//! - `Environment`: variable scoping with a scope stack
//! - `evaluate_binary`: direct enum-based binary operator dispatch
//! - `evaluate_unary`: direct enum-based unary operator dispatch
//! - `PrintHandlerImpl`: pluggable sink for `print` output
//!
//! Runtime errors carry the line of the operator or variable that raised
//! them and convert to a [`lox_diagnostic::Diagnostic`] for reporting.

mod environment;
pub mod errors;
pub mod interpreter;
mod operators;
mod print_handler;
mod unary_operators;
mod value;

pub use environment::{Environment, Unbound};
pub use errors::{EvalError, EvalErrorKind, EvalResult};
pub use interpreter::{Interpreter, InterpreterBuilder, ScopedInterpreter};
pub use operators::evaluate_binary;
pub use print_handler::{
    buffer_handler, silent_handler, stdout_handler, BufferPrintHandler, PrintHandlerImpl,
    SharedPrintHandler, StdoutPrintHandler,
};
pub use unary_operators::evaluate_unary;
pub use value::Value;

#[cfg(test)]
mod tests;
