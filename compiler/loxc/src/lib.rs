//! Lox driver: ties the lexer, parser and evaluator into one pipeline and
//! hosts the `lox` command-line interface.
//!
//! [`Session`] is the reusable core: it owns an interpreter and a diagnostic
//! emitter, and classifies each run as a success, a static (lexical or parse)
//! failure, or a runtime failure. The `commands` module builds file, REPL and
//! debug-dump commands on top of it.

pub mod commands;
mod error;
mod options;
mod session;
mod tracing_setup;

pub use error::CliError;
pub use options::{parse_args, CliOptions, Command};
pub use session::{RunOutcome, Session};
pub use tracing_setup::init_tracing;

/// Process exit statuses, following the BSD `sysexits` convention.
pub mod exit {
    pub const SUCCESS: i32 = 0;
    /// Bad command-line usage.
    pub const USAGE: i32 = 64;
    /// Lexical or parse errors in the input.
    pub const DATA_ERR: i32 = 65;
    /// Input file missing or unreadable.
    pub const NO_INPUT: i32 = 66;
    /// Runtime error while executing.
    pub const SOFTWARE: i32 = 70;
    /// Failure reading or writing the terminal.
    pub const IO_ERR: i32 = 74;
}
