//! Driver-level failures that are not Lox diagnostics.

use std::io;

use crate::exit;

/// Errors raised by the CLI itself rather than by the program it runs.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("{0}")]
    Usage(String),
    #[error("could not read '{path}': {source}")]
    ReadFile {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
}

impl CliError {
    /// Exit status for this failure.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Usage(_) => exit::USAGE,
            CliError::ReadFile { .. } => exit::NO_INPUT,
            CliError::Io(_) => exit::IO_ERR,
        }
    }
}
