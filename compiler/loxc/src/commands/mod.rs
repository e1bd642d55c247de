//! Command handlers for the `lox` CLI.
//!
//! Each submodule implements one command. Shared helpers such as
//! `read_file` live here in the module root.

mod debug;
mod repl;
mod run;

pub use debug::{lex_file, parse_file, write_statements, write_tokens};
pub use repl::{repl, run_prompt, PROMPT};
pub use run::run_file;

use std::io::IsTerminal;

use lox_diagnostic::{ColorMode, TerminalEmitter};

use crate::CliError;

/// Read a source file.
pub(crate) fn read_file(path: &str) -> Result<String, CliError> {
    std::fs::read_to_string(path).map_err(|source| CliError::ReadFile {
        path: path.to_string(),
        source,
    })
}

/// Diagnostic emitter on stderr, labelled with `origin`.
pub(crate) fn stderr_emitter(color: ColorMode, origin: &str) -> TerminalEmitter<std::io::Stderr> {
    let is_tty = std::io::stderr().is_terminal();
    TerminalEmitter::stderr(color, is_tty).with_origin(origin)
}
