//! Interactive prompt.

use std::io::{self, BufRead, Write};

use lox_diagnostic::{ColorMode, DiagnosticEmitter};
use lox_eval::Interpreter;
use tracing::debug;

use super::stderr_emitter;
use crate::{CliError, Session};

pub const PROMPT: &str = "lox > ";

/// Read lines from `input` and run each one on `session` until end of input.
///
/// Every line is a complete program. A failing line is reported and
/// forgotten; globals defined by earlier lines stay visible.
pub fn repl<R, W, E>(mut input: R, mut output: W, session: &mut Session<E>) -> io::Result<()>
where
    R: BufRead,
    W: Write,
    E: DiagnosticEmitter,
{
    let mut line = String::new();
    loop {
        write!(output, "{PROMPT}")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            // End the prompt line so the shell starts clean.
            writeln!(output)?;
            return Ok(());
        }

        let outcome = session.run(&line);
        debug!(?outcome, "repl line");
    }
}

/// REPL on stdin/stdout with stderr diagnostics.
pub fn run_prompt(color: ColorMode) -> Result<(), CliError> {
    let mut session = Session::new(Interpreter::new(), stderr_emitter(color, "<repl>"));
    let stdin = io::stdin();
    repl(stdin.lock(), io::stdout(), &mut session)?;
    Ok(())
}
