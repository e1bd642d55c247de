use lox_diagnostic::{ColorMode, DiagnosticEmitter};
use lox_eval::Interpreter;

use super::{read_file, stderr_emitter};
use crate::{CliError, RunOutcome, Session};

/// Run a Lox script, reporting diagnostics on stderr.
pub fn run_file(path: &str, color: ColorMode) -> Result<RunOutcome, CliError> {
    let source = read_file(path)?;
    let mut session = Session::new(Interpreter::new(), stderr_emitter(color, path));

    let outcome = session.run(&source);
    if let RunOutcome::StaticError { errors } = outcome {
        session.emitter_mut().emit_summary(errors);
        session.emitter_mut().flush();
    }
    Ok(outcome)
}
