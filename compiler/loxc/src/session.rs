//! The source-to-output pipeline for one interpreter instance.

use lox_diagnostic::DiagnosticEmitter;
use lox_eval::Interpreter;
use tracing::debug;

use crate::exit;

/// How a single run ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunOutcome {
    Success,
    /// Lexical or parse errors; nothing was executed.
    StaticError { errors: usize },
    /// Execution stopped at a runtime error.
    RuntimeError,
}

impl RunOutcome {
    pub fn exit_code(self) -> i32 {
        match self {
            RunOutcome::Success => exit::SUCCESS,
            RunOutcome::StaticError { .. } => exit::DATA_ERR,
            RunOutcome::RuntimeError => exit::SOFTWARE,
        }
    }

    pub fn is_success(self) -> bool {
        self == RunOutcome::Success
    }
}

/// An interpreter paired with the sink its diagnostics go to.
///
/// Globals persist across calls to [`Session::run`]; each run's error state
/// does not.
pub struct Session<E: DiagnosticEmitter> {
    interpreter: Interpreter,
    emitter: E,
}

impl<E: DiagnosticEmitter> Session<E> {
    pub fn new(interpreter: Interpreter, emitter: E) -> Self {
        Session {
            interpreter,
            emitter,
        }
    }

    /// Lex, parse and, when both were clean, execute `source`.
    ///
    /// Lexical errors do not stop parsing, so one run reports every static
    /// error it can find. Any static error skips execution entirely.
    #[tracing::instrument(level = "debug", skip_all, fields(bytes = source.len()))]
    pub fn run(&mut self, source: &str) -> RunOutcome {
        let lexed = lox_lexer::lex(source);
        let parsed = lox_parse::parse(&lexed.tokens);

        let errors = lexed.errors.len() + parsed.errors.len();
        if errors > 0 {
            debug!(errors, "static errors, not executing");
            for err in &lexed.errors {
                self.emitter.emit(&err.to_diagnostic());
            }
            for err in &parsed.errors {
                self.emitter.emit(&err.to_diagnostic());
            }
            self.emitter.flush();
            return RunOutcome::StaticError { errors };
        }

        match self.interpreter.interpret(&parsed.statements) {
            Ok(()) => RunOutcome::Success,
            Err(err) => {
                self.emitter.emit(&err.to_diagnostic());
                self.emitter.flush();
                RunOutcome::RuntimeError
            }
        }
    }

    pub fn interpreter(&self) -> &Interpreter {
        &self.interpreter
    }

    pub fn emitter(&self) -> &E {
        &self.emitter
    }

    pub fn emitter_mut(&mut self) -> &mut E {
        &mut self.emitter
    }

    pub fn into_emitter(self) -> E {
        self.emitter
    }
}
