//! Tree-walking interpreter for Lox.
//!
//! # Architecture
//!
//! Statements are executed in order by [`Interpreter::interpret`]; the first
//! runtime error aborts the run and is returned to the caller. Expression
//! evaluation is split out by concern:
//!
//! - `expr` - literals, variables, assignment, operators, short-circuit logic
//! - `stmt` - print, declarations, blocks, `if`, `while`
//! - `scope_guard` - RAII scope push/pop around blocks
//!
//! The environment outlives a single call to `interpret`, so the REPL can
//! feed one line at a time to the same interpreter and keep its globals.

mod builder;
mod expr;
mod scope_guard;
mod stmt;

pub use builder::InterpreterBuilder;
pub use scope_guard::ScopedInterpreter;

use lox_ir::Stmt;

use crate::errors::EvalError;
use crate::print_handler::SharedPrintHandler;
use crate::Environment;

/// Evaluates statements against a persistent environment.
pub struct Interpreter {
    pub(crate) env: Environment,
    pub(crate) print_handler: SharedPrintHandler,
}

impl Interpreter {
    /// Interpreter with an empty global scope that prints to stdout.
    pub fn new() -> Self {
        InterpreterBuilder::new().build()
    }

    /// Execute `statements` in order, stopping at the first runtime error.
    ///
    /// Output of statements that ran before the error is kept, and so are
    /// their effects on global variables.
    #[tracing::instrument(level = "debug", skip_all, fields(statements = statements.len()))]
    pub fn interpret(&mut self, statements: &[Stmt]) -> Result<(), EvalError> {
        for stmt in statements {
            self.execute(stmt)?;
        }
        Ok(())
    }

    pub fn env(&self) -> &Environment {
        &self.env
    }

    pub fn env_mut(&mut self) -> &mut Environment {
        &mut self.env
    }

    pub fn print_handler(&self) -> &SharedPrintHandler {
        &self.print_handler
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}
