//! Statement execution.

use lox_ir::Stmt;
use lox_stack::ensure_sufficient_stack;
use tracing::trace;

use super::Interpreter;
use crate::errors::EvalError;
use crate::Value;

impl Interpreter {
    /// Execute one statement.
    pub fn execute(&mut self, stmt: &Stmt) -> Result<(), EvalError> {
        ensure_sufficient_stack(|| self.execute_inner(stmt))
    }

    fn execute_inner(&mut self, stmt: &Stmt) -> Result<(), EvalError> {
        match stmt {
            Stmt::Expression(expr) => {
                self.evaluate(expr)?;
            }
            Stmt::Print(expr) => {
                let value = self.evaluate(expr)?;
                self.print_handler.println(&value.to_string());
            }
            Stmt::Var { name, initializer } => {
                let value = match initializer {
                    Some(init) => self.evaluate(init)?,
                    None => Value::Nil,
                };
                trace!(name = %name, "define");
                self.env.define(name.as_str(), value);
            }
            Stmt::Block(statements) => self.execute_block(statements)?,
            Stmt::If {
                condition,
                then_branch,
                else_branch,
            } => {
                if self.evaluate(condition)?.is_truthy() {
                    self.execute(then_branch)?;
                } else if let Some(else_branch) = else_branch {
                    self.execute(else_branch)?;
                }
            }
            Stmt::While { condition, body } => {
                while self.evaluate(condition)?.is_truthy() {
                    self.execute(body)?;
                }
            }
        }
        Ok(())
    }

    /// Run `statements` in a fresh scope. The scope is popped even when a
    /// statement fails.
    pub fn execute_block(&mut self, statements: &[Stmt]) -> Result<(), EvalError> {
        self.with_env_scope(|scoped| statements.iter().try_for_each(|stmt| scoped.execute(stmt)))
    }
}
