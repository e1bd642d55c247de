//! RAII scope guard for block execution.
//!
//! [`ScopedInterpreter`] pushes a scope on creation and pops it on drop, so
//! the enclosing environment is restored on every exit path: normal
//! completion, a runtime error propagated with `?`, or a panic.

use std::ops::{Deref, DerefMut};

use super::Interpreter;

/// Guard that owns one pushed scope for its lifetime.
///
/// Derefs to the interpreter, so code inside the scope calls interpreter
/// methods on the guard directly.
pub struct ScopedInterpreter<'guard> {
    interpreter: &'guard mut Interpreter,
}

impl Drop for ScopedInterpreter<'_> {
    fn drop(&mut self) {
        self.interpreter.env.pop_scope();
    }
}

impl Deref for ScopedInterpreter<'_> {
    type Target = Interpreter;

    fn deref(&self) -> &Self::Target {
        self.interpreter
    }
}

impl DerefMut for ScopedInterpreter<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.interpreter
    }
}

impl Interpreter {
    /// Push a scope and return a guard that pops it when dropped.
    pub fn scoped(&mut self) -> ScopedInterpreter<'_> {
        self.env.push_scope();
        ScopedInterpreter { interpreter: self }
    }

    /// Run `f` inside a fresh scope.
    pub fn with_env_scope<T, F>(&mut self, f: F) -> T
    where
        F: FnOnce(&mut ScopedInterpreter<'_>) -> T,
    {
        let mut scoped = self.scoped();
        f(&mut scoped)
    }
}
