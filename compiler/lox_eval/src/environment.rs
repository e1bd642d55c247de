//! Environment for variable scoping in the interpreter.
//!
//! Uses a scope stack rather than linked parent pointers: a block's scope
//! lives exactly as long as the block runs, so "enclosing scope" is simply
//! the frame below it on the stack. The bottom frame is the global scope and
//! is never popped, which is what lets REPL inputs share variables.

use rustc_hash::FxHashMap;

use crate::Value;

/// Assignment targeted a name bound in no scope.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Unbound;

/// A single scope containing variable bindings.
#[derive(Clone, Debug, Default)]
struct Scope {
    bindings: FxHashMap<String, Value>,
}

/// Stack of scopes, innermost last.
#[derive(Clone, Debug)]
pub struct Environment {
    scopes: Vec<Scope>,
}

impl Environment {
    /// Create an environment holding only the global scope.
    pub fn new() -> Self {
        Environment {
            scopes: vec![Scope::default()],
        }
    }

    /// Number of scopes, global included.
    pub fn depth(&self) -> usize {
        self.scopes.len()
    }

    /// Push a new scope onto the stack.
    #[inline]
    pub fn push_scope(&mut self) {
        self.scopes.push(Scope::default());
    }

    /// Pop the current scope. The global scope is never popped.
    #[inline]
    pub fn pop_scope(&mut self) {
        if self.scopes.len() > 1 {
            self.scopes.pop();
        }
    }

    /// Bind `name` in the innermost scope, replacing any binding of the same
    /// name in that scope.
    #[inline]
    pub fn define(&mut self, name: impl Into<String>, value: Value) {
        if let Some(scope) = self.scopes.last_mut() {
            scope.bindings.insert(name.into(), value);
        }
    }

    /// Look up a variable, innermost scope first.
    #[inline]
    pub fn lookup(&self, name: &str) -> Option<Value> {
        self.scopes
            .iter()
            .rev()
            .find_map(|scope| scope.bindings.get(name))
            .cloned()
    }

    /// Overwrite the nearest existing binding of `name`.
    #[inline]
    pub fn assign(&mut self, name: &str, value: Value) -> Result<(), Unbound> {
        let slot = self
            .scopes
            .iter_mut()
            .rev()
            .find_map(|scope| scope.bindings.get_mut(name))
            .ok_or(Unbound)?;
        *slot = value;
        Ok(())
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests;
