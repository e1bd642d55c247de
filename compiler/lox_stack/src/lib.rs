//! Stack growth for deep recursion.
//!
//! The parser descends once per nesting level of an expression or block, and
//! the evaluator walks the resulting tree the same way. A script with a few
//! thousand nested parentheses would overflow a default thread stack, so every
//! recursive entry point runs through [`ensure_sufficient_stack`].
//!
//! On native targets the stack is grown on demand with `stacker`. On wasm the
//! call is a passthrough.

/// Remaining stack below which a new segment is allocated.
const RED_ZONE: usize = 100 * 1024;

/// Size of each freshly allocated stack segment.
const SEGMENT_SIZE: usize = 1024 * 1024;

/// Run `f`, growing the stack first if fewer than [`RED_ZONE`] bytes remain.
///
/// ```text
/// fn evaluate(&mut self, expr: &Expr) -> EvalResult {
///     ensure_sufficient_stack(|| self.evaluate_inner(expr))
/// }
/// ```
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

/// Passthrough on wasm, which manages its own stack.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
