//! Unary operator implementations for the evaluator.

use lox_ir::UnaryOp;

use crate::{EvalErrorKind, Value};

/// Evaluate a unary operation using direct pattern matching.
pub fn evaluate_unary(value: &Value, op: UnaryOp) -> Result<Value, EvalErrorKind> {
    match (value, op) {
        (Value::Number(n), UnaryOp::Neg) => Ok(Value::Number(-n)),
        (_, UnaryOp::Neg) => Err(EvalErrorKind::OperandNotNumber),
        (_, UnaryOp::Not) => Ok(Value::Bool(!value.is_truthy())),
    }
}
