//! Binary operator implementations for the evaluator.
//!
//! Direct enum dispatch over the closed value set. Errors come back without
//! a line; the caller attaches the operator's line.

use lox_ir::BinaryOp;

use crate::{EvalErrorKind, Value};

/// Evaluate a binary operation on two already-evaluated operands.
///
/// `==` and `!=` accept any pair of values. `+` adds numbers or, if either
/// side is a string, concatenates the display forms. Every other operator
/// requires two numbers. Division follows IEEE-754, so `1 / 0` is `inf`.
pub fn evaluate_binary(left: &Value, right: &Value, op: BinaryOp) -> Result<Value, EvalErrorKind> {
    match op {
        BinaryOp::Eq => Ok(Value::Bool(left == right)),
        BinaryOp::NotEq => Ok(Value::Bool(left != right)),
        BinaryOp::Add => eval_add(left, right),
        BinaryOp::Sub => numbers(left, right).map(|(a, b)| Value::Number(a - b)),
        BinaryOp::Mul => numbers(left, right).map(|(a, b)| Value::Number(a * b)),
        BinaryOp::Div => numbers(left, right).map(|(a, b)| Value::Number(a / b)),
        BinaryOp::Lt => numbers(left, right).map(|(a, b)| Value::Bool(a < b)),
        BinaryOp::LtEq => numbers(left, right).map(|(a, b)| Value::Bool(a <= b)),
        BinaryOp::Gt => numbers(left, right).map(|(a, b)| Value::Bool(a > b)),
        BinaryOp::GtEq => numbers(left, right).map(|(a, b)| Value::Bool(a >= b)),
    }
}

fn eval_add(left: &Value, right: &Value) -> Result<Value, EvalErrorKind> {
    match (left, right) {
        (Value::Number(a), Value::Number(b)) => Ok(Value::Number(a + b)),
        (Value::Str(_), _) | (_, Value::Str(_)) => Ok(Value::string(format!("{left}{right}"))),
        _ => Err(EvalErrorKind::OperandsNotNumbersOrStrings),
    }
}

#[inline]
fn numbers(left: &Value, right: &Value) -> Result<(f64, f64), EvalErrorKind> {
    match (left, right) {
        (Value::Number(a), Value::Number(b)) => Ok((*a, *b)),
        _ => Err(EvalErrorKind::OperandsNotNumbers),
    }
}
