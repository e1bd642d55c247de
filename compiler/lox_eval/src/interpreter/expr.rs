//! Expression evaluation.

use lox_ir::{Expr, ExprKind, LogicalOp};
use lox_stack::ensure_sufficient_stack;

use super::Interpreter;
use crate::errors::{EvalErrorKind, EvalResult};
use crate::operators::evaluate_binary;
use crate::unary_operators::evaluate_unary;
use crate::Value;

impl Interpreter {
    /// Evaluate an expression to a value.
    pub fn evaluate(&mut self, expr: &Expr) -> EvalResult {
        ensure_sufficient_stack(|| self.evaluate_inner(expr))
    }

    fn evaluate_inner(&mut self, expr: &Expr) -> EvalResult {
        match &expr.kind {
            ExprKind::Literal(literal) => Ok(Value::from(literal)),
            ExprKind::Grouping(inner) => self.evaluate(inner),
            ExprKind::Unary { op, operand } => {
                let value = self.evaluate(operand)?;
                evaluate_unary(&value, *op).map_err(|kind| kind.at(expr.line))
            }
            ExprKind::Binary { op, left, right } => {
                // Left before right; an error in the left operand skips the right.
                let left = self.evaluate(left)?;
                let right = self.evaluate(right)?;
                evaluate_binary(&left, &right, *op).map_err(|kind| kind.at(expr.line))
            }
            ExprKind::Logical { op, left, right } => self.eval_logical(*op, left, right),
            ExprKind::Variable(name) => self
                .env
                .lookup(name)
                .ok_or_else(|| EvalErrorKind::UndefinedVariable(name.clone()).at(expr.line)),
            ExprKind::Assign { name, value } => {
                let value = self.evaluate(value)?;
                self.env
                    .assign(name, value.clone())
                    .map_err(|_| EvalErrorKind::UndefinedVariable(name.clone()).at(expr.line))?;
                Ok(value)
            }
        }
    }

    /// `or` / `and`: yields the deciding operand itself, not a bool.
    fn eval_logical(&mut self, op: LogicalOp, left: &Expr, right: &Expr) -> EvalResult {
        let left = self.evaluate(left)?;
        let short_circuits = match op {
            LogicalOp::Or => left.is_truthy(),
            LogicalOp::And => !left.is_truthy(),
        };
        if short_circuits {
            Ok(left)
        } else {
            self.evaluate(right)
        }
    }
}
