//! Statement nodes.

use std::mem;

use super::Expr;

#[derive(Clone, Debug, PartialEq)]
pub enum Stmt {
    /// `expr;`
    Expression(Expr),
    /// `print expr;`
    Print(Expr),
    /// `var name (= initializer)?;`
    Var {
        name: String,
        initializer: Option<Expr>,
    },
    /// `{ statements }`
    Block(Vec<Stmt>),
    /// `if (condition) then_branch (else else_branch)?`
    If {
        condition: Expr,
        then_branch: Box<Stmt>,
        else_branch: Option<Box<Stmt>>,
    },
    /// `while (condition) body`
    While { condition: Expr, body: Box<Stmt> },
}

/// Frees nested statements with an explicit work-list. Expressions inside
/// are already freed iteratively by their own `Drop`.
impl Drop for Stmt {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        self.detach_children(&mut pending);
        while let Some(mut child) = pending.pop() {
            child.detach_children(&mut pending);
        }
    }
}

impl Stmt {
    fn detach_children(&mut self, pending: &mut Vec<Stmt>) {
        match self {
            Stmt::Block(statements) => pending.append(statements),
            Stmt::If {
                then_branch,
                else_branch,
                ..
            } => {
                pending.push(mem::replace(&mut **then_branch, Stmt::Block(Vec::new())));
                if let Some(else_branch) = else_branch.take() {
                    pending.push(*else_branch);
                }
            }
            Stmt::While { body, .. } => {
                pending.push(mem::replace(&mut **body, Stmt::Block(Vec::new())));
            }
            Stmt::Expression(_) | Stmt::Print(_) | Stmt::Var { .. } => {}
        }
    }
}
