//! Iterative teardown.
//!
//! Drop glue recurses once per nesting level, so freeing a tree parsed from
//! deeply nested source could overflow the stack. `Expr` and `Stmt` instead
//! detach their children onto a worklist and free the tree one node at a
//! time. Children are swapped for leaves (`Nil`, `Break`) before the parent
//! is released, so the parent's own glue never reaches them.

use std::mem;

use super::assignable::{Assignable, AssignableKind};
use super::expr::{Expr, ExprKind};
use super::stmt::{Block, Stmt, StmtKind};

enum Detached {
    Expr(ExprKind),
    Stmt(StmtKind),
}

impl Drop for Expr {
    fn drop(&mut self) {
        if is_leaf_expr(&self.kind) {
            return;
        }
        let kind = mem::replace(&mut self.kind, ExprKind::Nil);
        release(Detached::Expr(kind));
    }
}

impl Drop for Stmt {
    fn drop(&mut self) {
        if matches!(self.kind, StmtKind::Break) {
            return;
        }
        let kind = mem::replace(&mut self.kind, StmtKind::Break);
        release(Detached::Stmt(kind));
    }
}

fn is_leaf_expr(kind: &ExprKind) -> bool {
    matches!(
        kind,
        ExprKind::Nil
            | ExprKind::Bool(_)
            | ExprKind::Number(_)
            | ExprKind::String(_)
            | ExprKind::Varargs { .. }
    )
}

fn release(root: Detached) {
    let mut pending = vec![root];
    while let Some(node) = pending.pop() {
        let mut worklist = Worklist(&mut pending);
        match node {
            Detached::Expr(mut kind) => worklist.expr_children(&mut kind),
            Detached::Stmt(mut kind) => worklist.stmt_children(&mut kind),
        }
        // `kind` now holds only leaves and is freed here.
    }
}

struct Worklist<'a>(&'a mut Vec<Detached>);

impl Worklist<'_> {
    fn expr(&mut self, expr: &mut Expr) {
        if !is_leaf_expr(&expr.kind) {
            let kind = mem::replace(&mut expr.kind, ExprKind::Nil);
            self.0.push(Detached::Expr(kind));
        }
    }

    fn exprs(&mut self, exprs: &mut [Expr]) {
        for expr in exprs {
            self.expr(expr);
        }
    }

    fn block(&mut self, block: &mut Block) {
        for stmt in &mut block.statements {
            if !matches!(stmt.kind, StmtKind::Break) {
                let kind = mem::replace(&mut stmt.kind, StmtKind::Break);
                self.0.push(Detached::Stmt(kind));
            }
        }
    }

    fn assignable(&mut self, target: &mut Assignable) {
        match &mut target.kind {
            AssignableKind::Variable(var) => {
                if let Some(prefix) = &mut var.prefix {
                    self.expr(prefix);
                }
            }
            AssignableKind::TableAccess(access) => {
                self.expr(&mut access.target);
                self.expr(&mut access.index);
            }
        }
    }

    fn expr_children(&mut self, kind: &mut ExprKind) {
        match kind {
            ExprKind::Nil
            | ExprKind::Bool(_)
            | ExprKind::Number(_)
            | ExprKind::String(_)
            | ExprKind::Varargs { .. } => {}
            ExprKind::Variable(var) => {
                if let Some(prefix) = &mut var.prefix {
                    self.expr(prefix);
                }
            }
            ExprKind::TableAccess(access) => {
                self.expr(&mut access.target);
                self.expr(&mut access.index);
            }
            ExprKind::Call(call) => {
                self.expr(&mut call.callee);
                self.exprs(&mut call.args);
            }
            ExprKind::Function(function) => self.block(&mut function.body),
            ExprKind::Binary { left, right, .. } => {
                self.expr(left);
                self.expr(right);
            }
            ExprKind::Unary { operand, .. } => self.expr(operand),
            ExprKind::Table(table) => {
                for entry in &mut table.entries {
                    if let Some(key) = &mut entry.key {
                        self.expr(key);
                    }
                    self.expr(&mut entry.value);
                }
            }
        }
    }

    fn stmt_children(&mut self, kind: &mut StmtKind) {
        match kind {
            StmtKind::Assignment(assignment) => {
                for target in &mut assignment.targets {
                    self.assignable(target);
                }
                self.exprs(&mut assignment.values);
            }
            StmtKind::Local(local) => self.exprs(&mut local.values),
            StmtKind::Call(call) => {
                self.expr(&mut call.callee);
                self.exprs(&mut call.args);
            }
            StmtKind::Return(ret) => self.exprs(&mut ret.values),
            StmtKind::Break => {}
            StmtKind::Block(block) => self.block(block),
            StmtKind::While(while_stat) => {
                self.expr(&mut while_stat.condition);
                self.block(&mut while_stat.body);
            }
            StmtKind::Repeat(repeat) => {
                self.block(&mut repeat.body);
                self.expr(&mut repeat.condition);
            }
            StmtKind::NumericFor(numeric) => {
                self.expr(&mut numeric.init);
                self.expr(&mut numeric.limit);
                if let Some(step) = &mut numeric.step {
                    self.expr(step);
                }
                self.block(&mut numeric.body);
            }
            StmtKind::GenericFor(generic) => {
                self.exprs(&mut generic.iter_exprs);
                self.block(&mut generic.body);
            }
            StmtKind::If(if_stat) => {
                self.expr(&mut if_stat.condition);
                self.block(&mut if_stat.then_block);
                for else_if in &mut if_stat.else_ifs {
                    self.expr(&mut else_if.condition);
                    self.block(&mut else_if.block);
                }
                if let Some(else_block) = &mut if_stat.else_block {
                    self.block(else_block);
                }
            }
        }
    }
}
