//! Syntax Tree Visitor
//!
//! Provides generic read-only traversal of the tree.
//!
//! # Design
//!
//! A single `Visitor` trait is provided for traversal. The visitor can
//! mutate its own state during traversal, but the tree remains immutable.
//!
//! Default implementations call `walk_*` functions that traverse children.
//! Override `visit_*` methods to add custom behavior at specific nodes.
//!
//! # Example
//!
//! ```
//! use moon_ir::visitor::{walk_expr, Visitor};
//! use moon_ir::{Expr, ExprKind};
//!
//! struct CountLiterals {
//!     count: usize,
//! }
//!
//! impl<'ast> Visitor<'ast> for CountLiterals {
//!     fn visit_expr(&mut self, expr: &'ast Expr) {
//!         if let ExprKind::Number(_) | ExprKind::String(_) | ExprKind::Bool(_) = expr.kind {
//!             self.count += 1;
//!         }
//!         walk_expr(self, expr);
//!     }
//! }
//! ```

use moon_stack::ensure_sufficient_stack;

use super::ast::{
    Argument, Assignable, AssignableKind, Block, ElseIf, Expr, ExprKind, FunctionCall,
    FunctionDefinition, Stmt, StmtKind, TableEntry,
};

// Visitor Trait

/// Syntax tree visitor trait.
///
/// Override `visit_*` methods to add custom behavior at specific nodes.
/// Call `walk_*` functions to continue traversal into children.
pub trait Visitor<'ast> {
    /// Visit a block.
    fn visit_block(&mut self, block: &'ast Block) {
        walk_block(self, block);
    }

    /// Visit a statement.
    fn visit_stmt(&mut self, stmt: &'ast Stmt) {
        walk_stmt(self, stmt);
    }

    /// Visit an expression.
    fn visit_expr(&mut self, expr: &'ast Expr) {
        walk_expr(self, expr);
    }

    /// Visit an assignment target.
    fn visit_assignable(&mut self, target: &'ast Assignable) {
        walk_assignable(self, target);
    }

    /// Visit a call, in either expression or statement position.
    fn visit_call(&mut self, call: &'ast FunctionCall) {
        walk_call(self, call);
    }

    /// Visit a function literal.
    fn visit_function(&mut self, function: &'ast FunctionDefinition) {
        walk_function(self, function);
    }

    /// Visit a formal parameter.
    fn visit_argument(&mut self, argument: &'ast Argument) {
        // Parameters have no children
        let _ = argument;
    }

    /// Visit a table constructor entry.
    fn visit_table_entry(&mut self, entry: &'ast TableEntry) {
        if let Some(key) = &entry.key {
            self.visit_expr(key);
        }
        self.visit_expr(&entry.value);
    }

    /// Visit an `elseif` link.
    fn visit_else_if(&mut self, else_if: &'ast ElseIf) {
        self.visit_expr(&else_if.condition);
        self.visit_block(&else_if.block);
    }
}

// Walk Functions
//
// All walk functions traverse children depth-first in source order: for
// `repeat` the body precedes the condition, for assignments the targets
// precede the values.

/// Walk a block's statements in order.
pub fn walk_block<'ast, V: Visitor<'ast> + ?Sized>(visitor: &mut V, block: &'ast Block) {
    for stmt in &block.statements {
        visitor.visit_stmt(stmt);
    }
}

/// Walk a statement's children.
pub fn walk_stmt<'ast, V: Visitor<'ast> + ?Sized>(visitor: &mut V, stmt: &'ast Stmt) {
    ensure_sufficient_stack(|| walk_stmt_kind(visitor, &stmt.kind));
}

fn walk_stmt_kind<'ast, V: Visitor<'ast> + ?Sized>(visitor: &mut V, kind: &'ast StmtKind) {
    match kind {
        StmtKind::Assignment(assignment) => {
            for target in &assignment.targets {
                visitor.visit_assignable(target);
            }
            for value in &assignment.values {
                visitor.visit_expr(value);
            }
        }
        StmtKind::Local(local) => {
            for value in &local.values {
                visitor.visit_expr(value);
            }
        }
        StmtKind::Call(call) => visitor.visit_call(call),
        StmtKind::Return(ret) => {
            for value in &ret.values {
                visitor.visit_expr(value);
            }
        }
        StmtKind::Break => {}
        StmtKind::Block(block) => visitor.visit_block(block),
        StmtKind::While(while_stat) => {
            visitor.visit_expr(&while_stat.condition);
            visitor.visit_block(&while_stat.body);
        }
        StmtKind::Repeat(repeat) => {
            visitor.visit_block(&repeat.body);
            visitor.visit_expr(&repeat.condition);
        }
        StmtKind::NumericFor(numeric) => {
            visitor.visit_expr(&numeric.init);
            visitor.visit_expr(&numeric.limit);
            if let Some(step) = &numeric.step {
                visitor.visit_expr(step);
            }
            visitor.visit_block(&numeric.body);
        }
        StmtKind::GenericFor(generic) => {
            for iter_expr in &generic.iter_exprs {
                visitor.visit_expr(iter_expr);
            }
            visitor.visit_block(&generic.body);
        }
        StmtKind::If(if_stat) => {
            visitor.visit_expr(&if_stat.condition);
            visitor.visit_block(&if_stat.then_block);
            for else_if in &if_stat.else_ifs {
                visitor.visit_else_if(else_if);
            }
            if let Some(else_block) = &if_stat.else_block {
                visitor.visit_block(else_block);
            }
        }
    }
}

/// Walk an expression's children.
pub fn walk_expr<'ast, V: Visitor<'ast> + ?Sized>(visitor: &mut V, expr: &'ast Expr) {
    ensure_sufficient_stack(|| walk_expr_kind(visitor, &expr.kind));
}

fn walk_expr_kind<'ast, V: Visitor<'ast> + ?Sized>(visitor: &mut V, kind: &'ast ExprKind) {
    match kind {
        ExprKind::Nil
        | ExprKind::Bool(_)
        | ExprKind::Number(_)
        | ExprKind::String(_)
        | ExprKind::Varargs { .. } => {}
        ExprKind::Variable(var) => {
            if let Some(prefix) = &var.prefix {
                visitor.visit_expr(prefix);
            }
        }
        ExprKind::TableAccess(access) => {
            visitor.visit_expr(&access.target);
            visitor.visit_expr(&access.index);
        }
        ExprKind::Call(call) => visitor.visit_call(call),
        ExprKind::Function(function) => visitor.visit_function(function),
        ExprKind::Binary { left, right, .. } => {
            visitor.visit_expr(left);
            visitor.visit_expr(right);
        }
        ExprKind::Unary { operand, .. } => visitor.visit_expr(operand),
        ExprKind::Table(table) => {
            for entry in &table.entries {
                visitor.visit_table_entry(entry);
            }
        }
    }
}

/// Walk an assignment target's children.
pub fn walk_assignable<'ast, V: Visitor<'ast> + ?Sized>(
    visitor: &mut V,
    target: &'ast Assignable,
) {
    match &target.kind {
        AssignableKind::Variable(var) => {
            if let Some(prefix) = &var.prefix {
                visitor.visit_expr(prefix);
            }
        }
        AssignableKind::TableAccess(access) => {
            visitor.visit_expr(&access.target);
            visitor.visit_expr(&access.index);
        }
    }
}

/// Walk a call: callee first, then arguments in order.
pub fn walk_call<'ast, V: Visitor<'ast> + ?Sized>(visitor: &mut V, call: &'ast FunctionCall) {
    visitor.visit_expr(&call.callee);
    for arg in &call.args {
        visitor.visit_expr(arg);
    }
}

/// Walk a function literal: parameters, then body.
pub fn walk_function<'ast, V: Visitor<'ast> + ?Sized>(
    visitor: &mut V,
    function: &'ast FunctionDefinition,
) {
    for param in &function.params {
        visitor.visit_argument(param);
    }
    visitor.visit_block(&function.body);
}

#[cfg(test)]
mod tests;
