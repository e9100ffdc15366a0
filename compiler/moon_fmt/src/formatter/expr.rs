//! Expression rendering.
//!
//! Parenthesization follows the parser's priority climbing. With `(l, r)`
//! the left and right binding powers of an operator:
//!
//! - a binary left operand `x op2 y` of `op` needs parens when
//!   `l(op) > r(op2)`, since the parser would otherwise let `op` take `y`;
//! - a binary right operand `x op3 y` of `op` needs parens when
//!   `l(op3) <= r(op)`;
//! - a unary operand (or a negative number) on the left of `op` needs parens
//!   when `l(op)` exceeds the unary binding power, which only `^` does;
//! - the operand of a unary operator needs parens when it is a binary
//!   expression whose operator binds no tighter than unary.
//!
//! Callees, field prefixes and index targets must be prefix expressions
//! (names, field or index accesses, calls); anything else is wrapped.
//!
//! A call or `...` truncated to one value keeps the parentheses it was
//! written with, since dropping them would change how many values it yields.

use moon_ir::{BinaryOp, Expr, ExprKind, FunctionCall, TableConstructor, UnaryOp, Variable};
use moon_stack::ensure_sufficient_stack;

use super::literals;
use super::Formatter;

/// How tightly a printed expression holds together.
#[derive(Copy, Clone)]
enum Precedence {
    /// Literals, names, calls, tables, function literals.
    Atom,
    /// A unary operator, or a literal printed with a leading `-`.
    Unary,
    Binary(BinaryOp),
}

fn precedence(expr: &Expr) -> Precedence {
    match &expr.kind {
        ExprKind::Binary { op, .. } => Precedence::Binary(*op),
        ExprKind::Unary { .. } => Precedence::Unary,
        ExprKind::Number(value) if literals::is_negative(*value) => Precedence::Unary,
        _ => Precedence::Atom,
    }
}

fn is_prefix_expr(expr: &Expr) -> bool {
    matches!(
        expr.kind,
        ExprKind::Variable(_)
            | ExprKind::TableAccess(_)
            | ExprKind::Call(_)
            | ExprKind::Varargs { truncated: true }
    )
}

/// Whether printing `expr` in prefix position starts with `(`.
pub(super) fn leftmost_needs_parens(expr: &Expr) -> bool {
    match &expr.kind {
        ExprKind::Variable(var) => var.prefix.as_deref().is_some_and(leftmost_needs_parens),
        ExprKind::TableAccess(access) => leftmost_needs_parens(&access.target),
        ExprKind::Call(call) => call.truncated || leftmost_needs_parens(&call.callee),
        _ => true,
    }
}

/// Whether `expr`, printed without parens, starts with `-`.
fn starts_with_minus(expr: &Expr) -> bool {
    match &expr.kind {
        ExprKind::Unary {
            op: UnaryOp::Negate,
            ..
        } => true,
        ExprKind::Number(value) => literals::is_negative(*value),
        _ => false,
    }
}

impl Formatter {
    pub fn expr(&mut self, expr: &Expr) {
        ensure_sufficient_stack(|| self.expr_inner(expr));
    }

    fn expr_inner(&mut self, expr: &Expr) {
        match &expr.kind {
            ExprKind::Nil => self.ctx.emit("nil"),
            ExprKind::Bool(true) => self.ctx.emit("true"),
            ExprKind::Bool(false) => self.ctx.emit("false"),
            ExprKind::Number(value) => self.ctx.emit(&literals::number(*value)),
            ExprKind::String(text) => self.ctx.emit(&literals::quote(text)),
            ExprKind::Varargs { truncated: false } => self.ctx.emit("..."),
            ExprKind::Varargs { truncated: true } => self.ctx.emit("(...)"),
            ExprKind::Variable(var) => self.variable(var),
            ExprKind::TableAccess(access) => self.table_access(&access.target, &access.index),
            ExprKind::Call(call) if call.truncated => {
                self.ctx.emit("(");
                self.call(call);
                self.ctx.emit(")");
            }
            ExprKind::Call(call) => self.call(call),
            ExprKind::Function(function) => {
                self.ctx.emit("function");
                self.function_body(function);
            }
            ExprKind::Binary { op, left, right } => self.binary(*op, left, right),
            ExprKind::Unary { op, operand } => self.unary(*op, operand),
            ExprKind::Table(table) => self.table(table),
        }
    }

    pub(super) fn expr_list(&mut self, exprs: &[Expr]) {
        for (i, expr) in exprs.iter().enumerate() {
            if i > 0 {
                self.ctx.emit(", ");
            }
            self.expr(expr);
        }
    }

    fn parenthesized(&mut self, expr: &Expr, parens: bool) {
        if parens {
            self.ctx.emit("(");
            self.expr(expr);
            self.ctx.emit(")");
        } else {
            self.expr(expr);
        }
    }

    /// An expression in callee, field prefix or index target position.
    fn prefix(&mut self, expr: &Expr) {
        self.parenthesized(expr, !is_prefix_expr(expr));
    }

    pub(super) fn variable(&mut self, var: &Variable) {
        if let Some(prefix) = &var.prefix {
            self.prefix(prefix);
            self.ctx.emit(".");
        }
        self.ctx.emit(&var.name);
    }

    pub(super) fn table_access(&mut self, target: &Expr, index: &Expr) {
        self.prefix(target);
        self.ctx.emit("[");
        self.expr(index);
        self.ctx.emit("]");
    }

    /// The call itself; a truncated call's parentheses are left to the caller.
    pub(super) fn call(&mut self, call: &FunctionCall) {
        self.prefix(&call.callee);
        self.ctx.emit("(");
        self.expr_list(&call.args);
        self.ctx.emit(")");
    }

    fn binary(&mut self, op: BinaryOp, left: &Expr, right: &Expr) {
        let (left_power, right_power) = op.binding_power();

        let left_parens = match precedence(left) {
            Precedence::Binary(inner) => left_power > inner.binding_power().1,
            Precedence::Unary => left_power > UnaryOp::BINDING_POWER,
            Precedence::Atom => false,
        };
        let right_parens = match precedence(right) {
            Precedence::Binary(inner) => inner.binding_power().0 <= right_power,
            Precedence::Unary | Precedence::Atom => false,
        };

        self.parenthesized(left, left_parens);
        self.ctx.emit(" ");
        self.ctx.emit(op.as_symbol());
        self.ctx.emit(" ");
        self.parenthesized(right, right_parens);
    }

    fn unary(&mut self, op: UnaryOp, operand: &Expr) {
        let parens = matches!(
            precedence(operand),
            Precedence::Binary(inner) if inner.binding_power().0 <= UnaryOp::BINDING_POWER
        );
        self.ctx.emit(op.as_symbol());
        // `--` would open a comment.
        if op == UnaryOp::Invert || (op == UnaryOp::Negate && !parens && starts_with_minus(operand))
        {
            self.ctx.emit(" ");
        }
        self.parenthesized(operand, parens);
    }

    fn table(&mut self, table: &TableConstructor) {
        self.ctx.emit("{");
        for (i, entry) in table.entries.iter().enumerate() {
            if i > 0 {
                self.ctx.emit(", ");
            }
            match &entry.key {
                Some(Expr {
                    kind: ExprKind::String(name),
                    ..
                }) if literals::is_identifier(name) => {
                    self.ctx.emit(name);
                    self.ctx.emit(" = ");
                }
                Some(key) => {
                    self.ctx.emit("[");
                    self.expr(key);
                    self.ctx.emit("] = ");
                }
                None => {}
            }
            self.expr(&entry.value);
        }
        self.ctx.emit("}");
    }
}
