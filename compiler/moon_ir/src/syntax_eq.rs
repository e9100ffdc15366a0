//! Structural equality that ignores positions.
//!
//! `PartialEq` on nodes compares positions too, which makes it useless for
//! asking whether two parses describe the same program. `SyntaxEq` compares
//! shapes, names, literals and operators only.
//!
//! Each impl matches exhaustively on `self`, so a new node shape must be
//! handled here before the crate compiles.

use moon_stack::ensure_sufficient_stack;

use crate::ast::{
    Argument, Assignable, AssignableKind, Assignment, Block, ElseIf, Expr, ExprKind,
    FunctionCall, FunctionDefinition, GenericFor, IfStat, LocalAssignment, NumericFor,
    RepeatStat, ReturnStat, Stmt, StmtKind, TableAccess, TableConstructor, TableEntry, Variable,
    WhileStat,
};

/// Position-insensitive structural equality.
pub trait SyntaxEq {
    fn syntax_eq(&self, other: &Self) -> bool;
}

impl<T: SyntaxEq> SyntaxEq for [T] {
    fn syntax_eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().zip(other).all(|(a, b)| a.syntax_eq(b))
    }
}

impl<T: SyntaxEq> SyntaxEq for Vec<T> {
    fn syntax_eq(&self, other: &Self) -> bool {
        self.as_slice().syntax_eq(other.as_slice())
    }
}

impl<T: SyntaxEq + ?Sized> SyntaxEq for Box<T> {
    fn syntax_eq(&self, other: &Self) -> bool {
        (**self).syntax_eq(&**other)
    }
}

impl<T: SyntaxEq> SyntaxEq for Option<T> {
    fn syntax_eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Some(a), Some(b)) => a.syntax_eq(b),
            (None, None) => true,
            _ => false,
        }
    }
}

// Expressions

impl SyntaxEq for Expr {
    fn syntax_eq(&self, other: &Self) -> bool {
        ensure_sufficient_stack(|| self.kind.syntax_eq(&other.kind))
    }
}

impl SyntaxEq for ExprKind {
    fn syntax_eq(&self, other: &Self) -> bool {
        match self {
            ExprKind::Nil => matches!(other, ExprKind::Nil),
            ExprKind::Varargs { truncated } => {
                matches!(other, ExprKind::Varargs { truncated: b } if truncated == b)
            }
            ExprKind::Bool(a) => matches!(other, ExprKind::Bool(b) if a == b),
            // Bitwise, so a NaN literal still equals itself.
            ExprKind::Number(a) => {
                matches!(other, ExprKind::Number(b) if a.to_bits() == b.to_bits())
            }
            ExprKind::String(a) => matches!(other, ExprKind::String(b) if a == b),
            ExprKind::Variable(a) => {
                matches!(other, ExprKind::Variable(b) if a.syntax_eq(b))
            }
            ExprKind::TableAccess(a) => {
                matches!(other, ExprKind::TableAccess(b) if a.syntax_eq(b))
            }
            ExprKind::Call(a) => matches!(other, ExprKind::Call(b) if a.syntax_eq(b)),
            ExprKind::Function(a) => matches!(other, ExprKind::Function(b) if a.syntax_eq(b)),
            ExprKind::Binary { op, left, right } => {
                let ExprKind::Binary {
                    op: other_op,
                    left: other_left,
                    right: other_right,
                } = other
                else {
                    return false;
                };
                op == other_op && left.syntax_eq(other_left) && right.syntax_eq(other_right)
            }
            ExprKind::Unary { op, operand } => {
                let ExprKind::Unary {
                    op: other_op,
                    operand: other_operand,
                } = other
                else {
                    return false;
                };
                op == other_op && operand.syntax_eq(other_operand)
            }
            ExprKind::Table(a) => matches!(other, ExprKind::Table(b) if a.syntax_eq(b)),
        }
    }
}

impl SyntaxEq for Variable {
    fn syntax_eq(&self, other: &Self) -> bool {
        self.name == other.name && self.prefix.syntax_eq(&other.prefix)
    }
}

impl SyntaxEq for TableAccess {
    fn syntax_eq(&self, other: &Self) -> bool {
        self.target.syntax_eq(&other.target) && self.index.syntax_eq(&other.index)
    }
}

impl SyntaxEq for FunctionCall {
    fn syntax_eq(&self, other: &Self) -> bool {
        self.truncated == other.truncated
            && self.callee.syntax_eq(&other.callee)
            && self.args.syntax_eq(&other.args)
    }
}

impl SyntaxEq for Argument {
    fn syntax_eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl SyntaxEq for FunctionDefinition {
    fn syntax_eq(&self, other: &Self) -> bool {
        self.is_variadic == other.is_variadic
            && self.params.syntax_eq(&other.params)
            && self.body.syntax_eq(&other.body)
    }
}

impl SyntaxEq for TableConstructor {
    fn syntax_eq(&self, other: &Self) -> bool {
        self.entries.syntax_eq(&other.entries)
    }
}

impl SyntaxEq for TableEntry {
    fn syntax_eq(&self, other: &Self) -> bool {
        self.key.syntax_eq(&other.key) && self.value.syntax_eq(&other.value)
    }
}

impl SyntaxEq for Assignable {
    fn syntax_eq(&self, other: &Self) -> bool {
        match (&self.kind, &other.kind) {
            (AssignableKind::Variable(a), AssignableKind::Variable(b)) => a.syntax_eq(b),
            (AssignableKind::TableAccess(a), AssignableKind::TableAccess(b)) => a.syntax_eq(b),
            (AssignableKind::Variable(_) | AssignableKind::TableAccess(_), _) => false,
        }
    }
}

// Statements

impl SyntaxEq for Block {
    fn syntax_eq(&self, other: &Self) -> bool {
        self.statements.syntax_eq(&other.statements)
    }
}

impl SyntaxEq for Stmt {
    fn syntax_eq(&self, other: &Self) -> bool {
        ensure_sufficient_stack(|| self.kind.syntax_eq(&other.kind))
    }
}

impl SyntaxEq for StmtKind {
    fn syntax_eq(&self, other: &Self) -> bool {
        match self {
            StmtKind::Assignment(a) => {
                matches!(other, StmtKind::Assignment(b) if a.syntax_eq(b))
            }
            StmtKind::Local(a) => matches!(other, StmtKind::Local(b) if a.syntax_eq(b)),
            StmtKind::Call(a) => matches!(other, StmtKind::Call(b) if a.syntax_eq(b)),
            StmtKind::Return(a) => matches!(other, StmtKind::Return(b) if a.syntax_eq(b)),
            StmtKind::Break => matches!(other, StmtKind::Break),
            StmtKind::Block(a) => matches!(other, StmtKind::Block(b) if a.syntax_eq(b)),
            StmtKind::While(a) => matches!(other, StmtKind::While(b) if a.syntax_eq(b)),
            StmtKind::Repeat(a) => matches!(other, StmtKind::Repeat(b) if a.syntax_eq(b)),
            StmtKind::NumericFor(a) => {
                matches!(other, StmtKind::NumericFor(b) if a.syntax_eq(b))
            }
            StmtKind::GenericFor(a) => {
                matches!(other, StmtKind::GenericFor(b) if a.syntax_eq(b))
            }
            StmtKind::If(a) => matches!(other, StmtKind::If(b) if a.syntax_eq(b)),
        }
    }
}

impl SyntaxEq for Assignment {
    fn syntax_eq(&self, other: &Self) -> bool {
        self.targets.syntax_eq(&other.targets) && self.values.syntax_eq(&other.values)
    }
}

impl SyntaxEq for LocalAssignment {
    fn syntax_eq(&self, other: &Self) -> bool {
        self.names == other.names && self.values.syntax_eq(&other.values)
    }
}

impl SyntaxEq for ReturnStat {
    fn syntax_eq(&self, other: &Self) -> bool {
        self.values.syntax_eq(&other.values)
    }
}

impl SyntaxEq for WhileStat {
    fn syntax_eq(&self, other: &Self) -> bool {
        self.condition.syntax_eq(&other.condition) && self.body.syntax_eq(&other.body)
    }
}

impl SyntaxEq for RepeatStat {
    fn syntax_eq(&self, other: &Self) -> bool {
        self.body.syntax_eq(&other.body) && self.condition.syntax_eq(&other.condition)
    }
}

impl SyntaxEq for NumericFor {
    fn syntax_eq(&self, other: &Self) -> bool {
        self.var_name == other.var_name
            && self.init.syntax_eq(&other.init)
            && self.limit.syntax_eq(&other.limit)
            && self.step.syntax_eq(&other.step)
            && self.body.syntax_eq(&other.body)
    }
}

impl SyntaxEq for GenericFor {
    fn syntax_eq(&self, other: &Self) -> bool {
        self.names == other.names
            && self.iter_exprs.syntax_eq(&other.iter_exprs)
            && self.body.syntax_eq(&other.body)
    }
}

impl SyntaxEq for IfStat {
    fn syntax_eq(&self, other: &Self) -> bool {
        self.condition.syntax_eq(&other.condition)
            && self.then_block.syntax_eq(&other.then_block)
            && self.else_ifs.syntax_eq(&other.else_ifs)
            && self.else_block.syntax_eq(&other.else_block)
    }
}

impl SyntaxEq for ElseIf {
    fn syntax_eq(&self, other: &Self) -> bool {
        self.condition.syntax_eq(&other.condition) && self.block.syntax_eq(&other.block)
    }
}
