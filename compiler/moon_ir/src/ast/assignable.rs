//! Assignment Targets
//!
//! The assignable subset of expressions. Only `Variable` and `TableAccess`
//! can be written to, so assignment statements hold this narrower type and a
//! call or literal on the left of `=` cannot be represented at all.

use std::fmt;

use super::expr::{Expr, ExprKind, TableAccess, Variable};
use crate::{Position, Positioned};

/// Assignment target node.
#[derive(PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Assignable {
    pub kind: AssignableKind,
    pos: Position,
}

impl Assignable {
    pub fn new(kind: AssignableKind, pos: Position) -> Self {
        Assignable { kind, pos }
    }

    /// An unqualified name target: `x = ...`.
    pub fn name(name: impl Into<String>, pos: Position) -> Self {
        Assignable::new(AssignableKind::Variable(Variable::global(name)), pos)
    }
}

impl fmt::Debug for Assignable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {:?}", self.kind, self.pos)
    }
}

impl Positioned for Assignable {
    fn position(&self) -> Position {
        self.pos
    }
}

/// Assignable shapes.
#[derive(PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AssignableKind {
    Variable(Variable),
    TableAccess(TableAccess),
}

impl TryFrom<Expr> for Assignable {
    /// The expression is handed back untouched when it cannot be assigned.
    type Error = Expr;

    fn try_from(expr: Expr) -> Result<Self, Self::Error> {
        let (kind, pos) = expr.into_parts();
        match kind {
            ExprKind::Variable(var) => Ok(Assignable::new(AssignableKind::Variable(var), pos)),
            ExprKind::TableAccess(access) => {
                Ok(Assignable::new(AssignableKind::TableAccess(access), pos))
            }
            other => Err(Expr::new(other, pos)),
        }
    }
}

impl From<Assignable> for Expr {
    fn from(target: Assignable) -> Self {
        let kind = match target.kind {
            AssignableKind::Variable(var) => ExprKind::Variable(var),
            AssignableKind::TableAccess(access) => ExprKind::TableAccess(access),
        };
        Expr::new(kind, target.pos)
    }
}
