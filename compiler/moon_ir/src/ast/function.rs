//! Function Types
//!
//! Calls and anonymous function literals.

use super::expr::Expr;
use super::stmt::Block;
use crate::{Position, Positioned};

/// Invocation of a callable expression.
///
/// The same type backs both `ExprKind::Call` (value consumed) and
/// `StmtKind::Call` (value discarded).
#[derive(PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FunctionCall {
    pub callee: Box<Expr>,
    pub args: Vec<Expr>,
    /// Written as `(f(...))`: only the first result is kept. Always false
    /// for a call statement.
    pub truncated: bool,
}

impl FunctionCall {
    pub fn new(callee: Expr, args: Vec<Expr>) -> Self {
        FunctionCall {
            callee: Box::new(callee),
            args,
            truncated: false,
        }
    }
}

/// Formal parameter name.
#[derive(PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Argument {
    pub name: String,
    pos: Position,
}

impl Argument {
    pub fn new(name: impl Into<String>, pos: Position) -> Self {
        Argument {
            name: name.into(),
            pos,
        }
    }
}

impl Positioned for Argument {
    fn position(&self) -> Position {
        self.pos
    }
}

/// Anonymous function literal: `function(params) body end`.
#[derive(PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FunctionDefinition {
    pub params: Vec<Argument>,
    /// Parameter list ends in `...`.
    pub is_variadic: bool,
    pub body: Block,
}
