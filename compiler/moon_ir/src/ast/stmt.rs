//! Statement Types
//!
//! Statement node, its variants, and `Block`.

use std::fmt;

use super::assignable::Assignable;
use super::control::{GenericFor, IfStat, NumericFor, RepeatStat, WhileStat};
use super::expr::Expr;
use super::function::FunctionCall;
use crate::{Position, Positioned};

/// Statement node.
#[derive(PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Stmt {
    pub kind: StmtKind,
    pos: Position,
}

impl Stmt {
    pub fn new(kind: StmtKind, pos: Position) -> Self {
        Stmt { kind, pos }
    }

    /// Split into shape and position, consuming the node.
    pub fn into_parts(mut self) -> (StmtKind, Position) {
        let kind = std::mem::replace(&mut self.kind, StmtKind::Break);
        (kind, self.pos)
    }

    pub fn into_kind(self) -> StmtKind {
        self.into_parts().0
    }

    /// A call evaluated for its side effects: `f(x)`.
    pub fn call(callee: Expr, args: Vec<Expr>, pos: Position) -> Self {
        Stmt::new(StmtKind::Call(FunctionCall::new(callee, args)), pos)
    }

    pub fn assign(targets: Vec<Assignable>, values: Vec<Expr>, pos: Position) -> Self {
        Stmt::new(StmtKind::Assignment(Assignment { targets, values }), pos)
    }

    pub fn local(names: Vec<String>, values: Vec<Expr>, pos: Position) -> Self {
        Stmt::new(StmtKind::Local(LocalAssignment { names, values }), pos)
    }

    pub fn ret(values: Vec<Expr>, pos: Position) -> Self {
        Stmt::new(StmtKind::Return(ReturnStat { values }), pos)
    }

    pub fn brk(pos: Position) -> Self {
        Stmt::new(StmtKind::Break, pos)
    }
}

impl fmt::Debug for Stmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {:?}", self.kind, self.pos)
    }
}

impl Positioned for Stmt {
    fn position(&self) -> Position {
        self.pos
    }
}

/// Statement kinds.
#[derive(PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StmtKind {
    /// `a, b.c, d[e] = x, y, z`
    Assignment(Assignment),

    /// `local a, b = x, y`
    Local(LocalAssignment),

    /// Call whose results are discarded: `f(x)`
    Call(FunctionCall),

    /// `return a, b`
    Return(ReturnStat),

    /// `break`
    Break,

    /// `do ... end`
    Block(Block),

    /// `while cond do ... end`
    While(WhileStat),

    /// `repeat ... until cond`
    Repeat(RepeatStat),

    /// `for i = init, limit, step do ... end`
    NumericFor(NumericFor),

    /// `for k, v in iter do ... end`
    GenericFor(GenericFor),

    /// `if c then ... elseif c2 then ... else ... end`
    If(IfStat),
}

impl StmtKind {
    /// A short phrase naming this shape, for diagnostics.
    pub fn description(&self) -> &'static str {
        match self {
            StmtKind::Assignment(_) => "an assignment",
            StmtKind::Local(_) => "a local declaration",
            StmtKind::Call(_) => "a function call",
            StmtKind::Return(_) => "a return statement",
            StmtKind::Break => "a break statement",
            StmtKind::Block(_) => "a do block",
            StmtKind::While(_) => "a while loop",
            StmtKind::Repeat(_) => "a repeat loop",
            StmtKind::NumericFor(_) => "a numeric for loop",
            StmtKind::GenericFor(_) => "a generic for loop",
            StmtKind::If(_) => "an if statement",
        }
    }
}

/// Multi-target assignment.
///
/// Targets and values are matched up by position; any surplus or shortfall
/// is settled by the evaluator.
#[derive(PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Assignment {
    pub targets: Vec<Assignable>,
    pub values: Vec<Expr>,
}

/// Declaration of new locals, optionally initialized.
#[derive(PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LocalAssignment {
    pub names: Vec<String>,
    /// Empty for a bare `local x`.
    pub values: Vec<Expr>,
}

/// `return` with zero or more values.
#[derive(PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReturnStat {
    pub values: Vec<Expr>,
}

/// Ordered statement sequence forming one scope body.
///
/// Statement order is execution order.
#[derive(PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Block {
    pub statements: Vec<Stmt>,
    pos: Position,
}

impl Block {
    pub fn new(statements: Vec<Stmt>, pos: Position) -> Self {
        Block { statements, pos }
    }

    pub fn empty(pos: Position) -> Self {
        Block::new(Vec::new(), pos)
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Stmt> {
        self.statements.iter()
    }
}

impl<'a> IntoIterator for &'a Block {
    type Item = &'a Stmt;
    type IntoIter = std::slice::Iter<'a, Stmt>;

    fn into_iter(self) -> Self::IntoIter {
        self.statements.iter()
    }
}

impl Positioned for Block {
    fn position(&self) -> Position {
        self.pos
    }
}
