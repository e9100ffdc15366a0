//! Control Flow Statements
//!
//! Loops and conditionals. These record structure only; how many times a
//! body runs is decided by whoever walks the tree.

use super::expr::{Expr, ExprKind};
use super::stmt::Block;
use crate::{Position, Positioned};

/// Pre-test loop: `while condition do body end`.
#[derive(PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WhileStat {
    pub condition: Expr,
    pub body: Block,
}

/// Post-test loop: `repeat body until condition`.
#[derive(PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RepeatStat {
    pub body: Block,
    pub condition: Expr,
}

/// Counted loop: `for var_name = init, limit [, step] do body end`.
#[derive(PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NumericFor {
    pub var_name: String,
    pub init: Expr,
    pub limit: Expr,
    /// `None` when the source omits the step.
    pub step: Option<Expr>,
    pub body: Block,
}

impl NumericFor {
    /// The loop step, with an omitted step reported as [`Step::Default`].
    pub fn step(&self) -> Step<'_> {
        match &self.step {
            Some(step) => Step::Explicit(step),
            None => Step::Default,
        }
    }
}

/// Step of a numeric `for` loop.
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum Step<'a> {
    /// Written in source.
    Explicit(&'a Expr),
    /// Omitted; the loop counts up by [`Step::DEFAULT_VALUE`].
    Default,
}

impl Step<'_> {
    /// Increment used when no step is written.
    pub const DEFAULT_VALUE: f64 = 1.0;

    /// The step as a constant, when it is one.
    ///
    /// Returns `None` for an explicit step that is not a number literal.
    pub fn constant(&self) -> Option<f64> {
        match self {
            Step::Default => Some(Self::DEFAULT_VALUE),
            Step::Explicit(Expr {
                kind: ExprKind::Number(value),
                ..
            }) => Some(*value),
            Step::Explicit(_) => None,
        }
    }
}

/// Iterator loop: `for names in iter_exprs do body end`.
#[derive(PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GenericFor {
    pub names: Vec<String>,
    pub iter_exprs: Vec<Expr>,
    pub body: Block,
}

/// Conditional with an ordered `elseif` chain and optional `else`.
///
/// At most one block of the chain runs: the first whose condition holds,
/// otherwise `else_block`.
#[derive(PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IfStat {
    pub condition: Expr,
    pub then_block: Block,
    pub else_ifs: Vec<ElseIf>,
    pub else_block: Option<Block>,
}

impl IfStat {
    /// Every `(condition, block)` pair of the chain, `if` first.
    pub fn branches(&self) -> impl Iterator<Item = (&Expr, &Block)> {
        std::iter::once((&self.condition, &self.then_block))
            .chain(self.else_ifs.iter().map(|arm| (&arm.condition, &arm.block)))
    }

    /// Pick the block that runs, asking `holds` about conditions in order.
    ///
    /// Conditions after the first accepted one are never passed to `holds`.
    /// Returns `Ok(None)` when no condition holds and there is no `else`.
    pub fn select<E>(
        &self,
        mut holds: impl FnMut(&Expr) -> Result<bool, E>,
    ) -> Result<Option<&Block>, E> {
        for (condition, block) in self.branches() {
            if holds(condition)? {
                return Ok(Some(block));
            }
        }
        Ok(self.else_block.as_ref())
    }
}

/// One `elseif condition then block` link of an `IfStat` chain.
#[derive(PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ElseIf {
    pub condition: Expr,
    pub block: Block,
    pos: Position,
}

impl ElseIf {
    pub fn new(condition: Expr, block: Block, pos: Position) -> Self {
        ElseIf {
            condition,
            block,
            pos,
        }
    }
}

impl Positioned for ElseIf {
    fn position(&self) -> Position {
        self.pos
    }
}
