//! Moon IR - Syntax Tree Types
//!
//! This crate contains the tree a parser builds from Moon source text and an
//! evaluator later walks:
//! - `Position` for 1-based line/column source locations
//! - Operator tags (`BinaryOp`, `UnaryOp`)
//! - Expression nodes (`Expr`, `ExprKind`) and the assignable subset
//!   (`Assignable`, `AssignableKind`)
//! - Statement nodes (`Stmt`, `StmtKind`) and `Block`
//! - A read-only `Visitor` and position-insensitive `SyntaxEq`
//!
//! # Design Philosophy
//!
//! - **Closed shapes**: every expression and statement form is a variant of a
//!   closed enum, so adding a construct breaks every exhaustive `match`.
//! - **Owned tree**: a parent owns its children (`Box`/`Vec`), there are no
//!   back-references and nodes are never cloned.
//! - **Positions by composition**: each node embeds an immutable `Position`.
//!
//! The tree carries no behavior: evaluation, scoping and coercion belong to
//! the consumers.

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-allocated types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

pub mod ast;
mod position;
mod syntax_eq;
mod traits;
pub mod visitor;

pub use ast::{
    Argument, Assignable, AssignableKind, Assignment, BinaryOp, Block, ElseIf, Expr, ExprKind,
    FunctionCall, FunctionDefinition, GenericFor, IfStat, LocalAssignment, NumericFor,
    RepeatStat, ReturnStat, Step, Stmt, StmtKind, TableAccess, TableConstructor, TableEntry,
    TableSlot, UnaryOp, Variable, WhileStat,
};
pub use position::{Position, PositionError};
pub use syntax_eq::SyntaxEq;
pub use traits::Positioned;
pub use visitor::Visitor;
