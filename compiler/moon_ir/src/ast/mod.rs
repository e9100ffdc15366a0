//! Owned syntax tree types.
//!
//! # Module Structure
//!
//! - `expr`: Core expression types (`Expr`, `ExprKind`, `Variable`, `TableAccess`)
//! - `assignable`: Assignment targets (`Assignable`, `AssignableKind`)
//! - `function`: Calls, parameters and function literals
//! - `collections`: Table constructors and slot numbering
//! - `operators`: Binary and unary operators
//! - `stmt`: Statement types and `Block`
//! - `control`: Loops and conditionals
//! - `drop`: Stack-safe teardown of deep trees

mod assignable;
mod collections;
mod control;
mod drop;
mod expr;
mod function;
mod operators;
mod stmt;

pub use assignable::{Assignable, AssignableKind};
pub use collections::{TableConstructor, TableEntry, TableSlot};
pub use control::{ElseIf, GenericFor, IfStat, NumericFor, RepeatStat, Step, WhileStat};
pub use expr::{Expr, ExprKind, TableAccess, Variable};
pub use function::{Argument, FunctionCall, FunctionDefinition};
pub use operators::{BinaryOp, UnaryOp};
pub use stmt::{Assignment, Block, LocalAssignment, ReturnStat, Stmt, StmtKind};
