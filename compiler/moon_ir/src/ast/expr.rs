//! Expression Types
//!
//! Core expression node and the value-producing shapes.
//!
//! # Design Notes
//! - Children are owned (`Box<Expr>`, `Vec<Expr>`); a tree has exactly one
//!   owner per node.
//! - `Variable` and `TableAccess` are the only shapes that can also be
//!   assignment targets, see [`Assignable`](super::Assignable).

use std::fmt;

use super::collections::TableConstructor;
use super::function::{FunctionCall, FunctionDefinition};
use super::operators::{BinaryOp, UnaryOp};
use crate::{Position, Positioned};

/// Expression node.
#[derive(PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Expr {
    pub kind: ExprKind,
    pos: Position,
}

impl Expr {
    pub fn new(kind: ExprKind, pos: Position) -> Self {
        Expr { kind, pos }
    }

    /// Split into shape and position, consuming the node.
    pub fn into_parts(mut self) -> (ExprKind, Position) {
        let kind = std::mem::replace(&mut self.kind, ExprKind::Nil);
        (kind, self.pos)
    }

    pub fn into_kind(self) -> ExprKind {
        self.into_parts().0
    }

    pub fn nil(pos: Position) -> Self {
        Expr::new(ExprKind::Nil, pos)
    }

    pub fn boolean(value: bool, pos: Position) -> Self {
        Expr::new(ExprKind::Bool(value), pos)
    }

    pub fn number(value: f64, pos: Position) -> Self {
        Expr::new(ExprKind::Number(value), pos)
    }

    pub fn string(value: impl Into<String>, pos: Position) -> Self {
        Expr::new(ExprKind::String(value.into()), pos)
    }

    pub fn varargs(pos: Position) -> Self {
        Expr::new(ExprKind::Varargs { truncated: false }, pos)
    }

    /// A bare name reference: `name`.
    pub fn name(name: impl Into<String>, pos: Position) -> Self {
        Expr::new(ExprKind::Variable(Variable::global(name)), pos)
    }

    /// A dotted member reference: `prefix.name`.
    pub fn field(prefix: Expr, name: impl Into<String>, pos: Position) -> Self {
        Expr::new(ExprKind::Variable(Variable::member(prefix, name)), pos)
    }

    /// An indexing expression: `target[index]`.
    pub fn index(target: Expr, index: Expr, pos: Position) -> Self {
        Expr::new(
            ExprKind::TableAccess(TableAccess {
                target: Box::new(target),
                index: Box::new(index),
            }),
            pos,
        )
    }

    pub fn call(callee: Expr, args: Vec<Expr>, pos: Position) -> Self {
        Expr::new(ExprKind::Call(FunctionCall::new(callee, args)), pos)
    }

    pub fn binary(op: BinaryOp, left: Expr, right: Expr, pos: Position) -> Self {
        Expr::new(
            ExprKind::Binary {
                op,
                left: Box::new(left),
                right: Box::new(right),
            },
            pos,
        )
    }

    pub fn unary(op: UnaryOp, operand: Expr, pos: Position) -> Self {
        Expr::new(
            ExprKind::Unary {
                op,
                operand: Box::new(operand),
            },
            pos,
        )
    }

    /// Whether this shape can yield more than one value.
    ///
    /// Calls and `...` expand to all their values when they end an
    /// expression list and are truncated to one value anywhere else.
    /// Wrapped in parentheses they always yield exactly one.
    pub fn is_multi_value(&self) -> bool {
        match &self.kind {
            ExprKind::Call(call) => !call.truncated,
            ExprKind::Varargs { truncated } => !truncated,
            _ => false,
        }
    }

    /// Apply the one-value truncation of `(f())` and `(...)`.
    ///
    /// Other shapes already yield a single value and are returned as is.
    #[must_use]
    pub fn into_single_value(mut self) -> Self {
        match &mut self.kind {
            ExprKind::Call(call) => call.truncated = true,
            ExprKind::Varargs { truncated } => *truncated = true,
            _ => {}
        }
        self
    }

    /// The call inside this expression, if it is one.
    pub fn as_call(&self) -> Option<&FunctionCall> {
        match &self.kind {
            ExprKind::Call(call) => Some(call),
            _ => None,
        }
    }
}

impl fmt::Debug for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {:?}", self.kind, self.pos)
    }
}

impl Positioned for Expr {
    fn position(&self) -> Position {
        self.pos
    }
}

/// Expression variants.
#[derive(PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ExprKind {
    /// `nil`
    Nil,

    /// `true`, `false`
    Bool(bool),

    /// Numeric literal: 3, 0.5, 1e10, 0xff
    Number(f64),

    /// String literal with escapes already resolved
    String(String),

    /// `...` inside a variadic function; `truncated` for `(...)`
    Varargs { truncated: bool },

    /// Name reference, optionally qualified: `x`, `a.b`
    Variable(Variable),

    /// Indexing: `t[k]`
    TableAccess(TableAccess),

    /// Call whose value is used: `f(x) + 1`
    Call(FunctionCall),

    /// Anonymous function literal: `function(a, b) ... end`
    Function(FunctionDefinition),

    /// Binary operation: left op right
    Binary {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },

    /// Unary operation: op operand
    Unary { op: UnaryOp, operand: Box<Expr> },

    /// Table constructor: `{1, x = 2, [k] = v}`
    Table(TableConstructor),
}

impl ExprKind {
    /// Whether this shape may appear on the left of `=`.
    pub fn is_assignable(&self) -> bool {
        matches!(self, ExprKind::Variable(_) | ExprKind::TableAccess(_))
    }

    /// A short phrase naming this shape, for diagnostics.
    pub fn description(&self) -> &'static str {
        match self {
            ExprKind::Nil => "`nil`",
            ExprKind::Bool(_) => "a boolean literal",
            ExprKind::Number(_) => "a number literal",
            ExprKind::String(_) => "a string literal",
            ExprKind::Varargs { .. } => "`...`",
            ExprKind::Variable(_) => "a variable",
            ExprKind::TableAccess(_) => "a table access",
            ExprKind::Call(_) => "a function call",
            ExprKind::Function(_) => "a function definition",
            ExprKind::Binary { .. } => "a binary expression",
            ExprKind::Unary { .. } => "a unary expression",
            ExprKind::Table(_) => "a table constructor",
        }
    }
}

/// Name reference.
///
/// With a prefix this is dotted access: `a.b` is
/// `Variable { prefix: Some(a), name: "b" }`.
#[derive(PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Variable {
    pub prefix: Option<Box<Expr>>,
    pub name: String,
}

impl Variable {
    /// An unqualified name.
    pub fn global(name: impl Into<String>) -> Self {
        Variable {
            prefix: None,
            name: name.into(),
        }
    }

    /// A name qualified by the expression it is read from.
    pub fn member(prefix: Expr, name: impl Into<String>) -> Self {
        Variable {
            prefix: Some(Box::new(prefix)),
            name: name.into(),
        }
    }
}

/// Indexing: `target[index]`.
#[derive(PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TableAccess {
    pub target: Box<Expr>,
    pub index: Box<Expr>,
}
