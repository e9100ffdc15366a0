//! Parser tests.
//!
//! Expressions are compared through a compact s-expression rendering so that
//! precedence and nesting read at a glance.

mod expr;
mod positions;

use moon_ir::{Block, Expr, ExprKind, Position, Stmt, TableEntry};

use crate::{parse, parse_expr, ParseError};

fn at(line: u32, column: u32) -> Position {
    Position::new(line, column)
}

fn parse_ok(source: &str) -> Block {
    match parse(source) {
        Ok(block) => block,
        Err(err) => panic!("failed to parse {source:?}: {err}"),
    }
}

fn parse_err(source: &str) -> ParseError {
    match parse(source) {
        Ok(block) => panic!("expected {source:?} to fail, got {block:?}"),
        Err(err) => err,
    }
}

/// The only statement of `source`.
fn single(source: &str) -> Stmt {
    let mut block = parse_ok(source);
    assert_eq!(block.len(), 1, "{source:?} should hold one statement");
    block.statements.remove(0)
}

fn expr(source: &str) -> Expr {
    match parse_expr(source) {
        Ok(expr) => expr,
        Err(err) => panic!("failed to parse {source:?}: {err}"),
    }
}

fn sexp(expr: &Expr) -> String {
    match &expr.kind {
        ExprKind::Nil => "nil".to_string(),
        ExprKind::Bool(value) => value.to_string(),
        ExprKind::Number(value) => value.to_string(),
        ExprKind::String(text) => format!("{text:?}"),
        ExprKind::Varargs { truncated: false } => "...".to_string(),
        ExprKind::Varargs { truncated: true } => "(single ...)".to_string(),
        ExprKind::Variable(var) => match &var.prefix {
            None => var.name.clone(),
            Some(prefix) => format!("(. {} {})", sexp(prefix), var.name),
        },
        ExprKind::TableAccess(access) => {
            format!("([] {} {})", sexp(&access.target), sexp(&access.index))
        }
        ExprKind::Call(call) => {
            let mut out = format!("(call {}", sexp(&call.callee));
            for arg in &call.args {
                out.push(' ');
                out.push_str(&sexp(arg));
            }
            out.push(')');
            if call.truncated {
                format!("(single {out})")
            } else {
                out
            }
        }
        ExprKind::Function(function) => {
            let mut params: Vec<&str> = function.params.iter().map(|p| p.name.as_str()).collect();
            if function.is_variadic {
                params.push("...");
            }
            format!("(function ({}) #{})", params.join(" "), function.body.len())
        }
        ExprKind::Binary { op, left, right } => {
            format!("({} {} {})", op.as_symbol(), sexp(left), sexp(right))
        }
        ExprKind::Unary { op, operand } => format!("({} {})", op.as_symbol(), sexp(operand)),
        ExprKind::Table(table) => {
            let entries: Vec<String> = table.entries.iter().map(entry_sexp).collect();
            format!("{{{}}}", entries.join(", "))
        }
    }
}

fn entry_sexp(entry: &TableEntry) -> String {
    match &entry.key {
        Some(key) => format!("[{}]={}", sexp(key), sexp(&entry.value)),
        None => sexp(&entry.value),
    }
}
