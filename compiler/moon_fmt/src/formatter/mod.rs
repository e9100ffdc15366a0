//! Formatter Core
//!
//! Renders statements line by line and expressions inline. A function literal
//! is the only expression that spans lines: its body is indented one level
//! past the statement that contains it.
//!
//! Two statement shapes are printed in their sugared form:
//!
//! - `Local{[f], []}` directly followed by `Assignment{[f], [function]}` is
//!   printed as `local function f`.
//! - `Assignment{[a.b.c], [function]}` is printed as `function a.b.c`.
//!
//! Both re-parse to the same statements.
//!
//! # Modules
//!
//! - [`expr`]: Expressions and minimal parenthesization
//! - [`literals`]: Number and string literals

mod expr;
mod literals;

use moon_ir::{
    AssignableKind, Block, Expr, ExprKind, FunctionDefinition, Stmt, StmtKind, Variable,
};

use crate::context::FormatContext;
use crate::emitter::StringEmitter;

/// Format a chunk. Every statement ends with a newline.
pub fn format_block(block: &Block) -> String {
    let mut formatter = Formatter::new();
    formatter.statements(block);
    formatter.finish()
}

/// Format a single expression on its own.
pub fn format_expr(expr: &Expr) -> String {
    let mut formatter = Formatter::new();
    formatter.expr(expr);
    formatter.finish()
}

/// Formatter writing into a string.
pub struct Formatter {
    pub(crate) ctx: FormatContext<StringEmitter>,
}

impl Default for Formatter {
    fn default() -> Self {
        Self::new()
    }
}

impl Formatter {
    pub fn new() -> Self {
        Formatter {
            ctx: FormatContext::new(StringEmitter::new()),
        }
    }

    /// Take the output.
    pub fn finish(self) -> String {
        self.ctx.finish().output()
    }

    /// Emit the statements of `block` at the current indentation.
    pub fn statements(&mut self, block: &Block) {
        let stmts = &block.statements;
        let mut index = 0;
        while index < stmts.len() {
            if let Some((name, function)) = stmts
                .get(index + 1)
                .and_then(|next| local_function(&stmts[index], next))
            {
                self.ctx.emit("local function ");
                self.ctx.emit(name);
                self.function_body(function);
                self.ctx.emit_newline();
                index += 2;
                continue;
            }
            self.stmt(&stmts[index]);
            index += 1;
        }
    }

    /// Emit one statement followed by a newline.
    pub fn stmt(&mut self, stmt: &Stmt) {
        if starts_with_paren(stmt) {
            // Keeps the `(` from reading as a call on the previous line.
            self.ctx.emit(";");
        }

        match &stmt.kind {
            StmtKind::Assignment(assignment) => {
                if let Some((path, function)) = function_stat(stmt) {
                    self.ctx.emit("function ");
                    self.ctx.emit(&path);
                    self.function_body(function);
                } else {
                    for (i, target) in assignment.targets.iter().enumerate() {
                        if i > 0 {
                            self.ctx.emit(", ");
                        }
                        match &target.kind {
                            AssignableKind::Variable(var) => self.variable(var),
                            AssignableKind::TableAccess(access) => {
                                self.table_access(&access.target, &access.index);
                            }
                        }
                    }
                    self.ctx.emit(" = ");
                    self.expr_list(&assignment.values);
                }
            }
            StmtKind::Local(local) => {
                self.ctx.emit("local ");
                self.ctx.emit(&local.names.join(", "));
                if !local.values.is_empty() {
                    self.ctx.emit(" = ");
                    self.expr_list(&local.values);
                }
            }
            StmtKind::Call(call) => self.call(call),
            StmtKind::Return(ret) => {
                self.ctx.emit("return");
                if !ret.values.is_empty() {
                    self.ctx.emit_space();
                    self.expr_list(&ret.values);
                }
            }
            StmtKind::Break => self.ctx.emit("break"),
            StmtKind::Block(body) => {
                self.ctx.emit("do");
                self.nested(body);
                self.ctx.emit("end");
            }
            StmtKind::While(while_stat) => {
                self.ctx.emit("while ");
                self.expr(&while_stat.condition);
                self.ctx.emit(" do");
                self.nested(&while_stat.body);
                self.ctx.emit("end");
            }
            StmtKind::Repeat(repeat) => {
                self.ctx.emit("repeat");
                self.nested(&repeat.body);
                self.ctx.emit("until ");
                self.expr(&repeat.condition);
            }
            StmtKind::NumericFor(numeric) => {
                self.ctx.emit("for ");
                self.ctx.emit(&numeric.var_name);
                self.ctx.emit(" = ");
                self.expr(&numeric.init);
                self.ctx.emit(", ");
                self.expr(&numeric.limit);
                if let Some(step) = &numeric.step {
                    self.ctx.emit(", ");
                    self.expr(step);
                }
                self.ctx.emit(" do");
                self.nested(&numeric.body);
                self.ctx.emit("end");
            }
            StmtKind::GenericFor(generic) => {
                self.ctx.emit("for ");
                self.ctx.emit(&generic.names.join(", "));
                self.ctx.emit(" in ");
                self.expr_list(&generic.iter_exprs);
                self.ctx.emit(" do");
                self.nested(&generic.body);
                self.ctx.emit("end");
            }
            StmtKind::If(if_stat) => {
                self.ctx.emit("if ");
                self.expr(&if_stat.condition);
                self.ctx.emit(" then");
                self.nested(&if_stat.then_block);
                for else_if in &if_stat.else_ifs {
                    self.ctx.emit("elseif ");
                    self.expr(&else_if.condition);
                    self.ctx.emit(" then");
                    self.nested(&else_if.block);
                }
                if let Some(else_block) = &if_stat.else_block {
                    self.ctx.emit("else");
                    self.nested(else_block);
                }
                self.ctx.emit("end");
            }
        }
        self.ctx.emit_newline();
    }

    /// Finish the current line and emit `block` one level deeper.
    fn nested(&mut self, block: &Block) {
        self.ctx.emit_newline();
        self.ctx.indent();
        self.statements(block);
        self.ctx.dedent();
    }

    /// `(params) body end`, with an empty body kept on one line.
    fn function_body(&mut self, function: &FunctionDefinition) {
        self.ctx.emit("(");
        let mut params: Vec<&str> = function.params.iter().map(|p| p.name.as_str()).collect();
        if function.is_variadic {
            params.push("...");
        }
        self.ctx.emit(&params.join(", "));
        self.ctx.emit(")");

        if function.body.is_empty() {
            self.ctx.emit(" end");
        } else {
            self.nested(&function.body);
            self.ctx.emit("end");
        }
    }
}

/// `local f` followed by `f = function ... end`.
fn local_function<'a>(
    declaration: &'a Stmt,
    definition: &'a Stmt,
) -> Option<(&'a str, &'a FunctionDefinition)> {
    let StmtKind::Local(local) = &declaration.kind else {
        return None;
    };
    let [name] = local.names.as_slice() else {
        return None;
    };
    if !local.values.is_empty() {
        return None;
    }
    let StmtKind::Assignment(assignment) = &definition.kind else {
        return None;
    };
    let ([target], [value]) = (assignment.targets.as_slice(), assignment.values.as_slice())
    else {
        return None;
    };
    let AssignableKind::Variable(Variable { prefix: None, name: target_name }) = &target.kind
    else {
        return None;
    };
    match &value.kind {
        ExprKind::Function(function) if target_name == name => Some((name, function)),
        _ => None,
    }
}

/// `a.b.c = function ... end`, returning the dotted path.
fn function_stat(stmt: &Stmt) -> Option<(String, &FunctionDefinition)> {
    let StmtKind::Assignment(assignment) = &stmt.kind else {
        return None;
    };
    let ([target], [value]) = (assignment.targets.as_slice(), assignment.values.as_slice())
    else {
        return None;
    };
    let ExprKind::Function(function) = &value.kind else {
        return None;
    };
    let AssignableKind::Variable(var) = &target.kind else {
        return None;
    };

    let mut path = vec![var.name.as_str()];
    let mut prefix = var.prefix.as_deref();
    while let Some(expr) = prefix {
        let ExprKind::Variable(var) = &expr.kind else {
            return None;
        };
        path.push(var.name.as_str());
        prefix = var.prefix.as_deref();
    }
    path.reverse();
    Some((path.join("."), function))
}

/// Whether the printed statement would open with `(`.
fn starts_with_paren(stmt: &Stmt) -> bool {
    match &stmt.kind {
        StmtKind::Call(call) => expr::leftmost_needs_parens(&call.callee),
        StmtKind::Assignment(assignment) => {
            if function_stat(stmt).is_some() {
                return false;
            }
            assignment.targets.first().is_some_and(|target| match &target.kind {
                AssignableKind::Variable(var) => var
                    .prefix
                    .as_deref()
                    .is_some_and(expr::leftmost_needs_parens),
                AssignableKind::TableAccess(access) => {
                    expr::leftmost_needs_parens(&access.target)
                }
            })
        }
        _ => false,
    }
}
