use super::*;
use crate::{Position, TableConstructor};

fn at(line: u32, column: u32) -> Position {
    Position::new(line, column)
}

/// Records every variable name and literal number in visit order.
#[derive(Default)]
struct Trace {
    seen: Vec<String>,
}

impl<'ast> Visitor<'ast> for Trace {
    fn visit_expr(&mut self, expr: &'ast Expr) {
        match &expr.kind {
            ExprKind::Variable(var) => self.seen.push(var.name.clone()),
            ExprKind::Number(n) => self.seen.push(n.to_string()),
            _ => {}
        }
        walk_expr(self, expr);
    }

    fn visit_assignable(&mut self, target: &'ast Assignable) {
        if let AssignableKind::Variable(var) = &target.kind {
            self.seen.push(format!("={}", var.name));
        }
        walk_assignable(self, target);
    }

    fn visit_argument(&mut self, argument: &'ast Argument) {
        self.seen.push(format!("param {}", argument.name));
    }
}

#[test]
fn test_repeat_visits_body_before_condition() {
    let body = Block::new(
        vec![Stmt::call(Expr::name("step", at(2, 5)), vec![], at(2, 5))],
        at(2, 5),
    );
    let stmt = Stmt::new(
        StmtKind::Repeat(crate::RepeatStat {
            body,
            condition: Expr::name("done", at(3, 7)),
        }),
        at(1, 1),
    );

    let mut trace = Trace::default();
    trace.visit_stmt(&stmt);
    assert_eq!(trace.seen, vec!["step", "done"]);
}

#[test]
fn test_assignment_visits_targets_then_values() {
    let stmt = Stmt::assign(
        vec![Assignable::name("a", at(1, 1)), Assignable::name("b", at(1, 4))],
        vec![Expr::number(1.0, at(1, 8)), Expr::number(2.0, at(1, 11))],
        at(1, 1),
    );

    let mut trace = Trace::default();
    trace.visit_stmt(&stmt);
    assert_eq!(trace.seen, vec!["=a", "=b", "1", "2"]);
}

#[test]
fn test_function_literal_visits_params_then_body() {
    let function = FunctionDefinition {
        params: vec![Argument::new("x", at(1, 10))],
        is_variadic: false,
        body: Block::new(
            vec![Stmt::ret(vec![Expr::name("x", at(1, 20))], at(1, 13))],
            at(1, 13),
        ),
    };
    let expr = Expr::new(ExprKind::Function(function), at(1, 1));

    let mut trace = Trace::default();
    trace.visit_expr(&expr);
    assert_eq!(trace.seen, vec!["param x", "x"]);
}

#[test]
fn test_table_entries_visit_key_before_value() {
    let table = TableConstructor::new(vec![
        crate::TableEntry::positional(Expr::number(1.0, at(1, 2))),
        crate::TableEntry::keyed(Expr::name("k", at(1, 6)), Expr::number(2.0, at(1, 11))),
    ]);
    let expr = Expr::new(ExprKind::Table(table), at(1, 1));

    let mut trace = Trace::default();
    trace.visit_expr(&expr);
    assert_eq!(trace.seen, vec!["1", "k", "2"]);
}

#[test]
fn test_if_chain_visited_in_order() {
    let stmt = Stmt::new(
        StmtKind::If(crate::IfStat {
            condition: Expr::name("a", at(1, 4)),
            then_block: Block::empty(at(1, 11)),
            else_ifs: vec![ElseIf::new(
                Expr::name("b", at(2, 8)),
                Block::empty(at(2, 15)),
                at(2, 1),
            )],
            else_block: Some(Block::new(
                vec![Stmt::call(Expr::name("c", at(4, 5)), vec![], at(4, 5))],
                at(4, 5),
            )),
        }),
        at(1, 1),
    );

    let mut trace = Trace::default();
    trace.visit_stmt(&stmt);
    assert_eq!(trace.seen, vec!["a", "b", "c"]);
}

#[test]
fn test_call_visits_callee_then_args() {
    let expr = Expr::call(
        Expr::field(Expr::name("io", at(1, 1)), "write", at(1, 1)),
        vec![Expr::name("x", at(1, 10)), Expr::number(3.0, at(1, 13))],
        at(1, 1),
    );

    let mut trace = Trace::default();
    trace.visit_expr(&expr);
    assert_eq!(trace.seen, vec!["write", "io", "x", "3"]);
}
