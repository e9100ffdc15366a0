use pretty_assertions::assert_eq;

use moon_ir::visitor::{walk_assignable, walk_block, walk_expr, walk_stmt};
use moon_ir::{
    Argument, Assignable, Block, ElseIf, Expr, ExprKind, Position, Positioned, Stmt, StmtKind,
    Visitor,
};

use super::{at, parse_ok, single};

/// Collects the position of every node in the tree.
#[derive(Default)]
struct AllPositions(Vec<Position>);

impl<'ast> Visitor<'ast> for AllPositions {
    fn visit_block(&mut self, block: &'ast Block) {
        self.0.push(block.position());
        walk_block(self, block);
    }

    fn visit_stmt(&mut self, stmt: &'ast Stmt) {
        self.0.push(stmt.position());
        walk_stmt(self, stmt);
    }

    fn visit_expr(&mut self, expr: &'ast Expr) {
        self.0.push(expr.position());
        walk_expr(self, expr);
    }

    fn visit_assignable(&mut self, target: &'ast Assignable) {
        self.0.push(target.position());
        walk_assignable(self, target);
    }

    fn visit_argument(&mut self, argument: &'ast Argument) {
        self.0.push(argument.position());
    }

    fn visit_else_if(&mut self, else_if: &'ast ElseIf) {
        self.0.push(else_if.position());
        self.visit_expr(&else_if.condition);
        self.visit_block(&else_if.block);
    }
}

const PROGRAM: &str = "\
local function count(n, ...)
  local total = 0
  for i = 1, n do
    if i % 2 == 0 then
      total = total + i
    elseif i > 5 then
      break
    else
      t[i] = {i, name = 'x'}
    end
  end
  repeat total = total - 1 until total < 0
  return total, ...
end
print(count(10))
";

#[test]
fn test_every_node_has_a_real_position() {
    let block = parse_ok(PROGRAM);
    let mut positions = AllPositions::default();
    positions.visit_block(&block);

    assert!(positions.0.len() > 40);
    for pos in positions.0 {
        assert!(pos.is_known(), "unknown position in tree");
        assert!(pos.line() >= 1 && pos.column() >= 1, "{pos:?}");
    }
}

#[test]
fn test_statement_positions_are_keyword_positions() {
    let block = parse_ok("local x = 1\nwhile x < 10 do\n  x = x + 1\nend\n");
    assert_eq!(block.position(), at(1, 1));
    assert_eq!(block.statements[0].position(), at(1, 1));
    assert_eq!(block.statements[1].position(), at(2, 1));

    let StmtKind::While(while_stat) = &block.statements[1].kind else {
        panic!("expected while");
    };
    assert_eq!(while_stat.condition.position(), at(2, 7));
    assert_eq!(while_stat.body.position(), at(3, 3));

    let body_stmt = &while_stat.body.statements[0];
    assert_eq!(body_stmt.position(), at(3, 3));
    let StmtKind::Assignment(assignment) = &body_stmt.kind else {
        panic!("expected assignment");
    };
    assert_eq!(assignment.targets[0].position(), at(3, 3));
    let ExprKind::Binary { left, right, .. } = &assignment.values[0].kind else {
        panic!("expected binary");
    };
    assert_eq!(assignment.values[0].position(), at(3, 7));
    assert_eq!(left.position(), at(3, 7));
    assert_eq!(right.position(), at(3, 11));
}

#[test]
fn test_empty_block_takes_closing_token_position() {
    let StmtKind::While(while_stat) = single("while x do end").into_kind() else {
        panic!("expected while");
    };
    assert_eq!(while_stat.body.position(), at(1, 12));
}

#[test]
fn test_suffix_positions_start_at_the_prefix() {
    let StmtKind::Call(call) = single("  print(a.b[1])").into_kind() else {
        panic!("expected call");
    };
    assert_eq!(call.callee.position(), at(1, 3));
    assert_eq!(call.args[0].position(), at(1, 9));

    let ExprKind::TableAccess(access) = &call.args[0].kind else {
        panic!("expected table access");
    };
    assert_eq!(access.target.position(), at(1, 9));
    assert_eq!(access.index.position(), at(1, 13));
}

#[test]
fn test_unary_position_is_the_operator() {
    let StmtKind::Assignment(assignment) = single("x = -y").into_kind() else {
        panic!("expected assignment");
    };
    assert_eq!(assignment.values[0].position(), at(1, 5));
}

#[test]
fn test_function_positions() {
    let block = parse_ok("local function f(a, b) end");
    assert_eq!(block.statements[0].position(), at(1, 1));
    assert_eq!(block.statements[1].position(), at(1, 1));

    let StmtKind::Assignment(assignment) = &block.statements[1].kind else {
        panic!("expected assignment");
    };
    assert_eq!(assignment.targets[0].position(), at(1, 16));
    let function = &assignment.values[0];
    assert_eq!(function.position(), at(1, 7));
    let ExprKind::Function(definition) = &function.kind else {
        panic!("expected function");
    };
    assert_eq!(definition.params[0].position(), at(1, 18));
    assert_eq!(definition.params[1].position(), at(1, 21));
}

#[test]
fn test_else_if_position() {
    let StmtKind::If(if_stat) = single("if a then\nelseif b then\nend").into_kind() else {
        panic!("expected if");
    };
    assert_eq!(if_stat.else_ifs[0].position(), at(2, 1));
    assert_eq!(if_stat.else_ifs[0].condition.position(), at(2, 8));
}

#[test]
fn test_columns_count_characters() {
    let StmtKind::Assignment(assignment) = single("s = 'héllo' .. x").into_kind() else {
        panic!("expected assignment");
    };
    let ExprKind::Binary { right, .. } = &assignment.values[0].kind else {
        panic!("expected binary");
    };
    assert_eq!(right.position(), at(1, 16));
}
