#![allow(clippy::unwrap_used, clippy::expect_used)]
//! Golden tests: source in, expected formatting out.

use moon_fmt::format_block;
use moon_ir::{BinaryOp, Block, Expr, ExprKind, Position, Stmt, StmtKind, UnaryOp};
use moon_parse::parse;
use pretty_assertions::assert_eq;

fn format(source: &str) -> String {
    format_block(&parse(source).expect("source should parse"))
}

#[test]
fn test_spacing_is_normalized() {
    assert_eq!(format("x=1;y  =  x+2*3"), "x = 1\ny = x + 2 * 3\n");
}

#[test]
fn test_redundant_parens_are_dropped() {
    assert_eq!(
        format("x = ((a + b)) + (c * d) .. (e .. f)"),
        "x = a + b + c * d .. e .. f\n"
    );
}

#[test]
fn test_required_parens_are_kept() {
    assert_eq!(
        format("x = (a + b) * c - (d - e)"),
        "x = (a + b) * c - (d - e)\n"
    );
    assert_eq!(format("x = (a .. b) .. c"), "x = (a .. b) .. c\n");
    assert_eq!(format("x = -(a + b)"), "x = -(a + b)\n");
    assert_eq!(format("x = (-a) ^ 2"), "x = (-a) ^ 2\n");
}

#[test]
fn test_control_flow() {
    let source = "
        while x > 0 do x = x - 1 end
        repeat local y = f() until y
        for i = 1, 10, 2 do print(i) end
        for k, v in pairs(t) do end
        if a then b() elseif c then d() else e() end
        do break end
    ";
    let expected = "\
while x > 0 do
    x = x - 1
end
repeat
    local y = f()
until y
for i = 1, 10, 2 do
    print(i)
end
for k, v in pairs(t) do
end
if a then
    b()
elseif c then
    d()
else
    e()
end
do
    break
end
";
    assert_eq!(format(source), expected);
}

#[test]
fn test_functions() {
    let source = "
        local function fib(n) if n < 2 then return n end return fib(n-1) + fib(n-2) end
        function M.util.sum(...) local s = 0 for _, v in ipairs({...}) do s = s + v end return s end
        callbacks[1] = function() end
    ";
    let expected = "\
local function fib(n)
    if n < 2 then
        return n
    end
    return fib(n - 1) + fib(n - 2)
end
function M.util.sum(...)
    local s = 0
    for _, v in ipairs({...}) do
        s = s + v
    end
    return s
end
callbacks[1] = function() end
";
    assert_eq!(format(source), expected);
}

#[test]
fn test_call_sugar_is_expanded() {
    assert_eq!(
        format("require 'mod' f{1, 2}"),
        "require(\"mod\")\nf({1, 2})\n"
    );
}

#[test]
fn test_tables() {
    assert_eq!(
        format("t = {1, 2; x = 3, ['y'] = 4, ['not ok'] = 5, [1 + 1] = 6,}"),
        "t = {1, 2, x = 3, y = 4, [\"not ok\"] = 5, [1 + 1] = 6}\n"
    );
}

#[test]
fn test_strings_are_requoted() {
    assert_eq!(
        format(r"s = 'it\'s' .. [[long
text]] .. '\65\t'"),
        "s = \"it's\" .. \"long\\ntext\" .. \"A\\t\"\n"
    );
}

#[test]
fn test_single_value_parens_are_kept() {
    assert_eq!(format("return (f())"), "return (f())\n");
    assert_eq!(format("t = {(...)}"), "t = {(...)}\n");
    assert_eq!(format("g((f()))"), "g((f()))\n");
    assert_eq!(format("x = ((f())).y"), "x = (f()).y\n");
    assert_eq!(format("return f(), (...)"), "return f(), (...)\n");
}

#[test]
fn test_multi_value_calls_stay_bare() {
    assert_eq!(format("return f()"), "return f()\n");
    assert_eq!(format("g(f())"), "g(f())\n");
    assert_eq!(format("t = {...}"), "t = {...}\n");
}

#[test]
fn test_non_finite_numbers_come_back_as_expressions() {
    let at = Position::UNKNOWN;
    let chunk = Block::new(
        vec![Stmt::ret(
            vec![
                Expr::number(f64::NAN, at),
                Expr::number(f64::NEG_INFINITY, at),
                Expr::number(f64::INFINITY, at),
            ],
            at,
        )],
        at,
    );
    let formatted = format_block(&chunk);
    assert_eq!(formatted, "return (0 / 0), -1e999, 1e999\n");

    let reparsed = parse(&formatted).unwrap();
    let StmtKind::Return(ret) = &reparsed.statements[0].kind else {
        panic!("expected a return statement");
    };
    assert!(matches!(
        ret.values[0].kind,
        ExprKind::Binary {
            op: BinaryOp::Division,
            ..
        }
    ));
    assert!(matches!(
        ret.values[1].kind,
        ExprKind::Unary {
            op: UnaryOp::Negate,
            ..
        }
    ));
    assert!(matches!(ret.values[2].kind, ExprKind::Number(value) if value == f64::INFINITY));
    assert_eq!(format_block(&reparsed), formatted);
}

#[test]
fn test_empty_chunk() {
    assert_eq!(format(""), "");
}
