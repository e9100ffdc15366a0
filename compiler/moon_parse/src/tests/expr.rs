use pretty_assertions::assert_eq;

use super::{expr, sexp};
use moon_ir::ExprKind;

fn check(source: &str, expected: &str) {
    assert_eq!(sexp(&expr(source)), expected, "{source:?}");
}

#[test]
fn test_literals() {
    check("nil", "nil");
    check("true", "true");
    check("false", "false");
    check("1.5", "1.5");
    check("0x10", "16");
    check("'hi'", "\"hi\"");
    check("[[long]]", "\"long\"");
    check("...", "...");
}

#[test]
fn test_multiplicative_binds_tighter_than_additive() {
    check("1 + 2 * 3", "(+ 1 (* 2 3))");
    check("1 * 2 + 3", "(+ (* 1 2) 3)");
    check("a % b - c / d", "(- (% a b) (/ c d))");
}

#[test]
fn test_left_associative_operators() {
    check("1 - 2 - 3", "(- (- 1 2) 3)");
    check("a / b * c", "(* (/ a b) c)");
    check("a < b == c", "(== (< a b) c)");
    check("a and b and c", "(and (and a b) c)");
}

#[test]
fn test_right_associative_operators() {
    check("2 ^ 3 ^ 2", "(^ 2 (^ 3 2))");
    check("a .. b .. c", "(.. a (.. b c))");
}

#[test]
fn test_concat_sits_between_comparison_and_additive() {
    check("a .. b + c", "(.. a (+ b c))");
    check("1 + 2 .. 3", "(.. (+ 1 2) 3)");
    check("a .. b == c", "(== (.. a b) c)");
}

#[test]
fn test_logical_operators() {
    check("a or b and c", "(or a (and b c))");
    check("a and b or c", "(or (and a b) c)");
    check("not a == b", "(== (not a) b)");
}

#[test]
fn test_unary_operators() {
    check("-x ^ 2", "(- (^ x 2))");
    check("2 ^ -3", "(^ 2 (- 3))");
    check("#t + 1", "(+ (# t) 1)");
    check("- - x", "(- (- x))");
    check("not not x", "(not (not x))");
    check("-a * b", "(* (- a) b)");
}

#[test]
fn test_grouping_overrides_precedence() {
    check("(1 + 2) * 3", "(* (+ 1 2) 3)");
    check("(2 ^ 3) ^ 2", "(^ (^ 2 3) 2)");
    check("((x))", "x");
}

#[test]
fn test_field_and_index_suffixes() {
    check("a.b.c", "(. (. a b) c)");
    check("a[1]", "([] a 1)");
    check("a[b][c]", "([] ([] a b) c)");
    check("a.b[c].d", "(. ([] (. a b) c) d)");
    check("(a).b", "(. a b)");
}

#[test]
fn test_call_suffixes() {
    check("f()", "(call f)");
    check("f(1, 2)", "(call f 1 2)");
    check("f 'x'", "(call f \"x\")");
    check("f{1}", "(call f {1})");
    check("f()()", "(call (call f))");
    check("a.b(c)[d]", "([] (call (. a b) c) d)");
    check("(f)()", "(call f)");
    check("f(...)", "(call f ...)");
}

#[test]
fn test_table_constructors() {
    check("{}", "{}");
    check("{1, 2, x = 3, 4}", "{1, 2, [\"x\"]=3, 4}");
    check("{[1 + 1] = 'a'; b}", "{[(+ 1 1)]=\"a\", b}");
    check("{1,}", "{1}");
    check("{x == 1}", "{(== x 1)}");
    check("{{}}", "{{}}");
}

#[test]
fn test_duplicate_keys_are_kept_in_order() {
    check("{[1] = a, [1] = b}", "{[1]=a, [1]=b}");
}

#[test]
fn test_function_literals() {
    check("function() end", "(function () #0)");
    check("function(a, b) return a end", "(function (a b) #1)");
    check("function(...) return ... end", "(function (...) #1)");
    check("function(a, ...) end", "(function (a ...) #0)");
}

#[test]
fn test_function_literal_flags_variadic() {
    let ExprKind::Function(function) = expr("function(a, ...) end").into_kind() else {
        panic!("expected a function literal");
    };
    assert!(function.is_variadic);
    assert_eq!(function.params.len(), 1);
    assert_eq!(function.params[0].name, "a");
}

#[test]
fn test_parentheses_truncate_calls_and_varargs() {
    check("(f())", "(single (call f))");
    check("((f(1)))", "(single (call f 1))");
    check("(...)", "(single ...)");
    check("(f()).x", "(. (single (call f)) x)");
    check("(f())()", "(call (single (call f)))");
    // Only multi-value shapes carry the truncation.
    check("(a.b)", "(. a b)");

    assert!(expr("f()").is_multi_value());
    assert!(!expr("(f())").is_multi_value());
    assert!(!expr("(...)").is_multi_value());
}

#[test]
fn test_deeply_nested_tables_parse_and_drop() {
    let depth = 200_000;
    let source = format!("x = {}{}", "{".repeat(depth), "}".repeat(depth));
    let block = crate::parse(&source).unwrap();
    assert_eq!(block.len(), 1);
    drop(block);
}

#[test]
fn test_deeply_nested_groups() {
    let depth = 10_000;
    let source = format!("{}1{}", "(".repeat(depth), ")".repeat(depth));
    check(&source, "1");
}
