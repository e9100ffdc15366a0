use pretty_assertions::assert_eq;

use super::*;

#[test]
fn test_builder_collects_everything() {
    let diag = Diagnostic::error(ErrorCode::E1002)
        .with_message("expected expression, found `)`")
        .with_label(Position::new(3, 9), "expected expression")
        .with_secondary_label(Position::new(3, 5), "this `(` is unclosed")
        .with_note("operators need two operands")
        .with_suggestion("remove the trailing `+`");

    assert!(diag.is_error());
    assert_eq!(diag.labels.len(), 2);
    assert_eq!(diag.primary_position(), Some(Position::new(3, 9)));
    assert_eq!(diag.notes, vec!["operators need two operands"]);
    assert_eq!(diag.suggestions, vec!["remove the trailing `+`"]);
}

#[test]
fn test_primary_position_skips_secondary() {
    let diag = Diagnostic::warning(ErrorCode::E1001)
        .with_secondary_label(Position::new(1, 1), "context")
        .with_label(Position::new(2, 4), "here");
    assert!(!diag.is_error());
    assert_eq!(diag.primary_position(), Some(Position::new(2, 4)));
}

#[test]
fn test_runtime_error_names_line() {
    let diag = Diagnostic::runtime_error("attempt to call a nil value", Position::new(12, 5));
    assert_eq!(diag.code, ErrorCode::E2001);
    assert_eq!(diag.message, "attempt to call a nil value at line 12");
    assert_eq!(diag.primary_position(), Some(Position::new(12, 5)));
}

#[test]
fn test_runtime_error_without_position() {
    let diag = Diagnostic::runtime_error("stack overflow", Position::UNKNOWN);
    assert_eq!(diag.message, "stack overflow");
    assert!(diag.labels.is_empty());
}

#[test]
fn test_display_header() {
    let diag = Diagnostic::error(ErrorCode::E1006).with_message("`return` must end its block");
    assert_eq!(diag.to_string(), "error[E1006]: `return` must end its block");
    assert_eq!(Severity::Note.to_string(), "note");
}
