use pretty_assertions::assert_eq;

use super::*;

#[test]
fn test_plain_text_untouched() {
    assert_eq!(unescape("hello world").unwrap(), "hello world");
    assert_eq!(unescape("").unwrap(), "");
}

#[test]
fn test_single_char_escapes() {
    assert_eq!(
        unescape(r#"\a\b\f\n\r\t\v\\\"\'"#).unwrap(),
        "\u{7}\u{8}\u{c}\n\r\t\u{b}\\\"'"
    );
}

#[test]
fn test_decimal_escapes() {
    assert_eq!(unescape(r"\65\066\0677").unwrap(), "ABC7");
    assert_eq!(unescape(r"\0").unwrap(), "\0");
    assert_eq!(unescape(r"\233").unwrap(), "\u{e9}");
}

#[test]
fn test_decimal_escape_too_large() {
    assert_eq!(unescape(r"ab\256"), Err(2));
}

#[test]
fn test_unknown_escape_reports_backslash() {
    assert_eq!(unescape(r"x\q"), Err(1));
    assert_eq!(unescape("\\"), Err(0));
}

#[test]
fn test_backslash_newline() {
    assert_eq!(unescape("a\\\nb").unwrap(), "a\nb");
    assert_eq!(unescape("a\\\r\nb").unwrap(), "a\nb");
}

#[test]
fn test_long_string_drops_first_newline_only() {
    assert_eq!(long_string_body("\nline\n"), "line\n");
    assert_eq!(long_string_body("\r\nline"), "line");
    assert_eq!(long_string_body("\n\nx"), "\nx");
    assert_eq!(long_string_body("inline"), "inline");
}
