use pretty_assertions::assert_eq;

use super::*;

fn tokens(source: &str) -> TokenList {
    moon_lexer::lex(source).unwrap()
}

#[test]
fn test_advance_stops_at_eof() {
    let list = tokens("x");
    let mut cursor = Cursor::new(&list);
    assert!(cursor.check(&TokenKind::Name(String::new())));
    cursor.advance();
    assert!(cursor.is_at_end());
    cursor.advance();
    cursor.advance();
    assert!(cursor.is_at_end());
}

#[test]
fn test_check_ignores_payload() {
    let list = tokens("foo 1");
    let cursor = Cursor::new(&list);
    assert!(cursor.check(&TokenKind::Name(String::new())));
    assert_eq!(cursor.peek_next_kind(), &TokenKind::Number(1.0));
}

#[test]
fn test_eat() {
    let list = tokens("; x");
    let mut cursor = Cursor::new(&list);
    assert!(!cursor.eat(&TokenKind::Comma));
    assert!(cursor.eat(&TokenKind::Semicolon));
    assert_eq!(cursor.current_kind(), &TokenKind::Name("x".to_string()));
}

#[test]
fn test_expect_reports_found_token() {
    let list = tokens("do");
    let mut cursor = Cursor::new(&list);
    let err = cursor.expect(&TokenKind::Then).unwrap_err();
    assert_eq!(err.to_string(), "expected `then`, found `do` at line 1, column 1");
}

#[test]
fn test_expect_closing_names_opener_on_other_line() {
    let list = tokens("\n\nx");
    let mut cursor = Cursor::new(&list);
    let err = cursor
        .expect_closing(&TokenKind::End, &TokenKind::While, Position::new(1, 1))
        .unwrap_err();
    assert_eq!(
        err.kind.to_string(),
        "expected `end` (to close `while` at line 1), found name `x`"
    );
}

#[test]
fn test_expect_name() {
    let list = tokens("alpha end");
    let mut cursor = Cursor::new(&list);
    assert_eq!(
        cursor.expect_name().unwrap(),
        ("alpha".to_string(), Position::new(1, 1))
    );
    let err = cursor.expect_name().unwrap_err();
    assert_eq!(
        err.kind,
        ParseErrorKind::ExpectedName {
            found: TokenKind::End
        }
    );
}

#[test]
fn test_block_end_tokens() {
    for source in ["", "end", "else", "elseif", "until"] {
        let list = tokens(source);
        assert!(Cursor::new(&list).at_block_end(), "{source:?}");
    }
    let list = tokens("return");
    assert!(!Cursor::new(&list).at_block_end());
}
