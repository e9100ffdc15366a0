use pretty_assertions::assert_eq;

use super::*;
use moon_ir::Position;

fn kinds(source: &str) -> Vec<TokenKind> {
    lex(source).unwrap().kinds()
}

fn name(n: &str) -> TokenKind {
    TokenKind::Name(n.to_string())
}

fn string(s: &str) -> TokenKind {
    TokenKind::String(s.to_string())
}

fn error(source: &str) -> LexError {
    lex(source).unwrap_err()
}

#[test]
fn test_lex_basic() {
    assert_eq!(
        kinds("local x = 42"),
        vec![
            TokenKind::Local,
            name("x"),
            TokenKind::Eq,
            TokenKind::Number(42.0),
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_empty_source_is_just_eof() {
    let tokens = lex("").unwrap();
    assert_eq!(tokens.kinds(), vec![TokenKind::Eof]);
    assert_eq!(tokens.get(0).pos, Position::new(1, 1));
}

#[test]
fn test_keywords_and_names() {
    assert_eq!(
        kinds("while whiles end_ elseif"),
        vec![
            TokenKind::While,
            name("whiles"),
            name("end_"),
            TokenKind::ElseIf,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_symbols_longest_match() {
    assert_eq!(
        kinds("... .. . == = ~= <= < >= > # ^"),
        vec![
            TokenKind::DotDotDot,
            TokenKind::DotDot,
            TokenKind::Dot,
            TokenKind::EqEq,
            TokenKind::Eq,
            TokenKind::TildeEq,
            TokenKind::LtEq,
            TokenKind::Lt,
            TokenKind::GtEq,
            TokenKind::Gt,
            TokenKind::Hash,
            TokenKind::Caret,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_numbers() {
    assert_eq!(
        kinds("3 3.0 3.1416 314.16e-2 0.31416E1 0xff 0x56 .5 5."),
        vec![
            TokenKind::Number(3.0),
            TokenKind::Number(3.0),
            TokenKind::Number(3.1416),
            TokenKind::Number(3.1416),
            TokenKind::Number(3.1416),
            TokenKind::Number(255.0),
            TokenKind::Number(86.0),
            TokenKind::Number(0.5),
            TokenKind::Number(5.0),
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_malformed_numbers() {
    for source in ["3x", "1..2", "0x", "1e", "0xfg"] {
        assert_eq!(error(source).kind, LexErrorKind::MalformedNumber, "{source}");
    }
}

#[test]
fn test_concat_after_name_is_fine() {
    assert_eq!(
        kinds("a..b"),
        vec![name("a"), TokenKind::DotDot, name("b"), TokenKind::Eof]
    );
}

#[test]
fn test_short_strings() {
    assert_eq!(
        kinds(r#""hi" 'there' "say \"x\"" 'it\'s' "tab\tend""#),
        vec![
            string("hi"),
            string("there"),
            string("say \"x\""),
            string("it's"),
            string("tab\tend"),
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_quotes_nest_inside_other_quotes() {
    assert_eq!(
        kinds(r#"'say "hi"' "it's""#),
        vec![string("say \"hi\""), string("it's"), TokenKind::Eof]
    );
}

#[test]
fn test_long_strings() {
    assert_eq!(
        kinds("[[\nfirst\nsecond]] [==[a]]b]=]c]==] [[]]"),
        vec![
            string("first\nsecond"),
            string("a]]b]=]c"),
            string(""),
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_long_string_keeps_escapes_raw() {
    assert_eq!(kinds(r"[[a\nb]]"), vec![string(r"a\nb"), TokenKind::Eof]);
}

#[test]
fn test_comments_are_skipped() {
    let source = "-- line comment\nx --[[ long\ncomment ]] = --[==[ ]] ]==] 1 -- trailing";
    assert_eq!(
        kinds(source),
        vec![name("x"), TokenKind::Eq, TokenKind::Number(1.0), TokenKind::Eof]
    );
}

#[test]
fn test_comment_positions_are_recorded() {
    let tokens = lex("x = 1 -- trailing\n--[[ long\n]] y = 2\n").unwrap();
    assert_eq!(
        tokens.comments(),
        &[Position::new(1, 7), Position::new(2, 1)]
    );
    assert!(lex("x = a - -b").unwrap().comments().is_empty());
    assert_eq!(
        lex("#!/usr/bin/env moon\nprint(1)").unwrap().comments(),
        &[Position::new(1, 1)]
    );
}

#[test]
fn test_comment_with_unbalanced_bracket_is_a_line_comment() {
    assert_eq!(
        kinds("--[= not long\ny"),
        vec![name("y"), TokenKind::Eof]
    );
}

#[test]
fn test_minus_is_not_a_comment() {
    assert_eq!(
        kinds("a - -b"),
        vec![
            name("a"),
            TokenKind::Minus,
            TokenKind::Minus,
            name("b"),
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_positions() {
    let tokens = lex("local x = 1\n  return x\n").unwrap();
    let positions: Vec<(u32, u32)> = tokens
        .iter()
        .map(|t| (t.pos.line(), t.pos.column()))
        .collect();
    assert_eq!(
        positions,
        vec![(1, 1), (1, 7), (1, 9), (1, 11), (2, 3), (2, 10), (3, 1)]
    );
}

#[test]
fn test_positions_after_multiline_tokens() {
    let tokens = lex("s = [[\na\nb]] t\n--[[\n]] u").unwrap();
    let t = tokens.get(3);
    assert_eq!(t.kind, name("t"));
    assert_eq!(t.pos, Position::new(3, 5));
    let u = tokens.get(4);
    assert_eq!(u.kind, name("u"));
    assert_eq!(u.pos, Position::new(5, 4));
}

#[test]
fn test_shebang_line_skipped() {
    let tokens = lex("#!/usr/bin/env moon\nprint(1)").unwrap();
    assert_eq!(tokens.get(0).kind, name("print"));
    assert_eq!(tokens.get(0).pos, Position::new(2, 1));
}

#[test]
fn test_hash_later_is_length_operator() {
    assert_eq!(kinds("x = #t")[2], TokenKind::Hash);
}

#[test]
fn test_invalid_character() {
    let err = error("x = 1\ny = @");
    assert_eq!(err.kind, LexErrorKind::InvalidCharacter);
    assert_eq!(err.pos, Position::new(2, 5));
    assert_eq!(err.snippet, "@");
}

#[test]
fn test_unterminated_string() {
    let err = error("x = \"abc\ny = 2");
    assert_eq!(err.kind, LexErrorKind::UnterminatedString);
    assert_eq!(err.pos, Position::new(1, 5));

    assert_eq!(error("'abc").kind, LexErrorKind::UnterminatedString);
}

#[test]
fn test_unterminated_long_forms() {
    assert_eq!(error("x = [[abc").kind, LexErrorKind::UnterminatedLongString);
    assert_eq!(error("x = [=[abc]]").kind, LexErrorKind::UnterminatedLongString);
    assert_eq!(error("--[[ never closed").kind, LexErrorKind::UnterminatedComment);
}

#[test]
fn test_invalid_escape_points_at_backslash() {
    let err = error(r#"s = "ok\qno""#);
    assert_eq!(err.kind, LexErrorKind::InvalidEscape);
    assert_eq!(err.pos, Position::new(1, 8));
}

#[test]
fn test_error_display() {
    let err = error("x = $");
    assert_eq!(err.to_string(), "unexpected character at line 1, column 5");
}
