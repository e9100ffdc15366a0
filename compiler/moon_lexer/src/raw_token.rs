//! Raw token recognition with logos.
//!
//! Comments and long brackets need to look ahead for a matching closing
//! bracket, which regular patterns cannot express; callbacks scan the
//! remainder by hand and bump the lexer past it.

use logos::{Lexer, Logos};

use crate::LexErrorKind;

#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(error = LexErrorKind)]
#[logos(skip r"[ \t\r\n\x0B\x0C]+")]
pub(crate) enum RawToken {
    #[token("--", comment)]
    Comment,

    /// Keywords are split off from names during conversion.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Name,

    #[regex(r"[0-9]+(\.[0-9]*)?([eE][+-]?[0-9]+)?", decimal)]
    #[regex(r"\.[0-9]+([eE][+-]?[0-9]+)?", decimal)]
    #[regex(r"0[xX][0-9a-fA-F]+", hexadecimal)]
    Number(f64),

    /// Quoted string, still escaped.
    #[regex(r#""([^"\\\n]|\\(.|\n))*""#)]
    #[regex(r#"'([^'\\\n]|\\(.|\n))*'"#)]
    QuotedString,

    /// A quote that never closes before the end of the line.
    #[regex(r#""([^"\\\n]|\\(.|\n))*"#, unterminated_string)]
    #[regex(r#"'([^'\\\n]|\\(.|\n))*"#, unterminated_string)]
    UnterminatedString,

    /// `[[...]]` or `[==[...]==]`, holding the text between the brackets.
    #[regex(r"\[=*\[", long_string)]
    LongString(String),

    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("%")]
    Percent,
    #[token("^")]
    Caret,
    #[token("#")]
    Hash,
    #[token("==")]
    EqEq,
    #[token("~=")]
    TildeEq,
    #[token("<=")]
    LtEq,
    #[token(">=")]
    GtEq,
    #[token("<")]
    Lt,
    #[token(">")]
    Gt,
    #[token("=")]
    Eq,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token(";")]
    Semicolon,
    #[token(":")]
    Colon,
    #[token(",")]
    Comma,
    #[token(".")]
    Dot,
    #[token("..")]
    DotDot,
    #[token("...")]
    DotDotDot,
}

/// Length of a long-bracket opener (`[[`, `[=[`, ...) at the start of
/// `text`, with its level.
fn long_bracket_open(text: &str) -> Option<(usize, usize)> {
    let rest = text.strip_prefix('[')?;
    let level = rest.bytes().take_while(|&b| b == b'=').count();
    rest[level..].starts_with('[').then_some((level + 2, level))
}

/// Offset of the closing bracket for `level` in `text`, and its length.
fn find_long_close(text: &str, level: usize) -> Option<(usize, usize)> {
    let close = format!("]{}]", "=".repeat(level));
    text.find(&close).map(|at| (at, close.len()))
}

/// Skip a line comment or a long comment after `--`.
fn comment(lex: &mut Lexer<'_, RawToken>) -> Result<(), LexErrorKind> {
    let rest = lex.remainder();
    if let Some((open_len, level)) = long_bracket_open(rest) {
        let (at, close_len) = find_long_close(&rest[open_len..], level)
            .ok_or(LexErrorKind::UnterminatedComment)?;
        lex.bump(open_len + at + close_len);
    } else {
        lex.bump(rest.find('\n').unwrap_or(rest.len()));
    }
    Ok(())
}

fn long_string(lex: &mut Lexer<'_, RawToken>) -> Result<String, LexErrorKind> {
    let level = lex.slice().len() - 2;
    let rest = lex.remainder();
    let (at, close_len) =
        find_long_close(rest, level).ok_or(LexErrorKind::UnterminatedLongString)?;
    let body = crate::escape::long_string_body(&rest[..at]).to_string();
    lex.bump(at + close_len);
    Ok(body)
}

fn unterminated_string(_lex: &mut Lexer<'_, RawToken>) -> Result<(), LexErrorKind> {
    Err(LexErrorKind::UnterminatedString)
}

/// A number must not run straight into a name or another dot: `3x`, `1..2`
/// and `0x` are malformed rather than two tokens.
fn check_number_end(lex: &Lexer<'_, RawToken>) -> Result<(), LexErrorKind> {
    match lex.remainder().chars().next() {
        Some(c) if c.is_ascii_alphanumeric() || c == '_' || c == '.' => {
            Err(LexErrorKind::MalformedNumber)
        }
        _ => Ok(()),
    }
}

fn decimal(lex: &mut Lexer<'_, RawToken>) -> Result<f64, LexErrorKind> {
    check_number_end(lex)?;
    lex.slice()
        .parse::<f64>()
        .map_err(|_| LexErrorKind::MalformedNumber)
}

fn hexadecimal(lex: &mut Lexer<'_, RawToken>) -> Result<f64, LexErrorKind> {
    check_number_end(lex)?;
    // Accumulate in floating point so long literals lose precision instead
    // of overflowing.
    Ok(lex.slice()[2..]
        .chars()
        .filter_map(|c| c.to_digit(16))
        .fold(0.0, |acc, digit| acc * 16.0 + f64::from(digit)))
}
