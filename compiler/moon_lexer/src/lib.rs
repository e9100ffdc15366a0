//! Lexer for Moon using logos.
//!
//! [`lex`] turns source text into a [`TokenList`]. Whitespace and comments
//! are dropped, literals are decoded, and every token is stamped with the
//! 1-based line and column of its first character. Where each comment
//! started is kept on the list, see [`TokenList::comments`]. Lexing stops at
//! the first error.

mod error;
mod escape;
mod line_index;
mod raw_token;
mod token;

use logos::Logos;

pub use error::{LexError, LexErrorKind};
pub use token::{Token, TokenKind, TokenList};

use line_index::LineIndex;
use raw_token::RawToken;

/// Lex `source` into tokens ending with [`TokenKind::Eof`].
///
/// A first line starting with `#` (a `#!` interpreter line) is skipped and
/// counted as a comment.
pub fn lex(source: &str) -> Result<TokenList, LexError> {
    let index = LineIndex::new(source);
    let mut comments = Vec::new();
    let start = if source.starts_with('#') {
        comments.push(index.position(0));
        source.find('\n').unwrap_or(source.len())
    } else {
        0
    };

    let mut tokens = Vec::new();
    let mut raw = RawToken::lexer(&source[start..]);

    while let Some(result) = raw.next() {
        let span = raw.span();
        let offset = start + span.start;
        let slice = raw.slice();
        let pos = index.position(offset);

        let kind = match result {
            Ok(RawToken::Comment) => {
                comments.push(pos);
                continue;
            }
            Ok(token) => convert_token(token, slice).map_err(|(kind, at)| {
                LexError::new(kind, index.position(offset + at), snippet(slice))
            })?,
            Err(kind) => return Err(LexError::new(kind, pos, snippet(slice))),
        };
        tokens.push(Token::new(kind, pos));
    }

    Ok(TokenList::new(tokens, index.position(source.len())).with_comments(comments))
}

/// First line of an offending token, for error messages.
fn snippet(slice: &str) -> String {
    slice.lines().next().unwrap_or_default().to_string()
}

/// Convert a raw token, decoding literals.
///
/// Errors carry the byte offset within `slice` they refer to.
fn convert_token(raw: RawToken, slice: &str) -> Result<TokenKind, (LexErrorKind, usize)> {
    let kind = match raw {
        RawToken::Name => {
            TokenKind::keyword(slice).unwrap_or_else(|| TokenKind::Name(slice.to_string()))
        }
        RawToken::Number(value) => TokenKind::Number(value),
        RawToken::QuotedString => {
            // Both delimiters are single-byte quotes.
            let body = &slice[1..slice.len() - 1];
            let text = escape::unescape(body).map_err(|at| (LexErrorKind::InvalidEscape, at + 1))?;
            TokenKind::String(text)
        }
        RawToken::LongString(text) => TokenKind::String(text),
        RawToken::UnterminatedString => return Err((LexErrorKind::UnterminatedString, 0)),

        RawToken::Plus => TokenKind::Plus,
        RawToken::Minus => TokenKind::Minus,
        RawToken::Star => TokenKind::Star,
        RawToken::Slash => TokenKind::Slash,
        RawToken::Percent => TokenKind::Percent,
        RawToken::Caret => TokenKind::Caret,
        RawToken::Hash => TokenKind::Hash,
        RawToken::EqEq => TokenKind::EqEq,
        RawToken::TildeEq => TokenKind::TildeEq,
        RawToken::LtEq => TokenKind::LtEq,
        RawToken::GtEq => TokenKind::GtEq,
        RawToken::Lt => TokenKind::Lt,
        RawToken::Gt => TokenKind::Gt,
        RawToken::Eq => TokenKind::Eq,
        RawToken::LParen => TokenKind::LParen,
        RawToken::RParen => TokenKind::RParen,
        RawToken::LBrace => TokenKind::LBrace,
        RawToken::RBrace => TokenKind::RBrace,
        RawToken::LBracket => TokenKind::LBracket,
        RawToken::RBracket => TokenKind::RBracket,
        RawToken::Semicolon => TokenKind::Semicolon,
        RawToken::Colon => TokenKind::Colon,
        RawToken::Comma => TokenKind::Comma,
        RawToken::Dot => TokenKind::Dot,
        RawToken::DotDot => TokenKind::DotDot,
        RawToken::DotDotDot => TokenKind::DotDotDot,

        // Filtered by the caller.
        RawToken::Comment => return Err((LexErrorKind::InvalidCharacter, 0)),
    };
    Ok(kind)
}

#[cfg(test)]
mod tests;
