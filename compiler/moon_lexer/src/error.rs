//! Lexer errors.

use moon_ir::{Position, Positioned};
use thiserror::Error;

/// What went wrong while splitting source into tokens.
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash, Error)]
pub enum LexErrorKind {
    #[default]
    #[error("unexpected character")]
    InvalidCharacter,
    #[error("unfinished string")]
    UnterminatedString,
    #[error("unfinished long string")]
    UnterminatedLongString,
    #[error("unfinished long comment")]
    UnterminatedComment,
    #[error("invalid escape sequence")]
    InvalidEscape,
    #[error("malformed number")]
    MalformedNumber,
}

/// A lexer error at the position where the offending token starts.
///
/// For escape errors the position is that of the backslash.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Error)]
#[error("{kind} at line {}, column {}", pos.line(), pos.column())]
pub struct LexError {
    pub kind: LexErrorKind,
    pub pos: Position,
    /// The source text the error is about, truncated to one line.
    pub snippet: String,
}

impl LexError {
    pub fn new(kind: LexErrorKind, pos: Position, snippet: impl Into<String>) -> Self {
        LexError {
            kind,
            pos,
            snippet: snippet.into(),
        }
    }
}

impl Positioned for LexError {
    fn position(&self) -> Position {
        self.pos
    }
}
