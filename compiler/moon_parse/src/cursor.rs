//! Token cursor for navigating the token stream.

use moon_ir::Position;
use moon_lexer::{Token, TokenKind, TokenList};
use tracing::trace;

use crate::error::{ParseError, ParseErrorKind};

/// Cursor over a [`TokenList`].
///
/// The list always ends with EOF, and the cursor never moves past it, so
/// `current()` is always valid.
pub struct Cursor<'a> {
    tokens: &'a TokenList,
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(tokens: &'a TokenList) -> Self {
        Cursor { tokens, pos: 0 }
    }

    #[inline]
    pub fn current(&self) -> &'a Token {
        self.tokens.get(self.pos)
    }

    #[inline]
    pub fn current_kind(&self) -> &'a TokenKind {
        &self.current().kind
    }

    #[inline]
    pub fn current_pos(&self) -> Position {
        self.current().pos
    }

    /// Kind of the token after the current one.
    #[inline]
    pub fn peek_next_kind(&self) -> &'a TokenKind {
        &self.tokens.get(self.pos + 1).kind
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.current_kind().is_eof()
    }

    /// Whether the current token has the same kind as `kind`, ignoring
    /// literal payloads.
    #[inline]
    pub fn check(&self, kind: &TokenKind) -> bool {
        self.current_kind().same_kind(kind)
    }

    /// Whether the current token closes a block.
    pub fn at_block_end(&self) -> bool {
        matches!(
            self.current_kind(),
            TokenKind::Eof
                | TokenKind::End
                | TokenKind::Else
                | TokenKind::ElseIf
                | TokenKind::Until
        )
    }

    /// Consume the current token. Stays put on EOF.
    pub fn advance(&mut self) -> &'a Token {
        let token = self.current();
        trace!(index = self.pos, kind = ?token.kind, pos = %token.pos, "advance");
        if !token.kind.is_eof() {
            self.pos += 1;
        }
        token
    }

    /// Consume the current token if it matches.
    pub fn eat(&mut self, kind: &TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consume a token of `kind` or fail with `UnexpectedToken`.
    pub fn expect(&mut self, kind: &TokenKind) -> Result<&'a Token, ParseError> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            Err(self.unexpected(kind.to_string()))
        }
    }

    /// Consume a closing keyword, naming the opener in the error.
    ///
    /// `expected 'end' (to close 'while' at line 3), found end of file`
    pub fn expect_closing(
        &mut self,
        kind: &TokenKind,
        opener: &TokenKind,
        open_pos: Position,
    ) -> Result<&'a Token, ParseError> {
        if self.check(kind) {
            return Ok(self.advance());
        }
        let expected = if open_pos.line() == self.current_pos().line() {
            kind.to_string()
        } else {
            format!("{kind} (to close {opener} at line {})", open_pos.line())
        };
        Err(self.unexpected(expected))
    }

    /// Consume a name, returning its text and position.
    pub fn expect_name(&mut self) -> Result<(String, Position), ParseError> {
        let token = self.current();
        match &token.kind {
            TokenKind::Name(name) => {
                self.advance();
                Ok((name.clone(), token.pos))
            }
            found => Err(ParseError::new(
                ParseErrorKind::ExpectedName {
                    found: found.clone(),
                },
                token.pos,
            )),
        }
    }

    /// `UnexpectedToken` at the current token.
    #[cold]
    pub fn unexpected(&self, expected: impl Into<String>) -> ParseError {
        ParseError::new(
            ParseErrorKind::UnexpectedToken {
                expected: expected.into(),
                found: self.current_kind().clone(),
            },
            self.current_pos(),
        )
    }
}

#[cfg(test)]
mod tests;
