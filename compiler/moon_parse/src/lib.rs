//! Recursive descent parser for Moon.
//!
//! Produces an owned [`Block`] tree. Parsing stops at the first error and
//! no partial tree is returned.

mod cursor;
mod error;
mod grammar;

pub use cursor::Cursor;
pub use error::{ErrorContext, ParseError, ParseErrorKind};

use moon_ir::{Block, Expr, Position};
use moon_lexer::{Token, TokenKind, TokenList};
use tracing::debug;

/// Parse a whole chunk of source text into its root block.
#[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
pub fn parse(source: &str) -> Result<Block, ParseError> {
    let tokens = moon_lexer::lex(source).map_err(|err| {
        debug!(%err, "lexing failed");
        ParseError::from(err)
    })?;
    parse_tokens(&tokens)
}

/// Parse an already lexed chunk.
pub fn parse_tokens(tokens: &TokenList) -> Result<Block, ParseError> {
    let mut parser = Parser::new(tokens);
    let result = parser.parse_chunk();
    match &result {
        Ok(block) => debug!(statements = block.len(), "parsed chunk"),
        Err(err) => debug!(%err, context = ?err.context, "parse failed"),
    }
    result
}

/// Parse a single expression spanning all of `source`.
pub fn parse_expr(source: &str) -> Result<Expr, ParseError> {
    let tokens = moon_lexer::lex(source)?;
    let mut parser = Parser::new(&tokens);
    let expr = parser.parse_expr()?;
    parser.expect_end_of_input()?;
    Ok(expr)
}

/// Parser state.
pub struct Parser<'a> {
    cursor: Cursor<'a>,
    /// One entry per enclosing function body: whether it accepts `...`.
    vararg_scopes: Vec<bool>,
}

impl<'a> Parser<'a> {
    /// Create a parser positioned at the start of `tokens`.
    ///
    /// The main chunk counts as a variadic function.
    pub fn new(tokens: &'a TokenList) -> Self {
        Parser {
            cursor: Cursor::new(tokens),
            vararg_scopes: vec![true],
        }
    }

    // Cursor delegation

    #[inline]
    fn current_kind(&self) -> &'a TokenKind {
        self.cursor.current_kind()
    }

    #[inline]
    fn current_pos(&self) -> Position {
        self.cursor.current_pos()
    }

    #[inline]
    fn peek_next_kind(&self) -> &'a TokenKind {
        self.cursor.peek_next_kind()
    }

    #[inline]
    fn check(&self, kind: &TokenKind) -> bool {
        self.cursor.check(kind)
    }

    #[inline]
    fn at_block_end(&self) -> bool {
        self.cursor.at_block_end()
    }

    #[inline]
    fn advance(&mut self) -> &'a Token {
        self.cursor.advance()
    }

    #[inline]
    fn eat(&mut self, kind: &TokenKind) -> bool {
        self.cursor.eat(kind)
    }

    #[inline]
    fn expect(&mut self, kind: &TokenKind) -> Result<&'a Token, ParseError> {
        self.cursor.expect(kind)
    }

    #[inline]
    fn expect_closing(
        &mut self,
        kind: &TokenKind,
        opener: &TokenKind,
        open_pos: Position,
    ) -> Result<&'a Token, ParseError> {
        self.cursor.expect_closing(kind, opener, open_pos)
    }

    #[inline]
    fn expect_name(&mut self) -> Result<(String, Position), ParseError> {
        self.cursor.expect_name()
    }

    #[inline]
    fn unexpected(&self, expected: impl Into<String>) -> ParseError {
        self.cursor.unexpected(expected)
    }

    /// Parse the main chunk: a block followed by end of input.
    pub fn parse_chunk(&mut self) -> Result<Block, ParseError> {
        let block = self.parse_block()?;
        self.expect_end_of_input()?;
        Ok(block)
    }

    fn expect_end_of_input(&self) -> Result<(), ParseError> {
        if self.cursor.is_at_end() {
            Ok(())
        } else {
            Err(self.unexpected(TokenKind::Eof.to_string()))
        }
    }

    /// Whether `...` is legal at the current point.
    fn in_variadic_function(&self) -> bool {
        self.vararg_scopes.last().copied().unwrap_or(false)
    }
}

#[cfg(test)]
mod tests;
