//! Table constructors.

use moon_ir::{Expr, TableConstructor, TableEntry};
use moon_lexer::TokenKind;

use crate::{ErrorContext, ParseError, Parser};

impl Parser<'_> {
    /// `{ [field {sep field} [sep]] }` where `sep` is `,` or `;`.
    pub(crate) fn parse_table(&mut self) -> Result<TableConstructor, ParseError> {
        self.with_context(ErrorContext::TableConstructor, |p| {
            let open = p.current_pos();
            p.expect(&TokenKind::LBrace)?;
            let mut entries = Vec::new();
            while !p.check(&TokenKind::RBrace) {
                entries.push(p.parse_table_entry()?);
                if !p.eat(&TokenKind::Comma) && !p.eat(&TokenKind::Semicolon) {
                    break;
                }
            }
            p.expect_closing(&TokenKind::RBrace, &TokenKind::LBrace, open)?;
            Ok(TableConstructor::new(entries))
        })
    }

    /// `[key] = value`, `name = value` or a positional `value`.
    fn parse_table_entry(&mut self) -> Result<TableEntry, ParseError> {
        let pos = self.current_pos();
        match self.current_kind() {
            TokenKind::LBracket => {
                self.advance();
                let key = self.parse_expr()?;
                self.expect_closing(&TokenKind::RBracket, &TokenKind::LBracket, pos)?;
                self.expect(&TokenKind::Eq)?;
                let value = self.parse_expr()?;
                Ok(TableEntry::keyed(key, value))
            }
            TokenKind::Name(name) if matches!(self.peek_next_kind(), TokenKind::Eq) => {
                self.advance();
                self.advance();
                let value = self.parse_expr()?;
                Ok(TableEntry::keyed(Expr::string(name.clone(), pos), value))
            }
            _ => Ok(TableEntry::positional(self.parse_expr()?)),
        }
    }
}
