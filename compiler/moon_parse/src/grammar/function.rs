//! Function bodies.

use moon_ir::{Argument, Expr, ExprKind, FunctionDefinition, Position};
use moon_lexer::TokenKind;

use crate::{ParseError, Parser};

impl Parser<'_> {
    /// `(params) block end`, after the `function` keyword at `pos`.
    ///
    /// `...` may only close the parameter list, and makes `...` legal in the
    /// body (but not in nested non-variadic functions).
    pub(crate) fn parse_function_body(&mut self, pos: Position) -> Result<Expr, ParseError> {
        let open = self.current_pos();
        self.expect(&TokenKind::LParen)?;

        let mut params = Vec::new();
        let mut is_variadic = false;
        if !self.check(&TokenKind::RParen) {
            loop {
                if self.eat(&TokenKind::DotDotDot) {
                    is_variadic = true;
                    break;
                }
                let (name, name_pos) = self.expect_name()?;
                params.push(Argument::new(name, name_pos));
                if !self.eat(&TokenKind::Comma) {
                    break;
                }
            }
        }
        self.expect_closing(&TokenKind::RParen, &TokenKind::LParen, open)?;

        self.vararg_scopes.push(is_variadic);
        let body = self.parse_block();
        self.vararg_scopes.pop();
        let body = body?;
        self.expect_closing(&TokenKind::End, &TokenKind::Function, pos)?;

        Ok(Expr::new(
            ExprKind::Function(FunctionDefinition {
                params,
                is_variadic,
                body,
            }),
            pos,
        ))
    }
}
