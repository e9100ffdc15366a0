//! Statement parsing.

use moon_ir::{
    Assignable, Block, ElseIf, Expr, ExprKind, GenericFor, IfStat, NumericFor, Position,
    Positioned, RepeatStat, Stmt, StmtKind, WhileStat,
};
use moon_lexer::TokenKind;
use tracing::trace;

use super::expr::Suffixed;
use crate::{ErrorContext, ParseError, ParseErrorKind, Parser};

impl Parser<'_> {
    /// Parse statements up to a block terminator (`end`, `else`, `elseif`,
    /// `until` or end of input), which is left unconsumed.
    ///
    /// A `return` ends the block: only semicolons may follow it.
    pub(crate) fn parse_block(&mut self) -> Result<Block, ParseError> {
        let pos = self.current_pos();
        let mut statements = Vec::new();
        loop {
            while self.eat(&TokenKind::Semicolon) {}
            if self.at_block_end() {
                break;
            }
            if self.check(&TokenKind::Return) {
                statements.push(self.parse_return()?);
                while self.eat(&TokenKind::Semicolon) {}
                if !self.at_block_end() {
                    return Err(ParseError::new(
                        ParseErrorKind::ReturnNotLast {
                            found: self.current_kind().clone(),
                        },
                        self.current_pos(),
                    ));
                }
                break;
            }
            self.parse_statement(&mut statements)?;
        }
        Ok(Block::new(statements, pos))
    }

    /// Parse one statement into `out`.
    ///
    /// `local function` expands to two statements, hence the out-parameter.
    fn parse_statement(&mut self, out: &mut Vec<Stmt>) -> Result<(), ParseError> {
        let pos = self.current_pos();
        trace!(kind = ?self.current_kind(), %pos, "statement");
        let stmt = match self.current_kind() {
            TokenKind::If => self.with_context(ErrorContext::IfStatement, |p| p.parse_if(pos))?,
            TokenKind::While => {
                self.with_context(ErrorContext::WhileLoop, |p| p.parse_while(pos))?
            }
            TokenKind::Do => self.with_context(ErrorContext::DoBlock, |p| p.parse_do(pos))?,
            TokenKind::For => self.parse_for(pos)?,
            TokenKind::Repeat => {
                self.with_context(ErrorContext::RepeatLoop, |p| p.parse_repeat(pos))?
            }
            TokenKind::Function => self.with_context(ErrorContext::FunctionDefinition, |p| {
                p.parse_function_stat(pos)
            })?,
            TokenKind::Local => {
                self.advance();
                if self.eat(&TokenKind::Function) {
                    let [declaration, definition] = self
                        .with_context(ErrorContext::FunctionDefinition, |p| {
                            p.parse_local_function(pos)
                        })?;
                    out.push(declaration);
                    out.push(definition);
                    return Ok(());
                }
                self.with_context(ErrorContext::LocalDeclaration, |p| p.parse_local(pos))?
            }
            TokenKind::Break => {
                self.advance();
                Stmt::brk(pos)
            }
            TokenKind::Name(_) | TokenKind::LParen => self.parse_expr_stat(pos)?,
            _ => return Err(self.unexpected("statement")),
        };
        out.push(stmt);
        Ok(())
    }

    fn parse_return(&mut self) -> Result<Stmt, ParseError> {
        let pos = self.current_pos();
        self.advance();
        let values = if self.at_block_end() || self.check(&TokenKind::Semicolon) {
            Vec::new()
        } else {
            self.with_context(ErrorContext::ReturnStatement, Self::parse_expr_list)?
        };
        Ok(Stmt::ret(values, pos))
    }

    /// `if cond then block {elseif cond then block} [else block] end`
    fn parse_if(&mut self, pos: Position) -> Result<Stmt, ParseError> {
        self.advance();
        let condition = self.parse_expr()?;
        self.expect(&TokenKind::Then)?;
        let then_block = self.parse_block()?;

        let mut else_ifs = Vec::new();
        while self.check(&TokenKind::ElseIf) {
            let else_if_pos = self.current_pos();
            self.advance();
            let condition = self.parse_expr()?;
            self.expect(&TokenKind::Then)?;
            let block = self.parse_block()?;
            else_ifs.push(ElseIf::new(condition, block, else_if_pos));
        }

        let else_block = if self.eat(&TokenKind::Else) {
            Some(self.parse_block()?)
        } else {
            None
        };
        self.expect_closing(&TokenKind::End, &TokenKind::If, pos)?;

        Ok(Stmt::new(
            StmtKind::If(IfStat {
                condition,
                then_block,
                else_ifs,
                else_block,
            }),
            pos,
        ))
    }

    /// `while cond do block end`
    fn parse_while(&mut self, pos: Position) -> Result<Stmt, ParseError> {
        self.advance();
        let condition = self.parse_expr()?;
        self.expect(&TokenKind::Do)?;
        let body = self.parse_block()?;
        self.expect_closing(&TokenKind::End, &TokenKind::While, pos)?;
        Ok(Stmt::new(StmtKind::While(WhileStat { condition, body }), pos))
    }

    /// `do block end`
    fn parse_do(&mut self, pos: Position) -> Result<Stmt, ParseError> {
        self.advance();
        let body = self.parse_block()?;
        self.expect_closing(&TokenKind::End, &TokenKind::Do, pos)?;
        Ok(Stmt::new(StmtKind::Block(body), pos))
    }

    /// `repeat block until cond`
    fn parse_repeat(&mut self, pos: Position) -> Result<Stmt, ParseError> {
        self.advance();
        let body = self.parse_block()?;
        self.expect_closing(&TokenKind::Until, &TokenKind::Repeat, pos)?;
        let condition = self.parse_expr()?;
        Ok(Stmt::new(StmtKind::Repeat(RepeatStat { body, condition }), pos))
    }

    /// Numeric or generic `for`, told apart by the token after the first name.
    fn parse_for(&mut self, pos: Position) -> Result<Stmt, ParseError> {
        self.advance();
        let (name, _) = self.expect_name()?;
        match self.current_kind() {
            TokenKind::Eq => {
                self.with_context(ErrorContext::NumericFor, |p| p.parse_numeric_for(name, pos))
            }
            TokenKind::Comma | TokenKind::In => {
                self.with_context(ErrorContext::GenericFor, |p| p.parse_generic_for(name, pos))
            }
            _ => Err(self.unexpected("`=` or `in`")),
        }
    }

    /// `for name = init, limit [, step] do block end`, after the name.
    fn parse_numeric_for(&mut self, var_name: String, pos: Position) -> Result<Stmt, ParseError> {
        self.advance();
        let init = self.parse_expr()?;
        self.expect(&TokenKind::Comma)?;
        let limit = self.parse_expr()?;
        let step = if self.eat(&TokenKind::Comma) {
            Some(self.parse_expr()?)
        } else {
            None
        };
        self.expect(&TokenKind::Do)?;
        let body = self.parse_block()?;
        self.expect_closing(&TokenKind::End, &TokenKind::For, pos)?;
        Ok(Stmt::new(
            StmtKind::NumericFor(NumericFor {
                var_name,
                init,
                limit,
                step,
                body,
            }),
            pos,
        ))
    }

    /// `for name {, name} in explist do block end`, after the first name.
    fn parse_generic_for(&mut self, first: String, pos: Position) -> Result<Stmt, ParseError> {
        let mut names = vec![first];
        while self.eat(&TokenKind::Comma) {
            names.push(self.expect_name()?.0);
        }
        self.expect(&TokenKind::In)?;
        let iter_exprs = self.parse_expr_list()?;
        self.expect(&TokenKind::Do)?;
        let body = self.parse_block()?;
        self.expect_closing(&TokenKind::End, &TokenKind::For, pos)?;
        Ok(Stmt::new(
            StmtKind::GenericFor(GenericFor {
                names,
                iter_exprs,
                body,
            }),
            pos,
        ))
    }

    /// `function a.b.c() end`, stored as an assignment of a function literal.
    fn parse_function_stat(&mut self, pos: Position) -> Result<Stmt, ParseError> {
        self.advance();
        let (name, name_pos) = self.expect_name()?;
        let mut target = Expr::name(name, name_pos);
        while self.eat(&TokenKind::Dot) {
            let (field, _) = self.expect_name()?;
            target = Expr::field(target, field, name_pos);
        }
        if self.check(&TokenKind::Colon) {
            return Err(ParseError::new(
                ParseErrorKind::MethodCallUnsupported,
                self.current_pos(),
            ));
        }
        let function = self.parse_function_body(pos)?;
        let target = into_target(Suffixed {
            expr: target,
            grouped: false,
        })?;
        Ok(Stmt::assign(vec![target], vec![function], pos))
    }

    /// `local function f() end`, after `function`.
    ///
    /// Declares `f` first and assigns the literal second, so the body can
    /// refer to `f`.
    fn parse_local_function(&mut self, pos: Position) -> Result<[Stmt; 2], ParseError> {
        let function_pos = self.current_pos();
        let (name, name_pos) = self.expect_name()?;
        let function = self.parse_function_body(function_pos)?;
        Ok([
            Stmt::local(vec![name.clone()], Vec::new(), pos),
            Stmt::assign(vec![Assignable::name(name, name_pos)], vec![function], pos),
        ])
    }

    /// `local name {, name} [= explist]`, after `local`.
    fn parse_local(&mut self, pos: Position) -> Result<Stmt, ParseError> {
        let mut names = vec![self.expect_name()?.0];
        while self.eat(&TokenKind::Comma) {
            names.push(self.expect_name()?.0);
        }
        let values = if self.eat(&TokenKind::Eq) {
            self.parse_expr_list()?
        } else {
            Vec::new()
        };
        Ok(Stmt::local(names, values, pos))
    }

    /// A call statement or an assignment; both begin with a suffixed
    /// expression.
    fn parse_expr_stat(&mut self, pos: Position) -> Result<Stmt, ParseError> {
        let first = self.parse_suffixed_expr()?;
        if self.check(&TokenKind::Eq) || self.check(&TokenKind::Comma) {
            return self.with_context(ErrorContext::Assignment, |p| p.parse_assignment(first, pos));
        }

        let Suffixed { expr, grouped } = first;
        let (kind, expr_pos) = expr.into_parts();
        match kind {
            ExprKind::Call(call) if !grouped => Ok(Stmt::new(StmtKind::Call(call), pos)),
            kind if kind.is_assignable() && !grouped => Err(self.unexpected("`=`")),
            kind => Err(ParseError::new(
                ParseErrorKind::NotAStatement {
                    found: if grouped {
                        "a parenthesized expression"
                    } else {
                        kind.description()
                    },
                },
                expr_pos,
            )),
        }
    }

    /// `targets = explist`, after the first target.
    fn parse_assignment(&mut self, first: Suffixed, pos: Position) -> Result<Stmt, ParseError> {
        let mut targets = vec![into_target(first)?];
        while self.eat(&TokenKind::Comma) {
            let next = self.parse_suffixed_expr()?;
            targets.push(into_target(next)?);
        }
        self.expect(&TokenKind::Eq)?;
        let values = self.parse_expr_list()?;
        Ok(Stmt::assign(targets, values, pos))
    }
}

/// Narrow an expression to an assignment target.
fn into_target(suffixed: Suffixed) -> Result<Assignable, ParseError> {
    if suffixed.grouped {
        return Err(ParseError::new(
            ParseErrorKind::NotAssignable {
                found: "a parenthesized expression",
            },
            suffixed.expr.position(),
        ));
    }
    Assignable::try_from(suffixed.expr).map_err(|expr| {
        ParseError::new(
            ParseErrorKind::NotAssignable {
                found: expr.kind.description(),
            },
            expr.position(),
        )
    })
}
