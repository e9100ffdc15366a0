//! Expression parsing.
//!
//! Binary operators use priority climbing with the left/right binding powers
//! from [`BinaryOp::binding_power`]: an operator is taken while its left power
//! exceeds the current limit, and its right operand is parsed with the right
//! power as the new limit. Unary operators bind with
//! [`UnaryOp::BINDING_POWER`], so `-x ^ 2` is `-(x ^ 2)`.

use moon_ir::{BinaryOp, Expr, ExprKind, Positioned, UnaryOp};
use moon_lexer::TokenKind;
use moon_stack::ensure_sufficient_stack;

use crate::{ErrorContext, ParseError, ParseErrorKind, Parser};

/// A prefix expression and whether it was a bare parenthesized group.
///
/// Grouping leaves no node behind beyond the one-value truncation of calls
/// and `...`, but `(a) = 1` and `(f())` as a statement are still rejected,
/// so the flag travels with the expression until a suffix is applied.
pub(crate) struct Suffixed {
    pub expr: Expr,
    pub grouped: bool,
}

impl Parser<'_> {
    pub fn parse_expr(&mut self) -> Result<Expr, ParseError> {
        self.parse_subexpr(0)
    }

    /// `expr {, expr}`
    pub(crate) fn parse_expr_list(&mut self) -> Result<Vec<Expr>, ParseError> {
        let mut exprs = vec![self.parse_expr()?];
        while self.eat(&TokenKind::Comma) {
            exprs.push(self.parse_expr()?);
        }
        Ok(exprs)
    }

    /// Parse operators binding tighter than `limit`.
    fn parse_subexpr(&mut self, limit: u8) -> Result<Expr, ParseError> {
        ensure_sufficient_stack(|| {
            let mut left = match unary_op(self.current_kind()) {
                Some(op) => {
                    let pos = self.current_pos();
                    self.advance();
                    let operand = self.parse_subexpr(UnaryOp::BINDING_POWER)?;
                    Expr::unary(op, operand, pos)
                }
                None => self.parse_simple_expr()?,
            };

            while let Some(op) = binary_op(self.current_kind()) {
                let (left_power, right_power) = op.binding_power();
                if left_power <= limit {
                    break;
                }
                self.advance();
                let right = self.parse_subexpr(right_power)?;
                let pos = left.position();
                left = Expr::binary(op, left, right, pos);
            }
            Ok(left)
        })
    }

    /// Literals, `...`, table constructors, function literals and prefix
    /// expressions.
    fn parse_simple_expr(&mut self) -> Result<Expr, ParseError> {
        let pos = self.current_pos();
        let expr = match self.current_kind() {
            TokenKind::Nil => Expr::nil(pos),
            TokenKind::True => Expr::boolean(true, pos),
            TokenKind::False => Expr::boolean(false, pos),
            TokenKind::Number(value) => Expr::number(*value, pos),
            TokenKind::String(text) => Expr::string(text.clone(), pos),
            TokenKind::DotDotDot => {
                if !self.in_variadic_function() {
                    return Err(ParseError::new(
                        ParseErrorKind::VarargsOutsideVariadic,
                        pos,
                    ));
                }
                Expr::varargs(pos)
            }
            TokenKind::LBrace => {
                let table = self.parse_table()?;
                return Ok(Expr::new(ExprKind::Table(table), pos));
            }
            TokenKind::Function => {
                self.advance();
                return self.with_context(ErrorContext::FunctionDefinition, |p| {
                    p.parse_function_body(pos)
                });
            }
            _ => return Ok(self.parse_suffixed_expr()?.expr),
        };
        self.advance();
        Ok(expr)
    }

    /// A name or parenthesized expression.
    fn parse_primary_expr(&mut self) -> Result<Suffixed, ParseError> {
        let pos = self.current_pos();
        match self.current_kind() {
            TokenKind::Name(name) => {
                self.advance();
                Ok(Suffixed {
                    expr: Expr::name(name.clone(), pos),
                    grouped: false,
                })
            }
            TokenKind::LParen => {
                self.advance();
                let expr = self.with_context(ErrorContext::Expression, Self::parse_expr)?;
                self.expect_closing(&TokenKind::RParen, &TokenKind::LParen, pos)?;
                Ok(Suffixed {
                    expr: expr.into_single_value(),
                    grouped: true,
                })
            }
            found => Err(ParseError::new(
                ParseErrorKind::ExpectedExpression {
                    found: found.clone(),
                },
                pos,
            )),
        }
    }

    /// A primary expression followed by any number of `.name`, `[expr]` and
    /// call suffixes.
    ///
    /// Every suffix node is stamped with the position of the primary.
    pub(crate) fn parse_suffixed_expr(&mut self) -> Result<Suffixed, ParseError> {
        let start = self.current_pos();
        let Suffixed {
            mut expr,
            mut grouped,
        } = self.parse_primary_expr()?;

        loop {
            expr = match self.current_kind() {
                TokenKind::Dot => {
                    self.advance();
                    let (name, _) = self.expect_name()?;
                    Expr::field(expr, name, start)
                }
                TokenKind::LBracket => {
                    let open = self.current_pos();
                    self.advance();
                    let index = self.parse_expr()?;
                    self.expect_closing(&TokenKind::RBracket, &TokenKind::LBracket, open)?;
                    Expr::index(expr, index, start)
                }
                TokenKind::LParen | TokenKind::String(_) | TokenKind::LBrace => {
                    let args =
                        self.with_context(ErrorContext::CallArguments, Self::parse_call_args)?;
                    Expr::call(expr, args, start)
                }
                TokenKind::Colon => {
                    return Err(ParseError::new(
                        ParseErrorKind::MethodCallUnsupported,
                        self.current_pos(),
                    ));
                }
                _ => return Ok(Suffixed { expr, grouped }),
            };
            grouped = false;
        }
    }

    /// `(explist)`, a string literal, or a table constructor.
    fn parse_call_args(&mut self) -> Result<Vec<Expr>, ParseError> {
        let pos = self.current_pos();
        match self.current_kind() {
            TokenKind::String(text) => {
                self.advance();
                Ok(vec![Expr::string(text.clone(), pos)])
            }
            TokenKind::LBrace => {
                let table = self.parse_table()?;
                Ok(vec![Expr::new(ExprKind::Table(table), pos)])
            }
            _ => {
                self.expect(&TokenKind::LParen)?;
                if self.eat(&TokenKind::RParen) {
                    return Ok(Vec::new());
                }
                let args = self.parse_expr_list()?;
                self.expect_closing(&TokenKind::RParen, &TokenKind::LParen, pos)?;
                Ok(args)
            }
        }
    }
}

fn binary_op(kind: &TokenKind) -> Option<BinaryOp> {
    let op = match kind {
        TokenKind::Plus => BinaryOp::Addition,
        TokenKind::Minus => BinaryOp::Subtraction,
        TokenKind::Star => BinaryOp::Multiplication,
        TokenKind::Slash => BinaryOp::Division,
        TokenKind::Percent => BinaryOp::Modulo,
        TokenKind::Caret => BinaryOp::Power,
        TokenKind::DotDot => BinaryOp::Concat,
        TokenKind::EqEq => BinaryOp::Equal,
        TokenKind::TildeEq => BinaryOp::Different,
        TokenKind::Lt => BinaryOp::LessThan,
        TokenKind::LtEq => BinaryOp::LessOrEqual,
        TokenKind::Gt => BinaryOp::GreaterThan,
        TokenKind::GtEq => BinaryOp::GreaterOrEqual,
        TokenKind::And => BinaryOp::And,
        TokenKind::Or => BinaryOp::Or,
        _ => return None,
    };
    Some(op)
}

fn unary_op(kind: &TokenKind) -> Option<UnaryOp> {
    match kind {
        TokenKind::Minus => Some(UnaryOp::Negate),
        TokenKind::Not => Some(UnaryOp::Invert),
        TokenKind::Hash => Some(UnaryOp::Length),
        _ => None,
    }
}
