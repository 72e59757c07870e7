//! Expression parsing.
//!
//! ```text
//! Expr    := "!" Operand | Operand [ BinOp Operand ]
//! Operand := IntLit | StrLit | BoolLit | Id | "(" Expr ")"
//! ```
//!
//! At most one binary operator per expression: `1 + 2 + 3` is rejected,
//! `(1 + 2) + 3` is accepted. Parentheses produce no node of their own.

use mpl_ir::{BinaryOp, Expr, ExprId, ExprKind, Keyword, Position, TokenKind, UnaryOp};
use mpl_stack::ensure_sufficient_stack;

use crate::{ErrorContext, ParseError, Parser};

impl Parser<'_, '_> {
    /// Parse an expression.
    pub(crate) fn parse_expr(&mut self) -> Result<ExprId, ParseError> {
        ensure_sufficient_stack(|| self.parse_expr_inner())
    }

    fn parse_expr_inner(&mut self) -> Result<ExprId, ParseError> {
        if self.cursor.check_keyword(Keyword::Bang) {
            let pos = self.cursor.advance("`!`")?.pos;
            let operand = self.parse_operand()?;
            return Ok(self.alloc(
                ExprKind::Unary {
                    op: UnaryOp::Not,
                    operand,
                },
                pos,
            ));
        }

        let left = self.parse_operand()?;
        let op = match self.cursor.current().map(|t| t.kind) {
            Some(TokenKind::Keyword(keyword)) => BinaryOp::from_keyword(keyword),
            _ => None,
        };
        let Some(op) = op else {
            return Ok(left);
        };

        self.cursor.advance(op.as_symbol())?;
        let right = self.parse_operand()?;
        let pos = self.arena.get_expr(left).pos;
        Ok(self.alloc(ExprKind::Binary { op, left, right }, pos))
    }

    /// Parse a single operand.
    fn parse_operand(&mut self) -> Result<ExprId, ParseError> {
        let pos = self.cursor.current_pos();
        let Some(token) = self.cursor.current() else {
            return Err(self.cursor.unexpected("expression"));
        };

        let kind = match token.kind {
            TokenKind::Int => {
                let Ok(value) = token.text.parse::<i32>() else {
                    return Err(ParseError::int_out_of_range(pos, token.text.clone()));
                };
                ExprKind::Int(value)
            }
            TokenKind::Str => ExprKind::Str(self.interner.intern(&token.text)),
            TokenKind::Bool => ExprKind::Bool(token.text == "true"),
            TokenKind::Ident => ExprKind::Ident(self.interner.intern(&token.text)),
            TokenKind::Keyword(Keyword::LParen) => {
                self.cursor.advance("`(`")?;
                let inner = self
                    .parse_expr()
                    .and_then(|inner| {
                        self.cursor.expect_keyword(Keyword::RParen)?;
                        Ok(inner)
                    })
                    .map_err(|e| e.in_context(ErrorContext::Parenthesized))?;
                return Ok(inner);
            }
            TokenKind::Keyword(_) => {
                return Err(ParseError::expected_expression(pos, token.describe()));
            }
        };

        self.cursor.advance("expression")?;
        Ok(self.alloc(kind, pos))
    }

    #[inline]
    fn alloc(&mut self, kind: ExprKind, pos: Position) -> ExprId {
        self.arena.alloc_expr(Expr::new(kind, pos))
    }
}
