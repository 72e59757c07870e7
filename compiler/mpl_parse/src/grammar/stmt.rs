//! Statement parsing.

use mpl_ir::{Keyword, Stmt, StmtKind, TokenKind, Type};
use tracing::trace;

use crate::{ErrorContext, ParseError, Parser};

impl Parser<'_, '_> {
    /// Parse one statement (without its terminating `;`).
    pub(crate) fn parse_stmt(&mut self) -> Result<Stmt, ParseError> {
        let pos = self.cursor.current_pos();
        let Some(token_kind) = self.cursor.current().map(|t| t.kind) else {
            return Err(ParseError::unexpected_eof(pos, "statement"));
        };

        let (kind, context) = match token_kind {
            TokenKind::Keyword(Keyword::Var) => (self.parse_var_def(), ErrorContext::Declaration),
            TokenKind::Ident => (self.parse_assign(), ErrorContext::Assignment),
            TokenKind::Keyword(Keyword::For) => (self.parse_for(), ErrorContext::ForLoop),
            TokenKind::Keyword(Keyword::If) => (self.parse_if(), ErrorContext::IfStatement),
            TokenKind::Keyword(Keyword::Read) => (self.parse_read(), ErrorContext::ReadStatement),
            TokenKind::Keyword(Keyword::Print) => (self.parse_print(), ErrorContext::PrintStatement),
            _ => return Err(self.cursor.unexpected("statement")),
        };

        let kind = kind.map_err(|e| e.in_context(context))?;
        trace!(?kind, %pos, "statement");
        Ok(Stmt::new(kind, pos))
    }

    /// `"var" Id ":" Type [ ":=" Expr ]`
    fn parse_var_def(&mut self) -> Result<StmtKind, ParseError> {
        let var_pos = self.cursor.expect_keyword(Keyword::Var)?;
        if self.depth > 0 {
            return Err(ParseError::declaration_in_local_scope(var_pos));
        }

        let name = self.cursor.expect_ident()?;
        let name = self.interner.intern(&name.text);
        self.cursor.expect_keyword(Keyword::Colon)?;
        let ty = self.parse_type()?;

        let init = if self.cursor.check_keyword(Keyword::ColonEq) {
            self.cursor.advance("`:=`")?;
            Some(self.parse_expr()?)
        } else {
            None
        };

        Ok(StmtKind::VarDef { name, ty, init })
    }

    /// `"int" | "string" | "bool"`
    fn parse_type(&mut self) -> Result<Type, ParseError> {
        let ty = match self.cursor.current().map(|t| t.kind) {
            Some(TokenKind::Keyword(Keyword::IntType)) => Type::Int,
            Some(TokenKind::Keyword(Keyword::StringType)) => Type::Str,
            Some(TokenKind::Keyword(Keyword::BoolType)) => Type::Bool,
            Some(_) => {
                return Err(ParseError::expected_type(
                    self.cursor.current_pos(),
                    self.cursor.describe_current(),
                ))
            }
            None => return Err(self.cursor.unexpected("type")),
        };
        self.cursor.advance("type")?;
        Ok(ty)
    }

    /// `Id ":=" Expr`
    fn parse_assign(&mut self) -> Result<StmtKind, ParseError> {
        let name = self.cursor.expect_ident()?;
        let name = self.interner.intern(&name.text);
        self.cursor.expect_keyword(Keyword::ColonEq)?;
        let value = self.parse_expr()?;
        Ok(StmtKind::Assign { name, value })
    }

    /// `"for" Id "in" Expr ".." Expr "do" Statements "end" "for"`
    fn parse_for(&mut self) -> Result<StmtKind, ParseError> {
        self.cursor.expect_keyword(Keyword::For)?;
        let var = self.cursor.expect_ident()?;
        let var = self.interner.intern(&var.text);
        self.cursor.expect_keyword(Keyword::In)?;
        let start = self.parse_expr()?;
        self.cursor.expect_keyword(Keyword::DotDot)?;
        let end = self.parse_expr()?;
        self.cursor.expect_keyword(Keyword::Do)?;

        let body = self.parse_block()?;
        self.cursor.expect_keyword(Keyword::End)?;
        self.cursor.expect_keyword(Keyword::For)?;

        Ok(StmtKind::For {
            var,
            start,
            end,
            body,
        })
    }

    /// `"if" Expr "do" Statements [ "else" Statements ] "end" "if"`
    fn parse_if(&mut self) -> Result<StmtKind, ParseError> {
        self.cursor.expect_keyword(Keyword::If)?;
        let cond = self.parse_expr()?;
        self.cursor.expect_keyword(Keyword::Do)?;

        let then_branch = self.parse_block()?;
        let else_branch = if self.cursor.check_keyword(Keyword::Else) {
            self.cursor.advance("`else`")?;
            Some(self.parse_block()?)
        } else {
            None
        };
        self.cursor.expect_keyword(Keyword::End)?;
        self.cursor.expect_keyword(Keyword::If)?;

        Ok(StmtKind::If {
            cond,
            then_branch,
            else_branch,
        })
    }

    /// `"read" Id`
    fn parse_read(&mut self) -> Result<StmtKind, ParseError> {
        self.cursor.expect_keyword(Keyword::Read)?;
        let target = self.cursor.expect_ident()?;
        let target = self.interner.intern(&target.text);
        Ok(StmtKind::Read { target })
    }

    /// `"print" Expr`
    fn parse_print(&mut self) -> Result<StmtKind, ParseError> {
        self.cursor.expect_keyword(Keyword::Print)?;
        let expr = self.parse_expr()?;
        Ok(StmtKind::Print { expr })
    }
}
