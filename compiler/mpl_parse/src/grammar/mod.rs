//! Grammar productions.
//!
//! ```text
//! Program    := Statement ";" Statements
//! Statements := { Statement ";" }
//! Statement  := VarDecl | Assign | For | If | Read | Print
//! ```
//!
//! Expressions are in [`expr`].

mod expr;
mod stmt;

use mpl_ir::{Block, Keyword};
use mpl_stack::ensure_sufficient_stack;

use crate::{ParseError, Parser};

impl Parser<'_, '_> {
    /// `Program := Statement ";" Statements`, ending exactly at end of input.
    pub(crate) fn parse_program(&mut self) -> Result<Block, ParseError> {
        let mut stmts = Vec::new();
        loop {
            stmts.push(self.parse_stmt()?);
            self.cursor.expect_keyword(Keyword::Semicolon)?;
            if self.cursor.is_at_end() {
                return Ok(stmts);
            }
        }
    }

    /// Statements of a `for`/`if` body, up to (not including) `end` or `else`.
    ///
    /// The body may be empty. Running out of input is an error.
    pub(crate) fn parse_block(&mut self) -> Result<Block, ParseError> {
        ensure_sufficient_stack(|| {
            self.depth += 1;
            let mut stmts = Vec::new();
            while !self.cursor.check_keyword(Keyword::End)
                && !self.cursor.check_keyword(Keyword::Else)
            {
                if self.cursor.is_at_end() {
                    return Err(self.cursor.unexpected("`end`"));
                }
                stmts.push(self.parse_stmt()?);
                self.cursor.expect_keyword(Keyword::Semicolon)?;
            }
            self.depth -= 1;
            Ok(stmts)
        })
    }
}
