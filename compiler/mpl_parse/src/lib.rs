//! Recursive descent parser for Mini-PL.
//!
//! Pulls tokens from the scanner one at a time (one-token lookahead, no
//! backtracking) and produces a [`Module`] whose expressions live in an
//! [`ExprArena`]. The first error aborts the parse; there is no recovery.

mod cursor;
mod error;
mod grammar;

pub use error::{ErrorContext, ParseError, ParseErrorKind};

use cursor::Cursor;
use mpl_ir::{ExprArena, Module, StringInterner};

/// Parsed program with its expression arena.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct ParseOutput {
    pub module: Module,
    pub arena: ExprArena,
}

/// Parser state.
pub struct Parser<'src, 'i> {
    cursor: Cursor<'src>,
    arena: ExprArena,
    interner: &'i mut StringInterner,
    /// Nesting depth of `for`/`if` bodies. Declarations require depth 0.
    depth: u32,
}

impl<'src, 'i> Parser<'src, 'i> {
    /// Create a parser and scan the first token.
    pub fn new(source: &'src str, interner: &'i mut StringInterner) -> Result<Self, ParseError> {
        Ok(Parser {
            cursor: Cursor::new(source)?,
            arena: ExprArena::new(),
            interner,
            depth: 0,
        })
    }

    /// Parse the whole program.
    pub fn parse_module(mut self) -> Result<ParseOutput, ParseError> {
        let stmts = self.parse_program()?;
        Ok(ParseOutput {
            module: Module { stmts },
            arena: self.arena,
        })
    }
}

/// Parse source text into a module.
#[tracing::instrument(level = "debug", skip_all)]
pub fn parse(source: &str, interner: &mut StringInterner) -> Result<ParseOutput, ParseError> {
    let output = Parser::new(source, interner)?.parse_module()?;
    tracing::debug!(
        statements = output.module.stmts.len(),
        expressions = output.arena.len(),
        "parsed module"
    );
    Ok(output)
}
