//! Token cursor for navigating the token stream.
//!
//! Wraps the scanner with a single token of lookahead. Scanning is lazy:
//! a lexical error surfaces when the cursor tries to move onto the bad token.

use mpl_ir::{Keyword, Position, Token, TokenKind};
use mpl_lexer::Scanner;
use tracing::trace;

use crate::ParseError;

pub(crate) struct Cursor<'src> {
    scanner: Scanner<'src>,
    /// Lookahead token; `None` at end of input.
    current: Option<Token>,
}

impl<'src> Cursor<'src> {
    pub(crate) fn new(source: &'src str) -> Result<Self, ParseError> {
        let mut scanner = Scanner::new(source);
        let current = scanner.next_token()?;
        Ok(Cursor { scanner, current })
    }

    #[inline]
    pub(crate) fn current(&self) -> Option<&Token> {
        self.current.as_ref()
    }

    #[inline]
    pub(crate) fn is_at_end(&self) -> bool {
        self.current.is_none()
    }

    /// Position of the lookahead token, or the end-of-input position.
    pub(crate) fn current_pos(&self) -> Position {
        match &self.current {
            Some(token) => token.pos,
            None => self.scanner.pos(),
        }
    }

    /// Description of the lookahead token for error messages.
    pub(crate) fn describe_current(&self) -> String {
        match &self.current {
            Some(token) => token.describe(),
            None => "end of file".to_string(),
        }
    }

    #[inline]
    pub(crate) fn check_keyword(&self, keyword: Keyword) -> bool {
        self.current.as_ref().is_some_and(|t| t.is_keyword(keyword))
    }

    #[inline]
    pub(crate) fn check_kind(&self, kind: TokenKind) -> bool {
        self.current.as_ref().is_some_and(|t| t.kind == kind)
    }

    /// Consume the lookahead token and scan the next one.
    ///
    /// At end of input this reports an unexpected end of file.
    pub(crate) fn advance(&mut self, expected: &str) -> Result<Token, ParseError> {
        let Some(token) = self.current.take() else {
            return Err(ParseError::unexpected_eof(self.scanner.pos(), expected));
        };
        trace!(?token, "consumed");
        self.current = self.scanner.next_token()?;
        Ok(token)
    }

    /// Consume the given keyword or symbol, returning its position.
    pub(crate) fn expect_keyword(&mut self, keyword: Keyword) -> Result<Position, ParseError> {
        let expected = format!("`{keyword}`");
        if self.check_keyword(keyword) {
            Ok(self.advance(&expected)?.pos)
        } else {
            Err(self.unexpected(&expected))
        }
    }

    /// Consume an identifier, returning the token.
    pub(crate) fn expect_ident(&mut self) -> Result<Token, ParseError> {
        if self.check_kind(TokenKind::Ident) {
            self.advance("identifier")
        } else {
            Err(self.unexpected("identifier"))
        }
    }

    /// Build an error for the lookahead token not matching `expected`.
    #[cold]
    pub(crate) fn unexpected(&self, expected: &str) -> ParseError {
        match &self.current {
            Some(token) => ParseError::unexpected_token(token.pos, expected, token.describe()),
            None => ParseError::unexpected_eof(self.scanner.pos(), expected),
        }
    }
}
