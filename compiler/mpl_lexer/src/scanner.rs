//! The Mini-PL scanner.

use mpl_ir::{Keyword, Position, Token, TokenKind};
use tracing::trace;

use crate::cursor::Cursor;
use crate::escape::resolve_escape;
use crate::LexError;

/// Lazy token stream over a source text.
///
/// Also an [`Iterator`] of `Result<Token, LexError>` that yields nothing
/// after the first error.
pub struct Scanner<'a> {
    cursor: Cursor<'a>,
    failed: bool,
}

impl<'a> Scanner<'a> {
    pub fn new(source: &'a str) -> Self {
        Scanner {
            cursor: Cursor::new(source),
            failed: false,
        }
    }

    /// Scan the next token.
    ///
    /// `Ok(None)` marks the end of input.
    pub fn next_token(&mut self) -> Result<Option<Token>, LexError> {
        self.skip_trivia()?;

        let pos = self.cursor.pos();
        let Some(c) = self.cursor.current() else {
            return Ok(None);
        };

        let token = match c {
            '0'..='9' => {
                let mut text = String::new();
                self.cursor.eat_while(&mut text, |c| c.is_ascii_digit());
                Token::new(TokenKind::Int, text, pos)
            }
            '"' => self.string()?,
            c if c.is_alphabetic() || c == '_' => self.word(),
            '.' => {
                if self.cursor.peek() != Some('.') {
                    return Err(LexError::unrecognized_char(pos, '.'));
                }
                self.cursor.bump();
                self.cursor.bump();
                Token::keyword(Keyword::DotDot, pos)
            }
            ':' if self.cursor.peek() == Some('=') => {
                self.cursor.bump();
                self.cursor.bump();
                Token::keyword(Keyword::ColonEq, pos)
            }
            c => {
                let Some(keyword) = Keyword::from_symbol_char(c) else {
                    return Err(LexError::unrecognized_char(pos, c));
                };
                self.cursor.bump();
                Token::keyword(keyword, pos)
            }
        };

        trace!(?token, "scanned");
        Ok(Some(token))
    }

    /// Position of the next unconsumed character.
    ///
    /// After `next_token` returns `Ok(None)` this is the end-of-input position.
    pub fn pos(&self) -> Position {
        self.cursor.pos()
    }

    /// Skip whitespace, control characters and comments.
    fn skip_trivia(&mut self) -> Result<(), LexError> {
        while let Some(c) = self.cursor.current() {
            if c.is_whitespace() || c.is_control() {
                self.cursor.bump();
            } else if c == '/' && self.cursor.peek() == Some('/') {
                while let Some(c) = self.cursor.bump() {
                    if c == '\n' {
                        break;
                    }
                }
            } else if c == '/' && self.cursor.peek() == Some('*') {
                self.block_comment()?;
            } else {
                break;
            }
        }
        Ok(())
    }

    /// Skip a `/* ... */` comment. Comments do not nest.
    fn block_comment(&mut self) -> Result<(), LexError> {
        let start = self.cursor.pos();
        self.cursor.bump();
        self.cursor.bump();
        loop {
            match self.cursor.bump() {
                None => return Err(LexError::unterminated_comment(start)),
                Some('*') if self.cursor.current() == Some('/') => {
                    self.cursor.bump();
                    return Ok(());
                }
                Some(_) => {}
            }
        }
    }

    /// Scan a string literal. The token text is the unescaped value.
    fn string(&mut self) -> Result<Token, LexError> {
        let start = self.cursor.pos();
        self.cursor.bump();

        let mut value = String::new();
        loop {
            let pos = self.cursor.pos();
            match self.cursor.bump() {
                None => return Err(LexError::unterminated_string(start)),
                Some('"') => break,
                Some('\n') => return Err(LexError::newline_in_string(pos)),
                Some('\\') => {
                    let escape_pos = self.cursor.pos();
                    let Some(esc) = self.cursor.bump() else {
                        return Err(LexError::unterminated_string(start));
                    };
                    match resolve_escape(esc) {
                        Some(resolved) => value.push(resolved),
                        None => return Err(LexError::invalid_escape(escape_pos, esc)),
                    }
                }
                Some(c) => value.push(c),
            }
        }

        Ok(Token::new(TokenKind::Str, value, start))
    }

    /// Scan an identifier, keyword or boolean literal.
    fn word(&mut self) -> Token {
        let pos = self.cursor.pos();
        let mut text = String::new();
        self.cursor
            .eat_while(&mut text, |c| c.is_alphanumeric() || c == '_');

        if text == "true" || text == "false" {
            return Token::new(TokenKind::Bool, text, pos);
        }
        match Keyword::from_word(&text) {
            Some(keyword) => Token::keyword(keyword, pos),
            None => Token::new(TokenKind::Ident, text, pos),
        }
    }
}

impl Iterator for Scanner<'_> {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        match self.next_token() {
            Ok(token) => token.map(Ok),
            Err(err) => {
                self.failed = true;
                Some(Err(err))
            }
        }
    }
}

impl std::iter::FusedIterator for Scanner<'_> {}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
