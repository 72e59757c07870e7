//! Character cursor with line/column tracking.
//!
//! Positions count characters, not bytes: every consumed character advances
//! the column by one, and `\n` moves to column 1 of the next line.

use std::str::Chars;

use mpl_ir::Position;

/// Cursor over the source characters.
///
/// The cursor is [`Clone`]; peeking clones the underlying iterator instead of
/// buffering lookahead.
#[derive(Clone, Debug)]
pub(crate) struct Cursor<'a> {
    chars: Chars<'a>,
    line: u32,
    column: u32,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(source: &'a str) -> Self {
        Cursor {
            chars: source.chars(),
            line: 1,
            column: 1,
        }
    }

    /// Position of the next unconsumed character.
    #[inline]
    pub(crate) fn pos(&self) -> Position {
        Position::new(self.line, self.column)
    }

    /// The next unconsumed character, or `None` at end of input.
    #[inline]
    pub(crate) fn current(&self) -> Option<char> {
        self.chars.clone().next()
    }

    /// The character after [`current`](Self::current).
    #[inline]
    pub(crate) fn peek(&self) -> Option<char> {
        let mut chars = self.chars.clone();
        chars.next();
        chars.next()
    }

    /// Consume one character, updating the position.
    pub(crate) fn bump(&mut self) -> Option<char> {
        let c = self.chars.next()?;
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(c)
    }

    /// Consume characters while `pred` holds, appending them to `out`.
    pub(crate) fn eat_while(&mut self, out: &mut String, mut pred: impl FnMut(char) -> bool) {
        while let Some(c) = self.current() {
            if !pred(c) {
                break;
            }
            out.push(c);
            self.bump();
        }
    }
}
