//! Scanner error types.

use std::fmt;

use mpl_diagnostic::{Diagnostic, ErrorCode};
use mpl_ir::Position;

/// A scanner error: what went wrong and where.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct LexError {
    pub pos: Position,
    pub kind: LexErrorKind,
}

/// What kind of scanner error occurred.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum LexErrorKind {
    /// End of input before the closing `"`. Reported at the opening quote.
    UnterminatedString,
    /// A raw line break before the closing `"`.
    NewlineInString,
    /// A backslash followed by an unsupported character.
    InvalidEscape { escape_char: char },
    /// `/*` without a matching `*/`. Reported at the opening `/*`.
    UnterminatedComment,
    /// A character that starts no token.
    UnrecognizedChar { ch: char },
}

impl LexError {
    #[cold]
    pub fn unterminated_string(start: Position) -> Self {
        LexError {
            pos: start,
            kind: LexErrorKind::UnterminatedString,
        }
    }

    #[cold]
    pub fn newline_in_string(pos: Position) -> Self {
        LexError {
            pos,
            kind: LexErrorKind::NewlineInString,
        }
    }

    #[cold]
    pub fn invalid_escape(pos: Position, escape_char: char) -> Self {
        LexError {
            pos,
            kind: LexErrorKind::InvalidEscape { escape_char },
        }
    }

    #[cold]
    pub fn unterminated_comment(start: Position) -> Self {
        LexError {
            pos: start,
            kind: LexErrorKind::UnterminatedComment,
        }
    }

    #[cold]
    pub fn unrecognized_char(pos: Position, ch: char) -> Self {
        LexError {
            pos,
            kind: LexErrorKind::UnrecognizedChar { ch },
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self.kind {
            LexErrorKind::UnterminatedString => ErrorCode::E0001,
            LexErrorKind::UnrecognizedChar { .. } => ErrorCode::E0002,
            LexErrorKind::InvalidEscape { .. } => ErrorCode::E0003,
            LexErrorKind::UnterminatedComment => ErrorCode::E0004,
            LexErrorKind::NewlineInString => ErrorCode::E0005,
        }
    }

    /// Convert to a diagnostic for rendering.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let (label, note) = match self.kind {
            LexErrorKind::UnterminatedString => ("string starts here", Some("add a closing `\"`")),
            LexErrorKind::NewlineInString => ("line break inside string", Some("use `\\n` instead")),
            LexErrorKind::InvalidEscape { .. } => (
                "unknown escape",
                Some(r#"valid escapes are \r \n \a \b \f \t \v \\ \""#),
            ),
            LexErrorKind::UnterminatedComment => ("comment starts here", Some("add a closing `*/`")),
            LexErrorKind::UnrecognizedChar { .. } => ("unexpected character", None),
        };

        let diag = Diagnostic::error(self.code())
            .with_message(self.to_string())
            .with_label(self.pos, label);
        match note {
            Some(note) => diag.with_note(note),
            None => diag,
        }
    }
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            LexErrorKind::UnterminatedString => write!(f, "unterminated string literal"),
            LexErrorKind::NewlineInString => write!(f, "line break in string literal"),
            LexErrorKind::InvalidEscape { escape_char } => {
                write!(f, "invalid escape sequence `\\{}`", escape_char.escape_debug())
            }
            LexErrorKind::UnterminatedComment => write!(f, "unterminated block comment"),
            LexErrorKind::UnrecognizedChar { ch } => {
                write!(f, "unrecognized character `{}`", ch.escape_debug())
            }
        }
    }
}

impl std::error::Error for LexError {}
