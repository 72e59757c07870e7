//! Parse error types.
//!
//! A [`ParseError`] records what went wrong, where, and optionally what the
//! parser was working on (`ErrorContext`) for "while parsing X" notes.
//! Lexical errors pass through unchanged as [`ParseErrorKind::Lex`].

mod context;

pub use context::ErrorContext;

use std::fmt;

use mpl_diagnostic::{Diagnostic, ErrorCode};
use mpl_ir::Position;
use mpl_lexer::LexError;

/// A parse error.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub pos: Position,
    /// Innermost construct being parsed when the error occurred.
    pub context: Option<ErrorContext>,
}

/// What kind of parse error occurred.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum ParseErrorKind {
    /// Error from the scanner.
    Lex(LexError),
    /// The lookahead token does not fit the grammar.
    UnexpectedToken { expected: String, found: String },
    /// An operand or expression was required.
    ExpectedExpression { found: String },
    /// `int`, `string` or `bool` was required.
    ExpectedType { found: String },
    /// Input ended where more tokens were required.
    UnexpectedEof { expected: String },
    /// Integer literal does not fit in `i32`.
    IntOutOfRange { literal: String },
    /// `var` inside a `for` or `if` body.
    DeclarationInLocalScope,
}

impl ParseError {
    fn new(kind: ParseErrorKind, pos: Position) -> Self {
        ParseError {
            kind,
            pos,
            context: None,
        }
    }

    #[cold]
    pub fn unexpected_token(pos: Position, expected: &str, found: String) -> Self {
        Self::new(
            ParseErrorKind::UnexpectedToken {
                expected: expected.to_string(),
                found,
            },
            pos,
        )
    }

    #[cold]
    pub fn expected_expression(pos: Position, found: String) -> Self {
        Self::new(ParseErrorKind::ExpectedExpression { found }, pos)
    }

    #[cold]
    pub fn expected_type(pos: Position, found: String) -> Self {
        Self::new(ParseErrorKind::ExpectedType { found }, pos)
    }

    #[cold]
    pub fn unexpected_eof(pos: Position, expected: &str) -> Self {
        Self::new(
            ParseErrorKind::UnexpectedEof {
                expected: expected.to_string(),
            },
            pos,
        )
    }

    #[cold]
    pub fn int_out_of_range(pos: Position, literal: String) -> Self {
        Self::new(ParseErrorKind::IntOutOfRange { literal }, pos)
    }

    #[cold]
    pub fn declaration_in_local_scope(pos: Position) -> Self {
        Self::new(ParseErrorKind::DeclarationInLocalScope, pos)
    }

    /// Attach a context unless an inner construct already did.
    #[must_use]
    pub fn in_context(mut self, context: ErrorContext) -> Self {
        if self.context.is_none() && !matches!(self.kind, ParseErrorKind::Lex(_)) {
            self.context = Some(context);
        }
        self
    }

    pub fn code(&self) -> ErrorCode {
        match &self.kind {
            ParseErrorKind::Lex(err) => err.code(),
            ParseErrorKind::UnexpectedToken { .. } => ErrorCode::E1001,
            ParseErrorKind::ExpectedExpression { .. } => ErrorCode::E1002,
            ParseErrorKind::ExpectedType { .. } => ErrorCode::E1003,
            ParseErrorKind::UnexpectedEof { .. } => ErrorCode::E1004,
            ParseErrorKind::IntOutOfRange { .. } => ErrorCode::E1005,
            ParseErrorKind::DeclarationInLocalScope => ErrorCode::E1006,
        }
    }

    /// Convert to a diagnostic for rendering.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let label = match &self.kind {
            ParseErrorKind::Lex(err) => return err.to_diagnostic(),
            ParseErrorKind::UnexpectedToken { expected, .. }
            | ParseErrorKind::UnexpectedEof { expected } => format!("expected {expected}"),
            ParseErrorKind::ExpectedExpression { .. } => "expected expression".to_string(),
            ParseErrorKind::ExpectedType { .. } => "expected `int`, `string` or `bool`".to_string(),
            ParseErrorKind::IntOutOfRange { .. } => "does not fit in 32 bits".to_string(),
            ParseErrorKind::DeclarationInLocalScope => "declaration inside a block".to_string(),
        };

        let mut diag = Diagnostic::error(self.code())
            .with_message(self.to_string())
            .with_label(self.pos, label);
        if let Some(context) = self.context {
            diag = diag.with_note(format!("while parsing {}", context.description()));
        }
        if matches!(self.kind, ParseErrorKind::DeclarationInLocalScope) {
            diag = diag.with_note("move the declaration before the enclosing block");
        }
        diag
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ParseErrorKind::Lex(err) => write!(f, "{err}"),
            ParseErrorKind::UnexpectedToken { expected, found } => {
                write!(f, "expected {expected}, found {found}")
            }
            ParseErrorKind::ExpectedExpression { found } => {
                write!(f, "expected expression, found {found}")
            }
            ParseErrorKind::ExpectedType { found } => write!(f, "expected type, found {found}"),
            ParseErrorKind::UnexpectedEof { expected } => {
                write!(f, "unexpected end of file, expected {expected}")
            }
            ParseErrorKind::IntOutOfRange { literal } => {
                write!(f, "integer literal `{literal}` is out of range")
            }
            ParseErrorKind::DeclarationInLocalScope => {
                write!(f, "variables can only be declared at the top level")
            }
        }
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            ParseErrorKind::Lex(err) => Some(err),
            _ => None,
        }
    }
}

impl From<LexError> for ParseError {
    fn from(err: LexError) -> Self {
        let pos = err.pos;
        ParseError::new(ParseErrorKind::Lex(err), pos)
    }
}
