//! Core diagnostic types for structured error reporting.

use std::fmt;

use mpl_ir::Position;

use crate::ErrorCode;

/// A labeled source position with a message.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Label {
    /// The source location to highlight.
    pub pos: Position,
    /// The label text explaining this location.
    pub message: String,
}

impl Label {
    pub fn new(pos: Position, message: impl Into<String>) -> Self {
        Label {
            pos,
            message: message.into(),
        }
    }
}

/// A diagnostic with all context needed to report an error.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[must_use = "diagnostics should be reported or returned, not silently dropped"]
pub struct Diagnostic {
    /// Error code for searchability.
    pub code: ErrorCode,
    /// Main error message.
    pub message: String,
    /// Labeled positions showing where the error occurred.
    pub labels: Vec<Label>,
    /// Additional notes providing context.
    pub notes: Vec<String>,
}

impl Diagnostic {
    /// Create a new error diagnostic.
    #[cold]
    pub fn error(code: ErrorCode) -> Self {
        Diagnostic {
            code,
            message: String::new(),
            labels: Vec::new(),
            notes: Vec::new(),
        }
    }

    /// Set the main message.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Add a label at the error location.
    pub fn with_label(mut self, pos: Position, message: impl Into<String>) -> Self {
        self.labels.push(Label::new(pos, message));
        self
    }

    /// Add a note providing additional context.
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// Get the primary position (the first label's position).
    pub fn primary_pos(&self) -> Option<Position> {
        self.labels.first().map(|l| l.pos)
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "error[{}]: {}", self.code, self.message)?;

        for label in &self.labels {
            write!(f, "\n  --> {:?}: {}", label.pos, label.message)?;
        }

        for note in &self.notes {
            write!(f, "\n  = note: {note}")?;
        }

        Ok(())
    }
}
