//! Runtime errors.

use std::fmt;

use mpl_diagnostic::{Diagnostic, ErrorCode};
use mpl_ir::{Position, Type};

/// Result of evaluating an expression.
pub type EvalResult = Result<mpl_env::Value, EvalError>;

/// A runtime failure. Aborts interpretation of the current program.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct EvalError {
    pub pos: Position,
    pub kind: EvalErrorKind,
}

/// Structured runtime error category.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum EvalErrorKind {
    /// `read` into an `int` variable got a line that is not an `i32`.
    ConversionFailed { input: String },
    DivisionByZero,
    IntegerOverflow { operation: &'static str },
    /// Operator applied to a value it has no implementation for.
    ///
    /// Unreachable for a well-typed program.
    InvalidOperation { op: &'static str, ty: Type },
    /// Variable read before any value was stored.
    UnsetValue { name: String },
    /// Environment rejected an access the type checker allowed.
    Environment { message: String },
    Io { message: String },
}

impl EvalError {
    #[cold]
    pub fn new(pos: Position, kind: EvalErrorKind) -> Self {
        EvalError { pos, kind }
    }

    #[cold]
    pub fn io(pos: Position, err: &std::io::Error) -> Self {
        Self::new(
            pos,
            EvalErrorKind::Io {
                message: err.to_string(),
            },
        )
    }

    pub fn code(&self) -> ErrorCode {
        match self.kind {
            EvalErrorKind::ConversionFailed { .. } => ErrorCode::E6001,
            EvalErrorKind::DivisionByZero => ErrorCode::E6002,
            EvalErrorKind::IntegerOverflow { .. } => ErrorCode::E6003,
            EvalErrorKind::InvalidOperation { .. } => ErrorCode::E6004,
            EvalErrorKind::UnsetValue { .. } => ErrorCode::E6005,
            EvalErrorKind::Environment { .. } => ErrorCode::E6006,
            EvalErrorKind::Io { .. } => ErrorCode::E6007,
        }
    }

    /// Convert to a diagnostic for rendering.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let diag = Diagnostic::error(self.code()).with_message(self.to_string());
        match &self.kind {
            EvalErrorKind::ConversionFailed { .. } => diag
                .with_label(self.pos, "read here")
                .with_note(format!(
                    "integer input must be a decimal number between {} and {}",
                    i32::MIN,
                    i32::MAX
                )),
            EvalErrorKind::DivisionByZero => diag.with_label(self.pos, "divisor is zero"),
            EvalErrorKind::IntegerOverflow { .. } => diag
                .with_label(self.pos, "result does not fit in `int`")
                .with_note("integers are 32-bit signed"),
            EvalErrorKind::InvalidOperation { .. }
            | EvalErrorKind::UnsetValue { .. }
            | EvalErrorKind::Environment { .. }
            | EvalErrorKind::Io { .. } => diag.with_label(self.pos, "while evaluating this"),
        }
    }
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            EvalErrorKind::ConversionFailed { input } => {
                write!(f, "cannot convert {input:?} to `int`")
            }
            EvalErrorKind::DivisionByZero => f.write_str("division by zero"),
            EvalErrorKind::IntegerOverflow { operation } => {
                write!(f, "integer overflow in {operation}")
            }
            EvalErrorKind::InvalidOperation { op, ty } => {
                write!(f, "operator `{op}` is not implemented for `{ty}`")
            }
            EvalErrorKind::UnsetValue { name } => write!(f, "variable `{name}` has no value"),
            EvalErrorKind::Environment { message } => f.write_str(message),
            EvalErrorKind::Io { message } => write!(f, "i/o error: {message}"),
        }
    }
}

impl std::error::Error for EvalError {}
