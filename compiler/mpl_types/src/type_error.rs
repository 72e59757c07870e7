//! Type checking errors.

use std::fmt;

use mpl_diagnostic::{Diagnostic, ErrorCode};
use mpl_ir::{Position, Type};

/// A static semantic error.
///
/// Variable names are resolved to their source text when the error is
/// built, so the error can be displayed without the interner.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct TypeCheckError {
    pub pos: Position,
    pub kind: TypeErrorKind,
}

/// What kind of type error occurred.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum TypeErrorKind {
    /// An expression's type differs from what its context requires.
    Mismatch {
        expected: Type,
        found: Type,
        context: MismatchContext,
    },
    /// Use of a name that was never declared.
    UndefinedVariable { name: String },
    /// Second declaration of a name.
    Redeclared { name: String },
    /// Binary operator applied to operands it does not accept.
    InvalidBinaryOperands {
        op: &'static str,
        left: Type,
        right: Type,
    },
    /// Unary operator applied to an operand it does not accept.
    InvalidUnaryOperand { op: &'static str, operand: Type },
    /// Assignment, `read`, or nested loop on a running loop's control variable.
    LockedVariable { name: String },
    /// `read` into a variable that is neither `int` nor `string`.
    InvalidReadTarget { name: String, ty: Type },
}

/// Where a type mismatch was detected.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum MismatchContext {
    /// Initializer of `var name`.
    Declaration { name: String },
    /// Right-hand side of `name := ...`.
    Assignment { name: String },
    /// Condition of an `if`.
    Condition,
    /// Lower bound of a `for` range.
    RangeStart,
    /// Upper bound of a `for` range.
    RangeEnd,
    /// An existing variable reused as a `for` control variable.
    LoopVariable { name: String },
}

impl MismatchContext {
    fn describe(&self) -> String {
        match self {
            MismatchContext::Declaration { name } => format!("initializer of `{name}`"),
            MismatchContext::Assignment { name } => format!("value assigned to `{name}`"),
            MismatchContext::Condition => "if condition".to_string(),
            MismatchContext::RangeStart => "start of for range".to_string(),
            MismatchContext::RangeEnd => "end of for range".to_string(),
            MismatchContext::LoopVariable { name } => format!("for loop variable `{name}`"),
        }
    }
}

impl TypeCheckError {
    #[cold]
    pub fn new(pos: Position, kind: TypeErrorKind) -> Self {
        TypeCheckError { pos, kind }
    }

    #[cold]
    pub fn mismatch(pos: Position, expected: Type, found: Type, context: MismatchContext) -> Self {
        Self::new(
            pos,
            TypeErrorKind::Mismatch {
                expected,
                found,
                context,
            },
        )
    }

    pub fn code(&self) -> ErrorCode {
        match self.kind {
            TypeErrorKind::Mismatch { .. } => ErrorCode::E2001,
            TypeErrorKind::UndefinedVariable { .. } => ErrorCode::E2002,
            TypeErrorKind::Redeclared { .. } => ErrorCode::E2003,
            TypeErrorKind::InvalidBinaryOperands { .. }
            | TypeErrorKind::InvalidUnaryOperand { .. } => ErrorCode::E2004,
            TypeErrorKind::LockedVariable { .. } => ErrorCode::E2005,
            TypeErrorKind::InvalidReadTarget { .. } => ErrorCode::E2006,
        }
    }

    /// Convert to a diagnostic for rendering.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let (label, note) = match &self.kind {
            TypeErrorKind::Mismatch {
                expected, found, ..
            } => (format!("expected `{expected}`, found `{found}`"), None),
            TypeErrorKind::UndefinedVariable { .. } => (
                "not declared".to_string(),
                Some("declare it first with `var name : type`"),
            ),
            TypeErrorKind::Redeclared { .. } => (
                "redeclared here".to_string(),
                Some("all declarations share one global scope"),
            ),
            TypeErrorKind::InvalidBinaryOperands { left, right, .. } => {
                (format!("`{left}` and `{right}`"), None)
            }
            TypeErrorKind::InvalidUnaryOperand { operand, .. } => {
                (format!("`{operand}` operand"), None)
            }
            TypeErrorKind::LockedVariable { .. } => (
                "loop control variable".to_string(),
                Some("the control variable of a for loop is read-only inside its body"),
            ),
            TypeErrorKind::InvalidReadTarget { ty, .. } => (
                format!("declared `{ty}`"),
                Some("`read` only accepts `int` and `string` variables"),
            ),
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

impl fmt::Display for TypeCheckError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            TypeErrorKind::Mismatch {
                expected,
                found,
                context,
            } => write!(
                f,
                "type mismatch in {}: expected `{expected}`, found `{found}`",
                context.describe()
            ),
            TypeErrorKind::UndefinedVariable { name } => {
                write!(f, "undefined or uninitialized variable `{name}`")
            }
            TypeErrorKind::Redeclared { name } => {
                write!(f, "variable `{name}` is already declared")
            }
            TypeErrorKind::InvalidBinaryOperands { op, left, right } => write!(
                f,
                "operator `{op}` cannot be applied to `{left}` and `{right}`"
            ),
            TypeErrorKind::InvalidUnaryOperand { op, operand } => {
                write!(f, "operator `{op}` cannot be applied to `{operand}`")
            }
            TypeErrorKind::LockedVariable { name } => {
                write!(f, "cannot modify loop control variable `{name}`")
            }
            TypeErrorKind::InvalidReadTarget { name, ty } => {
                write!(f, "cannot read into `{name}` of type `{ty}`")
            }
        }
    }
}

impl std::error::Error for TypeCheckError {}
