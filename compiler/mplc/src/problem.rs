//! Phase failures, unified.

use std::fmt;

use mpl_diagnostic::{Diagnostic, ErrorCode};
use mpl_eval::EvalError;
use mpl_parse::ParseError;
use mpl_types::TypeCheckError;

/// The error that stopped a program, from whichever phase raised it.
///
/// Lexical errors arrive wrapped in [`ParseError`], since the parser drives
/// the scanner.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Problem {
    Parse(ParseError),
    Type(TypeCheckError),
    Eval(EvalError),
}

impl Problem {
    pub fn code(&self) -> ErrorCode {
        match self {
            Problem::Parse(err) => err.code(),
            Problem::Type(err) => err.code(),
            Problem::Eval(err) => err.code(),
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            Problem::Parse(err) => err.to_diagnostic(),
            Problem::Type(err) => err.to_diagnostic(),
            Problem::Eval(err) => err.to_diagnostic(),
        }
    }
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Problem::Parse(err) => fmt::Display::fmt(err, f),
            Problem::Type(err) => fmt::Display::fmt(err, f),
            Problem::Eval(err) => fmt::Display::fmt(err, f),
        }
    }
}

impl std::error::Error for Problem {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Problem::Parse(err) => Some(err),
            Problem::Type(err) => Some(err),
            Problem::Eval(err) => Some(err),
        }
    }
}

impl From<ParseError> for Problem {
    fn from(err: ParseError) -> Self {
        Problem::Parse(err)
    }
}

impl From<TypeCheckError> for Problem {
    fn from(err: TypeCheckError) -> Self {
        Problem::Type(err)
    }
}

impl From<EvalError> for Problem {
    fn from(err: EvalError) -> Self {
        Problem::Eval(err)
    }
}
