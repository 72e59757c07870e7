//! Binary and unary operators.

use crate::Keyword;

/// Binary operators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum BinaryOp {
    // Arithmetic
    Add,
    Sub,
    Mul,
    Div,

    // Comparison
    Lt,
    Eq,

    // Logical
    And,
}

impl BinaryOp {
    /// Returns the source-level symbol for this operator.
    ///
    /// Used in error messages to show the exact operator that failed.
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Lt => "<",
            Self::Eq => "=",
            Self::And => "&",
        }
    }

    /// Map an operator symbol to its binary operator, if it is one.
    pub const fn from_keyword(keyword: Keyword) -> Option<Self> {
        match keyword {
            Keyword::Plus => Some(Self::Add),
            Keyword::Minus => Some(Self::Sub),
            Keyword::Star => Some(Self::Mul),
            Keyword::Slash => Some(Self::Div),
            Keyword::Lt => Some(Self::Lt),
            Keyword::Eq => Some(Self::Eq),
            Keyword::Amp => Some(Self::And),
            _ => None,
        }
    }
}

/// Unary operators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum UnaryOp {
    /// Logical not: `!`
    Not,
}

impl UnaryOp {
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Not => "!",
        }
    }
}
