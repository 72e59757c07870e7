//! Expression nodes.

use std::fmt;

use super::operators::{BinaryOp, UnaryOp};
use crate::{ExprId, Name, Position};

/// Expression node.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct Expr {
    pub kind: ExprKind,
    pub pos: Position,
}

impl Expr {
    #[inline]
    pub fn new(kind: ExprKind, pos: Position) -> Self {
        Expr { kind, pos }
    }
}

impl fmt::Debug for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {:?}", self.kind, self.pos)
    }
}

/// Expression variants.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ExprKind {
    /// Integer literal: `42`
    Int(i32),

    /// String literal, already unescaped and interned.
    Str(Name),

    /// Boolean literal: `true`, `false`
    Bool(bool),

    /// Variable reference
    Ident(Name),

    /// Unary operation: `!operand`
    Unary { op: UnaryOp, operand: ExprId },

    /// Binary operation: `left op right`
    Binary {
        op: BinaryOp,
        left: ExprId,
        right: ExprId,
    },
}
