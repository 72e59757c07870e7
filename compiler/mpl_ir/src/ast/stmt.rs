//! Statement nodes.

use std::fmt;

use crate::{ExprId, Name, Position, Type};

/// A sequence of statements, each terminated by `;` in the source.
pub type Block = Vec<Stmt>;

/// A parsed program: the top-level statement list.
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct Module {
    pub stmts: Block,
}

/// Statement node.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct Stmt {
    pub kind: StmtKind,
    pub pos: Position,
}

impl Stmt {
    pub fn new(kind: StmtKind, pos: Position) -> Self {
        Stmt { kind, pos }
    }
}

impl fmt::Debug for Stmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {:?}", self.kind, self.pos)
    }
}

/// Statement kinds.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum StmtKind {
    /// `var name : ty [:= init]`
    VarDef {
        name: Name,
        ty: Type,
        init: Option<ExprId>,
    },

    /// `name := value`
    Assign { name: Name, value: ExprId },

    /// `if cond do then_branch [else else_branch] end if`
    If {
        cond: ExprId,
        then_branch: Block,
        else_branch: Option<Block>,
    },

    /// `for var in start..end do body end for`
    For {
        var: Name,
        start: ExprId,
        end: ExprId,
        body: Block,
    },

    /// `read target`
    Read { target: Name },

    /// `print expr`
    Print { expr: ExprId },
}
