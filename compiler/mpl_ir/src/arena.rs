//! Arena allocation for expressions.
//!
//! Expressions are stored contiguously and referenced by `ExprId`.
//! Nodes are never removed or reparented once allocated.

use crate::{Expr, ExprId};

/// Contiguous storage for all expressions of one parsed module.
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct ExprArena {
    exprs: Vec<Expr>,
}

impl ExprArena {
    pub fn new() -> Self {
        ExprArena { exprs: Vec::new() }
    }

    /// Allocate expression, return ID.
    ///
    /// # Panics
    /// Panics if the arena exceeds `u32::MAX` expressions.
    #[inline]
    pub fn alloc_expr(&mut self, expr: Expr) -> ExprId {
        let index = u32::try_from(self.exprs.len()).unwrap_or_else(|_| {
            panic!("expression arena exceeded u32::MAX entries")
        });
        self.exprs.push(expr);
        ExprId::new(index)
    }

    /// Get expression by ID.
    ///
    /// # Panics
    /// Panics if `id` was not allocated by this arena.
    #[inline]
    #[track_caller]
    pub fn get_expr(&self, id: ExprId) -> &Expr {
        &self.exprs[id.index()]
    }

    /// Number of allocated expressions.
    #[inline]
    pub fn len(&self) -> usize {
        self.exprs.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.exprs.is_empty()
    }
}
