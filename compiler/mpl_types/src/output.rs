//! Type checker output.

use mpl_ir::{ExprId, Type};

/// Per-expression types of a checked module.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct TypedModule {
    /// Type of each expression, indexed by `ExprId`.
    ///
    /// `None` only for expressions the checker never reached, which cannot
    /// happen for a module that checked successfully.
    pub expr_types: Vec<Option<Type>>,
}

impl TypedModule {
    /// Table with one empty slot per expression.
    pub fn with_capacity(expr_count: usize) -> Self {
        TypedModule {
            expr_types: vec![None; expr_count],
        }
    }

    /// Type of an expression.
    #[inline]
    pub fn expr_type(&self, id: ExprId) -> Option<Type> {
        self.expr_types.get(id.index()).copied().flatten()
    }

    pub(crate) fn set(&mut self, id: ExprId, ty: Type) {
        if let Some(slot) = self.expr_types.get_mut(id.index()) {
            *slot = Some(ty);
        }
    }
}
