//! Static type checking for Mini-PL.
//!
//! One pass over the AST in source order. Declarations are entered into the
//! shared [`Environment`](mpl_env::Environment) as they are met, so the
//! interpreter later finds every variable already declared and typed.
//!
//! The inferred type of each expression is recorded in a [`TypedModule`]
//! side table indexed by `ExprId`; the AST itself is never modified.

mod check;
mod operators;
mod output;
mod type_error;

pub use check::{type_check, TypeChecker};
pub use operators::{binary_result, unary_result};
pub use output::TypedModule;
pub use type_error::{MismatchContext, TypeCheckError, TypeErrorKind};
