//! Abstract syntax tree.
//!
//! Statements own their nested blocks directly; expressions live in the
//! [`ExprArena`](crate::ExprArena) and are linked by `ExprId`.
//!
//! The node set is closed: both passes are exhaustive matches over
//! [`StmtKind`] and [`ExprKind`].

mod expr;
mod operators;
mod stmt;

pub use expr::{Expr, ExprKind};
pub use operators::{BinaryOp, UnaryOp};
pub use stmt::{Block, Module, Stmt, StmtKind};
