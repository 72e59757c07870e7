//! Mini-PL IR - shared vocabulary of the interpreter pipeline.
//!
//! This crate contains the data structures every phase agrees on:
//! - Positions (1-based line/column) for source locations
//! - Names for interned identifiers and string literals
//! - Tokens produced by the scanner
//! - AST nodes (statements, expressions) and the expression arena
//! - The three language types
//!
//! # Design Philosophy
//!
//! - **Intern Everything**: identifiers and string literals → `Name(u32)`
//! - **Flatten Expressions**: no `Box<Expr>`, children are `ExprId(u32)` indices
//! - **Closed Node Set**: every pass is an exhaustive `match` over `StmtKind`/`ExprKind`
//!
//! Derived per-node data (inferred types, runtime values) is never stored in
//! the nodes themselves; passes keep it in side tables keyed by `ExprId`.

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-allocated types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod arena;
pub mod ast;
mod expr_id;
mod interner;
mod name;
mod position;
mod token;
mod ty;

pub use arena::ExprArena;
pub use ast::{BinaryOp, Block, Expr, ExprKind, Module, Stmt, StmtKind, UnaryOp};
pub use expr_id::ExprId;
pub use interner::StringInterner;
pub use name::Name;
pub use position::Position;
pub use token::{Keyword, Token, TokenKind};
pub use ty::Type;

#[cfg(target_pointer_width = "64")]
mod size_asserts {
    use super::{ExprId, Name, Position};
    crate::static_assert_size!(Name, 4);
    crate::static_assert_size!(ExprId, 4);
    crate::static_assert_size!(Position, 8);
}
