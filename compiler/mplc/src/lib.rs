//! Mini-PL interpreter driver.
//!
//! ```text
//! source ──► mpl_parse::parse ──► ParseOutput
//!                                     │
//!                                     ▼
//!            mpl_types::type_check ──► TypedModule
//!                                     │
//!                                     ▼
//!            mpl_eval::interpret ──► output
//! ```
//!
//! A [`Session`] owns the interner and the environment for one program.
//! Every phase failure becomes a [`Problem`], which renders as a
//! diagnostic.

mod ast_dump;
pub mod commands;
mod problem;
mod session;
mod tracing_setup;

pub use ast_dump::AstDump;
pub use problem::Problem;
pub use session::{Checked, Session};
pub use tracing_setup::init_tracing;
