//! Diagnostic system for error reporting.
//!
//! Every phase error (lexical, syntactic, static, runtime) converts into a
//! [`Diagnostic`]:
//! - Error code for searchability (`mpl explain E2003`)
//! - Message (what went wrong)
//! - Primary label (where it went wrong)
//! - Notes (context, such as "while parsing a for loop")
//!
//! Rendering is done by an emitter; see [`emitter::TerminalEmitter`].

mod diagnostic;
pub mod emitter;
mod error_code;

pub use diagnostic::{Diagnostic, Label};
pub use error_code::ErrorCode;
