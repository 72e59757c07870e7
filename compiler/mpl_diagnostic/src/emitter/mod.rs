//! Diagnostic emitters.
//!
//! Only a terminal emitter exists; the trait keeps the driver independent of
//! the output format.

mod terminal;

pub use terminal::{ColorMode, TerminalEmitter};

use crate::Diagnostic;

/// Trait for emitting diagnostics in various formats.
pub trait DiagnosticEmitter {
    /// Emit a single diagnostic.
    fn emit(&mut self, diagnostic: &Diagnostic);

    /// Flush any buffered output.
    fn flush(&mut self);
}
