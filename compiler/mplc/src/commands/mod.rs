//! Command handlers for the `mpl` CLI.
//!
//! Each handler returns whether it succeeded; `main` turns that into the
//! process exit status. Diagnostics go to stderr, program output to stdout.

use std::io::IsTerminal;

use mpl_diagnostic::emitter::{ColorMode, DiagnosticEmitter, TerminalEmitter};
use mpl_diagnostic::Diagnostic;

mod check;
mod debug;
mod explain;
mod run;

pub use check::check_file;
pub use debug::{lex_file, parse_file};
pub use explain::explain_error;
pub use run::{collect_files, run_file, run_paths};

/// Read a source file, reporting failure on stderr.
pub(crate) fn read_file(path: &str) -> Option<String> {
    match std::fs::read_to_string(path) {
        Ok(content) => Some(content),
        Err(e) => {
            let msg = match e.kind() {
                std::io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
                std::io::ErrorKind::PermissionDenied => {
                    format!("permission denied reading '{path}'")
                }
                std::io::ErrorKind::InvalidData => {
                    format!("'{path}' contains invalid UTF-8 data")
                }
                _ => format!("error reading '{path}': {e}"),
            };
            eprintln!("{msg}");
            None
        }
    }
}

/// Render one diagnostic to stderr with a snippet of `source`.
pub(crate) fn report(diagnostic: &Diagnostic, path: &str, source: &str, color: ColorMode) {
    let is_tty = std::io::stderr().is_terminal();
    let mut emitter = TerminalEmitter::with_color_mode(std::io::stderr(), color, is_tty)
        .with_source(source)
        .with_file_path(path);
    emitter.emit(diagnostic);
    emitter.flush();
}
