//! The `check` command: parse and type check without running.

use mpl_diagnostic::emitter::ColorMode;

use super::{read_file, report};
use crate::Session;

/// Type check a file. Prints nothing but diagnostics.
pub fn check_file(path: &str, color: ColorMode) -> bool {
    let Some(source) = read_file(path) else {
        return false;
    };

    match Session::new().check(&source) {
        Ok(_) => true,
        Err(problem) => {
            report(&problem.to_diagnostic(), path, &source, color);
            false
        }
    }
}
