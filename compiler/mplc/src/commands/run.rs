//! The `run` command: interpret one or more programs.

use std::io;
use std::path::{Path, PathBuf};

use mpl_diagnostic::emitter::ColorMode;
use mpl_eval::{InputHandlerImpl, PrintHandlerImpl};

use super::{read_file, report};
use crate::Session;

/// Printed after each program; the trailing blank line separates files.
const FINISHED_FOOTER: &str = "\nInterpreter finished\n\n";

/// The line announcing `path`, naming the file without its directory.
fn file_header(path: &Path) -> String {
    let name = path
        .file_name()
        .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned());
    format!("Interpreting file: {name:?}")
}

/// Expand `path` into the files to run.
///
/// A file is returned as-is. A directory yields its regular files, sorted by
/// name; subdirectories are not descended into.
pub fn collect_files(path: &Path) -> io::Result<Vec<PathBuf>> {
    if !path.is_dir() {
        return Ok(vec![path.to_path_buf()]);
    }

    let mut files = Vec::new();
    for entry in std::fs::read_dir(path)? {
        let entry = entry?;
        if entry.file_type()?.is_file() {
            files.push(entry.path());
        }
    }
    files.sort();
    Ok(files)
}

/// Run every program named by `paths`, in order.
///
/// Each file gets its own session; a failing file does not stop the batch.
/// Returns `false` if any file could not be read or failed.
pub fn run_paths(paths: &[String], color: ColorMode) -> bool {
    let mut ok = true;
    for path in paths {
        let files = match collect_files(Path::new(path)) {
            Ok(files) => files,
            Err(e) => {
                eprintln!("error reading directory '{path}': {e}");
                ok = false;
                continue;
            }
        };

        for file in files {
            println!("{}", file_header(&file));
            ok &= run_file(&file.display().to_string(), color);
            print!("{FINISHED_FOOTER}");
        }
    }
    ok
}

/// Run a single program with stdin and stdout.
pub fn run_file(path: &str, color: ColorMode) -> bool {
    let Some(source) = read_file(path) else {
        return false;
    };

    let print = PrintHandlerImpl::stdout();
    let input = InputHandlerImpl::stdin();
    match Session::new().run(&source, &print, &input) {
        Ok(()) => true,
        Err(problem) => {
            tracing::debug!(code = %problem.code(), "program failed");
            report(&problem.to_diagnostic(), path, &source, color);
            false
        }
    }
}
