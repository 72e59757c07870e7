//! Debug commands: `lex` and `parse` for inspecting the front end.

use mpl_diagnostic::emitter::ColorMode;
use mpl_lexer::Scanner;

use super::{read_file, report};
use crate::{AstDump, Session};

/// Print the token stream, one `{Kind, text, line, column}` per line.
///
/// Tokens before a lexical error are still printed.
pub fn lex_file(path: &str, color: ColorMode) -> bool {
    let Some(source) = read_file(path) else {
        return false;
    };

    for token in Scanner::new(&source) {
        match token {
            Ok(token) => println!("{token:?}"),
            Err(err) => {
                report(&err.to_diagnostic(), path, &source, color);
                return false;
            }
        }
    }
    true
}

/// Parse a file and print its AST.
pub fn parse_file(path: &str, color: ColorMode) -> bool {
    let Some(source) = read_file(path) else {
        return false;
    };

    let mut session = Session::new();
    match session.parse(&source) {
        Ok(parsed) => {
            print!(
                "{}",
                AstDump::new(&parsed.module, &parsed.arena, session.interner())
            );
            true
        }
        Err(problem) => {
            report(&problem.to_diagnostic(), path, &source, color);
            false
        }
    }
}
