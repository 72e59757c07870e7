//! Scanner for Mini-PL.
//!
//! Turns source text into a lazy stream of [`Token`]s. The scanner skips
//! whitespace, control characters and comments, and tracks 1-based
//! line/column positions as it consumes characters.
//!
//! The parser pulls tokens one at a time through [`Scanner::next_token`].
//! Scanning stops at the first [`LexError`]: there is no recovery.

mod cursor;
mod escape;
mod lex_error;
mod scanner;

pub use lex_error::{LexError, LexErrorKind};
pub use scanner::Scanner;
