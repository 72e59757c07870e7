//! Escape sequences in string literals.
//!
//! Recognized escapes: `\r \n \a \b \f \t \v \\ \"`.

/// Resolve the character after a backslash.
///
/// Returns `None` for anything outside the recognized set.
#[inline]
pub(crate) fn resolve_escape(c: char) -> Option<char> {
    match c {
        'r' => Some('\r'),
        'n' => Some('\n'),
        'a' => Some('\x07'),
        'b' => Some('\x08'),
        'f' => Some('\x0C'),
        't' => Some('\t'),
        'v' => Some('\x0B'),
        '\\' => Some('\\'),
        '"' => Some('"'),
        _ => None,
    }
}

/// Inverse of [`resolve_escape`]: render `value` as a string literal body.
///
/// Used by tests to build source text for arbitrary string values.
#[cfg(test)]
pub(crate) fn escape_str(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\r' => out.push_str("\\r"),
            '\n' => out.push_str("\\n"),
            '\x07' => out.push_str("\\a"),
            '\x08' => out.push_str("\\b"),
            '\x0C' => out.push_str("\\f"),
            '\t' => out.push_str("\\t"),
            '\x0B' => out.push_str("\\v"),
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            c => out.push(c),
        }
    }
    out
}
