//! String interner for identifiers and string literal contents.
//!
//! One interner lives in each interpretation session. The parser interns
//! while building the AST; the later passes only look names up, mostly to
//! put variable names into error messages.

use rustc_hash::FxHashMap;

use super::Name;

/// Single-threaded string interner.
///
/// `Name(0)` is always the empty string.
#[derive(Clone, Debug)]
pub struct StringInterner {
    map: FxHashMap<Box<str>, Name>,
    strings: Vec<Box<str>>,
}

impl StringInterner {
    /// Create a new interner with the empty string pre-interned.
    pub fn new() -> Self {
        let mut interner = StringInterner {
            map: FxHashMap::default(),
            strings: Vec::with_capacity(64),
        };
        interner.strings.push(Box::from(""));
        interner.map.insert(Box::from(""), Name::EMPTY);
        interner
    }

    /// Intern a string, returning its `Name`.
    ///
    /// # Panics
    /// Panics if more than `u32::MAX` distinct strings are interned.
    pub fn intern(&mut self, s: &str) -> Name {
        if let Some(&name) = self.map.get(s) {
            return name;
        }
        let raw = u32::try_from(self.strings.len())
            .unwrap_or_else(|_| panic!("string interner exceeded u32::MAX entries"));
        let name = Name::from_raw(raw);
        self.strings.push(Box::from(s));
        self.map.insert(Box::from(s), name);
        name
    }

    /// Look up the string for a `Name`.
    ///
    /// Names from another interner resolve to `"<unknown>"` rather than
    /// panicking.
    pub fn lookup(&self, name: Name) -> &str {
        self.strings
            .get(name.index())
            .map_or("<unknown>", |s| s)
    }

    /// Number of interned strings, including the empty string.
    pub fn len(&self) -> usize {
        self.strings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }
}

impl Default for StringInterner {
    fn default() -> Self {
        Self::new()
    }
}
