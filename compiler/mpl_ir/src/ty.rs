//! The three Mini-PL types.

use std::fmt;

/// Static type of a variable or expression.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Type {
    Int,
    Str,
    Bool,
}

impl Type {
    /// Source spelling, as written in a declaration.
    pub const fn name(self) -> &'static str {
        match self {
            Type::Int => "int",
            Type::Str => "string",
            Type::Bool => "bool",
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
