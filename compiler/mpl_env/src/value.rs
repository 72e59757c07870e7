//! Runtime values.

use std::fmt;

use mpl_ir::Type;

/// A runtime value. One variant per language type.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum Value {
    Int(i32),
    Str(String),
    Bool(bool),
}

impl Value {
    /// Value of a declared-but-uninitialized variable.
    pub fn zero(ty: Type) -> Self {
        match ty {
            Type::Int => Value::Int(0),
            Type::Str => Value::Str(String::new()),
            Type::Bool => Value::Bool(false),
        }
    }

    /// The type this value belongs to.
    pub fn ty(&self) -> Type {
        match self {
            Value::Int(_) => Type::Int,
            Value::Str(_) => Type::Str,
            Value::Bool(_) => Type::Bool,
        }
    }

    #[inline]
    pub fn as_int(&self) -> Option<i32> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    #[inline]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

/// The text `print` writes: decimal ints, raw strings, `true`/`false`.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{n}"),
            Value::Str(s) => f.write_str(s),
            Value::Bool(b) => write!(f, "{b}"),
        }
    }
}

#[cfg(test)]
mod tests;
