//! The variable table.

use rustc_hash::FxHashMap;
use std::fmt;

use mpl_ir::{Name, StringInterner, Type};

use crate::Value;

/// Whether a variable can currently be updated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Mutability {
    #[default]
    Mutable,
    /// Locked while it is the control variable of a running `for` loop.
    Immutable,
}

impl Mutability {
    #[inline]
    pub fn is_mutable(self) -> bool {
        matches!(self, Mutability::Mutable)
    }
}

/// One variable's slot.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Entry {
    /// Declared type. Set right after declaration.
    pub ty: Option<Type>,
    /// Current value. Unset until the interpreter stores one.
    pub value: Option<Value>,
    pub mutability: Mutability,
}

/// Error returned by environment operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EnvError {
    /// `declare` on a name that already has an entry.
    Redeclared(Name),
    /// Access to a name with no entry.
    Undefined(Name),
    /// Update of a locked entry.
    Immutable(Name),
}

impl EnvError {
    pub fn name(self) -> Name {
        match self {
            EnvError::Redeclared(name) | EnvError::Undefined(name) | EnvError::Immutable(name) => {
                name
            }
        }
    }

    /// Message with the variable's source name resolved.
    pub fn message(self, interner: &StringInterner) -> String {
        let name = interner.lookup(self.name());
        match self {
            EnvError::Redeclared(_) => format!("variable `{name}` is already declared"),
            EnvError::Undefined(_) => format!("undefined variable `{name}`"),
            EnvError::Immutable(_) => {
                format!("cannot modify `{name}` while it controls a for loop")
            }
        }
    }
}

impl fmt::Display for EnvError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EnvError::Redeclared(name) => write!(f, "{name:?} is already declared"),
            EnvError::Undefined(name) => write!(f, "{name:?} is undefined"),
            EnvError::Immutable(name) => write!(f, "{name:?} is immutable"),
        }
    }
}

impl std::error::Error for EnvError {}

/// Mapping from variable name to its entry.
///
/// There is no scope nesting: a name is declared at most once per program
/// and every reference to it observes the same entry.
#[derive(Clone, Debug, Default)]
pub struct Environment {
    entries: FxHashMap<Name, Entry>,
}

impl Environment {
    pub fn new() -> Self {
        Environment {
            entries: FxHashMap::default(),
        }
    }

    /// Add an empty, mutable entry for `name`.
    pub fn declare(&mut self, name: Name) -> Result<(), EnvError> {
        if self.entries.contains_key(&name) {
            return Err(EnvError::Redeclared(name));
        }
        self.entries.insert(name, Entry::default());
        Ok(())
    }

    #[inline]
    pub fn contains(&self, name: Name) -> bool {
        self.entries.contains_key(&name)
    }

    /// Look up an entry.
    pub fn entry(&self, name: Name) -> Result<&Entry, EnvError> {
        self.entries.get(&name).ok_or(EnvError::Undefined(name))
    }

    /// Mutable entry that must currently be unlocked.
    fn entry_for_update(&mut self, name: Name) -> Result<&mut Entry, EnvError> {
        let entry = self
            .entries
            .get_mut(&name)
            .ok_or(EnvError::Undefined(name))?;
        if !entry.mutability.is_mutable() {
            return Err(EnvError::Immutable(name));
        }
        Ok(entry)
    }

    pub fn get_type(&self, name: Name) -> Result<Option<Type>, EnvError> {
        Ok(self.entry(name)?.ty)
    }

    pub fn set_type(&mut self, name: Name, ty: Type) -> Result<(), EnvError> {
        self.entry_for_update(name)?.ty = Some(ty);
        Ok(())
    }

    pub fn get_value(&self, name: Name) -> Result<Option<&Value>, EnvError> {
        Ok(self.entry(name)?.value.as_ref())
    }

    pub fn set_value(&mut self, name: Name, value: Value) -> Result<(), EnvError> {
        self.entry_for_update(name)?.value = Some(value);
        Ok(())
    }

    pub fn is_mutable(&self, name: Name) -> Result<bool, EnvError> {
        Ok(self.entry(name)?.mutability.is_mutable())
    }

    /// Lock or unlock `name`. Allowed regardless of the current state.
    pub fn set_mutable(&mut self, name: Name, mutable: bool) -> Result<(), EnvError> {
        let entry = self
            .entries
            .get_mut(&name)
            .ok_or(EnvError::Undefined(name))?;
        entry.mutability = if mutable {
            Mutability::Mutable
        } else {
            Mutability::Immutable
        };
        Ok(())
    }

    /// Remove every entry.
    pub fn reset(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
