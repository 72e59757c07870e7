//! Variable table shared by the type checker and the interpreter.
//!
//! Mini-PL has a single global scope: every declaration, wherever it
//! appears, lands in one [`Environment`] keyed by interned [`Name`]. Each
//! entry carries the declared type, the current runtime [`Value`], and a
//! [`Mutability`] flag used to lock `for` loop control variables.
//!
//! [`Name`]: mpl_ir::Name

mod environment;
mod value;

pub use environment::{Entry, EnvError, Environment, Mutability};
pub use value::Value;
