#![deny(clippy::arithmetic_side_effects)]
//! Tree-walking interpreter for Mini-PL.
//!
//! Runs a module that has already passed type checking. Binary operators
//! dispatch on the static operand type recorded in the [`TypedModule`];
//! values that disagree with it are reported rather than coerced.
//!
//! Output goes through a [`PrintHandlerImpl`] and `read` pulls lines from an
//! [`InputHandlerImpl`], so tests can script input and capture output.
//!
//! [`TypedModule`]: mpl_types::TypedModule

mod errors;
mod input_handler;
mod interpreter;
mod operators;
mod print_handler;

pub use errors::{EvalError, EvalErrorKind, EvalResult};
pub use input_handler::{BufferInputHandler, InputHandlerImpl, StdinInputHandler};
pub use interpreter::{interpret, Interpreter};
pub use operators::{evaluate_binary, evaluate_unary};
pub use print_handler::{BufferPrintHandler, PrintHandlerImpl, StdoutPrintHandler};
