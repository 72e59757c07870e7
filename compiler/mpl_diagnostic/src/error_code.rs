//! Error codes for all interpreter diagnostics.
//!
//! Each error code is a unique identifier (e.g., `E1001`) with the first digit
//! indicating the phase. Used for `mpl explain` lookups.

use std::fmt;

/// Error codes for all interpreter diagnostics.
///
/// Format: E#### where first digit indicates phase:
/// - E0xxx: Scanner errors
/// - E1xxx: Parser errors
/// - E2xxx: Type errors
/// - E6xxx: Runtime errors
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Scanner Errors (E0xxx)
    /// Unterminated string literal
    E0001,
    /// Unrecognized character in source
    E0002,
    /// Invalid escape sequence
    E0003,
    /// Unterminated block comment
    E0004,
    /// Line break inside a string literal
    E0005,

    // Parser Errors (E1xxx)
    /// Unexpected token
    E1001,
    /// Expected expression
    E1002,
    /// Expected type
    E1003,
    /// Unexpected end of file
    E1004,
    /// Integer literal out of range
    E1005,
    /// Declaration outside the top-level scope
    E1006,

    // Type Errors (E2xxx)
    /// Type mismatch
    E2001,
    /// Undefined variable
    E2002,
    /// Variable redeclared
    E2003,
    /// Operator not defined for operand types
    E2004,
    /// Assignment to a loop control variable
    E2005,
    /// Invalid `read` target
    E2006,

    // Runtime Errors (E6xxx)
    /// Input could not be converted to an integer
    E6001,
    /// Division by zero
    E6002,
    /// Integer overflow
    E6003,
    /// Operation not implemented for type
    E6004,
    /// Variable has no value
    E6005,
    /// Environment violation at runtime
    E6006,
    /// Input/output failure
    E6007,
}

impl ErrorCode {
    /// Every error code, in numeric order.
    pub const ALL: &'static [ErrorCode] = &[
        ErrorCode::E0001,
        ErrorCode::E0002,
        ErrorCode::E0003,
        ErrorCode::E0004,
        ErrorCode::E0005,
        ErrorCode::E1001,
        ErrorCode::E1002,
        ErrorCode::E1003,
        ErrorCode::E1004,
        ErrorCode::E1005,
        ErrorCode::E1006,
        ErrorCode::E2001,
        ErrorCode::E2002,
        ErrorCode::E2003,
        ErrorCode::E2004,
        ErrorCode::E2005,
        ErrorCode::E2006,
        ErrorCode::E6001,
        ErrorCode::E6002,
        ErrorCode::E6003,
        ErrorCode::E6004,
        ErrorCode::E6005,
        ErrorCode::E6006,
        ErrorCode::E6007,
    ];

    /// Get the numeric code as a string (e.g., "E1001").
    pub fn as_str(&self) -> &'static str {
        match self {
            // Scanner
            ErrorCode::E0001 => "E0001",
            ErrorCode::E0002 => "E0002",
            ErrorCode::E0003 => "E0003",
            ErrorCode::E0004 => "E0004",
            ErrorCode::E0005 => "E0005",
            // Parser
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E1003 => "E1003",
            ErrorCode::E1004 => "E1004",
            ErrorCode::E1005 => "E1005",
            ErrorCode::E1006 => "E1006",
            // Type
            ErrorCode::E2001 => "E2001",
            ErrorCode::E2002 => "E2002",
            ErrorCode::E2003 => "E2003",
            ErrorCode::E2004 => "E2004",
            ErrorCode::E2005 => "E2005",
            ErrorCode::E2006 => "E2006",
            // Runtime
            ErrorCode::E6001 => "E6001",
            ErrorCode::E6002 => "E6002",
            ErrorCode::E6003 => "E6003",
            ErrorCode::E6004 => "E6004",
            ErrorCode::E6005 => "E6005",
            ErrorCode::E6006 => "E6006",
            ErrorCode::E6007 => "E6007",
        }
    }

    /// One-paragraph explanation, printed by `mpl explain`.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => {
                "A string literal was opened with `\"` but the file ended before the closing `\"`. \
                 The error points at the opening quote."
            }
            ErrorCode::E0002 => {
                "The scanner found a character that starts no token. Note that a lone `.` is \
                 invalid: only the range operator `..` exists."
            }
            ErrorCode::E0003 => {
                "A backslash inside a string literal was followed by a character that is not one \
                 of `r n a b f t v \\ \"`."
            }
            ErrorCode::E0004 => {
                "A `/*` block comment was never closed with `*/`. The error points at the opening \
                 `/*`."
            }
            ErrorCode::E0005 => {
                "A string literal contains a raw line break. Strings must close on the line they \
                 open on; use `\\n` for a newline character."
            }
            ErrorCode::E1001 => {
                "The parser expected one token and found another. Every statement must end with \
                 `;`, and `for`/`if` blocks must close with `end for` / `end if`."
            }
            ErrorCode::E1002 => {
                "An expression was expected: a literal, a variable, `!operand`, or a parenthesized \
                 expression."
            }
            ErrorCode::E1003 => "A type was expected after `:`. The types are `int`, `string` and `bool`.",
            ErrorCode::E1004 => {
                "The file ended in the middle of a statement or block. A program must contain at \
                 least one statement, and the last statement must be terminated by `;`."
            }
            ErrorCode::E1005 => "An integer literal does not fit in a 32-bit signed integer.",
            ErrorCode::E1006 => {
                "`var` declarations are only allowed at the top level, not inside a `for` or `if` \
                 body. Declare the variable before the block."
            }
            ErrorCode::E2001 => {
                "An expression has a different type than its context requires: a declaration's \
                 initializer, an assignment, an `if` condition, or a `for` bound. No implicit \
                 conversions exist."
            }
            ErrorCode::E2002 => "A variable was used before being declared with `var`.",
            ErrorCode::E2003 => {
                "A variable was declared twice. All declarations share one global scope, so a \
                 name may only be declared once per program."
            }
            ErrorCode::E2004 => {
                "An operator was applied to operands it does not support. Both operands of a \
                 binary operator must have the same type: `+` takes int or string, `- * /` and `<` \
                 take int, `=` takes any type, `&` and `!` take bool."
            }
            ErrorCode::E2005 => {
                "The control variable of a `for` loop cannot be assigned, read into, or reused \
                 as the control variable of a nested loop while the loop is running."
            }
            ErrorCode::E2006 => "`read` can only store into a variable declared `int` or `string`.",
            ErrorCode::E6001 => "The input line given to `read` for an `int` variable is not an integer.",
            ErrorCode::E6002 => "The right operand of `/` evaluated to zero.",
            ErrorCode::E6003 => {
                "An arithmetic result, or a `for` loop counter increment, did not fit in a \
                 32-bit signed integer."
            }
            ErrorCode::E6004 => {
                "An operator met a runtime value whose type disagrees with the statically \
                 inferred type. This indicates an interpreter bug."
            }
            ErrorCode::E6005 => "A variable was read before any value was stored in it.",
            ErrorCode::E6006 => {
                "The variable table rejected an update at runtime. This indicates an interpreter \
                 bug, since the type checker enforces the same rules."
            }
            ErrorCode::E6007 => "Reading from standard input or writing to standard output failed.",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Parse an error code string like `"E2001"`.
///
/// Case-insensitive.
impl std::str::FromStr for ErrorCode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.to_uppercase();
        Self::ALL
            .iter()
            .find(|code| code.as_str() == upper)
            .copied()
            .ok_or(())
    }
}
