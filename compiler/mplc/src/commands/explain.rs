//! The `explain` command: describe an error code.

use mpl_diagnostic::ErrorCode;

/// Print the description of an error code such as `E2001`.
pub fn explain_error(code_str: &str) -> bool {
    let Ok(code) = code_str.parse::<ErrorCode>() else {
        eprintln!("Unknown error code: {code_str}");
        eprintln!();
        eprintln!("Codes have the format EXXXX where X is a digit.");
        eprintln!("Examples: E0001, E1001, E2001, E6001");
        return false;
    };

    println!("{code}: {}", code.description());
    true
}
