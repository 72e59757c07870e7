//! Parsing context for "while parsing X" notes.

/// The construct the parser was working on when an error occurred.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ErrorContext {
    /// `var x : T [:= e]`
    Declaration,
    /// `x := e`
    Assignment,
    /// `for ... end for`
    ForLoop,
    /// `if ... end if`
    IfStatement,
    /// `read x`
    ReadStatement,
    /// `print e`
    PrintStatement,
    /// A parenthesized expression.
    Parenthesized,
}

impl ErrorContext {
    /// Returns a phrase suitable for "while parsing {description}".
    pub fn description(self) -> &'static str {
        match self {
            Self::Declaration => "a variable declaration",
            Self::Assignment => "an assignment",
            Self::ForLoop => "a for loop",
            Self::IfStatement => "an if statement",
            Self::ReadStatement => "a read statement",
            Self::PrintStatement => "a print statement",
            Self::Parenthesized => "a parenthesized expression",
        }
    }
}
