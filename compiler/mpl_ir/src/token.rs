//! Token types for the Mini-PL scanner.
//!
//! A token keeps the five-way classification of the language definition
//! (`Int`, `String`, `Bool`, `Ident`, `Keyword`) together with its source
//! text. Keywords and symbols additionally carry a typed [`Keyword`] tag so
//! the parser matches on enums instead of comparing strings.

use std::fmt;

use super::Position;

/// A token with its text and the position of its first character.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    /// Source text of the token. For string literals this is the cooked
    /// value (quotes removed, escapes resolved).
    pub text: String,
    pub pos: Position,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, text: impl Into<String>, pos: Position) -> Self {
        Token {
            kind,
            text: text.into(),
            pos,
        }
    }

    /// Create a keyword or symbol token; the text is the keyword's spelling.
    #[inline]
    pub fn keyword(keyword: Keyword, pos: Position) -> Self {
        Token::new(TokenKind::Keyword(keyword), keyword.as_str(), pos)
    }

    /// Check whether this token is the given keyword or symbol.
    #[inline]
    pub fn is_keyword(&self, keyword: Keyword) -> bool {
        self.kind == TokenKind::Keyword(keyword)
    }

    /// Human-readable description used in "expected X, found Y" messages.
    pub fn describe(&self) -> String {
        match self.kind {
            TokenKind::Int => format!("integer `{}`", self.text),
            TokenKind::Str => format!("string {:?}", self.text),
            TokenKind::Bool => format!("boolean `{}`", self.text),
            TokenKind::Ident => format!("identifier `{}`", self.text),
            TokenKind::Keyword(keyword) if keyword.is_symbol() => format!("`{}`", self.text),
            TokenKind::Keyword(_) => format!("keyword `{}`", self.text),
        }
    }
}

/// Token dump format: `{Kind, text, line, column}`.
impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{{}, {:?}, {}, {}}}",
            self.kind.class_name(),
            self.text,
            self.pos.line,
            self.pos.column
        )
    }
}

/// Token classification.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TokenKind {
    /// Digit run: `42`
    Int,
    /// String literal: `"hello\n"`
    Str,
    /// `true` or `false`
    Bool,
    /// Identifier
    Ident,
    /// Reserved word or symbol
    Keyword(Keyword),
}

impl TokenKind {
    /// Name of the token class, as printed by the token dump.
    pub const fn class_name(self) -> &'static str {
        match self {
            TokenKind::Int => "Int",
            TokenKind::Str => "String",
            TokenKind::Bool => "Bool",
            TokenKind::Ident => "Identifier",
            TokenKind::Keyword(_) => "Keyword",
        }
    }
}

/// Reserved words and symbols.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Keyword {
    // Reserved words
    Var,
    For,
    End,
    In,
    Do,
    Read,
    Print,
    IntType,    // int
    StringType, // string
    BoolType,   // bool
    Assert,
    If,
    Else,

    // Symbols
    Plus,      // +
    Minus,     // -
    Star,      // *
    Slash,     // /
    Semicolon, // ;
    Colon,     // :
    Amp,       // &
    Eq,        // =
    LParen,    // (
    RParen,    // )
    Bang,      // !
    Lt,        // <
    DotDot,    // ..
    ColonEq,   // :=
}

impl Keyword {
    /// Look up a reserved word. Returns `None` for identifiers.
    ///
    /// `true` and `false` are boolean literals, not keywords.
    pub fn from_word(word: &str) -> Option<Keyword> {
        let keyword = match word {
            "var" => Keyword::Var,
            "for" => Keyword::For,
            "end" => Keyword::End,
            "in" => Keyword::In,
            "do" => Keyword::Do,
            "read" => Keyword::Read,
            "print" => Keyword::Print,
            "int" => Keyword::IntType,
            "string" => Keyword::StringType,
            "bool" => Keyword::BoolType,
            "assert" => Keyword::Assert,
            "if" => Keyword::If,
            "else" => Keyword::Else,
            _ => return None,
        };
        Some(keyword)
    }

    /// Look up a single-character symbol.
    ///
    /// `.` is absent: it only exists as part of `..`.
    pub fn from_symbol_char(c: char) -> Option<Keyword> {
        let keyword = match c {
            '+' => Keyword::Plus,
            '-' => Keyword::Minus,
            '*' => Keyword::Star,
            '/' => Keyword::Slash,
            ';' => Keyword::Semicolon,
            ':' => Keyword::Colon,
            '&' => Keyword::Amp,
            '=' => Keyword::Eq,
            '(' => Keyword::LParen,
            ')' => Keyword::RParen,
            '!' => Keyword::Bang,
            '<' => Keyword::Lt,
            _ => return None,
        };
        Some(keyword)
    }

    /// Source spelling of this keyword or symbol.
    pub const fn as_str(self) -> &'static str {
        match self {
            Keyword::Var => "var",
            Keyword::For => "for",
            Keyword::End => "end",
            Keyword::In => "in",
            Keyword::Do => "do",
            Keyword::Read => "read",
            Keyword::Print => "print",
            Keyword::IntType => "int",
            Keyword::StringType => "string",
            Keyword::BoolType => "bool",
            Keyword::Assert => "assert",
            Keyword::If => "if",
            Keyword::Else => "else",
            Keyword::Plus => "+",
            Keyword::Minus => "-",
            Keyword::Star => "*",
            Keyword::Slash => "/",
            Keyword::Semicolon => ";",
            Keyword::Colon => ":",
            Keyword::Amp => "&",
            Keyword::Eq => "=",
            Keyword::LParen => "(",
            Keyword::RParen => ")",
            Keyword::Bang => "!",
            Keyword::Lt => "<",
            Keyword::DotDot => "..",
            Keyword::ColonEq => ":=",
        }
    }

    /// Whether this is a punctuation symbol rather than a reserved word.
    pub const fn is_symbol(self) -> bool {
        matches!(
            self,
            Keyword::Plus
                | Keyword::Minus
                | Keyword::Star
                | Keyword::Slash
                | Keyword::Semicolon
                | Keyword::Colon
                | Keyword::Amp
                | Keyword::Eq
                | Keyword::LParen
                | Keyword::RParen
                | Keyword::Bang
                | Keyword::Lt
                | Keyword::DotDot
                | Keyword::ColonEq
        )
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
