//! Terminal Emitter
//!
//! Human-readable diagnostic output with optional ANSI color support.
//!
//! ```text
//! error[E2003]: variable `x` is already declared
//!   --> demo.mpl:1:19
//!    |
//!  1 | var x : int := 1; var x : int := 2;
//!    |                   ^ redeclared here
//!    = note: declarations share one global scope
//! ```

use std::io::{self, Write};

use crate::{Diagnostic, Label};

use super::DiagnosticEmitter;

/// ANSI color codes for terminal output.
mod colors {
    pub const ERROR: &str = "\x1b[1;31m"; // Bold red
    pub const BOLD: &str = "\x1b[1m";
    pub const RESET: &str = "\x1b[0m";
}

/// Color output mode for terminal emitter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Automatically detect based on terminal capabilities.
    #[default]
    Auto,
    /// Always use colors.
    Always,
    /// Never use colors.
    Never,
}

impl ColorMode {
    /// Resolve to a boolean based on terminal detection.
    ///
    /// `is_tty` only matters for `Auto`.
    pub fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }

    /// Parse the value of a `--color=` option.
    pub fn from_flag(value: &str) -> Option<Self> {
        match value {
            "auto" => Some(ColorMode::Auto),
            "always" => Some(ColorMode::Always),
            "never" => Some(ColorMode::Never),
            _ => None,
        }
    }
}

/// Terminal emitter with optional color support and source snippets.
pub struct TerminalEmitter<'src, W: Write> {
    writer: W,
    colors: bool,
    file_path: Option<&'src str>,
    source: Option<&'src str>,
}

impl<'src, W: Write> TerminalEmitter<'src, W> {
    /// Create a new terminal emitter with explicit color mode.
    ///
    /// `is_tty` is used for `ColorMode::Auto`.
    pub fn with_color_mode(writer: W, mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter {
            writer,
            colors: mode.should_use_colors(is_tty),
            file_path: None,
            source: None,
        }
    }

    /// Attach the file path shown in `-->` locators.
    #[must_use]
    pub fn with_file_path(mut self, path: &'src str) -> Self {
        self.file_path = Some(path);
        self
    }

    /// Attach the source text, enabling line snippets under labels.
    #[must_use]
    pub fn with_source(mut self, source: &'src str) -> Self {
        self.source = Some(source);
        self
    }

    /// Write text with optional ANSI color codes.
    fn write_colored(&mut self, text: &str, color: &str) {
        if self.colors {
            let _ = write!(self.writer, "{color}{text}{}", colors::RESET);
        } else {
            let _ = write!(self.writer, "{text}");
        }
    }

    fn write_code(&mut self, code: &str) {
        self.write_colored(&format!("[{code}]"), colors::BOLD);
    }

    /// Look up the 1-based `line` of the attached source.
    fn source_line(&self, line: u32) -> Option<&'src str> {
        let index = usize::try_from(line).ok()?.checked_sub(1)?;
        self.source?.lines().nth(index)
    }

    fn write_label(&mut self, label: &Label) {
        let location = match self.file_path {
            Some(path) => format!("{path}:{}:{}", label.pos.line, label.pos.column),
            None => format!("{}:{}", label.pos.line, label.pos.column),
        };

        let Some(line_text) = self.source_line(label.pos.line) else {
            let _ = write!(self.writer, "  --> {location}: ");
            self.write_colored(&label.message, colors::ERROR);
            let _ = writeln!(self.writer);
            return;
        };

        let number = label.pos.line.to_string();
        let gutter = " ".repeat(number.len());
        let _ = writeln!(self.writer, "{gutter}--> {location}");
        let _ = writeln!(self.writer, "{gutter} |");
        let _ = writeln!(self.writer, "{number} | {line_text}");

        // Pad with the line's own whitespace so tabs keep the caret aligned.
        let pad: String = line_text
            .chars()
            .take(label.pos.column.saturating_sub(1) as usize)
            .map(|c| if c == '\t' { '\t' } else { ' ' })
            .collect();
        let _ = write!(self.writer, "{gutter} | {pad}");
        if label.message.is_empty() {
            self.write_colored("^", colors::ERROR);
        } else {
            self.write_colored(&format!("^ {}", label.message), colors::ERROR);
        }
        let _ = writeln!(self.writer);
    }
}

impl TerminalEmitter<'static, io::Stderr> {
    /// Create a terminal emitter for stderr.
    pub fn stderr(mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter::with_color_mode(io::stderr(), mode, is_tty)
    }
}

impl<W: Write> DiagnosticEmitter for TerminalEmitter<'_, W> {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        // Header: error[CODE]: message
        self.write_colored("error", colors::ERROR);
        self.write_code(diagnostic.code.as_str());
        let _ = writeln!(self.writer, ": {}", diagnostic.message);

        for label in &diagnostic.labels {
            self.write_label(label);
        }

        for note in &diagnostic.notes {
            let _ = write!(self.writer, "   = ");
            self.write_colored("note", colors::BOLD);
            let _ = writeln!(self.writer, ": {note}");
        }
    }

    fn flush(&mut self) {
        let _ = self.writer.flush();
    }
}
