//! Input handler for `read`.
//!
//! Mirrors the print handler: stdin when running programs, a scripted list
//! of lines in tests.

use std::collections::VecDeque;
use std::io::{self, BufRead};

use parking_lot::Mutex;

/// Remove one trailing `\n` or `\r\n`.
fn strip_line_ending(mut line: String) -> String {
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    line
}

/// Reads lines from stdin.
#[derive(Default)]
pub struct StdinInputHandler;

impl StdinInputHandler {
    /// Next line without its terminator, or `None` at end of input.
    pub fn read_line(&self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(strip_line_ending(line)))
    }
}

/// Serves a fixed list of lines.
pub struct BufferInputHandler {
    lines: Mutex<VecDeque<String>>,
}

impl BufferInputHandler {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        BufferInputHandler {
            lines: Mutex::new(lines.into_iter().map(Into::into).collect()),
        }
    }

    pub fn read_line(&self) -> Option<String> {
        self.lines.lock().pop_front()
    }
}

/// Input handler implementation using enum dispatch.
pub enum InputHandlerImpl {
    Stdin(StdinInputHandler),
    Buffer(BufferInputHandler),
}

impl InputHandlerImpl {
    pub fn stdin() -> Self {
        InputHandlerImpl::Stdin(StdinInputHandler)
    }

    pub fn buffer<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        InputHandlerImpl::Buffer(BufferInputHandler::new(lines))
    }

    /// Next line without its terminator, or `None` at end of input.
    pub fn read_line(&self) -> io::Result<Option<String>> {
        match self {
            Self::Stdin(h) => h.read_line(),
            Self::Buffer(h) => Ok(h.read_line()),
        }
    }
}

impl Default for InputHandlerImpl {
    fn default() -> Self {
        Self::stdin()
    }
}
