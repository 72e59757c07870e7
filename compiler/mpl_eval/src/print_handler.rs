//! Print handler for configurable output.
//!
//! `print` output goes to stdout when running programs and to a buffer in
//! tests. Uses enum dispatch instead of trait objects.

use std::io::{self, Write};

use parking_lot::Mutex;

/// Writes to stdout, flushing after every write.
///
/// `print` never appends a newline, so without the flush a prompt would
/// stay buffered until the next `read` blocked.
#[derive(Default)]
pub struct StdoutPrintHandler;

impl StdoutPrintHandler {
    pub fn print(&self, msg: &str) -> io::Result<()> {
        let mut out = io::stdout().lock();
        out.write_all(msg.as_bytes())?;
        out.flush()
    }
}

/// Captures output to a buffer.
pub struct BufferPrintHandler {
    buffer: Mutex<String>,
}

impl BufferPrintHandler {
    pub fn new() -> Self {
        BufferPrintHandler {
            buffer: Mutex::new(String::new()),
        }
    }

    pub fn print(&self, msg: &str) {
        self.buffer.lock().push_str(msg);
    }

    /// Get all captured output.
    pub fn get_output(&self) -> String {
        self.buffer.lock().clone()
    }
}

impl Default for BufferPrintHandler {
    fn default() -> Self {
        Self::new()
    }
}

/// Print handler implementation using enum dispatch.
pub enum PrintHandlerImpl {
    /// Writes to stdout (default).
    Stdout(StdoutPrintHandler),
    /// Captures to a buffer (testing).
    Buffer(BufferPrintHandler),
}

impl PrintHandlerImpl {
    /// Stdout handler.
    pub fn stdout() -> Self {
        PrintHandlerImpl::Stdout(StdoutPrintHandler)
    }

    /// Capturing handler.
    pub fn buffer() -> Self {
        PrintHandlerImpl::Buffer(BufferPrintHandler::new())
    }

    /// Write `msg` as-is, without a trailing newline.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        match self {
            Self::Stdout(h) => h.print(msg),
            Self::Buffer(h) => {
                h.print(msg);
                Ok(())
            }
        }
    }

    /// Captured output. Empty for stdout.
    pub fn get_output(&self) -> String {
        match self {
            Self::Stdout(_) => String::new(),
            Self::Buffer(h) => h.get_output(),
        }
    }
}

impl Default for PrintHandlerImpl {
    fn default() -> Self {
        Self::stdout()
    }
}
