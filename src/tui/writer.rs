// src/tui/writer.rs

//! The line-oriented writer handed to commands and executors.

use parking_lot::Mutex;
use std::io::{self, Write};
use std::sync::Arc;
use tracing::warn;

/// A cloneable handle over a shared output sink.
///
/// Commands hold a clone and report diagnostics and human-readable results
/// through it; tests swap in an in-memory buffer to assert on what was
/// written. Write failures are logged and swallowed so a broken pipe cannot
/// take down the dispatch loop.
#[derive(Clone)]
pub struct ClientWriter {
    sink: Arc<Mutex<Box<dyn Write + Send>>>,
}

impl ClientWriter {
    pub fn new(sink: Box<dyn Write + Send>) -> Self {
        Self {
            sink: Arc::new(Mutex::new(sink)),
        }
    }

    /// The production writer over stdout.
    pub fn stdout() -> Self {
        Self::new(Box::new(io::stdout()))
    }

    /// A writer over an in-memory buffer, plus a handle to read it back.
    pub fn in_memory() -> (Self, Arc<Mutex<Vec<u8>>>) {
        let buffer: Arc<Mutex<Vec<u8>>> = Arc::new(Mutex::new(Vec::new()));
        let writer = Self::new(Box::new(SharedBuffer {
            buffer: buffer.clone(),
        }));
        (writer, buffer)
    }

    /// Writes one line, newline-terminated.
    pub fn println(&self, line: &str) {
        let mut sink = self.sink.lock();
        if let Err(e) = writeln!(sink, "{line}") {
            warn!("Failed to write line to client: {}", e);
        }
    }

    /// Writes without a trailing newline and flushes; used for prompts.
    pub fn print(&self, text: &str) {
        let mut sink = self.sink.lock();
        if let Err(e) = write!(sink, "{text}").and_then(|_| sink.flush()) {
            warn!("Failed to write to client: {}", e);
        }
    }
}

struct SharedBuffer {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
