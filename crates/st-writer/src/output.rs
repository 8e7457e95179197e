//! Output sinks for progress messages emitted while writing files.

use std::sync::{Mutex, PoisonError};

/// Receives human-readable progress messages.
///
/// Implementations must be Send + Sync so one sink can be shared between
/// writers through an `Arc`.
pub trait OutputWriter: Send + Sync {
    /// Emit a single message
    fn write(&self, message: &str);
}

impl<F> OutputWriter for F
where
    F: Fn(&str) + Send + Sync,
{
    fn write(&self, message: &str) {
        self(message)
    }
}

/// Forwards messages to the `log` facade at info level
#[derive(Debug, Clone, Copy, Default)]
pub struct LogOutputWriter;

impl OutputWriter for LogOutputWriter {
    fn write(&self, message: &str) {
        if let Some(line) = log_line(message) {
            log::info!("{}", line);
        }
    }
}

/// Strip surrounding line breaks; `None` when nothing is left to log
fn log_line(message: &str) -> Option<&str> {
    let line = message.trim_matches(|c: char| c == '\n' || c == '\r');
    (!line.is_empty()).then_some(line)
}

/// Collects messages in memory, in the order they were written
#[derive(Debug, Default)]
pub struct BufferedOutputWriter {
    messages: Mutex<Vec<String>>,
}

impl BufferedOutputWriter {
    /// Create an empty buffer
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything written so far
    pub fn messages(&self) -> Vec<String> {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// All messages joined into one string
    pub fn contents(&self) -> String {
        self.messages().concat()
    }
}

impl OutputWriter for BufferedOutputWriter {
    fn write(&self, message: &str) {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(message.to_string());
    }
}
