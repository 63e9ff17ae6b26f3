//! Sink access and sequence numbering.

use crate::error::Result;
use crate::log_message::LogMessage;
use std::io::Write;

/// Owns the sink handle and the index of the last line handed out.
///
/// Always used behind the logger's mutex, so the index taken with
/// [`advance`](Self::advance) and the write that carries it happen as one
/// step.
pub(crate) struct LogWriter<W> {
    sink: W,
    last_index: u64,
}

impl<W: Write> LogWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            sink,
            last_index: 0,
        }
    }

    /// Consumes and returns the next index.
    ///
    /// The index is used up even if the following write fails, so a partial
    /// line on the sink never shares its index with a later one.
    pub fn advance(&mut self) -> u64 {
        self.last_index += 1;
        self.last_index
    }

    /// Index of the last message handed out (0 before any).
    pub fn last_index(&self) -> u64 {
        self.last_index
    }

    /// Writes and flushes one formatted line. Failed lines are not retried.
    pub fn write_message(&mut self, message: &LogMessage<'_>) -> Result<()> {
        self.sink.write_all(message.format().as_bytes())?;
        self.sink.flush()?;
        Ok(())
    }

    pub fn into_sink(self) -> W {
        self.sink
    }
}
