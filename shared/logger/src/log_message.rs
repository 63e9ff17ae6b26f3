//! Internal log message structure.

use crate::log_level::LogLevel;
use chrono::{DateTime, Local};
use std::sync::atomic::{AtomicU64, Ordering};

/// Timestamp layout: `YYYY-MM-DD HH:MM:SS.mmm`.
pub(crate) const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

static NEXT_THREAD_TAG: AtomicU64 = AtomicU64::new(1);

thread_local! {
    static THREAD_TAG: u64 = NEXT_THREAD_TAG.fetch_add(1, Ordering::Relaxed);
}

/// Numeric identifier of the calling thread, stable for its whole lifetime.
///
/// Returns 0 once the thread's locals are being torn down.
pub(crate) fn current_thread_tag() -> u64 {
    THREAD_TAG.try_with(|tag| *tag).unwrap_or(0)
}

/// Internal representation of a log message.
#[derive(Debug, Clone)]
pub(crate) struct LogMessage<'a> {
    pub index: u64,
    pub timestamp: String,
    pub level: LogLevel,
    pub thread: u64,
    pub message: &'a str,
}

impl<'a> LogMessage<'a> {
    /// Creates a message stamped with `now` and the calling thread's tag.
    pub fn new(index: u64, now: DateTime<Local>, level: LogLevel, message: &'a str) -> Self {
        Self {
            index,
            timestamp: now.format(TIMESTAMP_FORMAT).to_string(),
            level,
            thread: current_thread_tag(),
            message,
        }
    }

    /// Formats message for output: `[index][timestamp][level][Tthread] message\n`
    pub fn format(&self) -> String {
        format!(
            "[{}][{}][{}][T{}] {}\n",
            self.index,
            self.timestamp,
            self.level.as_str(),
            self.thread,
            self.message
        )
    }
}
