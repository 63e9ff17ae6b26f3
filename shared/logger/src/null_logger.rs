use crate::error::Result;
use crate::log::Log;
use crate::log_level::{DEFAULT_LEVEL, LogLevel};
use std::sync::atomic::{AtomicU8, Ordering};

/// Logger that discards every message but still tracks its threshold.
#[derive(Debug)]
pub struct NullLogger {
    level: AtomicU8,
}

impl NullLogger {
    pub fn new() -> Self {
        NullLogger {
            level: AtomicU8::new(DEFAULT_LEVEL.as_u8()),
        }
    }
}

impl Default for NullLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl Log for NullLogger {
    fn set_level(&self, level: LogLevel) {
        self.level.store(level.as_u8(), Ordering::Release);
    }

    fn get_level(&self) -> LogLevel {
        LogLevel::from_u8(self.level.load(Ordering::Acquire)).unwrap_or(DEFAULT_LEVEL)
    }

    #[inline]
    fn emit(&self, _level: LogLevel, _message: &str) -> Result<()> {
        Ok(())
    }
}
