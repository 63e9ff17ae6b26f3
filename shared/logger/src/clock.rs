//! Source of the local date-time stamped on each line.

use chrono::{DateTime, Local};

/// Provides the current local date-time.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Local>;
}

/// Wall clock in the local timezone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}
