//! Thread-safe, level-filtered line logger.
//!
//! Each accepted message becomes one line on a caller-supplied sink:
//!
//! ```text
//! [<index>][<YYYY-MM-DD HH:MM:SS.mmm>][<level>][T<thread>] <message>
//! ```

mod clock;
mod config;
pub mod error;
mod log;
mod log_level;
mod log_message;
mod log_writer;
mod logger;
mod null_logger;

pub use clock::{Clock, SystemClock};
pub use config::{LOG_LEVEL_ENV, LoggerConfig};
pub use error::{LoggingError, Result};
pub use log::Log;
pub use log_level::{DEFAULT_LEVEL, LogLevel};
pub use logger::Logger;
pub use null_logger::NullLogger;

/// Crate version, as published.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
