//! Error types for logging operations.

use std::error::Error;
use std::fmt;
use std::io;

/// Result type for logging operations.
pub type Result<T> = std::result::Result<T, LoggingError>;

/// Errors that can occur during logging.
#[derive(Debug)]
pub enum LoggingError {
    /// I/O error reported by the sink while writing a line.
    Io(io::Error),
    /// A level name that does not match any [`LogLevel`](crate::LogLevel).
    InvalidLevel(String),
}

impl fmt::Display for LoggingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoggingError::Io(err) => write!(f, "I/O error: {}", err),
            LoggingError::InvalidLevel(name) => write!(f, "Invalid log level: '{}'", name),
        }
    }
}

impl Error for LoggingError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            LoggingError::Io(err) => Some(err),
            LoggingError::InvalidLevel(_) => None,
        }
    }
}

impl From<io::Error> for LoggingError {
    fn from(err: io::Error) -> Self {
        LoggingError::Io(err)
    }
}
