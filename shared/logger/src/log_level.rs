use crate::error::LoggingError;
use std::fmt;
use std::str::FromStr;

/// Threshold a freshly built logger starts with.
pub const DEFAULT_LEVEL: LogLevel = LogLevel::Verbose;

/// Severity level of a log message, also used as the logger threshold.
///
/// Ordered from most restrictive to most permissive:
/// None < Fatal < Error < Warning < Info < Debug < Verbose
///
/// A threshold `T` lets a message at level `M` through when `T >= M`, so a
/// threshold of `Info` keeps fatal, error, warning and info messages and drops
/// debug and verbose ones. `None` is only meaningful as a threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum LogLevel {
    /// Suppresses every message.
    None = 0,
    /// Unrecoverable failures.
    Fatal = 1,
    /// Error messages.
    Error = 2,
    /// Warning messages.
    Warning = 3,
    /// Informational messages.
    Info = 4,
    /// Detailed debugging information.
    Debug = 5,
    /// Everything.
    Verbose = 6,
}

impl LogLevel {
    /// All levels, in ascending order.
    pub const ALL: [LogLevel; 7] = [
        LogLevel::None,
        LogLevel::Fatal,
        LogLevel::Error,
        LogLevel::Warning,
        LogLevel::Info,
        LogLevel::Debug,
        LogLevel::Verbose,
    ];

    /// Returns the lowercase name used in log lines. `None` has no name.
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::None => "",
            LogLevel::Fatal => "fatal",
            LogLevel::Error => "error",
            LogLevel::Warning => "warning",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Verbose => "verbose",
        }
    }

    pub fn as_u8(self) -> u8 {
        self as u8
    }

    /// Inverse of [`as_u8`](Self::as_u8).
    pub fn from_u8(value: u8) -> Option<Self> {
        Self::ALL.get(usize::from(value)).copied()
    }
}

impl Default for LogLevel {
    fn default() -> Self {
        DEFAULT_LEVEL
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogLevel {
    type Err = LoggingError;

    /// Parses a log level from a string (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "none" => Ok(LogLevel::None),
            "fatal" => Ok(LogLevel::Fatal),
            "error" => Ok(LogLevel::Error),
            "warning" | "warn" => Ok(LogLevel::Warning),
            "info" => Ok(LogLevel::Info),
            "debug" => Ok(LogLevel::Debug),
            "verbose" => Ok(LogLevel::Verbose),
            _ => Err(LoggingError::InvalidLevel(s.to_string())),
        }
    }
}
