//! Threshold selection from the process environment.

use crate::error::Result;
use crate::log_level::{DEFAULT_LEVEL, LogLevel};
use std::env;

/// Environment variable holding the initial threshold name.
pub const LOG_LEVEL_ENV: &str = "BASIC_LOG_LEVEL";

/// Logger configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoggerConfig {
    pub level: LogLevel,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        LoggerConfig {
            level: DEFAULT_LEVEL,
        }
    }
}

impl LoggerConfig {
    pub fn with_level(level: LogLevel) -> Self {
        LoggerConfig { level }
    }

    /// Reads the threshold from [`LOG_LEVEL_ENV`].
    ///
    /// An unset or non-unicode variable yields the default configuration.
    ///
    /// # Errors
    ///
    /// Returns [`LoggingError::InvalidLevel`](crate::LoggingError::InvalidLevel)
    /// if the variable names no known level.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use basic_log::{Logger, LoggerConfig};
    ///
    /// let config = LoggerConfig::from_env()?;
    /// let logger = Logger::from_config(std::io::stderr(), &config);
    /// # Ok::<(), basic_log::LoggingError>(())
    /// ```
    pub fn from_env() -> Result<Self> {
        Self::from_env_value(env::var(LOG_LEVEL_ENV).ok().as_deref())
    }

    /// Builds a configuration from the raw variable value, if any.
    pub fn from_env_value(value: Option<&str>) -> Result<Self> {
        match value {
            Some(name) => Ok(Self::with_level(name.parse()?)),
            None => Ok(Self::default()),
        }
    }
}
