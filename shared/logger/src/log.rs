//! Capability interface shared by every logger implementation.

use crate::error::Result;
use crate::log_level::LogLevel;

/// Level-filtered logging capability.
///
/// Components that need to log should take `&dyn Log` (or an `Arc<dyn Log>`)
/// rather than a concrete logger, so a [`NullLogger`](crate::NullLogger) or a
/// test double can be injected in its place.
///
/// # Examples
///
/// ```
/// use basic_log::{Log, LogLevel, Logger};
///
/// fn connect(log: &dyn Log) {
///     log.log_info("connecting");
///     log.log_debug("handshake details");
/// }
///
/// let mut out = Vec::new();
/// let logger = Logger::with_level(&mut out, LogLevel::Info);
/// connect(&logger);
/// drop(logger);
///
/// let text = String::from_utf8(out).unwrap();
/// assert_eq!(text.lines().count(), 1);
/// assert!(text.ends_with("] connecting\n"));
/// ```
pub trait Log: Send + Sync {
    /// Replaces the current threshold.
    fn set_level(&self, level: LogLevel);

    /// Returns the current threshold.
    fn get_level(&self) -> LogLevel;

    /// Logs `message` at `level` if the threshold allows it.
    ///
    /// Suppressed messages return `Ok(())` without touching the sink.
    ///
    /// # Errors
    ///
    /// Returns [`LoggingError::Io`](crate::LoggingError::Io) if the sink
    /// rejects the line. The line is not retried.
    fn emit(&self, level: LogLevel, message: &str) -> Result<()>;

    /// Whether a message at `level` passes the current threshold.
    ///
    /// `LogLevel::None` is a threshold only and never passes.
    fn should_log(&self, level: LogLevel) -> bool {
        level != LogLevel::None && self.get_level() >= level
    }

    fn log_fatal(&self, message: &str) {
        report(self.emit(LogLevel::Fatal, message));
    }

    fn log_error(&self, message: &str) {
        report(self.emit(LogLevel::Error, message));
    }

    fn log_warning(&self, message: &str) {
        report(self.emit(LogLevel::Warning, message));
    }

    fn log_info(&self, message: &str) {
        report(self.emit(LogLevel::Info, message));
    }

    fn log_debug(&self, message: &str) {
        report(self.emit(LogLevel::Debug, message));
    }

    fn log_verbose(&self, message: &str) {
        report(self.emit(LogLevel::Verbose, message));
    }
}

fn report(result: Result<()>) {
    if let Err(e) = result {
        eprintln!("Error writing log: {}", e);
    }
}
