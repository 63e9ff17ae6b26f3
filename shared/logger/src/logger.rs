//! Thread-safe, level-filtered logger implementation.
//!
//! This module provides the concrete [`Logger`], which writes one formatted
//! line per accepted message to a caller-supplied sink.

use crate::clock::{Clock, SystemClock};
use crate::config::LoggerConfig;
use crate::error::Result;
use crate::log::Log;
use crate::log_level::{DEFAULT_LEVEL, LogLevel};
use crate::log_message::LogMessage;
use crate::log_writer::LogWriter;
use std::io::Write;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Thread-safe, level-filtered logger.
///
/// The threshold is read without locking; accepted messages are numbered,
/// formatted and written under a single mutex, so lines reach the sink whole
/// and in index order.
///
/// The sink is any [`Write`]. Pass `&mut sink` to keep ownership with the
/// caller; the borrow then guarantees the sink outlives the logger.
///
/// # Examples
///
/// ```
/// use basic_log::{Log, LogLevel, Logger};
///
/// let logger = Logger::new(std::io::stdout());
/// logger.log_info("Application started");
///
/// logger.set_level(LogLevel::Error);
/// logger.log_debug("not written");
/// logger.log_error("Connection failed");
/// ```
pub struct Logger<W, C = SystemClock> {
    level: AtomicU8,
    writer: Mutex<LogWriter<W>>,
    clock: C,
}

impl<W: Write> Logger<W> {
    /// Creates a logger with the default threshold ([`DEFAULT_LEVEL`]).
    pub fn new(sink: W) -> Self {
        Self::with_level(sink, DEFAULT_LEVEL)
    }

    /// Creates a logger with an explicit initial threshold.
    pub fn with_level(sink: W, level: LogLevel) -> Self {
        Self::with_clock(sink, level, SystemClock)
    }

    /// Creates a logger using the threshold from `config`.
    pub fn from_config(sink: W, config: &LoggerConfig) -> Self {
        Self::with_level(sink, config.level)
    }
}

impl<W: Write, C: Clock> Logger<W, C> {
    /// Creates a logger that stamps lines with `clock` instead of the wall clock.
    pub fn with_clock(sink: W, level: LogLevel, clock: C) -> Self {
        Logger {
            level: AtomicU8::new(level.as_u8()),
            writer: Mutex::new(LogWriter::new(sink)),
            clock,
        }
    }

    /// Number of messages accepted so far, which is also the last index used.
    ///
    /// A message whose write failed still counts: its index is not reused.
    pub fn emitted(&self) -> u64 {
        self.lock_writer().last_index()
    }

    /// Consumes the logger and hands the sink back.
    pub fn into_inner(self) -> W {
        self.writer
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
            .into_sink()
    }

    // A panic inside a sink leaves the writer in a consistent state, so the
    // poison flag is ignored.
    fn lock_writer(&self) -> MutexGuard<'_, LogWriter<W>> {
        self.writer.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<W, C> Log for Logger<W, C>
where
    W: Write + Send,
    C: Clock,
{
    fn set_level(&self, level: LogLevel) {
        self.level.store(level.as_u8(), Ordering::Release);
    }

    fn get_level(&self) -> LogLevel {
        // Only ever stored from a LogLevel.
        LogLevel::from_u8(self.level.load(Ordering::Acquire)).unwrap_or(DEFAULT_LEVEL)
    }

    fn emit(&self, level: LogLevel, message: &str) -> Result<()> {
        if !self.should_log(level) {
            return Ok(());
        }

        let mut writer = self.lock_writer();
        let index = writer.advance();
        let msg = LogMessage::new(index, self.clock.now(), level, message);
        writer.write_message(&msg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::log_message::current_thread_tag;
    use chrono::{DateTime, Local, NaiveDate};
    use std::io;
    use std::panic::{self, AssertUnwindSafe};
    use std::thread;

    struct FixedClock(DateTime<Local>);

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Local> {
            self.0
        }
    }

    fn fixed_clock() -> FixedClock {
        let at = NaiveDate::from_ymd_opt(2024, 11, 30)
            .unwrap()
            .and_hms_milli_opt(23, 59, 58, 7)
            .unwrap()
            .and_local_timezone(Local)
            .single()
            .unwrap();
        FixedClock(at)
    }

    fn output(logger: Logger<Vec<u8>, FixedClock>) -> String {
        String::from_utf8(logger.into_inner()).unwrap()
    }

    struct BrokenSink;

    impl Write for BrokenSink {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::other("disk full"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_default_level() {
        let logger = Logger::new(Vec::new());
        assert_eq!(logger.get_level(), LogLevel::Verbose);
    }

    #[test]
    fn test_set_and_get_level() {
        let logger = Logger::new(Vec::new());
        for level in LogLevel::ALL {
            logger.set_level(level);
            assert_eq!(logger.get_level(), level);
        }
    }

    #[test]
    fn test_from_config() {
        let config = LoggerConfig::with_level(LogLevel::Warning);
        let logger = Logger::from_config(Vec::new(), &config);
        assert_eq!(logger.get_level(), LogLevel::Warning);
    }

    #[test]
    fn test_exact_line_for_each_level() {
        for level in &LogLevel::ALL[1..] {
            let logger = Logger::with_clock(Vec::new(), *level, fixed_clock());
            logger.emit(*level, "A message").unwrap();

            let expected = format!(
                "[1][2024-11-30 23:59:58.007][{}][T{}] A message\n",
                level.as_str(),
                current_thread_tag()
            );
            assert_eq!(output(logger), expected);
        }
    }

    #[test]
    fn test_blocked_level_writes_nothing() {
        for level in &LogLevel::ALL[1..] {
            let below = LogLevel::from_u8(level.as_u8() - 1).unwrap();
            let logger = Logger::with_clock(Vec::new(), below, fixed_clock());

            logger.emit(*level, "A message").unwrap();

            assert_eq!(logger.emitted(), 0);
            assert!(output(logger).is_empty());
        }
    }

    #[test]
    fn test_none_threshold_suppresses_everything() {
        let logger = Logger::with_clock(Vec::new(), LogLevel::None, fixed_clock());
        logger.log_fatal("f");
        logger.log_error("e");
        logger.log_warning("w");
        logger.log_info("i");
        logger.log_debug("d");
        logger.log_verbose("v");
        assert!(output(logger).is_empty());
    }

    #[test]
    fn test_none_is_never_emitted() {
        let logger = Logger::with_clock(Vec::new(), LogLevel::Verbose, fixed_clock());
        logger.emit(LogLevel::None, "nothing").unwrap();
        assert_eq!(logger.emitted(), 0);
        assert!(output(logger).is_empty());
    }

    #[test]
    fn test_index_skips_suppressed_calls() {
        let logger = Logger::with_clock(Vec::new(), LogLevel::Info, fixed_clock());
        logger.log_info("one");
        logger.log_debug("skipped");
        logger.log_error("two");
        logger.log_verbose("skipped");
        logger.log_warning("three");
        assert_eq!(logger.emitted(), 3);

        let text = output(logger);
        let indices: Vec<&str> = text
            .lines()
            .map(|line| &line[1..line.find(']').unwrap()])
            .collect();
        assert_eq!(indices, ["1", "2", "3"]);
        assert!(!text.contains("skipped"));
    }

    #[test]
    fn test_info_threshold_example() {
        let logger = Logger::with_clock(Vec::new(), LogLevel::Info, fixed_clock());
        logger.log_debug("x");
        logger.log_error("y");

        let text = output(logger);
        assert_eq!(text.lines().count(), 1);
        assert!(text.starts_with("[1][2024-11-30 23:59:58.007][error][T"));
        assert!(text.ends_with("] y\n"));
    }

    #[test]
    fn test_empty_message() {
        let logger = Logger::with_clock(Vec::new(), LogLevel::Verbose, fixed_clock());
        logger.log_info("");

        let expected = format!(
            "[1][2024-11-30 23:59:58.007][info][T{}] \n",
            current_thread_tag()
        );
        assert_eq!(output(logger), expected);
    }

    #[test]
    fn test_sink_error_is_returned_and_index_used() {
        let logger = Logger::new(BrokenSink);

        let result = logger.emit(LogLevel::Error, "lost");

        assert!(matches!(result, Err(crate::LoggingError::Io(_))));
        assert_eq!(logger.emitted(), 1);
    }

    #[test]
    fn test_shortcut_swallows_sink_error() {
        let logger = Logger::new(BrokenSink);
        logger.log_fatal("still returns");
        logger.log_fatal("and again");
        assert_eq!(logger.emitted(), 2);
    }

    /// Panics on its first write, then behaves like a `Vec<u8>`.
    struct PanicOnceSink {
        written: Vec<u8>,
        panicked: bool,
    }

    impl Write for PanicOnceSink {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if !self.panicked {
                self.panicked = true;
                panic!("sink exploded");
            }
            self.written.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_logging_continues_after_sink_panic() {
        let sink = PanicOnceSink {
            written: Vec::new(),
            panicked: false,
        };
        let logger = Logger::with_clock(sink, LogLevel::Verbose, fixed_clock());

        let outcome = panic::catch_unwind(AssertUnwindSafe(|| logger.log_info("a")));
        assert!(outcome.is_err());
        assert!(logger.writer.is_poisoned());

        logger.log_info("b");
        assert_eq!(logger.emitted(), 2);

        let text = String::from_utf8(logger.into_inner().written).unwrap();
        let expected = format!(
            "[2][2024-11-30 23:59:58.007][info][T{}] b\n",
            current_thread_tag()
        );
        assert_eq!(text, expected);
    }

    #[test]
    fn test_borrowed_sink_outlives_logger() {
        let mut out = Vec::new();
        {
            let logger = Logger::new(&mut out);
            logger.log_info("kept by caller");
        }
        let text = String::from_utf8(out).unwrap();
        assert!(text.ends_with("] kept by caller\n"));
    }

    #[test]
    fn test_shared_between_threads() {
        let logger = Logger::new(Vec::new());

        thread::scope(|s| {
            s.spawn(|| logger.log_info("Message from thread"));
        });
        logger.log_info("Message from main");

        let text = String::from_utf8(logger.into_inner()).unwrap();
        assert!(text.starts_with("[1]"));
        assert!(text.contains("] Message from thread\n[2]"));
        assert!(text.ends_with("] Message from main\n"));
    }
}
