//! Logs to the console, then to a file, honouring `BASIC_LOG_LEVEL`.
//!
//! ```sh
//! BASIC_LOG_LEVEL=info cargo run -p basic_log --example console
//! ```

use basic_log::{Log, LogLevel, Logger, LoggerConfig};
use std::fs::File;
use std::io;
use std::thread;

fn console_example(config: &LoggerConfig) {
    let logger = Logger::from_config(io::stdout(), config);

    logger.log_info("Setting logging level to verbose...");
    logger.set_level(LogLevel::Verbose);

    logger.log_fatal("This is a fatal message");
    logger.log_error("This is an error message");
    logger.log_warning("Warning message is here!");
    logger.log_info("This is a message to inform something");
    logger.log_debug("A message for debugging purposes");
    logger.log_verbose("Now a message logged with the verbose level");

    logger.log_info("Changing logging level to info...");
    logger.set_level(LogLevel::Info);

    logger.log_debug("Debug message that is not logged");
    logger.log_verbose("And this message is not logged too");
    logger.log_fatal("But fatal messages are still logged");

    thread::scope(|s| {
        for worker in 1..=3 {
            let logger = &logger;
            s.spawn(move || logger.log_warning(&format!("Hello from worker {worker}")));
        }
    });
}

fn file_example(config: &LoggerConfig) -> basic_log::Result<()> {
    let mut file = File::create("basic_log_example.log")?;
    let logger = Logger::from_config(&mut file, config);

    logger.log_info("Logging to a file");
    logger.emit(LogLevel::Error, "Errors can also be checked by the caller")?;
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = LoggerConfig::from_env()?;
    console_example(&config);
    file_example(&config)?;
    Ok(())
}
