use std::error::Error;

use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::append::file::FileAppender;
use log4rs::config::{Appender, Config as LogConfig, Root};
use log4rs::encode::pattern::PatternEncoder;

use crate::configure::load_config;

// Millisecond resolution; the fire loop runs on a 10ms cadence.
const LOG_PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S%.3f)} [{l}] {t} - {m}{n}";

/// Console logging on stderr (stdout is reserved for the order payloads), plus
/// an optional file appender when `log_file` is set.
pub fn setup_logger() -> Result<(), Box<dyn Error>> {
    let config = load_config()?;

    let log_level = match config.log_level.to_lowercase().as_str() {
        "trace" => LevelFilter::Trace,
        "debug" => LevelFilter::Debug,
        "warn" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        _ => LevelFilter::Info,
    };

    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
        .build();

    let mut log_config_builder =
        LogConfig::builder().appender(Appender::builder().build("stderr", Box::new(stderr)));
    let mut root_builder = Root::builder().appender("stderr");

    if !config.log_file.is_empty() {
        let file = FileAppender::builder()
            .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
            .build(&config.log_file)?;

        log_config_builder =
            log_config_builder.appender(Appender::builder().build("file", Box::new(file)));
        root_builder = root_builder.appender("file");
    }

    let log_config = log_config_builder.build(root_builder.build(log_level))?;
    log4rs::init_config(log_config)?;

    Ok(())
}
