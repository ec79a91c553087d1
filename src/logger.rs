use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use spdlog::sink::{RotatingFileSink, RotationPolicy, StdStream, StdStreamSink};
use spdlog::{Level, LevelFilter, Logger};

use crate::config::{Log, LogLevel};

/// Progress lines go to stdout, warnings and failures to stderr.
const CONSOLE_SPLIT: Level = Level::Warn;

impl LogLevel {
    /// The configured level and everything more severe.
    pub fn level_filter(self) -> LevelFilter {
        let level = match self {
            LogLevel::Critical => Level::Critical,
            LogLevel::Error => Level::Error,
            LogLevel::Warn => Level::Warn,
            LogLevel::Info => Level::Info,
            LogLevel::Debug => Level::Debug,
            LogLevel::Trace => Level::Trace,
        };
        LevelFilter::MoreSevereEqual(level)
    }
}

fn console_sink(stream: StdStream) -> spdlog::Result<Arc<StdStreamSink>> {
    let level_filter = match stream {
        StdStream::Stderr => LevelFilter::MoreSevereEqual(CONSOLE_SPLIT),
        _ => LevelFilter::MoreVerbose(CONSOLE_SPLIT),
    };
    Ok(Arc::new(StdStreamSink::builder()
        .std_stream(stream)
        .level_filter(level_filter)
        .build()?))
}

fn daily_sink(location: &Path) -> spdlog::Result<Arc<RotatingFileSink>> {
    Ok(Arc::new(RotatingFileSink::builder()
        .base_path(location)
        .rotation_policy(RotationPolicy::Daily { hour: 0, minute: 0 })
        .max_files(30)
        .rotate_on_open(false)
        .build()?))
}

/// Sends the log to a daily rotating file, plus the console when asked to.
/// Without a file location only the level of the default console logger changes.
pub fn configure_logger(log: &Log) -> spdlog::Result<()> {
    let level_filter = log.level.level_filter();

    let Some(ref location) = log.location else {
        spdlog::default_logger().set_level_filter(level_filter);
        return Ok(());
    };

    let mut builder = Logger::builder();
    builder.sink(daily_sink(location)?);
    if log.log_to_console {
        builder
            .sink(console_sink(StdStream::Stdout)?)
            .sink(console_sink(StdStream::Stderr)?);
    }

    let migration_logger = Arc::new(builder.build()?);
    migration_logger.set_flush_level_filter(LevelFilter::MoreSevereEqual(Level::Info));
    migration_logger.set_flush_period(Some(Duration::from_secs(2)));
    migration_logger.set_level_filter(level_filter);

    spdlog::set_default_logger(migration_logger);

    Ok(())
}
