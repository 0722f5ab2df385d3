use chrono::Utc;
use log::Level;
use std::sync::Arc;

/// Logging port for the trial service. Infallible from the caller's side.
/// The cost evaluator itself never logs.
pub trait DomainLogger: Send + Sync + 'static {
    fn info(&self, msg: &str);
    fn warn(&self, msg: &str);
    fn error(&self, msg: &str);

    /// Block until buffered records are written. Unbuffered loggers keep the default.
    fn flush(&self) {}
}

pub type DynLogger = Arc<dyn DomainLogger>;

/// Timestamped records through the `log` facade, written to disk by `fast_log`.
///
/// `fast_log` hands records to a background writer, so call [`FileLogger::flush_backend`]
/// (or [`DomainLogger::flush`]) before the process exits.
pub struct FileLogger;

impl FileLogger {
    /// Install `fast_log` with a file appender at `path` as the global `log` backend.
    /// Fails if any `log` backend is already installed.
    pub fn init(path: &str) -> Result<(), Box<dyn std::error::Error>> {
        fast_log::init(
            fast_log::config::Config::new()
                .file(path)
                .level(log::LevelFilter::Info),
        )?;
        Ok(())
    }

    /// Flush whatever backend the `log` facade currently has. No-op without one.
    pub fn flush_backend() {
        log::logger().flush();
    }

    fn record(level: Level, msg: &str) {
        log::log!(level, "{} - {}", Utc::now().to_rfc3339(), msg);
    }
}

impl DomainLogger for FileLogger {
    fn info(&self, msg: &str) {
        Self::record(Level::Info, msg);
    }

    fn warn(&self, msg: &str) {
        Self::record(Level::Warn, msg);
    }

    fn error(&self, msg: &str) {
        Self::record(Level::Error, msg);
    }

    fn flush(&self) {
        Self::flush_backend();
    }
}
