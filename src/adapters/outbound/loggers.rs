use crate::domains::logger::{DomainLogger, DynLogger, FileLogger};
use std::sync::Arc;

/// Forwards to `tracing`; whatever subscriber the binary installed decides the output.
struct TracingLogger;

impl DomainLogger for TracingLogger {
    fn info(&self, msg: &str) {
        tracing::info!("{}", msg);
    }

    fn warn(&self, msg: &str) {
        tracing::warn!("{}", msg);
    }

    fn error(&self, msg: &str) {
        tracing::error!("{}", msg);
    }
}

struct NoOp;

impl DomainLogger for NoOp {
    fn info(&self, _msg: &str) {}
    fn warn(&self, _msg: &str) {}
    fn error(&self, _msg: &str) {}
}

/// Broadcasts each record to every sink, in order.
pub struct FanoutLogger {
    sinks: Vec<DynLogger>,
}

impl FanoutLogger {
    pub fn new(sinks: Vec<DynLogger>) -> Self {
        Self { sinks }
    }

    fn each(&self, f: impl Fn(&dyn DomainLogger)) {
        self.sinks.iter().for_each(|sink| f(sink.as_ref()));
    }
}

impl DomainLogger for FanoutLogger {
    fn info(&self, msg: &str) {
        self.each(|sink| sink.info(msg));
    }

    fn warn(&self, msg: &str) {
        self.each(|sink| sink.warn(msg));
    }

    fn error(&self, msg: &str) {
        self.each(|sink| sink.error(msg));
    }

    fn flush(&self) {
        self.each(|sink| sink.flush());
    }
}

pub fn init_console_logger() -> DynLogger {
    Arc::new(TracingLogger)
}

/// Useful as the default in unit tests.
pub fn init_noop_logger() -> DynLogger {
    Arc::new(NoOp)
}

/// Install the `fast_log` file backend and return a logger writing through it.
pub fn init_file_logger(path: &str) -> Result<DynLogger, String> {
    FileLogger::init(path).map_err(|e| format!("Failed to initialize fast_log: {}", e))?;
    Ok(Arc::new(FileLogger))
}

/// Console logging, plus the file when `path` is given and the backend comes up.
pub fn init_domain_logger(path: Option<&str>) -> DynLogger {
    let console = init_console_logger();
    let Some(path) = path else {
        return console;
    };
    match init_file_logger(path) {
        Ok(file) => Arc::new(FanoutLogger::new(vec![file, console])),
        Err(e) => {
            console.warn(&format!("{}; logging to console only", e));
            console
        }
    }
}
