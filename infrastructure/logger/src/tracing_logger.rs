use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

/// Forwards domain log lines to `tracing` under a fixed target.
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: "legends_luminaries", "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: "legends_luminaries", "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: "legends_luminaries", "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: "legends_luminaries", "{}", message);
    }
}
