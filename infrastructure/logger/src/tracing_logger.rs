use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: "stockroom", "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: "stockroom", "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: "stockroom", "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: "stockroom", "{}", message);
    }
}
