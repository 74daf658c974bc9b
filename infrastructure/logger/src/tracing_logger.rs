use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: "ListaRapida -- ", "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: "ListaRapida -- ", "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: "ListaRapida -- ", "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: "ListaRapida -- ", "{}", message);
    }
}
