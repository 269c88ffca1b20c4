// src/infrastructure/log.rs
use crate::application::ports::log::ServiceLog;
use crate::domain::errors::PersistenceError;

/// Production `ServiceLog` backed by `tracing`.
#[derive(Debug, Default, Clone)]
pub struct TracingServiceLog;

impl ServiceLog for TracingServiceLog {
    fn info(&self, message: &str) {
        tracing::info!("{message}");
    }

    fn error(&self, error: &PersistenceError, message: &str) {
        tracing::error!(error = %error, code = error.code, "{message}");
    }
}
