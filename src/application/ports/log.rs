// src/application/ports/log.rs
use crate::domain::errors::PersistenceError;

/// Structured-logging boundary consumed by the service layer.
///
/// Fire-and-forget from the caller's perspective: no return values, no
/// suspension. Production wires this to `tracing`; tests substitute a
/// recording fake.
pub trait ServiceLog: Send + Sync {
    fn info(&self, message: &str);

    fn error(&self, error: &PersistenceError, message: &str);
}
