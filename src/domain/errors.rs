// src/domain/errors.rs
use thiserror::Error;

pub type DomainResult<T> = Result<T, PersistenceError>;

/// Failure raised by the persistence boundary. Carries the store's message
/// and its numeric error code (SQLSTATE for Postgres, 0 when unavailable).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("data access error (code {code}): {message}")]
pub struct PersistenceError {
    pub message: String,
    pub code: i32,
}

impl PersistenceError {
    pub fn new(message: impl Into<String>, code: i32) -> Self {
        Self {
            message: message.into(),
            code,
        }
    }
}
