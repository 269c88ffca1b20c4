// tests/support/mocks/log.rs
use std::sync::Mutex;

use users_api::application::ports::log::ServiceLog;
use users_api::domain::errors::PersistenceError;

/// Recording `ServiceLog` fake: keeps every entry in order so tests can
/// assert on message content and call counts.
#[derive(Default)]
pub struct RecordingLog {
    entries: Mutex<Vec<LogEntry>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogEntry {
    Info(String),
    Error {
        error: PersistenceError,
        message: String,
    },
}

impl RecordingLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<LogEntry> {
        self.entries.lock().unwrap().clone()
    }

    pub fn infos(&self) -> Vec<String> {
        self.entries()
            .into_iter()
            .filter_map(|entry| match entry {
                LogEntry::Info(message) => Some(message),
                LogEntry::Error { .. } => None,
            })
            .collect()
    }

    pub fn errors(&self) -> Vec<(PersistenceError, String)> {
        self.entries()
            .into_iter()
            .filter_map(|entry| match entry {
                LogEntry::Error { error, message } => Some((error, message)),
                LogEntry::Info(_) => None,
            })
            .collect()
    }
}

impl ServiceLog for RecordingLog {
    fn info(&self, message: &str) {
        self.entries
            .lock()
            .unwrap()
            .push(LogEntry::Info(message.to_string()));
    }

    fn error(&self, error: &PersistenceError, message: &str) {
        self.entries.lock().unwrap().push(LogEntry::Error {
            error: error.clone(),
            message: message.to_string(),
        });
    }
}
