// tests/support/mod.rs
#![allow(dead_code)]

pub mod mocks;

use std::sync::Arc;

use axum::Router;
use users_api::application::ports::log::ServiceLog;
use users_api::application::services::UserService;
use users_api::domain::user::UserRepository;
use users_api::infrastructure::log::TracingServiceLog;
use users_api::presentation::http::{routes::build_router, state::HttpState};

/// Build the full router over an arbitrary repository, with logging wired
/// to `tracing` (silent unless a subscriber is installed).
pub fn make_router(repo: Arc<dyn UserRepository>) -> Router {
    let log: Arc<dyn ServiceLog> = Arc::new(TracingServiceLog);
    let users = Arc::new(UserService::new(repo, log));
    build_router(HttpState { users })
}
