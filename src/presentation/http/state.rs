// src/presentation/http/state.rs
use crate::application::services::UserService;
use std::sync::Arc;

#[derive(Clone)]
pub struct HttpState {
    pub users: Arc<UserService>,
}
