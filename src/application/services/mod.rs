// src/application/services/mod.rs
pub mod users;

pub use users::UserService;
