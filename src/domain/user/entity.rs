// src/domain/user/entity.rs
use crate::domain::user::value_objects::UserId;

/// The sole domain entity. There is no update operation: writes are
/// whole-entity create or whole-entity delete, keyed by `id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub full_name: String,
}

impl User {
    /// Construct a user with a freshly assigned id.
    pub fn new(full_name: impl Into<String>) -> Self {
        Self {
            id: UserId::generate(),
            full_name: full_name.into(),
        }
    }
}
