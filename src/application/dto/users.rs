use crate::domain::user::User;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Transport shape derived one-to-one from a `User`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: Uuid,
    pub full_name: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id.into(),
            full_name: user.full_name,
        }
    }
}
