use crate::domain::errors::DomainResult;
use crate::domain::user::{entity::User, value_objects::UserId};
use async_trait::async_trait;

/// Persistence boundary for users. Absence and rejection are ordinary
/// results (`None` / `false`), never errors; `PersistenceError` is reserved
/// for store-level failures.
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn get_all(&self) -> DomainResult<Vec<User>>;

    async fn get_by_id(&self, id: UserId) -> DomainResult<Option<User>>;

    /// `Ok(false)` signals a recoverable rejection (e.g. key conflict).
    async fn create(&self, user: &User) -> DomainResult<bool>;

    /// `Ok(true)` when a record existed and was removed.
    async fn delete_by_id(&self, id: UserId) -> DomainResult<bool>;
}
