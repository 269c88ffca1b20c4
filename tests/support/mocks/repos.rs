// tests/support/mocks/repos.rs
use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use users_api::domain::errors::{DomainResult, PersistenceError};
use users_api::domain::user::{User, UserId, UserRepository};
use uuid::Uuid;

/// Hand-written in-memory repository for service and router tests.
pub struct InMemoryUserRepo {
    inner: Mutex<HashMap<Uuid, User>>,
}

impl InMemoryUserRepo {
    pub fn new(users: impl IntoIterator<Item = User>) -> Self {
        let map = users
            .into_iter()
            .map(|user| (Uuid::from(user.id), user))
            .collect();
        Self {
            inner: Mutex::new(map),
        }
    }

    pub fn empty() -> Self {
        Self::new([])
    }

    pub fn contains(&self, id: UserId) -> bool {
        let map = self.inner.lock().unwrap();
        map.contains_key(&Uuid::from(id))
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepo {
    async fn get_all(&self) -> DomainResult<Vec<User>> {
        let map = self.inner.lock().unwrap();
        Ok(map.values().cloned().collect())
    }

    async fn get_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        let map = self.inner.lock().unwrap();
        Ok(map.get(&Uuid::from(id)).cloned())
    }

    async fn create(&self, user: &User) -> DomainResult<bool> {
        let mut map = self.inner.lock().unwrap();
        let key = Uuid::from(user.id);
        if map.contains_key(&key) {
            return Ok(false);
        }
        map.insert(key, user.clone());
        Ok(true)
    }

    async fn delete_by_id(&self, id: UserId) -> DomainResult<bool> {
        let mut map = self.inner.lock().unwrap();
        Ok(map.remove(&Uuid::from(id)).is_some())
    }
}

/// Repository whose every operation fails with a fixed persistence error.
pub struct FailingUserRepo {
    pub error: PersistenceError,
}

impl FailingUserRepo {
    pub fn new(error: PersistenceError) -> Self {
        Self { error }
    }
}

#[async_trait]
impl UserRepository for FailingUserRepo {
    async fn get_all(&self) -> DomainResult<Vec<User>> {
        Err(self.error.clone())
    }

    async fn get_by_id(&self, _id: UserId) -> DomainResult<Option<User>> {
        Err(self.error.clone())
    }

    async fn create(&self, _user: &User) -> DomainResult<bool> {
        Err(self.error.clone())
    }

    async fn delete_by_id(&self, _id: UserId) -> DomainResult<bool> {
        Err(self.error.clone())
    }
}

/// Repository that rejects every create without failing, and answers the
/// rest like an empty store.
pub struct RejectingCreateUserRepo;

#[async_trait]
impl UserRepository for RejectingCreateUserRepo {
    async fn get_all(&self) -> DomainResult<Vec<User>> {
        Ok(vec![])
    }

    async fn get_by_id(&self, _id: UserId) -> DomainResult<Option<User>> {
        Ok(None)
    }

    async fn create(&self, _user: &User) -> DomainResult<bool> {
        Ok(false)
    }

    async fn delete_by_id(&self, _id: UserId) -> DomainResult<bool> {
        Ok(false)
    }
}
