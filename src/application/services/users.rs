// src/application/services/users.rs
use std::sync::Arc;
use std::time::Instant;

use crate::application::ports::log::ServiceLog;
use crate::domain::errors::DomainResult;
use crate::domain::user::{User, UserId, UserRepository};

/// Pass-through over the repository that adds timing instrumentation and
/// error logging. Repository errors are logged once and returned unchanged;
/// this layer never swallows or converts them.
pub struct UserService {
    repo: Arc<dyn UserRepository>,
    log: Arc<dyn ServiceLog>,
}

impl UserService {
    pub fn new(repo: Arc<dyn UserRepository>, log: Arc<dyn ServiceLog>) -> Self {
        Self { repo, log }
    }

    pub async fn get_all(&self) -> DomainResult<Vec<User>> {
        self.log.info("Retrieving all users");
        let started = Instant::now();

        match self.repo.get_all().await {
            Ok(users) => {
                self.log.info(&format!(
                    "All users retrieved in {}ms",
                    started.elapsed().as_millis()
                ));
                Ok(users)
            }
            Err(err) => {
                self.log
                    .error(&err, "Something went wrong while retrieving all users");
                Err(err)
            }
        }
    }

    pub async fn get_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        self.log.info(&format!("Retrieving user with id: {id}"));
        let started = Instant::now();

        match self.repo.get_by_id(id).await {
            Ok(user) => {
                self.log.info(&format!(
                    "User with id {id} retrieved in {}ms",
                    started.elapsed().as_millis()
                ));
                Ok(user)
            }
            Err(err) => {
                self.log.error(
                    &err,
                    &format!("Something went wrong while retrieving user with id {id}"),
                );
                Err(err)
            }
        }
    }

    pub async fn create(&self, user: &User) -> DomainResult<bool> {
        self.log.info(&format!(
            "Creating user with id {} and name: {}",
            user.id, user.full_name
        ));
        let started = Instant::now();

        match self.repo.create(user).await {
            Ok(created) => {
                self.log.info(&format!(
                    "User with id {} created in {}ms",
                    user.id,
                    started.elapsed().as_millis()
                ));
                Ok(created)
            }
            Err(err) => {
                self.log
                    .error(&err, "Something went wrong while creating a user");
                Err(err)
            }
        }
    }

    pub async fn delete_by_id(&self, id: UserId) -> DomainResult<bool> {
        self.log.info(&format!("Deleting user with id: {id}"));
        let started = Instant::now();

        match self.repo.delete_by_id(id).await {
            Ok(deleted) => {
                self.log.info(&format!(
                    "User with id {id} deleted in {}ms",
                    started.elapsed().as_millis()
                ));
                Ok(deleted)
            }
            Err(err) => {
                self.log.error(
                    &err,
                    &format!("Something went wrong while deleting user with id {id}"),
                );
                Err(err)
            }
        }
    }
}
