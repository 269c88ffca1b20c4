// src/infrastructure/repositories/postgres_user.rs
use super::map_sqlx;
use crate::domain::errors::DomainResult;
use crate::domain::user::{User, UserId, UserRepository};
use async_trait::async_trait;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

#[derive(Clone)]
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct UserRow {
    id: Uuid,
    full_name: String,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User {
            id: UserId::from(row.id),
            full_name: row.full_name,
        }
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn get_all(&self) -> DomainResult<Vec<User>> {
        let rows = sqlx::query_as::<_, UserRow>("SELECT id, full_name FROM users")
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        Ok(rows.into_iter().map(User::from).collect())
    }

    async fn get_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>("SELECT id, full_name FROM users WHERE id = $1")
            .bind(Uuid::from(id))
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        Ok(row.map(User::from))
    }

    async fn create(&self, user: &User) -> DomainResult<bool> {
        // A conflicting id is a recoverable rejection, not an error.
        let result = sqlx::query(
            "INSERT INTO users (id, full_name) VALUES ($1, $2) ON CONFLICT (id) DO NOTHING",
        )
        .bind(Uuid::from(user.id))
        .bind(user.full_name.as_str())
        .execute(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_by_id(&self, id: UserId) -> DomainResult<bool> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(Uuid::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;

        Ok(result.rows_affected() > 0)
    }
}
