//! PostgreSQL implementation of UserRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use goal_core::entities::User;
use goal_core::traits::{RepoResult, UserRepository};

use crate::models::UserRow;

use super::error::map_db_error;

/// PostgreSQL implementation of UserRepository
#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    /// Create a new PgUserRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    #[instrument(skip(self))]
    async fn find_by_external_id(&self, external_id: i64) -> RepoResult<Option<User>> {
        let result = sqlx::query_as::<_, UserRow>(
            r"
            SELECT id, external_id, display_name, is_blocked, created_at, updated_at
            FROM users
            WHERE external_id = $1
            ",
        )
        .bind(external_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(User::from))
    }

    #[instrument(skip(self))]
    async fn upsert(&self, external_id: i64, display_name: &str) -> RepoResult<User> {
        // Insert-or-unblock in a single statement. The stored display name is
        // kept when the row already exists.
        let result = sqlx::query_as::<_, UserRow>(
            r"
            INSERT INTO users (external_id, display_name)
            VALUES ($1, $2)
            ON CONFLICT (external_id)
            DO UPDATE SET is_blocked = FALSE, updated_at = NOW()
            RETURNING id, external_id, display_name, is_blocked, created_at, updated_at
            ",
        )
        .bind(external_id)
        .bind(display_name)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(User::from(result))
    }

    #[instrument(skip(self))]
    async fn set_blocked(&self, external_id: i64, blocked: bool) -> RepoResult<bool> {
        let result = sqlx::query(
            r"
            UPDATE users
            SET is_blocked = $2, updated_at = NOW()
            WHERE external_id = $1
            ",
        )
        .bind(external_id)
        .bind(blocked)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }
}
