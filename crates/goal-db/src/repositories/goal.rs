//! PostgreSQL implementation of GoalRepository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::instrument;

use goal_core::entities::Goal;
use goal_core::traits::{GoalRepository, RepoResult};

use crate::models::GoalRow;

use super::error::map_db_error;

/// PostgreSQL implementation of GoalRepository
#[derive(Clone)]
pub struct PgGoalRepository {
    pool: PgPool,
}

impl PgGoalRepository {
    /// Create a new PgGoalRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl GoalRepository for PgGoalRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Goal>> {
        let result = sqlx::query_as::<_, GoalRow>(
            r"
            SELECT id, name, current_value, selected_value, period_end, user_id,
                   created_at, updated_at
            FROM goals
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Goal::from))
    }

    #[instrument(skip(self))]
    async fn find_for_user(&self, external_id: i64) -> RepoResult<Vec<Goal>> {
        // Single join query: one consistent snapshot of the user's goals,
        // in insertion order.
        let rows = sqlx::query_as::<_, GoalRow>(
            r"
            SELECT g.id, g.name, g.current_value, g.selected_value, g.period_end,
                   g.user_id, g.created_at, g.updated_at
            FROM goals g
            JOIN users u ON u.id = g.user_id
            WHERE u.external_id = $1
            ORDER BY g.id
            ",
        )
        .bind(external_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Goal::from).collect())
    }

    #[instrument(skip(self))]
    async fn create(
        &self,
        user_id: i64,
        name: &str,
        selected_value: i64,
        period_end: DateTime<Utc>,
    ) -> RepoResult<Goal> {
        let row = sqlx::query_as::<_, GoalRow>(
            r"
            INSERT INTO goals (name, selected_value, period_end, user_id)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, current_value, selected_value, period_end, user_id,
                      created_at, updated_at
            ",
        )
        .bind(name)
        .bind(selected_value)
        .bind(period_end)
        .bind(user_id)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(Goal::from(row))
    }

    #[instrument(skip(self))]
    async fn add_progress(&self, id: i64, delta: i64) -> RepoResult<bool> {
        let result = sqlx::query(
            r"
            UPDATE goals
            SET current_value = current_value + $2, updated_at = NOW()
            WHERE id = $1
            ",
        )
        .bind(id)
        .bind(delta)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self))]
    async fn set_progress(&self, id: i64, value: i64) -> RepoResult<bool> {
        let result = sqlx::query(
            r"
            UPDATE goals
            SET current_value = $2, updated_at = NOW()
            WHERE id = $1
            ",
        )
        .bind(id)
        .bind(value)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }
}
