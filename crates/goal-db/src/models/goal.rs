//! Goal database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the goals table
#[derive(Debug, Clone, FromRow)]
pub struct GoalRow {
    pub id: i64,
    pub name: String,
    pub current_value: i64,
    pub selected_value: i64,
    pub period_end: DateTime<Utc>,
    pub user_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
