//! Goal entity <-> model mapper

use goal_core::entities::Goal;

use crate::models::GoalRow;

/// Convert GoalRow to Goal entity
impl From<GoalRow> for Goal {
    fn from(row: GoalRow) -> Self {
        Goal {
            id: row.id,
            name: row.name,
            current_value: row.current_value,
            selected_value: row.selected_value,
            period_end: row.period_end,
            user_id: row.user_id,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}
