//! User entity <-> model mapper

use goal_core::entities::User;

use crate::models::UserRow;

/// Convert UserRow to User entity
impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User {
            id: row.id,
            external_id: row.external_id,
            display_name: row.display_name,
            is_blocked: row.is_blocked,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}
