//! User entity - a chat-platform user tracked by the bot

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User entity keyed by a database surrogate id
///
/// `external_id` is the immutable identifier assigned by the chat platform
/// and is distinct from the surrogate key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub external_id: i64,
    pub display_name: String,
    pub is_blocked: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new User that has not been persisted yet (`id == 0`)
    pub fn new(external_id: i64, display_name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: 0,
            external_id,
            display_name: display_name.into(),
            is_blocked: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Check whether the platform has reported this user as unreachable
    #[inline]
    pub fn is_blocked(&self) -> bool {
        self.is_blocked
    }

    /// Clear the blocked flag (first contact after a block)
    pub fn unblock(&mut self) {
        self.is_blocked = false;
        self.updated_at = Utc::now();
    }

    /// Mark the user as unreachable
    pub fn block(&mut self) {
        self.is_blocked = true;
        self.updated_at = Utc::now();
    }
}
