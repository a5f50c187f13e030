//! Goal entity - a monthly goal with a progress counter

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Goal entity owned by exactly one [`super::User`]
///
/// `current_value` accumulates progress within the calendar month that ends
/// at `period_end`. Negative deltas are allowed, so the counter may go
/// negative; no floor is enforced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Goal {
    pub id: i64,
    pub name: String,
    pub current_value: i64,
    pub selected_value: i64,
    pub period_end: DateTime<Utc>,
    pub user_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Goal {
    /// Render the progress as `current/target`
    pub fn progress_summary(&self) -> String {
        format!("{}/{}", self.current_value, self.selected_value)
    }

    /// Check whether the target has been reached
    #[inline]
    pub fn is_reached(&self) -> bool {
        self.current_value >= self.selected_value
    }
}
