//! Session scratch data
//!
//! Ephemeral per-conversation state: wizard inputs, the selected goal, the
//! chosen edit mode, and a snapshot of the goals rendered in the overview.
//! Discarded when the conversation is reset.

use std::collections::HashMap;

use chrono::{DateTime, Utc};

use goal_core::entities::Goal;

use super::event::EditMode;

/// Snapshot of a goal's displayed fields, captured when the overview renders
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoalSnapshot {
    pub id: i64,
    pub name: String,
    pub current_value: i64,
    pub selected_value: i64,
    pub period_end: DateTime<Utc>,
    pub user_id: i64,
}

impl From<&Goal> for GoalSnapshot {
    fn from(goal: &Goal) -> Self {
        Self {
            id: goal.id,
            name: goal.name.clone(),
            current_value: goal.current_value,
            selected_value: goal.selected_value,
            period_end: goal.period_end,
            user_id: goal.user_id,
        }
    }
}

/// Ephemeral conversation scratch data
#[derive(Debug, Clone, Default)]
pub struct Scratch {
    /// Goal name entered in the creation wizard
    pub new_goal_name: Option<String>,
    /// Target value entered in the creation wizard
    pub new_goal_target: Option<i64>,
    /// Goal picked in the overview
    pub selected_goal: Option<i64>,
    /// Add-or-set mode picked in the edit view
    pub edit_mode: Option<EditMode>,
    /// Goals as last rendered in the overview, keyed by id
    pub goal_cache: HashMap<i64, GoalSnapshot>,
}

impl Scratch {
    /// Replace the cached goal snapshots with the freshly rendered set
    pub fn cache_goals(&mut self, goals: &[Goal]) {
        self.goal_cache = goals
            .iter()
            .map(|goal| (goal.id, GoalSnapshot::from(goal)))
            .collect();
    }

    /// Look up the snapshot of the currently selected goal
    pub fn selected_snapshot(&self) -> Option<&GoalSnapshot> {
        self.selected_goal.and_then(|id| self.goal_cache.get(&id))
    }

    /// Drop the in-flight wizard inputs
    pub fn clear_wizard(&mut self) {
        self.new_goal_name = None;
        self.new_goal_target = None;
    }
}
