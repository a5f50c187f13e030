//! Goal service
//!
//! The narrow facade the conversation layer talks to. Each operation maps to
//! one short-lived repository transaction and contains failures locally:
//! storage errors and not-found both collapse to `None`/`false`/empty, and
//! the outcome is logged.

use chrono::Utc;
use tracing::{error, info, instrument, warn};

use goal_core::entities::{Goal, User};
use goal_core::period::current_period_end;

use super::context::ServiceContext;

/// Goal service
pub struct GoalService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> GoalService<'a> {
    /// Create a new GoalService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create the user on first contact, or unblock an existing one
    #[instrument(skip(self))]
    pub async fn upsert_user(&self, external_id: i64, display_name: &str) -> Option<User> {
        match self.ctx.user_repo().upsert(external_id, display_name).await {
            Ok(user) => {
                info!(external_id, user_id = user.id, "User upserted");
                Some(user)
            }
            Err(e) => {
                error!(external_id, error = %e, "Failed to upsert user");
                None
            }
        }
    }

    /// Mark the user as unreachable
    ///
    /// Returns false both when the user does not exist and on storage error.
    #[instrument(skip(self))]
    pub async fn block_user(&self, external_id: i64) -> bool {
        match self.ctx.user_repo().set_blocked(external_id, true).await {
            Ok(true) => {
                info!(external_id, "User blocked");
                true
            }
            Ok(false) => {
                warn!(external_id, "User not found, nothing to block");
                false
            }
            Err(e) => {
                error!(external_id, error = %e, "Failed to block user");
                false
            }
        }
    }

    /// List the user's goals; empty when the user is absent or on error
    #[instrument(skip(self))]
    pub async fn list_goals(&self, external_id: i64) -> Vec<Goal> {
        match self.ctx.goal_repo().find_for_user(external_id).await {
            Ok(goals) => {
                info!(external_id, count = goals.len(), "Goals listed");
                goals
            }
            Err(e) => {
                error!(external_id, error = %e, "Failed to list goals");
                Vec::new()
            }
        }
    }

    /// Attach a new goal to an existing user
    ///
    /// The period end is the last second of the current calendar month (UTC)
    /// at call time. Returns `None` when the user does not exist or on
    /// storage error.
    #[instrument(skip(self))]
    pub async fn add_goal(&self, external_id: i64, name: &str, target: i64) -> Option<Goal> {
        let user = match self.ctx.user_repo().find_by_external_id(external_id).await {
            Ok(Some(user)) => user,
            Ok(None) => {
                warn!(external_id, "User not found, goal not added");
                return None;
            }
            Err(e) => {
                error!(external_id, error = %e, "Failed to look up user");
                return None;
            }
        };

        let period_end = current_period_end(Utc::now());
        match self
            .ctx
            .goal_repo()
            .create(user.id, name, target, period_end)
            .await
        {
            Ok(goal) => {
                info!(external_id, goal_id = goal.id, name, "Goal added");
                Some(goal)
            }
            Err(e) => {
                error!(external_id, name, error = %e, "Failed to add goal");
                None
            }
        }
    }

    /// Get a goal by id
    #[instrument(skip(self))]
    pub async fn get_goal(&self, goal_id: i64) -> Option<Goal> {
        match self.ctx.goal_repo().find_by_id(goal_id).await {
            Ok(Some(goal)) => Some(goal),
            Ok(None) => {
                warn!(goal_id, "Goal not found");
                None
            }
            Err(e) => {
                error!(goal_id, error = %e, "Failed to get goal");
                None
            }
        }
    }

    /// Add a (possibly negative) delta to the goal's progress counter
    #[instrument(skip(self))]
    pub async fn add_progress(&self, goal_id: i64, delta: i64) -> bool {
        match self.ctx.goal_repo().add_progress(goal_id, delta).await {
            Ok(true) => {
                info!(goal_id, delta, "Progress added");
                true
            }
            Ok(false) => {
                warn!(goal_id, "Goal not found, progress not added");
                false
            }
            Err(e) => {
                error!(goal_id, error = %e, "Failed to add progress");
                false
            }
        }
    }

    /// Overwrite the goal's progress counter
    #[instrument(skip(self))]
    pub async fn set_progress(&self, goal_id: i64, value: i64) -> bool {
        match self.ctx.goal_repo().set_progress(goal_id, value).await {
            Ok(true) => {
                info!(goal_id, value, "Progress set");
                true
            }
            Ok(false) => {
                warn!(goal_id, "Goal not found, progress not set");
                false
            }
            Err(e) => {
                error!(goal_id, error = %e, "Failed to set progress");
                false
            }
        }
    }
}
