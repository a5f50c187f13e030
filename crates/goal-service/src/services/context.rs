//! Service context - dependency container for services
//!
//! Holds the repositories needed by the service layer.

use std::sync::Arc;

use goal_core::traits::{GoalRepository, UserRepository};

/// Service context containing all dependencies
///
/// Cheap to clone; repositories are shared behind `Arc`.
#[derive(Clone)]
pub struct ServiceContext {
    user_repo: Arc<dyn UserRepository>,
    goal_repo: Arc<dyn GoalRepository>,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(user_repo: Arc<dyn UserRepository>, goal_repo: Arc<dyn GoalRepository>) -> Self {
        Self {
            user_repo,
            goal_repo,
        }
    }

    /// Get the user repository
    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    /// Get the goal repository
    pub fn goal_repo(&self) -> &dyn GoalRepository {
        self.goal_repo.as_ref()
    }
}
