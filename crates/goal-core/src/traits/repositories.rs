//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation. Every operation runs inside its own
//! short-lived transaction; failed writes must roll back cleanly.

use async_trait::async_trait;

use chrono::{DateTime, Utc};

use crate::entities::{Goal, User};
use crate::error::DomainError;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by the chat-platform identifier
    async fn find_by_external_id(&self, external_id: i64) -> RepoResult<Option<User>>;

    /// Insert a new user, or clear the blocked flag of an existing one
    ///
    /// Atomic and idempotent. The stored display name is kept as-is when the
    /// user already exists.
    async fn upsert(&self, external_id: i64, display_name: &str) -> RepoResult<User>;

    /// Set or clear the blocked flag; returns false when no such user exists
    async fn set_blocked(&self, external_id: i64, blocked: bool) -> RepoResult<bool>;
}

// ============================================================================
// Goal Repository
// ============================================================================

#[async_trait]
pub trait GoalRepository: Send + Sync {
    /// Find goal by ID
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Goal>>;

    /// List all goals owned by the user with the given external id
    ///
    /// Single consistent snapshot in insertion order. Empty when the user is
    /// absent or has no goals.
    async fn find_for_user(&self, external_id: i64) -> RepoResult<Vec<Goal>>;

    /// Create a new goal attached to an existing user row
    async fn create(
        &self,
        user_id: i64,
        name: &str,
        selected_value: i64,
        period_end: DateTime<Utc>,
    ) -> RepoResult<Goal>;

    /// Atomically increment the progress counter; the delta may be negative
    ///
    /// Returns false when no goal with that id exists.
    async fn add_progress(&self, id: i64, delta: i64) -> RepoResult<bool>;

    /// Atomically overwrite the progress counter
    ///
    /// Returns false when no goal with that id exists.
    async fn set_progress(&self, id: i64, value: i64) -> RepoResult<bool>;
}
