//! # goal-core
//!
//! Domain layer containing entities, domain errors, repository traits, and
//! the calendar-period computation. This crate has zero dependencies on
//! infrastructure (database, chat transport, etc.).

pub mod entities;
pub mod error;
pub mod period;
pub mod traits;

// Re-export commonly used types at crate root
pub use entities::{Goal, User};
pub use error::DomainError;
pub use period::current_period_end;
pub use traits::{GoalRepository, RepoResult, UserRepository};
