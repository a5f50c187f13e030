//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in goal-core.
//! Each repository handles database operations for a specific domain entity.

mod error;
mod goal;
mod user;

pub use goal::PgGoalRepository;
pub use user::PgUserRepository;
