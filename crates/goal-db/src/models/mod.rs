//! Database models - SQLx-compatible structs for PostgreSQL tables

mod goal;
mod user;

pub use goal::GoalRow;
pub use user::UserRow;
