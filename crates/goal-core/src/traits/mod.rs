//! Repository traits (ports)

mod repositories;

pub use repositories::{GoalRepository, RepoResult, UserRepository};
