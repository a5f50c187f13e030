//! Domain entities

mod goal;
mod user;

pub use goal::Goal;
pub use user::User;
