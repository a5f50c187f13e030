//! Service layer

mod context;
mod goals;

pub use context::ServiceContext;
pub use goals::GoalService;
