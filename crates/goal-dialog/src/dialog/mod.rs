//! Dialog state machine
//!
//! The flow is a finite set of named states with a pure transition function;
//! the [`Conversation`] runner executes the resulting effects against the
//! service layer and renders each state's entry view.

mod event;
mod runner;
mod scratch;
mod state;
mod transition;

pub use event::{DialogEvent, EditMode};
pub use runner::Conversation;
pub use scratch::{GoalSnapshot, Scratch};
pub use state::DialogState;
pub use transition::{transition, Effect, Step};
