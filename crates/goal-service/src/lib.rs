//! # goal-service
//!
//! Application layer exposing the goal-tracking operations to the
//! conversation layer.
//!
//! Every operation contains failures locally: storage errors are logged and
//! collapse to `None`/`false`/empty sentinels, so no error type escapes to
//! callers. The conversation layer only has to decide what to tell the user.

pub mod services;

pub use services::{GoalService, ServiceContext};
