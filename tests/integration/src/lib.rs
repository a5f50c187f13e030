//! Integration test utilities for the goal bot
//!
//! Provides in-memory repository implementations and helpers for running
//! end-to-end conversation tests without a database or transport.


pub use fixtures::*;
pub use helpers::*;
