//! Transport boundary
//!
//! The chat platform is an opaque message-in/message-out channel. The types
//! here describe that boundary; `console` is the shipped adapter, a
//! line-delimited JSON loop over stdin/stdout.

pub mod console;
mod payloads;

pub use payloads::{Choice, InboundMessage, Outbound, Payload};
