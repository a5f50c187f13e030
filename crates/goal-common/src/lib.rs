//! # goal-common
//!
//! Shared utilities: environment-based configuration and tracing setup.

pub mod config;
pub mod telemetry;

pub use config::{AppConfig, ConfigError, DatabaseSettings, Environment};
pub use telemetry::{init_tracing, try_init_tracing, TracingConfig, TracingError};
