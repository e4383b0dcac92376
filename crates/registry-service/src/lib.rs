//! # registry-service
//!
//! Process-level wiring for the package registry core: configuration from
//! the environment, tracing setup, and the shared store and auth handles
//! that HTTP handlers and the CLI are built on.

#![warn(clippy::all)]

pub mod config;
pub mod state;
pub mod telemetry;

pub use config::Config;
pub use state::RegistryState;
pub use telemetry::init_tracing;
