//! Actions Relay Library
//!
//! This library provides the application layer of the relay: configuration from
//! the environment, dependency wiring, and the runner that pushes a batch of
//! submissions through the action log.

pub mod config;
pub mod errors;
pub mod runner;

pub use config::Dependencies;
pub use errors::RelayError;
