//! # Actions Relay Shared
//! This crate defines shared data structures and types used across the actions relay ecosystem.
//! It includes the action kinds, the typed parameters of every action, the append-only
//! log record and the events emitted by the action log.
pub mod errors;
pub mod types;

pub use errors::ActionTypeError;
