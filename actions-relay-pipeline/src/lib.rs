//! # Actions Relay Pipeline
//! This crate contains the action log service: the entry points that take a typed
//! action from a caller, encode it, forward it to the execution layer through a
//! dispatcher and append the outcome to the record store.
//! It includes the dispatcher trait and its implementations, the sample action
//! presets, and error handling.
pub mod dispatcher;
pub mod errors;
pub mod log;
pub mod presets;

pub use dispatcher::{DispatchAction, DryRunDispatcher, HttpDispatcher};
pub use errors::{ActionLogError, DispatchError};
pub use log::{ActionLog, Withdrawal};
