//! This module defines the `DispatchAction` trait, the seam between the action
//! log and the execution layer, along with its implementations.
mod dry_run;
mod http;

pub use dry_run::DryRunDispatcher;
pub use http::HttpDispatcher;

use alloy::primitives::Bytes;
use async_trait::async_trait;

use crate::errors::DispatchError;

/// A trait for forwarding an encoded payload to the receiver.
///
/// Implementors only report whether the call raised a fault. The response of the
/// receiver carries no business meaning for the log and is not returned.
#[async_trait]
pub trait DispatchAction: Send + Sync {
    /// Forwards one payload.
    ///
    /// # Arguments
    ///
    /// * `payload` - Header and field encoding of a single action.
    ///
    /// # Returns
    ///
    /// `Ok(())` when the call completed, a `DispatchError` describing the fault
    /// otherwise.
    async fn dispatch(&self, payload: &Bytes) -> Result<(), DispatchError>;
}
