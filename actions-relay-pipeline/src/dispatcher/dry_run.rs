use actions_relay_codec::decode;
use alloy::primitives::Bytes;
use async_trait::async_trait;
use tracing::info;

use crate::dispatcher::DispatchAction;
use crate::errors::DispatchError;

/// Local stand-in for the receiver.
///
/// Parses every payload the way the execution layer would and logs the result
/// instead of sending it anywhere. A payload that does not parse is a fault.
#[derive(Debug, Default, Clone, Copy)]
pub struct DryRunDispatcher;

impl DryRunDispatcher {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl DispatchAction for DryRunDispatcher {
    async fn dispatch(&self, payload: &Bytes) -> Result<(), DispatchError> {
        let action = decode(payload)?;
        info!(kind = %action.kind(), len = payload.len(), ?action, "Dry-run dispatch");
        Ok(())
    }
}
