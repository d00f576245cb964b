//! Call envelope of the receiver contract.
//!
//! The execution layer is reached through a single contract at a well-known address
//! exposing one function, `sendRawAction(bytes)`. The payload is carried as the
//! ABI-encoded `bytes` argument behind the function selector.
use alloy::primitives::{Address, Bytes, address};
use alloy::sol;
use alloy::sol_types::SolCall;

sol! {
    /// Receiver of raw actions on the execution layer.
    interface ICoreWriter {
        function sendRawAction(bytes data) external;
    }
}

/// Well-known address of the receiver contract.
pub const CORE_WRITER_ADDRESS: Address = address!("0x3333333333333333333333333333333333333333");

/// Selector marking a call as carrying raw action data.
pub const RAW_ACTION_SELECTOR: [u8; 4] = ICoreWriter::sendRawActionCall::SELECTOR;

/// Wraps `payload` into the calldata of a `sendRawAction` call.
pub fn raw_action_calldata(payload: &Bytes) -> Bytes {
    ICoreWriter::sendRawActionCall {
        data: payload.clone(),
    }
    .abi_encode()
    .into()
}
