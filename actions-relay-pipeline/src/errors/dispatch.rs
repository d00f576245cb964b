//! Error types for the dispatchers of the Actions Relay Pipeline.
//! Defines the faults a dispatcher can report while forwarding a payload.
use actions_relay_codec::DecodingError;
use thiserror::Error;

/// Represents a fault raised while forwarding a payload to the receiver.
///
/// These errors never reach the callers of the action log entry points; the log
/// turns them into a record with `executed = false`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DispatchError {
    #[error("Receiver unreachable: {0}")]
    Unreachable(String),

    #[error("Receiver rejected the call with status {status}: {body}")]
    Rejected { status: u16, body: String },

    #[error("Invalid payload: {0}")]
    InvalidPayload(#[from] DecodingError),
}

impl DispatchError {
    pub fn unreachable(msg: impl Into<String>) -> Self {
        Self::Unreachable(msg.into())
    }
}
