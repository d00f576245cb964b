//! Error types for the shared action types.
use thiserror::Error;

/// Represents errors raised when a raw byte does not map to one of the closed
/// enumerations of the action model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionTypeError {
    #[error("Unknown action kind: {0}")]
    UnknownActionKind(u8),

    #[error("Invalid time in force: {0}")]
    InvalidTimeInForce(u8),

    #[error("Invalid finalize variant: {0}")]
    InvalidFinalizeVariant(u8),
}
