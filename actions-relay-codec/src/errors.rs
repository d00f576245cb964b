//! Error types for the action codec.
use actions_relay_shared::ActionTypeError;
use actions_relay_shared::types::ActionKind;
use thiserror::Error;

/// Represents errors raised while encoding an action.
///
/// A value that does not fit its declared width is rejected; the codec never
/// truncates or wraps.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodingError {
    #[error("API wallet name is {len} bytes long, maximum is {max}")]
    NameTooLong { len: usize, max: usize },
}

/// Represents errors raised while parsing a payload back into an action.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodingError {
    #[error("Payload of {len} bytes is shorter than the header")]
    MissingHeader { len: usize },

    #[error("Unsupported protocol prefix: {0:02x?}")]
    UnsupportedVersion([u8; 3]),

    #[error("Invalid field: {0}")]
    InvalidField(#[from] ActionTypeError),

    #[error("Truncated {kind} payload: expected {expected} field bytes, got {actual}")]
    Truncated {
        kind: ActionKind,
        expected: usize,
        actual: usize,
    },

    #[error("{extra} trailing bytes after {kind} fields")]
    TrailingBytes { kind: ActionKind, extra: usize },

    #[error("Invalid boolean byte: {0}")]
    InvalidBool(u8),

    #[error("API wallet name is not valid UTF-8")]
    InvalidUtf8,

    #[error("API wallet name is {len} bytes long, maximum is {max}")]
    NameTooLong { len: usize, max: usize },
}
