//! Error types for the action log service.
use actions_relay_codec::EncodingError;
use actions_relay_repository::ActionLogRepositoryError;
use actions_relay_shared::types::ActionId;
use alloy::primitives::Address;
use thiserror::Error;
use tokio::task::JoinError;

/// Represents errors returned to callers of the action log.
///
/// Encoding and authorization failures leave the log untouched. A repository
/// failure after a dispatch means the call may have reached the receiver without
/// being recorded.
#[derive(Debug, Error)]
pub enum ActionLogError {
    #[error("Encoding error: {0}")]
    Encoding(#[from] EncodingError),

    #[error("Action not found: {0}")]
    NotFound(ActionId),

    #[error("Unauthorized caller: {caller}")]
    Unauthorized { caller: Address },

    #[error("Repository error: {0}")]
    Repository(#[from] ActionLogRepositoryError),

    #[error("Submission task failed: {0}")]
    Submission(#[from] JoinError),
}
