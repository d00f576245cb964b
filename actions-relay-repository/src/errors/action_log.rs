//! Error types for the action log repository.
//! Defines the errors raised while storing or loading records.
use thiserror::Error;

/// Represents errors that can occur within the action log repository.
///
/// Besides database failures, a stored row that cannot be mapped back to a
/// record (bad address text, unknown kind, negative id) is reported as corrupt
/// instead of being skipped.
#[derive(Debug, Error)]
pub enum ActionLogRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    MigrationError(#[from] sqlx::migrate::MigrateError),

    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    #[error("Invalid action kind: {0}")]
    InvalidActionKind(i16),

    #[error("Invalid action id: {0}")]
    InvalidActionId(i64),
}
