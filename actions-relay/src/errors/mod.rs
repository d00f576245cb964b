//! Error types for the Actions Relay application.
//! Consolidates the errors of the library crates with configuration and input
//! file failures.
use actions_relay_pipeline::ActionLogError;
use actions_relay_repository::ActionLogRepositoryError;

#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Action log error: {0}")]
    ActionLog(#[from] ActionLogError),
    #[error("Repository error: {0}")]
    Repository(#[from] ActionLogRepositoryError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl RelayError {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
