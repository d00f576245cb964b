//! Dependency initialization and wiring for the relay.

use std::sync::Arc;

use actions_relay_pipeline::{ActionLog, DispatchAction, DryRunDispatcher, HttpDispatcher};
use actions_relay_repository::{
    ActionLogRepository, InMemoryActionLogRepository, PostgresActionLogRepository,
};
use tracing::info;

use crate::config::{Settings, Submission, load_submissions, seed_submissions};
use crate::errors::RelayError;

/// `Dependencies` holds the wired action log and the batch it should run.
pub struct Dependencies {
    pub action_log: ActionLog,
    pub submissions: Vec<Submission>,
}

impl Dependencies {
    /// Creates a new `Dependencies` instance from environment variables.
    ///
    /// See [`Settings::from_env`] for the variables read.
    ///
    /// # Returns
    ///
    /// * `Ok(Dependencies)` - Initialized dependencies
    /// * `Err(RelayError)` - Invalid settings, unreachable database or unreadable
    ///   actions file
    pub async fn new() -> Result<Self, RelayError> {
        Self::from_settings(Settings::from_env()?).await
    }

    /// Wires the dependencies described by `settings`.
    pub async fn from_settings(settings: Settings) -> Result<Self, RelayError> {
        info!(
            owner = %settings.owner,
            receiver = %settings.receiver,
            receiver_url = settings.receiver_url.as_deref().unwrap_or("dry-run"),
            dispatch_timeout_secs = settings.dispatch_timeout.as_secs(),
            persistent = settings.database_url.is_some(),
            "Initializing dependencies"
        );

        let repository: Arc<dyn ActionLogRepository> = match &settings.database_url {
            Some(url) => {
                let repository = PostgresActionLogRepository::connect(url).await?;
                info!("PostgreSQL repository ready");
                Arc::new(repository)
            }
            None => Arc::new(InMemoryActionLogRepository::new()),
        };

        let dispatcher: Arc<dyn DispatchAction> = match &settings.receiver_url {
            Some(url) => Arc::new(
                HttpDispatcher::new(url.clone(), settings.receiver, settings.dispatch_timeout)
                    .map_err(|e| {
                        RelayError::config(format!("Failed to create HTTP dispatcher: {}", e))
                    })?,
            ),
            None => Arc::new(DryRunDispatcher::new()),
        };

        let submissions = match &settings.actions_file {
            Some(path) => load_submissions(path)?,
            None => seed_submissions(settings.owner),
        };
        info!(count = submissions.len(), "Submissions loaded");

        let action_log = ActionLog::new(settings.owner, repository, dispatcher)
            .with_receiver(settings.receiver);

        Ok(Self {
            action_log,
            submissions,
        })
    }
}
