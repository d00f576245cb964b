//! Pushes a batch of submissions through the action log.

use actions_relay_pipeline::{ActionLog, ActionLogError};
use tracing::{info, warn};

use crate::config::Submission;
use crate::errors::RelayError;

/// Outcome counts of a batch run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Submissions that produced a record.
    pub logged: usize,
    /// Logged submissions whose dispatch completed.
    pub executed: usize,
    /// Logged submissions whose dispatch faulted.
    pub failed: usize,
    /// Submissions refused before dispatch because they do not encode.
    pub rejected: usize,
}

/// Submits every entry of `submissions` in order.
///
/// Rejected submissions are counted and skipped. Any other error stops the run,
/// since it means the log itself can no longer be trusted.
pub async fn run_submissions(
    action_log: &ActionLog,
    submissions: Vec<Submission>,
) -> Result<RunSummary, RelayError> {
    let mut summary = RunSummary::default();

    for Submission { caller, action } in submissions {
        let kind = action.kind();
        match action_log.submit(caller, action).await {
            Ok(id) => {
                let record = action_log.get_action(id).await?;
                summary.logged += 1;
                if record.executed() {
                    summary.executed += 1;
                } else {
                    summary.failed += 1;
                }
                info!(id, %kind, executed = record.executed(), result = record.result(), "Submission logged");
            }
            Err(ActionLogError::Encoding(err)) => {
                warn!(%caller, %kind, error = %err, "Submission rejected");
                summary.rejected += 1;
            }
            Err(err) => return Err(err.into()),
        }
    }

    Ok(summary)
}
