use actions_relay::runner::run_submissions;
use actions_relay::{Dependencies, RelayError};
use dotenv::dotenv;
use std::env;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize tracing/logging.
///
/// `LOG_FORMAT=json` switches to structured JSON lines, anything else keeps
/// pretty console output.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("actions_relay=info,actions_relay_pipeline=info"));

    let json = env::var("LOG_FORMAT")
        .map(|format| format.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(true)
                    .with_thread_ids(true),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_target(true).pretty())
            .init();
    }

    info!(
        service_name = "actions-relay",
        service_version = env!("CARGO_PKG_VERSION"),
        json,
        "Tracing initialized"
    );
}

/// Main entry point for the Actions Relay application.
///
/// Loads the environment, wires the action log, submits the configured batch
/// and reports what was logged.
#[tokio::main]
async fn main() -> Result<(), RelayError> {
    dotenv().ok();
    init_tracing();

    let dependencies = match Dependencies::new().await {
        Ok(dependencies) => dependencies,
        Err(e) => {
            error!(error = %e, "Failed to initialize dependencies");
            return Err(e);
        }
    };
    let Dependencies {
        action_log,
        submissions,
    } = dependencies;

    let summary = match run_submissions(&action_log, submissions).await {
        Ok(summary) => summary,
        Err(e) => {
            error!(error = %e, "Relay run failed");
            return Err(e);
        }
    };

    let owner = action_log.owner();
    let total_actions = action_log.action_count().await?;
    let owner_actions = action_log.get_user_actions(&owner).await?.len();
    info!(
        logged = summary.logged,
        executed = summary.executed,
        failed = summary.failed,
        rejected = summary.rejected,
        total_actions,
        owner_actions,
        "Relay run completed"
    );
    Ok(())
}
