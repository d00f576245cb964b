//! Settings read from environment variables.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use actions_relay_codec::CORE_WRITER_ADDRESS;
use alloy::primitives::Address;

use crate::errors::RelayError;

/// Default upper bound for a single dispatch request, in seconds.
const DEFAULT_DISPATCH_TIMEOUT_SECS: u64 = 10;

/// Relay settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Account allowed to withdraw the relay-held balance.
    pub owner: Address,
    /// Address the payloads are meant for.
    pub receiver: Address,
    /// Endpoint payloads are posted to. `None` selects the dry-run dispatcher.
    pub receiver_url: Option<String>,
    pub dispatch_timeout: Duration,
    /// PostgreSQL connection string. `None` keeps the log in memory.
    pub database_url: Option<String>,
    /// JSON file with the submissions to run. `None` runs the seed batch.
    pub actions_file: Option<PathBuf>,
}

impl Settings {
    /// Reads the settings from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `OWNER_ADDRESS`: Relay owner (required)
    /// - `RECEIVER_ADDRESS`: Receiver address (default: 0x3333...3333)
    /// - `RECEIVER_URL`: Receiver endpoint (default: dry run)
    /// - `DISPATCH_TIMEOUT_SECS`: Dispatch timeout in seconds (default: 10)
    /// - `DATABASE_URL`: PostgreSQL connection string (default: in memory)
    /// - `ACTIONS_FILE`: Path to a JSON array of submissions (default: seed batch)
    ///
    /// Empty values count as unset.
    pub fn from_env() -> Result<Self, RelayError> {
        let owner = var("OWNER_ADDRESS")
            .ok_or_else(|| RelayError::config("OWNER_ADDRESS must be set"))
            .and_then(|value| parse_address("OWNER_ADDRESS", &value))?;
        let receiver = match var("RECEIVER_ADDRESS") {
            Some(value) => parse_address("RECEIVER_ADDRESS", &value)?,
            None => CORE_WRITER_ADDRESS,
        };
        let dispatch_timeout = var("DISPATCH_TIMEOUT_SECS")
            .and_then(|s| s.parse::<u64>().ok())
            .unwrap_or(DEFAULT_DISPATCH_TIMEOUT_SECS);

        Ok(Self {
            owner,
            receiver,
            receiver_url: var("RECEIVER_URL"),
            dispatch_timeout: Duration::from_secs(dispatch_timeout),
            database_url: var("DATABASE_URL"),
            actions_file: var("ACTIONS_FILE").map(PathBuf::from),
        })
    }
}

fn var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.trim().is_empty())
}

fn parse_address(name: &str, value: &str) -> Result<Address, RelayError> {
    value
        .trim()
        .parse::<Address>()
        .map_err(|e| RelayError::config(format!("{name} is not a valid address: {e}")))
}
