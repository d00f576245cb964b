use alloy::primitives::{Address, U256};
use serde::{Deserialize, Serialize};

use super::action_kind::ActionKind;
use super::action_record::ActionId;

/// Notifications emitted by the action log after a state change has been committed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionLogEvent {
    /// A new record was appended.
    ActionCreated {
        id: ActionId,
        creator: Address,
        kind: ActionKind,
    },
    /// Outcome of the dispatch attached to a freshly appended record.
    ActionExecuted {
        id: ActionId,
        executed: bool,
        result: String,
    },
    /// Value was credited to the relay-held balance.
    Deposited { from: Address, amount: U256 },
    /// The owner withdrew the relay-held balance.
    Withdrawn { to: Address, amount: U256 },
}
