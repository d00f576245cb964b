use alloy::primitives::{Address, Bytes};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::action_kind::ActionKind;

/// Sequential identifier of a log record, starting at 0.
pub type ActionId = u64;

/// Represents the data of a record before the log assigns it an identifier.
///
/// This is what the action log hands to a repository; the repository allocates the
/// next identifier and turns it into an `ActionRecord` in the same atomic step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewActionRecord {
    pub creator: Address,
    pub kind: ActionKind,
    pub payload: Bytes,
    pub executed: bool,
    pub result: String,
    pub created_at: DateTime<Utc>,
}

/// One immutable entry of the append-only action log.
///
/// Fields are only reachable through accessors: once a record is built there is no
/// way to change its identifier, creator, kind, payload or outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    id: ActionId,
    creator: Address,
    kind: ActionKind,
    payload: Bytes,
    executed: bool,
    result: String,
    created_at: DateTime<Utc>,
}

impl ActionRecord {
    /// Finalizes a pending record under the identifier allocated by the store.
    pub fn new(id: ActionId, record: NewActionRecord) -> Self {
        let NewActionRecord {
            creator,
            kind,
            payload,
            executed,
            result,
            created_at,
        } = record;
        Self {
            id,
            creator,
            kind,
            payload,
            executed,
            result,
            created_at,
        }
    }

    pub fn id(&self) -> ActionId {
        self.id
    }

    pub fn creator(&self) -> Address {
        self.creator
    }

    pub fn kind(&self) -> ActionKind {
        self.kind
    }

    /// The exact bytes forwarded to the receiver.
    pub fn payload(&self) -> &Bytes {
        &self.payload
    }

    /// Whether the dispatch call completed without a fault.
    pub fn executed(&self) -> bool {
        self.executed
    }

    pub fn result(&self) -> &str {
        &self.result
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
