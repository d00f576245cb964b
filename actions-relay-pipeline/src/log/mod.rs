//! This module defines the `ActionLog`, the service behind every relay entry point.
//!
//! A submission goes through four steps: encode the parameters, forward the
//! payload through the dispatcher, append the outcome to the record store and
//! notify subscribers. Encoding failures abort the submission before anything is
//! sent or stored. Dispatch faults do not: they are written down as a record with
//! `executed = false`.
mod entry_points;

use std::sync::Arc;

use actions_relay_codec::{CORE_WRITER_ADDRESS, encode};
use actions_relay_repository::ActionLogRepository;
use actions_relay_shared::types::{
    Action, ActionId, ActionKind, ActionLogEvent, ActionRecord, NewActionRecord,
};
use alloy::primitives::{Address, Bytes, U256};
use chrono::Utc;
use tokio::sync::{Mutex, OwnedMutexGuard, broadcast};
use tracing::{info, trace, warn};

use crate::dispatcher::DispatchAction;
use crate::errors::{ActionLogError, DispatchError};

/// Result note of a record whose dispatch completed.
pub const DISPATCH_SUCCESS: &str = "dispatched";

/// Upper bound, in characters, of the note stored for a failed dispatch.
pub const MAX_RESULT_LEN: usize = 256;

const EVENT_BUFFER_SIZE: usize = 256;

/// Funds paid out by [`ActionLog::withdraw`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Withdrawal {
    pub to: Address,
    pub amount: U256,
}

/// `ActionLog` relays typed actions to the execution layer and keeps an
/// append-only, per-account indexed record of every attempt.
///
/// Submissions are serialized: the dispatch and the append of one submission
/// complete before the next submission dispatches, so ids follow dispatch order.
/// That section runs on its own task, so once a submission has taken the lock it
/// is dispatched and recorded even if the caller stops waiting for it.
///
/// The relay-held balance lives in process memory only. It starts at zero on
/// every start, whichever repository backs the records.
pub struct ActionLog {
    owner: Address,
    receiver: Address,
    repository: Arc<dyn ActionLogRepository>,
    dispatcher: Arc<dyn DispatchAction>,
    submission: Arc<Mutex<()>>,
    balance: Mutex<U256>,
    events: broadcast::Sender<ActionLogEvent>,
}

impl ActionLog {
    /// Creates a new `ActionLog` instance.
    ///
    /// # Arguments
    ///
    /// * `owner` - The only account allowed to withdraw the relay-held balance
    /// * `repository` - Store for records and the per-account index
    /// * `dispatcher` - Forwards encoded payloads to the receiver
    ///
    /// # Returns
    ///
    /// A new `ActionLog` addressing the well-known receiver.
    pub fn new(
        owner: Address,
        repository: Arc<dyn ActionLogRepository>,
        dispatcher: Arc<dyn DispatchAction>,
    ) -> Self {
        let (events, _) = broadcast::channel(EVENT_BUFFER_SIZE);
        Self {
            owner,
            receiver: CORE_WRITER_ADDRESS,
            repository,
            dispatcher,
            submission: Arc::new(Mutex::new(())),
            balance: Mutex::new(U256::ZERO),
            events,
        }
    }

    /// Overrides the receiver address reported by [`ActionLog::receiver`].
    pub fn with_receiver(mut self, receiver: Address) -> Self {
        self.receiver = receiver;
        self
    }

    /// Submits one action on behalf of `caller`.
    ///
    /// Every `send_*` entry point delegates here.
    ///
    /// # Returns
    ///
    /// The id of the new record. Fails with `ActionLogError::Encoding` before
    /// anything is dispatched or stored when the parameters do not fit the wire
    /// format.
    pub async fn submit(&self, caller: Address, action: Action) -> Result<ActionId, ActionLogError> {
        let kind = action.kind();
        let payload = encode(&action).inspect_err(|err| {
            warn!(%caller, %kind, error = %err, "Rejected action");
        })?;

        let guard = Arc::clone(&self.submission).lock_owned().await;
        let task = tokio::spawn(dispatch_and_append(
            Arc::clone(&self.dispatcher),
            Arc::clone(&self.repository),
            self.events.clone(),
            (caller, kind, payload),
            guard,
        ));

        let record = task.await??;
        Ok(record.id())
    }

    /// Returns the record with the given id, or `ActionLogError::NotFound` when
    /// `id` is not below [`ActionLog::action_count`].
    pub async fn get_action(&self, id: ActionId) -> Result<ActionRecord, ActionLogError> {
        self.repository
            .get_action(id)
            .await?
            .ok_or(ActionLogError::NotFound(id))
    }

    /// Returns the ids of the records created by `account`, oldest first.
    pub async fn get_user_actions(&self, account: &Address) -> Result<Vec<ActionId>, ActionLogError> {
        Ok(self.repository.get_user_actions(account).await?)
    }

    pub async fn action_count(&self) -> Result<u64, ActionLogError> {
        Ok(self.repository.action_count().await?)
    }

    pub fn owner(&self) -> Address {
        self.owner
    }

    /// Address of the receiver the payloads are meant for.
    pub fn receiver(&self) -> Address {
        self.receiver
    }

    /// Credits `amount` to the relay-held balance and returns the new balance.
    pub async fn deposit(&self, from: Address, amount: U256) -> U256 {
        let mut balance = self.balance.lock().await;
        *balance = balance.saturating_add(amount);
        let updated = *balance;
        info!(%from, %amount, balance = %updated, "Deposit received");
        publish(&self.events, ActionLogEvent::Deposited { from, amount });
        updated
    }

    pub async fn balance(&self) -> U256 {
        *self.balance.lock().await
    }

    /// Pays the whole relay-held balance out to the owner.
    ///
    /// An empty balance is withdrawn as zero. Any caller other than the owner
    /// fails with `ActionLogError::Unauthorized` and the balance is untouched.
    pub async fn withdraw(&self, caller: Address) -> Result<Withdrawal, ActionLogError> {
        if caller != self.owner {
            warn!(%caller, "Unauthorized withdrawal attempt");
            return Err(ActionLogError::Unauthorized { caller });
        }

        let amount = std::mem::take(&mut *self.balance.lock().await);
        info!(to = %self.owner, %amount, "Balance withdrawn");
        publish(&self.events, ActionLogEvent::Withdrawn {
            to: self.owner,
            amount,
        });

        Ok(Withdrawal {
            to: self.owner,
            amount,
        })
    }

    /// Returns a receiver of every event published from now on.
    pub fn subscribe(&self) -> broadcast::Receiver<ActionLogEvent> {
        self.events.subscribe()
    }

}

/// Forwards the payload, then appends the outcome and notifies subscribers.
/// Holds the submission lock throughout.
async fn dispatch_and_append(
    dispatcher: Arc<dyn DispatchAction>,
    repository: Arc<dyn ActionLogRepository>,
    events: broadcast::Sender<ActionLogEvent>,
    (caller, kind, payload): (Address, ActionKind, Bytes),
    _guard: OwnedMutexGuard<()>,
) -> Result<ActionRecord, ActionLogError> {
    let (executed, result) = match dispatcher.dispatch(&payload).await {
        Ok(()) => (true, DISPATCH_SUCCESS.to_string()),
        Err(err) => {
            warn!(%caller, %kind, error = %err, "Dispatch failed");
            (false, failure_note(&err))
        }
    };

    let record = repository
        .append(NewActionRecord {
            creator: caller,
            kind,
            payload,
            executed,
            result,
            created_at: Utc::now(),
        })
        .await?;

    info!(id = record.id(), %caller, %kind, executed, "Action logged");
    publish(
        &events,
        ActionLogEvent::ActionCreated {
            id: record.id(),
            creator: caller,
            kind,
        },
    );
    publish(
        &events,
        ActionLogEvent::ActionExecuted {
            id: record.id(),
            executed: record.executed(),
            result: record.result().to_string(),
        },
    );

    Ok(record)
}

fn publish(events: &broadcast::Sender<ActionLogEvent>, event: ActionLogEvent) {
    if events.send(event).is_err() {
        trace!("No event subscribers");
    }
}

/// Short, bounded description of a dispatch fault. Never empty.
fn failure_note(err: &DispatchError) -> String {
    format!("dispatch failed: {err}")
        .chars()
        .take(MAX_RESULT_LEN)
        .collect()
}
