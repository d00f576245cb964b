//! In-memory implementation of the action log repository.
use std::collections::HashMap;

use actions_relay_shared::types::{ActionId, ActionRecord, NewActionRecord};
use alloy::primitives::Address;
use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{ActionLogRepository, ActionLogRepositoryError};

#[derive(Debug, Default)]
struct State {
    records: Vec<ActionRecord>,
    by_creator: HashMap<Address, Vec<ActionId>>,
}

/// In-memory action log for tests, dry runs and deployments without a database.
///
/// Records live in a `Vec` whose index is the record id. Not persistent across
/// process restarts.
#[derive(Debug, Default)]
pub struct InMemoryActionLogRepository {
    state: RwLock<State>,
}

impl InMemoryActionLogRepository {
    /// Create a new empty in-memory action log.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ActionLogRepository for InMemoryActionLogRepository {
    async fn append(
        &self,
        record: NewActionRecord,
    ) -> Result<ActionRecord, ActionLogRepositoryError> {
        let mut state = self.state.write().await;

        let id = state.records.len() as ActionId;
        let record = ActionRecord::new(id, record);
        state
            .by_creator
            .entry(record.creator())
            .or_default()
            .push(id);
        state.records.push(record.clone());

        Ok(record)
    }

    async fn get_action(
        &self,
        id: ActionId,
    ) -> Result<Option<ActionRecord>, ActionLogRepositoryError> {
        let state = self.state.read().await;
        let record = usize::try_from(id)
            .ok()
            .and_then(|index| state.records.get(index))
            .cloned();
        Ok(record)
    }

    async fn get_user_actions(
        &self,
        account: &Address,
    ) -> Result<Vec<ActionId>, ActionLogRepositoryError> {
        let state = self.state.read().await;
        Ok(state.by_creator.get(account).cloned().unwrap_or_default())
    }

    async fn action_count(&self) -> Result<u64, ActionLogRepositoryError> {
        Ok(self.state.read().await.records.len() as u64)
    }
}
