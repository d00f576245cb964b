//! This module defines the `ActionLogRepository` trait, the interface between the
//! action log service and the store holding its records and per-account index.
use actions_relay_shared::types::{ActionId, ActionRecord, NewActionRecord};
use alloy::primitives::Address;

use crate::errors::ActionLogRepositoryError;

/// A trait that defines the interface for the append-only action record store.
///
/// Implementors keep three pieces of state consistent with each other: the
/// record sequence, the per-account index and the record count. Ids are dense
/// and start at 0, so the count is always the next id to be assigned.
#[async_trait::async_trait]
pub trait ActionLogRepository: Send + Sync {
    /// Appends a record and indexes it under its creator.
    ///
    /// Id allocation, record insertion, index update and count increment happen
    /// as one atomic step; no reader ever observes a partial append.
    ///
    /// # Arguments
    ///
    /// * `record` - The record contents, without an id.
    ///
    /// # Returns
    ///
    /// The stored `ActionRecord`, carrying its newly assigned id, or an
    /// `ActionLogRepositoryError` if nothing could be stored.
    async fn append(
        &self,
        record: NewActionRecord,
    ) -> Result<ActionRecord, ActionLogRepositoryError>;

    /// Loads the record with the given id.
    ///
    /// # Returns
    ///
    /// `Ok(None)` when no record has that id.
    async fn get_action(
        &self,
        id: ActionId,
    ) -> Result<Option<ActionRecord>, ActionLogRepositoryError>;

    /// Returns the ids of every record created by `account`, in submission order.
    ///
    /// An account that never submitted anything yields an empty list.
    async fn get_user_actions(
        &self,
        account: &Address,
    ) -> Result<Vec<ActionId>, ActionLogRepositoryError>;

    /// Returns the number of records ever appended.
    async fn action_count(&self) -> Result<u64, ActionLogRepositoryError>;
}
