use actions_relay_shared::types::{ActionId, ActionKind, ActionRecord, NewActionRecord};
use alloy::hex::{self, FromHex};
use alloy::primitives::{Address, Bytes};
use async_trait::async_trait;
use chrono::{DateTime, Utc};

use super::MIGRATOR;
use crate::{ActionLogRepository, ActionLogRepositoryError};

/// Row of the `action_records` table as stored.
#[derive(Debug, sqlx::FromRow)]
struct ActionRecordRow {
    id: i64,
    creator: String,
    kind: i16,
    payload: Vec<u8>,
    executed: bool,
    result: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<ActionRecordRow> for ActionRecord {
    type Error = ActionLogRepositoryError;

    fn try_from(row: ActionRecordRow) -> Result<Self, Self::Error> {
        let id = ActionId::try_from(row.id)
            .map_err(|_| ActionLogRepositoryError::InvalidActionId(row.id))?;
        let creator = Address::from_hex(&row.creator)
            .map_err(|_| ActionLogRepositoryError::InvalidAddress(row.creator.clone()))?;
        let kind = u8::try_from(row.kind)
            .ok()
            .and_then(|byte| ActionKind::try_from(byte).ok())
            .ok_or(ActionLogRepositoryError::InvalidActionKind(row.kind))?;

        Ok(ActionRecord::new(
            id,
            NewActionRecord {
                creator,
                kind,
                payload: Bytes::from(row.payload),
                executed: row.executed,
                result: row.result,
                created_at: row.created_at,
            },
        ))
    }
}

/// Addresses are stored as lowercase `0x`-prefixed hex.
fn address_key(address: &Address) -> String {
    hex::encode_prefixed(address.as_slice())
}

/// PostgreSQL implementation of the action log repository.
///
/// Provides durable storage for records and the per-account index using a
/// `sqlx::PgPool`. Every append is wrapped in its own transaction.
pub struct PostgresActionLogRepository {
    pool: sqlx::PgPool,
}

impl PostgresActionLogRepository {
    /// Creates a repository over an already migrated pool.
    ///
    /// # Arguments
    ///
    /// * `pool` - PostgreSQL connection pool with the action log schema
    pub fn new(pool: sqlx::PgPool) -> Self {
        Self { pool }
    }

    /// Connects to `url` and applies the embedded migrations.
    ///
    /// # Returns
    ///
    /// * `Ok(PostgresActionLogRepository)` - Ready-to-use repository instance
    /// * `Err(ActionLogRepositoryError)` - Connection or migration failure
    pub async fn connect(url: &str) -> Result<Self, ActionLogRepositoryError> {
        let pool = sqlx::PgPool::connect(url).await?;
        MIGRATOR.run(&pool).await?;
        Ok(Self::new(pool))
    }

    /// Inserts the record and its index entry within an active transaction.
    ///
    /// The id is taken from the `action_counter` row. The row stays locked until the
    /// transaction ends, so concurrent appends queue on it and a rolled back
    /// append leaves no gap.
    async fn append_tx(
        &self,
        record: NewActionRecord,
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
    ) -> Result<ActionRecord, ActionLogRepositoryError> {
        let next_id: i64 = sqlx::query_scalar(
            "UPDATE action_counter SET next_id = next_id + 1 RETURNING next_id - 1",
        )
        .fetch_one(&mut **tx)
        .await?;
        let id = ActionId::try_from(next_id)
            .map_err(|_| ActionLogRepositoryError::InvalidActionId(next_id))?;
        let creator = address_key(&record.creator);

        sqlx::query(
            r#"
            INSERT INTO action_records (id, creator, kind, payload, executed, result, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(next_id)
        .bind(&creator)
        .bind(i16::from(record.kind.id()))
        .bind(record.payload.to_vec())
        .bind(record.executed)
        .bind(&record.result)
        .bind(record.created_at)
        .execute(&mut **tx)
        .await?;

        sqlx::query("INSERT INTO user_actions (creator, action_id) VALUES ($1, $2)")
            .bind(&creator)
            .bind(next_id)
            .execute(&mut **tx)
            .await?;

        Ok(ActionRecord::new(id, record))
    }
}

#[async_trait]
impl ActionLogRepository for PostgresActionLogRepository {
    /// Appends a record in a new transaction.
    async fn append(
        &self,
        record: NewActionRecord,
    ) -> Result<ActionRecord, ActionLogRepositoryError> {
        let mut tx = self.pool.begin().await?;
        let record = self.append_tx(record, &mut tx).await?;
        tx.commit().await?;
        Ok(record)
    }

    async fn get_action(
        &self,
        id: ActionId,
    ) -> Result<Option<ActionRecord>, ActionLogRepositoryError> {
        let Ok(id) = i64::try_from(id) else {
            return Ok(None);
        };

        let row = sqlx::query_as::<_, ActionRecordRow>(
            r#"
            SELECT id, creator, kind, payload, executed, result, created_at
            FROM action_records
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(ActionRecord::try_from).transpose()
    }

    async fn get_user_actions(
        &self,
        account: &Address,
    ) -> Result<Vec<ActionId>, ActionLogRepositoryError> {
        let ids: Vec<i64> = sqlx::query_scalar(
            "SELECT action_id FROM user_actions WHERE creator = $1 ORDER BY action_id",
        )
        .bind(address_key(account))
        .fetch_all(&self.pool)
        .await?;

        ids.into_iter()
            .map(|id| {
                ActionId::try_from(id).map_err(|_| ActionLogRepositoryError::InvalidActionId(id))
            })
            .collect()
    }

    async fn action_count(&self) -> Result<u64, ActionLogRepositoryError> {
        let count: i64 = sqlx::query_scalar("SELECT next_id FROM action_counter")
            .fetch_one(&self.pool)
            .await?;
        u64::try_from(count).map_err(|_| ActionLogRepositoryError::InvalidActionId(count))
    }
}
