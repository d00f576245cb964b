//! PostgreSQL implementation of the action log repository.
//!
//! ## Database Tables
//!
//! - `action_records`: One row per record; the row count is the next id
//! - `user_actions`: Per-account index of record ids
//!
//! Appends run in a single transaction holding an exclusive lock on
//! `action_records`, so concurrent relays sharing a database still assign dense,
//! unique ids.
mod action_log_repository;

pub use action_log_repository::PostgresActionLogRepository;

/// Embedded schema migrations, applied by [`PostgresActionLogRepository::connect`].
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("src/postgres/migrations");
