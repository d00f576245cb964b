//! # Actions Relay Repository
//! This crate provides the storage layer of the action log: an append-only
//! sequence of records plus a per-account index of record ids. It includes the
//! error types, the repository trait, and two implementations, one in memory and
//! one backed by PostgreSQL.
pub mod errors;
pub mod interfaces;
pub mod memory;
pub mod postgres;

pub use errors::ActionLogRepositoryError;
pub use interfaces::ActionLogRepository;
pub use memory::InMemoryActionLogRepository;
pub use postgres::PostgresActionLogRepository;
