//! # promptdeck-storage
//!
//! SQLite gateway for the platform entities. Parameterized statements only,
//! idempotent schema initialization, seed-if-empty, and row→entity
//! translation with placeholder-author fallback.
//!
//! ## Modules
//!
//! - `engine` — `StorageGateway` owning the connection pool
//! - `pool` — single async-mutexed writer + round-robin read pool
//! - `schema` — create-if-absent table definitions
//! - `seed` — fixed initial dataset, insert-or-ignore
//! - `queries` — per-table operations and row mapping

pub mod engine;
pub mod pool;
pub mod queries;
pub mod schema;
pub mod seed;

pub use engine::StorageGateway;
pub use pool::{ConnectionPool, ReadPool, WriteConnection};

use promptdeck_core::errors::{DeckError, StorageError};

/// Convert a low-level SQLite message into the workspace error type.
pub(crate) fn to_storage_err(message: String) -> DeckError {
    StorageError::SqliteError { message }.into()
}
