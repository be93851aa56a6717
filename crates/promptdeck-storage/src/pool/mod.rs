//! Connection pool managing read/write connections.

pub mod pragmas;
pub mod read_pool;
pub mod write_connection;

use std::path::Path;
use std::sync::Arc;

use promptdeck_core::errors::DeckResult;

pub use read_pool::ReadPool;
pub use write_connection::WriteConnection;

/// Manages the single write connection and the read connection pool.
///
/// Writer and readers are wrapped in `Arc` so the gateway can hand them to
/// concurrent fetches without opening duplicate connections.
#[derive(Debug)]
pub struct ConnectionPool {
    pub writer: Arc<WriteConnection>,
    pub readers: Arc<ReadPool>,
}

impl ConnectionPool {
    /// Open a connection pool for the given database file.
    pub fn open(path: &Path, read_pool_size: usize) -> DeckResult<Self> {
        let writer = Arc::new(WriteConnection::open(path)?);
        let readers = Arc::new(ReadPool::open(path, read_pool_size)?);
        Ok(Self { writer, readers })
    }

    /// Open an in-memory connection pool (for testing).
    /// Note: In-memory mode uses separate databases for writer and readers,
    /// so readers won't see writer's changes. The gateway routes reads
    /// through the writer in this mode.
    pub fn open_in_memory(read_pool_size: usize) -> DeckResult<Self> {
        let writer = Arc::new(WriteConnection::open_in_memory()?);
        let readers = Arc::new(ReadPool::open_in_memory(read_pool_size)?);
        Ok(Self { writer, readers })
    }
}
