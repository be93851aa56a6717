/// Storage-layer errors for SQLite operations.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("SQLite error: {message}")]
    SqliteError { message: String },

    #[error("schema initialization failed: {reason}")]
    SchemaInitFailed { reason: String },

    #[error("seeding initial data failed: {reason}")]
    SeedFailed { reason: String },

    #[error("read pool lock poisoned: {details}")]
    PoolPoisoned { details: String },
}
