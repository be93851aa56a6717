//! Error taxonomy. Per-subsystem enums aggregated into `DeckError`;
//! every fallible API in the workspace returns `DeckResult<T>`.

mod auth_error;
mod playground_error;
mod storage_error;

pub use auth_error::AuthError;
pub use playground_error::PlaygroundError;
pub use storage_error::StorageError;

/// Workspace-wide error type.
#[derive(Debug, thiserror::Error)]
pub enum DeckError {
    #[error("prompt not found: {id}")]
    PromptNotFound { id: String },

    #[error("team not found: {id}")]
    TeamNotFound { id: String },

    #[error("user not found: {id}")]
    UserNotFound { id: String },

    #[error("configuration error: {0}")]
    ConfigError(String),

    #[error(transparent)]
    StorageError(#[from] StorageError),

    #[error(transparent)]
    PlaygroundError(#[from] PlaygroundError),

    #[error(transparent)]
    AuthError(#[from] AuthError),

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

/// Convenience alias used across all promptdeck crates.
pub type DeckResult<T> = Result<T, DeckError>;
