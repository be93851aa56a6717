//! Per-subsystem configuration with TOML loading and env overrides.
//!
//! Every field has a default except the database path, which must be
//! injected (TOML, env, or construction) — its absence is a startup error
//! raised by whichever component opens the database.

pub mod auth_config;
pub mod defaults;
pub mod observability_config;
pub mod playground_config;
pub mod storage_config;

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

pub use auth_config::AuthConfig;
pub use observability_config::ObservabilityConfig;
pub use playground_config::PlaygroundConfig;
pub use storage_config::StorageConfig;

/// Env var carrying the database path.
pub const ENV_DB_PATH: &str = "PROMPTDECK_DB_PATH";
/// Env var carrying the chat-completions API key.
pub const ENV_CHAT_API_KEY: &str = "PROMPTDECK_OPENROUTER_KEY";
/// Env var carrying the FIM API key.
pub const ENV_FIM_API_KEY: &str = "PROMPTDECK_CODESTRAL_KEY";

/// Top-level configuration for the whole workspace.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DeckConfig {
    pub storage: StorageConfig,
    pub playground: PlaygroundConfig,
    pub auth: AuthConfig,
    pub observability: ObservabilityConfig,
}

impl DeckConfig {
    /// Parse a configuration from a TOML string. Missing sections and
    /// fields fall back to defaults.
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(toml_str)
    }

    /// Parse a TOML string, then layer env vars on top.
    pub fn from_toml_with_env(toml_str: &str) -> Result<Self, toml::de::Error> {
        let mut config = Self::from_toml(toml_str)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Overlay `PROMPTDECK_*` env vars onto this configuration.
    /// Set vars win over file values; unset vars leave them untouched.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(path) = std::env::var(ENV_DB_PATH) {
            if !path.is_empty() {
                self.storage.db_path = Some(PathBuf::from(path));
            }
        }
        if let Ok(key) = std::env::var(ENV_CHAT_API_KEY) {
            if !key.is_empty() {
                self.playground.chat_api_key = Some(key);
            }
        }
        if let Ok(key) = std::env::var(ENV_FIM_API_KEY) {
            if !key.is_empty() {
                self.playground.fim_api_key = Some(key);
            }
        }
    }
}
