use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::defaults;

/// Auth store configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// Path of the serialized credential blob.
    pub store_path: PathBuf,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            store_path: PathBuf::from(defaults::DEFAULT_AUTH_STORE_FILENAME),
        }
    }
}
