use serde::{Deserialize, Serialize};

use super::defaults;

/// Chat playground configuration. Both API keys are absent by default;
/// clients expose `is_configured()` so callers can check before dispatch.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaygroundConfig {
    /// Bearer credential for the general chat-completions API.
    pub chat_api_key: Option<String>,
    /// Bearer credential for the FIM code-completion API.
    pub fim_api_key: Option<String>,
    /// Base URL of the general chat-completions API.
    pub chat_base_url: String,
    /// Base URL of the FIM code-completion API.
    pub fim_base_url: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
    /// Maximum number of retry attempts for 5xx/transport failures.
    pub max_retries: u32,
    /// Initial backoff in milliseconds (doubles each retry).
    pub initial_backoff_ms: u64,
    /// Backoff ceiling in seconds.
    pub max_backoff_secs: u64,
    /// Origin advertised in the `Referer` header, if any.
    pub app_referer: Option<String>,
    /// Application name advertised in the `X-Title` header.
    pub app_title: String,
}

impl Default for PlaygroundConfig {
    fn default() -> Self {
        Self {
            chat_api_key: None,
            fim_api_key: None,
            chat_base_url: defaults::DEFAULT_CHAT_BASE_URL.to_string(),
            fim_base_url: defaults::DEFAULT_FIM_BASE_URL.to_string(),
            timeout_secs: defaults::DEFAULT_HTTP_TIMEOUT_SECS,
            max_retries: defaults::DEFAULT_MAX_RETRIES,
            initial_backoff_ms: defaults::DEFAULT_INITIAL_BACKOFF_MS,
            max_backoff_secs: defaults::DEFAULT_MAX_BACKOFF_SECS,
            app_referer: None,
            app_title: defaults::DEFAULT_APP_TITLE.to_string(),
        }
    }
}
