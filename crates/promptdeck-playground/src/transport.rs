//! HTTP transport with retry, exponential backoff, timeout, and gzip.
//!
//! Retries cover server errors and transport failures only; client errors
//! fail fast so credential and validation problems surface immediately.

use std::time::Duration;

use serde::{de::DeserializeOwned, Serialize};
use tracing::debug;

use promptdeck_core::config::PlaygroundConfig;
use promptdeck_core::errors::{DeckError, DeckResult, PlaygroundError};

/// Configuration for the transport layer.
#[derive(Debug, Clone)]
pub struct TransportConfig {
    /// Request timeout.
    pub timeout: Duration,
    /// Maximum number of retry attempts.
    pub max_retries: u32,
    /// Initial backoff duration (doubles each retry).
    pub initial_backoff: Duration,
    /// Maximum backoff duration.
    pub max_backoff: Duration,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            max_retries: 3,
            initial_backoff: Duration::from_millis(500),
            max_backoff: Duration::from_secs(30),
        }
    }
}

impl TransportConfig {
    pub fn from_playground_config(config: &PlaygroundConfig) -> Self {
        Self {
            timeout: Duration::from_secs(config.timeout_secs),
            max_retries: config.max_retries,
            initial_backoff: Duration::from_millis(config.initial_backoff_ms),
            max_backoff: Duration::from_secs(config.max_backoff_secs),
        }
    }
}

/// Convert a transport failure into the workspace error type.
pub(crate) fn net_err(reason: String) -> DeckError {
    PlaygroundError::NetworkError { reason }.into()
}

/// Retrying JSON-over-HTTP client shared by both playground backends.
#[derive(Debug, Clone)]
pub struct Transport {
    client: reqwest::Client,
    config: TransportConfig,
}

impl Transport {
    pub fn new(config: TransportConfig) -> DeckResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .gzip(true)
            .build()
            .map_err(|e| net_err(e.to_string()))?;
        Ok(Self { client, config })
    }

    /// POST a JSON payload with retry and backoff. `api_error` converts a
    /// 4xx status plus response body into the service's surfaced error.
    pub(crate) async fn post_json<Req, Resp, E>(
        &self,
        url: &str,
        bearer: &str,
        extra_headers: &[(&'static str, String)],
        payload: &Req,
        api_error: E,
    ) -> DeckResult<Resp>
    where
        Req: Serialize,
        Resp: DeserializeOwned,
        E: Fn(u16, &str) -> DeckError,
    {
        let mut backoff = self.config.initial_backoff;
        let mut last_err = String::new();

        for attempt in 0..=self.config.max_retries {
            if attempt > 0 {
                debug!(
                    attempt,
                    max = self.config.max_retries,
                    backoff_ms = backoff.as_millis() as u64,
                    "retrying playground request"
                );
                tokio::time::sleep(backoff).await;
                backoff = (backoff * 2).min(self.config.max_backoff);
            }

            let mut req = self.client.post(url).bearer_auth(bearer).json(payload);
            for (name, value) in extra_headers {
                req = req.header(*name, value);
            }

            match req.send().await {
                Ok(resp) => {
                    let status = resp.status();
                    if status.is_success() {
                        return resp.json::<Resp>().await.map_err(|e| {
                            PlaygroundError::MalformedResponse {
                                reason: e.to_string(),
                            }
                            .into()
                        });
                    }
                    if status.is_client_error() {
                        let body = resp.text().await.unwrap_or_default();
                        return Err(api_error(status.as_u16(), &body));
                    }
                    last_err = format!("HTTP {status}");
                }
                Err(e) => {
                    last_err = e.to_string();
                }
            }
        }

        Err(net_err(format!(
            "all {} retries exhausted: {last_err}",
            self.config.max_retries
        )))
    }
}
