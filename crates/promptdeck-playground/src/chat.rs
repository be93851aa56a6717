//! Chat-completions client for the OpenRouter-compatible backend.

use serde::Serialize;
use tracing::debug;

use promptdeck_core::config::PlaygroundConfig;
use promptdeck_core::errors::{DeckError, DeckResult, PlaygroundError};

use crate::protocol::{fallback_error_message, nested_error_message, ChatMessage, ChatResponse};
use crate::transport::{Transport, TransportConfig};

const CHAT_COMPLETIONS_PATH: &str = "/chat/completions";

pub(crate) const DEFAULT_CHAT_TEMPERATURE: f64 = 0.7;
pub(crate) const DEFAULT_CHAT_MAX_TOKENS: u32 = 2048;

/// Caller-facing chat request. Sampling fields left at `None` take the
/// playground defaults (temperature 0.7, 2048 max tokens).
#[derive(Debug, Clone)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub temperature: Option<f64>,
    pub max_tokens: Option<u32>,
}

impl ChatRequest {
    pub fn new(model: impl Into<String>, messages: Vec<ChatMessage>) -> Self {
        Self {
            model: model.into(),
            messages,
            temperature: None,
            max_tokens: None,
        }
    }
}

#[derive(Serialize)]
struct ChatPayload<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    temperature: f64,
    max_tokens: u32,
}

/// Client for the multi-model chat API.
#[derive(Debug, Clone)]
pub struct OpenRouterClient {
    transport: Transport,
    base_url: String,
    api_key: Option<String>,
    referer: Option<String>,
    app_title: String,
}

impl OpenRouterClient {
    pub fn from_config(config: &PlaygroundConfig) -> DeckResult<Self> {
        Ok(Self {
            transport: Transport::new(TransportConfig::from_playground_config(config))?,
            base_url: config.chat_base_url.trim_end_matches('/').to_string(),
            api_key: config.chat_api_key.clone(),
            referer: config.app_referer.clone(),
            app_title: config.app_title.clone(),
        })
    }

    /// Whether a non-empty API key is present. Callers check this before
    /// offering the playground at all.
    pub fn is_configured(&self) -> bool {
        self.api_key.as_deref().is_some_and(|k| !k.is_empty())
    }

    /// Send one chat-completions request.
    pub async fn chat_completion(&self, request: &ChatRequest) -> DeckResult<ChatResponse> {
        let key = self
            .api_key
            .as_deref()
            .filter(|k| !k.is_empty())
            .ok_or_else(|| missing_credential("OpenRouter"))?;

        let payload = ChatPayload {
            model: &request.model,
            messages: &request.messages,
            temperature: request.temperature.unwrap_or(DEFAULT_CHAT_TEMPERATURE),
            max_tokens: request.max_tokens.unwrap_or(DEFAULT_CHAT_MAX_TOKENS),
        };
        let mut headers: Vec<(&'static str, String)> = vec![("X-Title", self.app_title.clone())];
        if let Some(ref referer) = self.referer {
            headers.push(("HTTP-Referer", referer.clone()));
        }

        debug!(model = %request.model, messages = request.messages.len(), "chat completion");
        let url = format!("{}{CHAT_COMPLETIONS_PATH}", self.base_url);
        self.transport
            .post_json(&url, key, &headers, &payload, api_error)
            .await
    }
}

fn api_error(status: u16, body: &str) -> DeckError {
    let message = nested_error_message(body).unwrap_or_else(|| fallback_error_message(body));
    PlaygroundError::ApiError { status, message }.into()
}

pub(crate) fn missing_credential(service: &str) -> DeckError {
    PlaygroundError::MissingCredential {
        service: service.to_string(),
    }
    .into()
}
