//! Codestral client: fill-in-the-middle code completion plus a chat
//! endpoint with the same wire shape as the general chat API.

use serde::Serialize;
use tracing::debug;

use promptdeck_core::config::PlaygroundConfig;
use promptdeck_core::errors::{DeckError, DeckResult, PlaygroundError};

use crate::chat::{missing_credential, DEFAULT_CHAT_MAX_TOKENS, DEFAULT_CHAT_TEMPERATURE};
use crate::protocol::{fallback_error_message, flat_error_message, ChatMessage, ChatResponse, FimResponse};
use crate::transport::{Transport, TransportConfig};

const FIM_COMPLETIONS_PATH: &str = "/fim/completions";
const CHAT_COMPLETIONS_PATH: &str = "/chat/completions";

pub(crate) const DEFAULT_CODESTRAL_MODEL: &str = "codestral-latest";
pub(crate) const DEFAULT_FIM_TEMPERATURE: f64 = 0.2;
pub(crate) const DEFAULT_FIM_MAX_TOKENS: u32 = 256;

fn default_fim_stop() -> Vec<String> {
    vec!["\n\n".to_string(), "```".to_string()]
}

/// Fill-in-the-middle request: code before the cursor, optionally after.
/// Unset fields take the completion defaults (codestral-latest, 0.2, 256
/// tokens, stop on blank line or code fence).
#[derive(Debug, Clone, Default)]
pub struct FimRequest {
    pub prompt: String,
    pub suffix: Option<String>,
    pub model: Option<String>,
    pub temperature: Option<f64>,
    pub max_tokens: Option<u32>,
    pub stop: Option<Vec<String>>,
}

impl FimRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            ..Default::default()
        }
    }
}

/// Chat request for the Codestral chat endpoint; the model is optional and
/// defaults to codestral-latest.
#[derive(Debug, Clone)]
pub struct CodestralChatRequest {
    pub messages: Vec<ChatMessage>,
    pub model: Option<String>,
    pub temperature: Option<f64>,
    pub max_tokens: Option<u32>,
}

impl CodestralChatRequest {
    pub fn new(messages: Vec<ChatMessage>) -> Self {
        Self {
            messages,
            model: None,
            temperature: None,
            max_tokens: None,
        }
    }
}

#[derive(Serialize)]
struct FimPayload<'a> {
    model: &'a str,
    prompt: &'a str,
    suffix: &'a str,
    temperature: f64,
    max_tokens: u32,
    stop: &'a [String],
}

#[derive(Serialize)]
struct CodestralChatPayload<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    temperature: f64,
    max_tokens: u32,
}

/// Client for the Codestral code-completion API.
#[derive(Debug, Clone)]
pub struct CodestralClient {
    transport: Transport,
    base_url: String,
    api_key: Option<String>,
}

impl CodestralClient {
    pub fn from_config(config: &PlaygroundConfig) -> DeckResult<Self> {
        Ok(Self {
            transport: Transport::new(TransportConfig::from_playground_config(config))?,
            base_url: config.fim_base_url.trim_end_matches('/').to_string(),
            api_key: config.fim_api_key.clone(),
        })
    }

    /// Whether a non-empty API key is present.
    pub fn is_configured(&self) -> bool {
        self.api_key.as_deref().is_some_and(|k| !k.is_empty())
    }

    /// Complete code at the cursor position.
    pub async fn code_completion(&self, request: &FimRequest) -> DeckResult<FimResponse> {
        let key = self.require_key()?;

        let stop = request.stop.clone().unwrap_or_else(default_fim_stop);
        let payload = FimPayload {
            model: request.model.as_deref().unwrap_or(DEFAULT_CODESTRAL_MODEL),
            prompt: &request.prompt,
            suffix: request.suffix.as_deref().unwrap_or(""),
            temperature: request.temperature.unwrap_or(DEFAULT_FIM_TEMPERATURE),
            max_tokens: request.max_tokens.unwrap_or(DEFAULT_FIM_MAX_TOKENS),
            stop: &stop,
        };

        debug!(prompt_len = request.prompt.len(), "fim completion");
        let url = format!("{}{FIM_COMPLETIONS_PATH}", self.base_url);
        self.transport
            .post_json(&url, key, &[], &payload, api_error)
            .await
    }

    /// Chat with Codestral (same response shape as the general chat API).
    pub async fn chat_completion(&self, request: &CodestralChatRequest) -> DeckResult<ChatResponse> {
        let key = self.require_key()?;

        let payload = CodestralChatPayload {
            model: request.model.as_deref().unwrap_or(DEFAULT_CODESTRAL_MODEL),
            messages: &request.messages,
            temperature: request.temperature.unwrap_or(DEFAULT_CHAT_TEMPERATURE),
            max_tokens: request.max_tokens.unwrap_or(DEFAULT_CHAT_MAX_TOKENS),
        };

        debug!(messages = request.messages.len(), "codestral chat completion");
        let url = format!("{}{CHAT_COMPLETIONS_PATH}", self.base_url);
        self.transport
            .post_json(&url, key, &[], &payload, api_error)
            .await
    }

    fn require_key(&self) -> DeckResult<&str> {
        self.api_key
            .as_deref()
            .filter(|k| !k.is_empty())
            .ok_or_else(|| missing_credential("Codestral"))
    }
}

fn api_error(status: u16, body: &str) -> DeckError {
    let message = flat_error_message(body).unwrap_or_else(|| fallback_error_message(body));
    PlaygroundError::ApiError { status, message }.into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fim_payload_applies_completion_defaults() {
        let request = FimRequest::new("fn main() {");
        let stop = request.stop.clone().unwrap_or_else(default_fim_stop);
        let payload = FimPayload {
            model: request.model.as_deref().unwrap_or(DEFAULT_CODESTRAL_MODEL),
            prompt: &request.prompt,
            suffix: request.suffix.as_deref().unwrap_or(""),
            temperature: request.temperature.unwrap_or(DEFAULT_FIM_TEMPERATURE),
            max_tokens: request.max_tokens.unwrap_or(DEFAULT_FIM_MAX_TOKENS),
            stop: &stop,
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["model"], "codestral-latest");
        assert_eq!(json["suffix"], "");
        assert_eq!(json["temperature"], 0.2);
        assert_eq!(json["max_tokens"], 256);
        assert_eq!(json["stop"][0], "\n\n");
        assert_eq!(json["stop"][1], "```");
    }

    #[test]
    fn api_error_prefers_flat_provider_message() {
        let err = api_error(422, r#"{"message":"prompt too long"}"#);
        assert_eq!(err.to_string(), "API error 422: prompt too long");
    }
}
