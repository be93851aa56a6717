//! Wire types shared by both playground backends.

use serde::{Deserialize, Serialize};

/// One chat turn. Roles are `system`, `user`, or `assistant`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: "assistant".to_string(),
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatChoice {
    pub message: ChatMessage,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Usage {
    #[serde(default)]
    pub prompt_tokens: u32,
    #[serde(default)]
    pub completion_tokens: u32,
    #[serde(default)]
    pub total_tokens: u32,
}

/// Chat-completions response (identical shape on both backends).
#[derive(Debug, Clone, Deserialize)]
pub struct ChatResponse {
    pub id: String,
    pub model: String,
    pub choices: Vec<ChatChoice>,
    #[serde(default)]
    pub usage: Option<Usage>,
}

impl ChatResponse {
    /// Content of the first choice, when present.
    pub fn first_content(&self) -> Option<&str> {
        self.choices.first().map(|c| c.message.content.as_str())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct FimChoice {
    pub text: String,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

/// Fill-in-the-middle completion response.
#[derive(Debug, Clone, Deserialize)]
pub struct FimResponse {
    pub id: String,
    pub model: String,
    pub choices: Vec<FimChoice>,
    #[serde(default)]
    pub usage: Option<Usage>,
}

impl FimResponse {
    /// Completion text of the first choice, when present.
    pub fn first_text(&self) -> Option<&str> {
        self.choices.first().map(|c| c.text.as_str())
    }
}

// Error bodies differ per backend: OpenRouter nests the message under
// `error`, Mistral puts it at the top level.

#[derive(Debug, Default, Deserialize)]
pub(crate) struct NestedErrorBody {
    #[serde(default)]
    pub error: Option<NestedErrorDetail>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct NestedErrorDetail {
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct FlatErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

/// Best-effort extraction of a nested `error.message` field.
pub(crate) fn nested_error_message(body: &str) -> Option<String> {
    serde_json::from_str::<NestedErrorBody>(body)
        .ok()
        .and_then(|b| b.error)
        .and_then(|d| d.message)
}

/// Best-effort extraction of a top-level `message` field.
pub(crate) fn flat_error_message(body: &str) -> Option<String> {
    serde_json::from_str::<FlatErrorBody>(body)
        .ok()
        .and_then(|b| b.message)
}

/// Fallback error text when the body carries no recognizable message.
pub(crate) fn fallback_error_message(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        "no error body".to_string()
    } else {
        let mut snippet: String = trimmed.chars().take(200).collect();
        if snippet.len() < trimmed.len() {
            snippet.push_str("...");
        }
        snippet
    }
}
