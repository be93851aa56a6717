use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::user::User;

/// The four named rating counters voters can increment on a prompt.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatingSignals {
    pub works_as_claimed: i64,
    pub reusable: i64,
    pub structured: i64,
    pub agent_ready: i64,
}

/// A shared prompt. The central entity of the platform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prompt {
    /// UUID v4 identifier (seed rows use short fixed ids).
    pub id: String,
    pub title: String,
    /// Free text, the prompt body itself.
    pub content: String,
    /// Shared reference; falls back to `User::placeholder` when the
    /// author row is missing.
    pub author: User,
    pub tags: Vec<String>,
    pub techniques_used: Vec<String>,
    pub model_targets: Vec<String>,
    /// Denormalized aggregate of the rating signals, 0.0–5.0.
    pub rating_score: f64,
    pub rating_signals: RatingSignals,
    pub fork_count: i64,
    pub comment_count: i64,
    pub bookmark_count: i64,
    /// Parent prompt id when this prompt was forked from another.
    /// Not validated against existing ids and cycles are not prevented;
    /// consumers only ever test for presence.
    pub forked_from: Option<String>,
    /// True while at least one pin row exists for this prompt.
    pub is_pinned: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Caller-supplied fields for a prompt insert. Counters, rating, and
/// timestamps start at their column defaults.
#[derive(Debug, Clone, Default)]
pub struct PromptDraft {
    pub title: String,
    pub content: String,
    pub tags: Vec<String>,
    pub techniques_used: Vec<String>,
    pub model_targets: Vec<String>,
    pub forked_from: Option<String>,
}

/// Join entity: one user pinning one prompt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PinnedPrompt {
    pub user_id: String,
    pub prompt_id: String,
    pub pinned_at: DateTime<Utc>,
}
