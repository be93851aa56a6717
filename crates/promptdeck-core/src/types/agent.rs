use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::user::User;

/// A named, ordered chain of prompt references representing a reusable
/// workflow. The agent composes prompts, it does not own them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Agent {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Shared reference; falls back to `User::placeholder` when missing.
    pub creator: User,
    pub avatar: String,
    /// Ordered prompt ids executed in sequence.
    pub prompt_chain: Vec<String>,
    pub performance_rating: f64,
    pub usage_count: i64,
    pub followers: i64,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
}
