use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::user::User;

/// A collaborative team.
///
/// `member_count` and `prompt_count` are query-time aggregates computed by
/// the gateway on every fetch; `members` is a capped preview subset, so
/// `member_count` may exceed `members.len()`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub id: String,
    pub name: String,
    pub description: String,
    pub avatar: String,
    pub members: Vec<User>,
    pub member_count: i64,
    /// Prompts authored by current members.
    pub prompt_count: i64,
    pub created_at: DateTime<Utc>,
}
