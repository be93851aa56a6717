use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A platform user. Shared by reference across `Prompt.author`,
/// `Agent.creator`, and `Team.members`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    /// Unique within the system.
    pub handle: String,
    pub name: String,
    pub avatar: String,
    pub bio: String,
    /// Reputation score, 0–100.
    pub credibility_score: i64,
    pub followers: i64,
    pub following: i64,
    /// Denormalized: incremented alongside each prompt insert.
    pub created_prompts: i64,
    pub created_agents: i64,
    pub joined_at: DateTime<Utc>,
}

impl User {
    /// Well-known stand-in for a dangling author/creator reference.
    /// Keeps the id from the foreign key so the source row stays traceable;
    /// rendering never fails on a missing user row.
    pub fn placeholder(id: &str) -> Self {
        Self {
            id: id.to_string(),
            handle: "unknown".to_string(),
            name: "Unknown User".to_string(),
            avatar: "https://api.dicebear.com/7.x/avataaars/svg?seed=unknown".to_string(),
            bio: String::new(),
            credibility_score: 0,
            followers: 0,
            following: 0,
            created_prompts: 0,
            created_agents: 0,
            joined_at: Utc::now(),
        }
    }
}
