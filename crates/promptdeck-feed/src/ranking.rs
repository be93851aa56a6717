//! Engagement-based scoring for prompts and agents.

use chrono::{DateTime, Utc};

use promptdeck_core::types::{Agent, Prompt};

use crate::windows::is_within_days;

/// Weights for the trending score factors.
#[derive(Debug, Clone)]
pub struct TrendingWeights {
    pub rating: f64,
    pub forks: f64,
    pub comments: f64,
    pub bookmarks: f64,
    /// Flat bonus for prompts created within the last 3 days.
    pub recent_bonus: f64,
    /// Flat bonus for prompts created within the last 7 days.
    pub week_bonus: f64,
}

impl Default for TrendingWeights {
    fn default() -> Self {
        Self {
            rating: 100.0,
            forks: 3.0,
            comments: 2.0,
            bookmarks: 1.0,
            recent_bonus: 500.0,
            week_bonus: 200.0,
        }
    }
}

/// Trending score with the default weights.
pub fn trending_score(prompt: &Prompt, now: DateTime<Utc>) -> f64 {
    trending_score_with(prompt, now, &TrendingWeights::default())
}

/// Trending score: weighted engagement plus a tiered recency bonus.
/// The 3-day bonus wins over the 7-day bonus; older prompts get none.
pub fn trending_score_with(prompt: &Prompt, now: DateTime<Utc>, weights: &TrendingWeights) -> f64 {
    let recency_bonus = if is_within_days(prompt.created_at, now, 3) {
        weights.recent_bonus
    } else if is_within_days(prompt.created_at, now, 7) {
        weights.week_bonus
    } else {
        0.0
    };

    prompt.rating_score * weights.rating
        + prompt.fork_count as f64 * weights.forks
        + prompt.comment_count as f64 * weights.comments
        + prompt.bookmark_count as f64 * weights.bookmarks
        + recency_bonus
}

/// Prominence score for the agents tab: rating dominates, adoption breaks
/// near-ties.
pub fn agent_prominence(agent: &Agent) -> f64 {
    agent.performance_rating * 1000.0 + (agent.usage_count + agent.followers) as f64
}
