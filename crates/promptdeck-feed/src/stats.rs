//! Aggregate counts displayed alongside the feed tabs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use promptdeck_core::types::{Agent, Prompt, Team};

use crate::windows::is_within_days;

/// Headline numbers for the feed: computed from already-fetched state,
/// never from the database.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedStats {
    /// Prompts created within the last 3 days.
    pub new_prompts_count: usize,
    pub forked_prompts_count: usize,
    pub pinned_count: usize,
    pub total_agents: usize,
    pub total_teams: usize,
}

impl FeedStats {
    pub fn compute(
        prompts: &[Prompt],
        pinned: &[Prompt],
        agents: &[Agent],
        teams: &[Team],
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            new_prompts_count: prompts
                .iter()
                .filter(|p| is_within_days(p.created_at, now, 3))
                .count(),
            forked_prompts_count: prompts.iter().filter(|p| p.forked_from.is_some()).count(),
            pinned_count: pinned.len(),
            total_agents: agents.len(),
            total_teams: teams.len(),
        }
    }
}

/// Freshness badge shown on the New tab: created within the last day.
pub fn is_fresh(prompt: &Prompt, now: DateTime<Utc>) -> bool {
    is_within_days(prompt.created_at, now, 1)
}
