//! Feed tab views. Each builder returns a freshly ordered copy of its
//! input; sorts are stable, so equal-score entries keep their incoming
//! (storage) order.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use promptdeck_core::errors::{DeckError, DeckResult};
use promptdeck_core::types::{Agent, Prompt, Team};

use crate::ranking::{agent_prominence, trending_score};
use crate::windows::is_within_days;

/// The six feed tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedTab {
    Trending,
    New,
    Pinned,
    Agents,
    Teams,
    Forked,
}

impl FeedTab {
    pub const ALL: [FeedTab; 6] = [
        FeedTab::Trending,
        FeedTab::New,
        FeedTab::Pinned,
        FeedTab::Agents,
        FeedTab::Teams,
        FeedTab::Forked,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FeedTab::Trending => "trending",
            FeedTab::New => "new",
            FeedTab::Pinned => "pinned",
            FeedTab::Agents => "agents",
            FeedTab::Teams => "teams",
            FeedTab::Forked => "forked",
        }
    }
}

impl fmt::Display for FeedTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FeedTab {
    type Err = DeckError;

    fn from_str(s: &str) -> DeckResult<Self> {
        match s {
            "trending" => Ok(FeedTab::Trending),
            "new" => Ok(FeedTab::New),
            "pinned" => Ok(FeedTab::Pinned),
            "agents" => Ok(FeedTab::Agents),
            "teams" => Ok(FeedTab::Teams),
            "forked" => Ok(FeedTab::Forked),
            other => Err(DeckError::ConfigError(format!("unknown feed tab: {other}"))),
        }
    }
}

fn by_score_desc(a: f64, b: f64) -> Ordering {
    b.partial_cmp(&a).unwrap_or(Ordering::Equal)
}

/// All prompts by descending trending score.
pub fn trending_prompts(prompts: &[Prompt], now: DateTime<Utc>) -> Vec<Prompt> {
    let mut out = prompts.to_vec();
    out.sort_by(|a, b| by_score_desc(trending_score(a, now), trending_score(b, now)));
    out
}

/// Prompts created within the last 7 days, newest first.
pub fn new_prompts(prompts: &[Prompt], now: DateTime<Utc>) -> Vec<Prompt> {
    let mut out: Vec<Prompt> = prompts
        .iter()
        .filter(|p| is_within_days(p.created_at, now, 7))
        .cloned()
        .collect();
    out.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    out
}

/// The pinned showcase in storage order (already rating-sorted and capped
/// by the gateway).
pub fn pinned_prompts(pinned: &[Prompt]) -> Vec<Prompt> {
    pinned.to_vec()
}

/// All agents by descending prominence.
pub fn ranked_agents(agents: &[Agent]) -> Vec<Agent> {
    let mut out = agents.to_vec();
    out.sort_by(|a, b| by_score_desc(agent_prominence(a), agent_prominence(b)));
    out
}

/// All teams by descending member count.
pub fn ranked_teams(teams: &[Team]) -> Vec<Team> {
    let mut out = teams.to_vec();
    out.sort_by(|a, b| b.member_count.cmp(&a.member_count));
    out
}

/// Prompts that were forked from another prompt, best-rated first.
pub fn forked_prompts(prompts: &[Prompt]) -> Vec<Prompt> {
    let mut out: Vec<Prompt> = prompts
        .iter()
        .filter(|p| p.forked_from.is_some())
        .cloned()
        .collect();
    out.sort_by(|a, b| by_score_desc(a.rating_score, b.rating_score));
    out
}
