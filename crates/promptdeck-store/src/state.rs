//! Snapshot of everything the feed needs, plus lifecycle flags.

use serde::{Deserialize, Serialize};

use promptdeck_core::types::{Agent, Prompt, Team, User};

/// The container's cached view of the database.
///
/// Collections arrive in gateway order (prompts newest first, agents by
/// rating, teams by member count, pinned by rating). `error` carries the
/// last initialization failure for display; fetch-level failures only log.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoreState {
    pub users: Vec<User>,
    pub prompts: Vec<Prompt>,
    pub agents: Vec<Agent>,
    pub teams: Vec<Team>,
    pub pinned_prompts: Vec<Prompt>,
    pub is_loading: bool,
    pub is_initialized: bool,
    pub error: Option<String>,
}
