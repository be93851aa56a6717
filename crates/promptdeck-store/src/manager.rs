//! `DataStore` — the process-wide state container.
//!
//! Explicit service object handed to whoever needs state; nothing here is
//! global. Writes go to the gateway first, then the affected collection is
//! re-fetched, so snapshots never contain optimistic local edits.

use std::sync::Arc;

use tokio::sync::{Mutex, RwLock};
use tracing::{info, warn};

use promptdeck_core::errors::{DeckError, DeckResult};
use promptdeck_core::types::{Prompt, PromptDraft, Team};
use promptdeck_storage::StorageGateway;

use crate::state::StoreState;

/// Initialize-once cache of the database, refreshed collection-by-collection
/// after each write.
pub struct DataStore {
    gateway: Arc<StorageGateway>,
    state: RwLock<StoreState>,
    /// Serializes `initialize` so concurrent callers cannot double-seed.
    init_lock: Mutex<()>,
}

impl DataStore {
    pub fn new(gateway: Arc<StorageGateway>) -> Self {
        Self {
            gateway,
            state: RwLock::new(StoreState::default()),
            init_lock: Mutex::new(()),
        }
    }

    /// Prepare the schema, seed an empty database, and load all
    /// collections. Safe to call repeatedly; only the first call does work.
    /// On failure the error is also recorded in the state for display.
    pub async fn initialize(&self) -> DeckResult<()> {
        let _guard = self.init_lock.lock().await;
        if self.state.read().await.is_initialized {
            return Ok(());
        }

        {
            let mut state = self.state.write().await;
            state.is_loading = true;
            state.error = None;
        }

        let setup = async {
            self.gateway.ensure_schema().await?;
            let seeded = self.gateway.seed_if_empty().await?;
            Ok::<bool, DeckError>(seeded)
        }
        .await;
        if let Err(e) = setup {
            warn!(error = %e, "store initialization failed");
            let mut state = self.state.write().await;
            state.error = Some("Failed to connect to database".to_string());
            state.is_loading = false;
            return Err(e);
        }

        tokio::join!(
            self.refresh_prompts(),
            self.refresh_agents(),
            self.refresh_teams(),
            self.refresh_pinned()
        );

        let mut state = self.state.write().await;
        state.is_initialized = true;
        state.is_loading = false;
        info!(
            users = state.users.len(),
            prompts = state.prompts.len(),
            agents = state.agents.len(),
            teams = state.teams.len(),
            "data store initialized"
        );
        Ok(())
    }

    /// Cloned snapshot of the current state.
    pub async fn snapshot(&self) -> StoreState {
        self.state.read().await.clone()
    }

    pub async fn is_initialized(&self) -> bool {
        self.state.read().await.is_initialized
    }

    // --- collection refreshes ---
    // A failed refresh keeps the previous snapshot and logs; the store
    // degrades to stale data rather than erroring the caller.

    pub async fn refresh_prompts(&self) {
        let fetched = tokio::try_join!(self.gateway.fetch_users(), self.gateway.fetch_prompts());
        match fetched {
            Ok((users, prompts)) => {
                let mut state = self.state.write().await;
                state.users = users;
                state.prompts = prompts;
            }
            Err(e) => warn!(error = %e, "failed to fetch prompts"),
        }
    }

    pub async fn refresh_agents(&self) {
        match self.gateway.fetch_agents().await {
            Ok(agents) => self.state.write().await.agents = agents,
            Err(e) => warn!(error = %e, "failed to fetch agents"),
        }
    }

    pub async fn refresh_teams(&self) {
        match self.gateway.fetch_teams().await {
            Ok(teams) => self.state.write().await.teams = teams,
            Err(e) => warn!(error = %e, "failed to fetch teams"),
        }
    }

    pub async fn refresh_pinned(&self) {
        match self.gateway.fetch_pinned().await {
            Ok(pinned) => self.state.write().await.pinned_prompts = pinned,
            Err(e) => warn!(error = %e, "failed to fetch pinned prompts"),
        }
    }

    // --- mutations ---

    /// Create a prompt, re-fetch, and return it as the database now sees
    /// it. `None` means the write landed but the re-fetch could not
    /// confirm it.
    pub async fn create_prompt(
        &self,
        draft: &PromptDraft,
        author_id: &str,
    ) -> DeckResult<Option<Prompt>> {
        let id = self.gateway.create_prompt(draft, author_id).await?;
        self.refresh_prompts().await;
        let state = self.state.read().await;
        Ok(state.prompts.iter().find(|p| p.id == id).cloned())
    }

    pub async fn pin_prompt(&self, prompt_id: &str, user_id: &str) -> DeckResult<()> {
        self.gateway.pin_prompt(prompt_id, user_id).await?;
        self.refresh_pinned().await;
        Ok(())
    }

    pub async fn unpin_prompt(&self, prompt_id: &str, user_id: &str) -> DeckResult<()> {
        self.gateway.unpin_prompt(prompt_id, user_id).await?;
        self.refresh_pinned().await;
        Ok(())
    }

    pub async fn join_team(&self, team_id: &str, user_id: &str) -> DeckResult<()> {
        self.gateway.join_team(team_id, user_id).await?;
        self.refresh_teams().await;
        Ok(())
    }

    /// Create a team and return it with its owner membership aggregated.
    pub async fn create_team(
        &self,
        name: &str,
        description: &str,
        creator_id: &str,
    ) -> DeckResult<Option<Team>> {
        let id = self.gateway.create_team(name, description, creator_id).await?;
        self.refresh_teams().await;
        let state = self.state.read().await;
        Ok(state.teams.iter().find(|t| t.id == id).cloned())
    }
}
