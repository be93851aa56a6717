//! Storage gateway: the single owner of the SQLite database.
//!
//! All access goes through [`StorageGateway`]. Writes are serialized on one
//! connection; reads fan out over a small read-only pool. Opening the
//! gateway does not touch the schema; callers run [`ensure_schema`] and
//! [`seed_if_empty`] explicitly during startup.
//!
//! [`ensure_schema`]: StorageGateway::ensure_schema
//! [`seed_if_empty`]: StorageGateway::seed_if_empty

use std::path::Path;

use rusqlite::Connection;
use tracing::{debug, info};

use promptdeck_core::config::StorageConfig;
use promptdeck_core::errors::{DeckError, DeckResult};
use promptdeck_core::types::{Agent, PinnedPrompt, Prompt, PromptDraft, Team, User};

use crate::pool::{ConnectionPool, ReadPool};
use crate::queries::{agent_ops, pin_ops, prompt_ops, team_ops, user_ops};
use crate::{schema, seed};

/// Async gateway over the prompts database.
#[derive(Debug)]
pub struct StorageGateway {
    pool: ConnectionPool,
    /// In-memory pools have isolated reader databases, so reads route
    /// through the writer when this is false.
    use_read_pool: bool,
}

impl StorageGateway {
    /// Open the gateway from configuration. The database path is required;
    /// there is no compiled-in fallback.
    pub fn from_config(config: &StorageConfig) -> DeckResult<Self> {
        let path = config.db_path.as_deref().ok_or_else(|| {
            DeckError::ConfigError("storage.db_path is required and has no default".to_string())
        })?;
        Self::open_with_pool_size(path, config.read_pool_size)
    }

    /// Open the gateway for the given database file with the default read
    /// pool size.
    pub fn open(path: &Path) -> DeckResult<Self> {
        Self::open_with_pool_size(path, ReadPool::default_size())
    }

    fn open_with_pool_size(path: &Path, read_pool_size: usize) -> DeckResult<Self> {
        let pool = ConnectionPool::open(path, read_pool_size)?;
        info!(
            path = %path.display(),
            read_pool = pool.readers.size(),
            "storage gateway opened"
        );
        Ok(Self {
            pool,
            use_read_pool: true,
        })
    }

    /// Open an in-memory gateway (for testing).
    pub fn open_in_memory() -> DeckResult<Self> {
        let pool = ConnectionPool::open_in_memory(1)?;
        debug!("storage gateway opened in memory");
        Ok(Self {
            pool,
            use_read_pool: false,
        })
    }

    async fn with_reader<F, T>(&self, f: F) -> DeckResult<T>
    where
        F: FnOnce(&Connection) -> DeckResult<T>,
    {
        if self.use_read_pool {
            self.pool.readers.with_conn(f)
        } else {
            self.pool.writer.with_conn(f).await
        }
    }

    /// Create all tables and indexes if they do not exist. Idempotent.
    pub async fn ensure_schema(&self) -> DeckResult<()> {
        self.pool.writer.with_conn(schema::ensure_schema).await
    }

    /// Apply the starter dataset when the database is empty. Returns
    /// whether the seed ran.
    pub async fn seed_if_empty(&self) -> DeckResult<bool> {
        self.pool.writer.with_conn(seed::seed_if_empty).await
    }

    // --- reads ---

    pub async fn fetch_users(&self) -> DeckResult<Vec<User>> {
        let users = self.with_reader(user_ops::fetch_users).await?;
        debug!(count = users.len(), "fetched users");
        Ok(users)
    }

    /// All prompts, newest first, authors joined in.
    pub async fn fetch_prompts(&self) -> DeckResult<Vec<Prompt>> {
        let prompts = self.with_reader(prompt_ops::fetch_prompts).await?;
        debug!(count = prompts.len(), "fetched prompts");
        Ok(prompts)
    }

    /// All agents by descending performance rating.
    pub async fn fetch_agents(&self) -> DeckResult<Vec<Agent>> {
        let agents = self.with_reader(agent_ops::fetch_agents).await?;
        debug!(count = agents.len(), "fetched agents");
        Ok(agents)
    }

    /// All teams by descending member count, counts aggregated at query
    /// time.
    pub async fn fetch_teams(&self) -> DeckResult<Vec<Team>> {
        let teams = self.with_reader(team_ops::fetch_teams).await?;
        debug!(count = teams.len(), "fetched teams");
        Ok(teams)
    }

    /// The pinned showcase: flagged prompts by descending rating, capped.
    pub async fn fetch_pinned(&self) -> DeckResult<Vec<Prompt>> {
        let pinned = self.with_reader(prompt_ops::fetch_pinned).await?;
        debug!(count = pinned.len(), "fetched pinned prompts");
        Ok(pinned)
    }

    /// Pin rows for one prompt, oldest first.
    pub async fn pins_for_prompt(&self, prompt_id: &str) -> DeckResult<Vec<PinnedPrompt>> {
        self.with_reader(|conn| pin_ops::pins_for_prompt(conn, prompt_id))
            .await
    }

    // --- writes ---

    /// Insert a prompt and bump the author's created-prompt counter.
    /// Returns the generated prompt id.
    pub async fn create_prompt(&self, draft: &PromptDraft, author_id: &str) -> DeckResult<String> {
        let id = self
            .pool
            .writer
            .with_conn(|conn| prompt_ops::insert_prompt(conn, draft, author_id))
            .await?;
        debug!(prompt_id = %id, author_id, "prompt created");
        Ok(id)
    }

    /// Record a pin and raise the prompt's pinned flag. Idempotent per
    /// (user, prompt) pair.
    pub async fn pin_prompt(&self, prompt_id: &str, user_id: &str) -> DeckResult<()> {
        self.pool
            .writer
            .with_conn(|conn| pin_ops::insert_pin(conn, prompt_id, user_id))
            .await?;
        debug!(prompt_id, user_id, "prompt pinned");
        Ok(())
    }

    /// Remove a pin; the flag clears only when the last pin goes away.
    pub async fn unpin_prompt(&self, prompt_id: &str, user_id: &str) -> DeckResult<()> {
        self.pool
            .writer
            .with_conn(|conn| pin_ops::delete_pin(conn, prompt_id, user_id))
            .await?;
        debug!(prompt_id, user_id, "prompt unpinned");
        Ok(())
    }

    /// Add a user to a team. Re-joining is a silent no-op.
    pub async fn join_team(&self, team_id: &str, user_id: &str) -> DeckResult<()> {
        self.pool
            .writer
            .with_conn(|conn| team_ops::insert_member(conn, team_id, user_id))
            .await?;
        debug!(team_id, user_id, "user joined team");
        Ok(())
    }

    /// Insert a team plus its owner membership. Returns the generated team
    /// id.
    pub async fn create_team(
        &self,
        name: &str,
        description: &str,
        creator_id: &str,
    ) -> DeckResult<String> {
        let id = self
            .pool
            .writer
            .with_conn(|conn| team_ops::insert_team(conn, name, description, creator_id))
            .await?;
        debug!(team_id = %id, creator_id, "team created");
        Ok(id)
    }
}
