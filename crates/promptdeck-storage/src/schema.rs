//! Create-if-absent table definitions for the six platform relations.
//!
//! Safe to run unconditionally; every statement is independently
//! idempotent. There is no versioned migration tooling — the schema is
//! initialized in one pass.

use rusqlite::Connection;

use promptdeck_core::errors::{DeckError, StorageError};

/// Ensure all tables and indexes exist.
pub fn ensure_schema(conn: &Connection) -> Result<(), DeckError> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS users (
            id                 TEXT PRIMARY KEY,
            handle             TEXT NOT NULL UNIQUE,
            name               TEXT NOT NULL,
            avatar             TEXT,
            bio                TEXT,
            credibility_score  INTEGER NOT NULL DEFAULT 50,
            followers          INTEGER NOT NULL DEFAULT 0,
            following          INTEGER NOT NULL DEFAULT 0,
            created_prompts    INTEGER NOT NULL DEFAULT 0,
            created_agents     INTEGER NOT NULL DEFAULT 0,
            joined_at          TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
        );

        CREATE TABLE IF NOT EXISTS prompts (
            id                       TEXT PRIMARY KEY,
            title                    TEXT NOT NULL,
            content                  TEXT NOT NULL,
            author_id                TEXT REFERENCES users(id),
            tags                     TEXT NOT NULL DEFAULT '[]',
            techniques_used          TEXT NOT NULL DEFAULT '[]',
            model_targets            TEXT NOT NULL DEFAULT '[]',
            rating_score             REAL NOT NULL DEFAULT 0,
            rating_works_as_claimed  INTEGER NOT NULL DEFAULT 0,
            rating_reusable          INTEGER NOT NULL DEFAULT 0,
            rating_structured        INTEGER NOT NULL DEFAULT 0,
            rating_agent_ready       INTEGER NOT NULL DEFAULT 0,
            fork_count               INTEGER NOT NULL DEFAULT 0,
            comment_count            INTEGER NOT NULL DEFAULT 0,
            bookmark_count           INTEGER NOT NULL DEFAULT 0,
            forked_from              TEXT,
            is_pinned                INTEGER NOT NULL DEFAULT 0,
            created_at               TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now')),
            updated_at               TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
        );

        CREATE INDEX IF NOT EXISTS idx_prompts_author ON prompts(author_id);
        CREATE INDEX IF NOT EXISTS idx_prompts_created_at ON prompts(created_at);
        CREATE INDEX IF NOT EXISTS idx_prompts_is_pinned ON prompts(is_pinned);
        CREATE INDEX IF NOT EXISTS idx_prompts_forked_from ON prompts(forked_from);

        CREATE TABLE IF NOT EXISTS agents (
            id                  TEXT PRIMARY KEY,
            name                TEXT NOT NULL,
            description         TEXT,
            creator_id          TEXT REFERENCES users(id),
            avatar              TEXT,
            prompt_chain        TEXT NOT NULL DEFAULT '[]',
            performance_rating  REAL NOT NULL DEFAULT 0,
            usage_count         INTEGER NOT NULL DEFAULT 0,
            followers           INTEGER NOT NULL DEFAULT 0,
            tags                TEXT NOT NULL DEFAULT '[]',
            created_at          TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
        );

        CREATE INDEX IF NOT EXISTS idx_agents_creator ON agents(creator_id);
        CREATE INDEX IF NOT EXISTS idx_agents_rating ON agents(performance_rating);

        CREATE TABLE IF NOT EXISTS teams (
            id          TEXT PRIMARY KEY,
            name        TEXT NOT NULL,
            description TEXT,
            avatar      TEXT,
            creator_id  TEXT REFERENCES users(id),
            created_at  TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
        );

        CREATE TABLE IF NOT EXISTS team_members (
            id         TEXT PRIMARY KEY,
            team_id    TEXT NOT NULL REFERENCES teams(id),
            user_id    TEXT NOT NULL REFERENCES users(id),
            role       TEXT NOT NULL DEFAULT 'member',
            joined_at  TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now')),
            UNIQUE (team_id, user_id)
        );

        CREATE INDEX IF NOT EXISTS idx_team_members_team ON team_members(team_id);
        CREATE INDEX IF NOT EXISTS idx_team_members_user ON team_members(user_id);

        CREATE TABLE IF NOT EXISTS pinned_prompts (
            id         TEXT PRIMARY KEY,
            user_id    TEXT NOT NULL REFERENCES users(id),
            prompt_id  TEXT NOT NULL REFERENCES prompts(id),
            pinned_at  TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now')),
            UNIQUE (user_id, prompt_id)
        );

        CREATE INDEX IF NOT EXISTS idx_pinned_prompts_prompt ON pinned_prompts(prompt_id);
        CREATE INDEX IF NOT EXISTS idx_pinned_prompts_user ON pinned_prompts(user_id);
        ",
    )
    .map_err(|e| {
        DeckError::from(StorageError::SchemaInitFailed {
            reason: e.to_string(),
        })
    })?;
    Ok(())
}
