//! User reads plus the counter bump that accompanies prompt creation.

use std::collections::HashMap;

use rusqlite::{params, Connection, Row};

use promptdeck_core::errors::DeckResult;
use promptdeck_core::types::User;

use crate::queries::parse_dt;
use crate::to_storage_err;

const USER_COLUMNS: &str = "id, handle, name, avatar, bio, credibility_score, \
     followers, following, created_prompts, created_agents, joined_at";

pub(crate) fn row_to_user(row: &Row<'_>) -> rusqlite::Result<User> {
    let avatar: Option<String> = row.get(3)?;
    let bio: Option<String> = row.get(4)?;
    Ok(User {
        id: row.get(0)?,
        handle: row.get(1)?,
        name: row.get(2)?,
        avatar: avatar
            .unwrap_or_else(|| "https://api.dicebear.com/7.x/avataaars/svg?seed=default".to_string()),
        bio: bio.unwrap_or_default(),
        credibility_score: row.get(5)?,
        followers: row.get(6)?,
        following: row.get(7)?,
        created_prompts: row.get(8)?,
        created_agents: row.get(9)?,
        joined_at: parse_dt(10, row.get(10)?)?,
    })
}

/// Fetch every user in insertion order.
pub fn fetch_users(conn: &Connection) -> DeckResult<Vec<User>> {
    let sql = format!("SELECT {USER_COLUMNS} FROM users");
    let mut stmt = conn.prepare(&sql).map_err(|e| to_storage_err(e.to_string()))?;
    let rows = stmt
        .query_map([], row_to_user)
        .map_err(|e| to_storage_err(e.to_string()))?;

    let mut users = Vec::new();
    for row in rows {
        users.push(row.map_err(|e| to_storage_err(e.to_string()))?);
    }
    Ok(users)
}

/// Fetch every user keyed by id, for joining authors onto prompts and agents.
pub(crate) fn user_map(conn: &Connection) -> DeckResult<HashMap<String, User>> {
    let users = fetch_users(conn)?;
    Ok(users.into_iter().map(|u| (u.id.clone(), u)).collect())
}

/// Bump the author's created-prompt counter. Callers run this inside the
/// same transaction as the prompt insert.
pub(crate) fn increment_created_prompts(conn: &Connection, user_id: &str) -> DeckResult<()> {
    conn.execute(
        "UPDATE users SET created_prompts = created_prompts + 1 WHERE id = ?1",
        params![user_id],
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}
