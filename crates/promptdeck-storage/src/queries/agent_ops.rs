//! Agent reads. Agents are seeded or imported elsewhere; the gateway only
//! ever lists them.

use std::collections::HashMap;

use rusqlite::{Connection, Row};

use promptdeck_core::errors::DeckResult;
use promptdeck_core::types::{Agent, User};

use crate::queries::user_ops::user_map;
use crate::queries::{parse_dt, parse_string_list};
use crate::to_storage_err;

const AGENT_COLUMNS: &str = "id, name, description, creator_id, avatar, prompt_chain, \
     performance_rating, usage_count, followers, tags, created_at";

pub(crate) fn row_to_agent(
    row: &Row<'_>,
    users: &HashMap<String, User>,
) -> rusqlite::Result<Agent> {
    let creator_id: Option<String> = row.get(3)?;
    let creator_id = creator_id.unwrap_or_default();
    let creator = users
        .get(&creator_id)
        .cloned()
        .unwrap_or_else(|| User::placeholder(&creator_id));

    let description: Option<String> = row.get(2)?;
    let avatar: Option<String> = row.get(4)?;
    Ok(Agent {
        id: row.get(0)?,
        name: row.get(1)?,
        description: description.unwrap_or_default(),
        creator,
        avatar: avatar.unwrap_or_default(),
        prompt_chain: parse_string_list(5, row.get(5)?)?,
        performance_rating: row.get(6)?,
        usage_count: row.get(7)?,
        followers: row.get(8)?,
        tags: parse_string_list(9, row.get(9)?)?,
        created_at: parse_dt(10, row.get(10)?)?,
    })
}

/// Fetch all agents ordered by descending performance rating.
pub fn fetch_agents(conn: &Connection) -> DeckResult<Vec<Agent>> {
    let users = user_map(conn)?;
    let sql = format!("SELECT {AGENT_COLUMNS} FROM agents ORDER BY performance_rating DESC");
    let mut stmt = conn.prepare(&sql).map_err(|e| to_storage_err(e.to_string()))?;
    let rows = stmt
        .query_map([], |row| row_to_agent(row, &users))
        .map_err(|e| to_storage_err(e.to_string()))?;

    let mut agents = Vec::new();
    for row in rows {
        agents.push(row.map_err(|e| to_storage_err(e.to_string()))?);
    }
    Ok(agents)
}
