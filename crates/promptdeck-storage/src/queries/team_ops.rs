//! Team reads and writes. Member and prompt counts are aggregated at query
//! time from the join table, never stored.

use rusqlite::{params, Connection};
use uuid::Uuid;

use promptdeck_core::constants::TEAM_MEMBER_PREVIEW_LIMIT;
use promptdeck_core::errors::DeckResult;
use promptdeck_core::types::{Team, User};

use crate::queries::parse_dt;
use crate::queries::user_ops::row_to_user;
use crate::to_storage_err;

struct TeamRow {
    id: String,
    name: String,
    description: Option<String>,
    avatar: Option<String>,
    created_at: chrono::DateTime<chrono::Utc>,
    member_count: i64,
    prompt_count: i64,
}

/// Fetch all teams ordered by descending member count, each carrying a
/// capped preview of its members.
pub fn fetch_teams(conn: &Connection) -> DeckResult<Vec<Team>> {
    let mut stmt = conn
        .prepare(
            "SELECT t.id, t.name, t.description, t.avatar, t.created_at,
                (SELECT COUNT(*) FROM team_members WHERE team_id = t.id) AS member_count,
                (SELECT COUNT(*) FROM prompts p
                   JOIN team_members tm ON p.author_id = tm.user_id
                  WHERE tm.team_id = t.id) AS prompt_count
             FROM teams t
             ORDER BY member_count DESC",
        )
        .map_err(|e| to_storage_err(e.to_string()))?;
    let rows = stmt
        .query_map([], |row| {
            Ok(TeamRow {
                id: row.get(0)?,
                name: row.get(1)?,
                description: row.get(2)?,
                avatar: row.get(3)?,
                created_at: parse_dt(4, row.get(4)?)?,
                member_count: row.get(5)?,
                prompt_count: row.get(6)?,
            })
        })
        .map_err(|e| to_storage_err(e.to_string()))?;

    let mut team_rows = Vec::new();
    for row in rows {
        team_rows.push(row.map_err(|e| to_storage_err(e.to_string()))?);
    }

    let mut teams = Vec::with_capacity(team_rows.len());
    for row in team_rows {
        let members = fetch_member_preview(conn, &row.id)?;
        let avatar = row.avatar.unwrap_or_else(|| {
            format!("https://api.dicebear.com/7.x/shapes/svg?seed={}", row.name)
        });
        teams.push(Team {
            id: row.id,
            name: row.name,
            description: row.description.unwrap_or_default(),
            avatar,
            members,
            member_count: row.member_count,
            prompt_count: row.prompt_count,
            created_at: row.created_at,
        });
    }
    Ok(teams)
}

fn fetch_member_preview(conn: &Connection, team_id: &str) -> DeckResult<Vec<User>> {
    let mut stmt = conn
        .prepare(
            "SELECT u.id, u.handle, u.name, u.avatar, u.bio, u.credibility_score,
                    u.followers, u.following, u.created_prompts, u.created_agents, u.joined_at
             FROM users u
             JOIN team_members tm ON u.id = tm.user_id
             WHERE tm.team_id = ?1
             LIMIT ?2",
        )
        .map_err(|e| to_storage_err(e.to_string()))?;
    let rows = stmt
        .query_map(
            params![team_id, TEAM_MEMBER_PREVIEW_LIMIT as i64],
            row_to_user,
        )
        .map_err(|e| to_storage_err(e.to_string()))?;

    let mut members = Vec::new();
    for row in rows {
        members.push(row.map_err(|e| to_storage_err(e.to_string()))?);
    }
    Ok(members)
}

/// Insert a team plus its owner membership in one transaction. Returns the
/// generated team id.
pub fn insert_team(
    conn: &Connection,
    name: &str,
    description: &str,
    creator_id: &str,
) -> DeckResult<String> {
    let team_id = Uuid::new_v4().to_string();
    let member_id = Uuid::new_v4().to_string();
    let avatar = format!("https://api.dicebear.com/7.x/shapes/svg?seed={name}");

    let tx = conn
        .unchecked_transaction()
        .map_err(|e| to_storage_err(e.to_string()))?;

    let result = (|| -> DeckResult<()> {
        tx.execute(
            "INSERT INTO teams (id, name, description, creator_id, avatar)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![team_id, name, description, creator_id, avatar],
        )
        .map_err(|e| to_storage_err(e.to_string()))?;
        tx.execute(
            "INSERT INTO team_members (id, team_id, user_id, role)
             VALUES (?1, ?2, ?3, 'owner')",
            params![member_id, team_id, creator_id],
        )
        .map_err(|e| to_storage_err(e.to_string()))?;
        Ok(())
    })();

    match result {
        Ok(()) => {
            tx.commit().map_err(|e| to_storage_err(e.to_string()))?;
            Ok(team_id)
        }
        Err(e) => {
            let _ = tx.rollback();
            Err(e)
        }
    }
}

/// Add a user to a team. Re-joining is a silent no-op; the membership row
/// keeps its original join date.
pub fn insert_member(conn: &Connection, team_id: &str, user_id: &str) -> DeckResult<()> {
    let id = Uuid::new_v4().to_string();
    conn.execute(
        "INSERT OR IGNORE INTO team_members (id, team_id, user_id) VALUES (?1, ?2, ?3)",
        params![id, team_id, user_id],
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}
