//! Prompt reads and the prompt-creation write path.

use std::collections::HashMap;

use rusqlite::{params, Connection, Row};
use uuid::Uuid;

use promptdeck_core::constants::PINNED_FETCH_LIMIT;
use promptdeck_core::errors::DeckResult;
use promptdeck_core::types::{Prompt, PromptDraft, RatingSignals, User};

use crate::queries::user_ops::{increment_created_prompts, user_map};
use crate::queries::{encode_string_list, parse_dt, parse_string_list};
use crate::to_storage_err;

const PROMPT_COLUMNS: &str = "id, title, content, author_id, tags, techniques_used, \
     model_targets, rating_score, rating_works_as_claimed, rating_reusable, \
     rating_structured, rating_agent_ready, fork_count, comment_count, \
     bookmark_count, forked_from, is_pinned, created_at, updated_at";

pub(crate) fn row_to_prompt(
    row: &Row<'_>,
    users: &HashMap<String, User>,
) -> rusqlite::Result<Prompt> {
    let author_id: Option<String> = row.get(3)?;
    let author_id = author_id.unwrap_or_default();
    let author = users
        .get(&author_id)
        .cloned()
        .unwrap_or_else(|| User::placeholder(&author_id));

    Ok(Prompt {
        id: row.get(0)?,
        title: row.get(1)?,
        content: row.get(2)?,
        author,
        tags: parse_string_list(4, row.get(4)?)?,
        techniques_used: parse_string_list(5, row.get(5)?)?,
        model_targets: parse_string_list(6, row.get(6)?)?,
        rating_score: row.get(7)?,
        rating_signals: RatingSignals {
            works_as_claimed: row.get(8)?,
            reusable: row.get(9)?,
            structured: row.get(10)?,
            agent_ready: row.get(11)?,
        },
        fork_count: row.get(12)?,
        comment_count: row.get(13)?,
        bookmark_count: row.get(14)?,
        forked_from: row.get(15)?,
        is_pinned: row.get(16)?,
        created_at: parse_dt(17, row.get(17)?)?,
        updated_at: parse_dt(18, row.get(18)?)?,
    })
}

fn query_prompts(
    conn: &Connection,
    sql: &str,
    params: &[&dyn rusqlite::ToSql],
) -> DeckResult<Vec<Prompt>> {
    let users = user_map(conn)?;
    let mut stmt = conn.prepare(sql).map_err(|e| to_storage_err(e.to_string()))?;
    let rows = stmt
        .query_map(params, |row| row_to_prompt(row, &users))
        .map_err(|e| to_storage_err(e.to_string()))?;

    let mut prompts = Vec::new();
    for row in rows {
        prompts.push(row.map_err(|e| to_storage_err(e.to_string()))?);
    }
    Ok(prompts)
}

/// Fetch all prompts, newest first. Authors are joined in from the users
/// table; a missing author row yields a placeholder user rather than an
/// error.
pub fn fetch_prompts(conn: &Connection) -> DeckResult<Vec<Prompt>> {
    let sql = format!("SELECT {PROMPT_COLUMNS} FROM prompts ORDER BY created_at DESC");
    query_prompts(conn, &sql, &[])
}

/// Fetch the pinned collection: flagged prompts by descending rating,
/// capped at the showcase limit.
pub fn fetch_pinned(conn: &Connection) -> DeckResult<Vec<Prompt>> {
    let sql = format!(
        "SELECT {PROMPT_COLUMNS} FROM prompts WHERE is_pinned = 1 \
         ORDER BY rating_score DESC LIMIT ?1"
    );
    query_prompts(conn, &sql, &[&(PINNED_FETCH_LIMIT as i64)])
}

/// Insert a prompt and bump the author's counter in one transaction.
/// Returns the generated prompt id.
pub fn insert_prompt(conn: &Connection, draft: &PromptDraft, author_id: &str) -> DeckResult<String> {
    let id = Uuid::new_v4().to_string();
    let tx = conn
        .unchecked_transaction()
        .map_err(|e| to_storage_err(e.to_string()))?;

    let result = (|| -> DeckResult<()> {
        tx.execute(
            "INSERT INTO prompts (id, title, content, author_id, tags, techniques_used, \
             model_targets, forked_from)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            params![
                id,
                draft.title,
                draft.content,
                author_id,
                encode_string_list(&draft.tags),
                encode_string_list(&draft.techniques_used),
                encode_string_list(&draft.model_targets),
                draft.forked_from,
            ],
        )
        .map_err(|e| to_storage_err(e.to_string()))?;
        increment_created_prompts(&tx, author_id)?;
        Ok(())
    })();

    match result {
        Ok(()) => {
            tx.commit().map_err(|e| to_storage_err(e.to_string()))?;
            Ok(id)
        }
        Err(e) => {
            let _ = tx.rollback();
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::ensure_schema;

    #[test]
    fn missing_author_maps_to_placeholder_user() {
        let conn = Connection::open_in_memory().unwrap();
        ensure_schema(&conn).unwrap();
        conn.execute(
            "INSERT INTO prompts (id, title, content, author_id)
             VALUES ('x1', 'Orphan', 'body', NULL)",
            [],
        )
        .unwrap();

        let prompts = fetch_prompts(&conn).unwrap();
        assert_eq!(prompts.len(), 1);
        let author = &prompts[0].author;
        assert_eq!(author.handle, "unknown");
        assert_eq!(author.name, "Unknown User");
        assert_eq!(author.credibility_score, 0);
        assert!(author.avatar.contains("seed=unknown"));
    }
}
