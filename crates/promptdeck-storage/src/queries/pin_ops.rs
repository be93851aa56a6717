//! Pin join-table writes. The denormalized `is_pinned` flag on prompts is
//! kept in step with the join rows: set on pin, cleared only when the last
//! pin is removed.

use rusqlite::{params, Connection};
use uuid::Uuid;

use promptdeck_core::errors::DeckResult;
use promptdeck_core::types::PinnedPrompt;

use crate::queries::parse_dt;
use crate::to_storage_err;

/// Record that `user_id` pinned `prompt_id` and raise the prompt's flag.
/// Pinning twice is a silent no-op; the original pin date survives.
pub fn insert_pin(conn: &Connection, prompt_id: &str, user_id: &str) -> DeckResult<()> {
    let id = Uuid::new_v4().to_string();
    let tx = conn
        .unchecked_transaction()
        .map_err(|e| to_storage_err(e.to_string()))?;

    let result = (|| -> DeckResult<()> {
        tx.execute(
            "INSERT OR IGNORE INTO pinned_prompts (id, user_id, prompt_id) VALUES (?1, ?2, ?3)",
            params![id, user_id, prompt_id],
        )
        .map_err(|e| to_storage_err(e.to_string()))?;
        tx.execute(
            "UPDATE prompts SET is_pinned = 1 WHERE id = ?1",
            params![prompt_id],
        )
        .map_err(|e| to_storage_err(e.to_string()))?;
        Ok(())
    })();

    match result {
        Ok(()) => tx.commit().map_err(|e| to_storage_err(e.to_string())),
        Err(e) => {
            let _ = tx.rollback();
            Err(e)
        }
    }
}

/// Remove `user_id`'s pin on `prompt_id`. The prompt's flag is cleared only
/// when no pins from any user remain. Unpinning a prompt the user never
/// pinned deletes nothing but still recomputes the flag.
pub fn delete_pin(conn: &Connection, prompt_id: &str, user_id: &str) -> DeckResult<()> {
    let tx = conn
        .unchecked_transaction()
        .map_err(|e| to_storage_err(e.to_string()))?;

    let result = (|| -> DeckResult<()> {
        tx.execute(
            "DELETE FROM pinned_prompts WHERE user_id = ?1 AND prompt_id = ?2",
            params![user_id, prompt_id],
        )
        .map_err(|e| to_storage_err(e.to_string()))?;

        let remaining: i64 = tx
            .query_row(
                "SELECT COUNT(*) FROM pinned_prompts WHERE prompt_id = ?1",
                params![prompt_id],
                |row| row.get(0),
            )
            .map_err(|e| to_storage_err(e.to_string()))?;
        if remaining == 0 {
            tx.execute(
                "UPDATE prompts SET is_pinned = 0 WHERE id = ?1",
                params![prompt_id],
            )
            .map_err(|e| to_storage_err(e.to_string()))?;
        }
        Ok(())
    })();

    match result {
        Ok(()) => tx.commit().map_err(|e| to_storage_err(e.to_string())),
        Err(e) => {
            let _ = tx.rollback();
            Err(e)
        }
    }
}

/// List the pin rows for one prompt, oldest first.
pub fn pins_for_prompt(conn: &Connection, prompt_id: &str) -> DeckResult<Vec<PinnedPrompt>> {
    let mut stmt = conn
        .prepare(
            "SELECT user_id, prompt_id, pinned_at FROM pinned_prompts
             WHERE prompt_id = ?1 ORDER BY pinned_at ASC",
        )
        .map_err(|e| to_storage_err(e.to_string()))?;
    let rows = stmt
        .query_map(params![prompt_id], |row| {
            Ok(PinnedPrompt {
                user_id: row.get(0)?,
                prompt_id: row.get(1)?,
                pinned_at: parse_dt(2, row.get(2)?)?,
            })
        })
        .map_err(|e| to_storage_err(e.to_string()))?;

    let mut pins = Vec::new();
    for row in rows {
        pins.push(row.map_err(|e| to_storage_err(e.to_string()))?);
    }
    Ok(pins)
}
