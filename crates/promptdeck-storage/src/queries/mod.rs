//! Per-table query modules. All statements are parameterized; multi-step
//! writes run inside explicit transactions.

pub mod agent_ops;
pub mod pin_ops;
pub mod prompt_ops;
pub mod team_ops;
pub mod user_ops;

use chrono::{DateTime, Utc};
use rusqlite::types::Type;

/// Parse an RFC 3339 timestamp column inside a row-mapping function.
pub(crate) fn parse_dt(idx: usize, s: String) -> rusqlite::Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(&s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
}

/// Parse a JSON-encoded string-array column inside a row-mapping function.
pub(crate) fn parse_string_list(idx: usize, s: String) -> rusqlite::Result<Vec<String>> {
    serde_json::from_str(&s)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
}

/// Encode a string list for storage in a JSON-encoded column.
pub(crate) fn encode_string_list(list: &[String]) -> String {
    serde_json::to_string(list).unwrap_or_else(|_| "[]".to_string())
}
