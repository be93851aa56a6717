//! Recency windows measured in whole days of milliseconds.

use chrono::{DateTime, Utc};

use promptdeck_core::constants::MS_PER_DAY;

/// True when `date` lies within the last `days` days of `now`, boundary
/// included. Future dates are always within the window.
pub fn is_within_days(date: DateTime<Utc>, now: DateTime<Utc>, days: i64) -> bool {
    let elapsed_ms = (now - date).num_milliseconds();
    elapsed_ms <= days * MS_PER_DAY
}
