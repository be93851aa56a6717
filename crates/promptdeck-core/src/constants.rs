/// Promptdeck system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Milliseconds in one day, the unit of all recency windows.
pub const MS_PER_DAY: i64 = 86_400_000;

/// Maximum number of pinned prompts returned by a pinned fetch.
pub const PINNED_FETCH_LIMIT: usize = 10;

/// Maximum member rows loaded per team (member_count stays authoritative).
pub const TEAM_MEMBER_PREVIEW_LIMIT: usize = 5;

/// Credibility score assigned to freshly registered accounts.
pub const DEFAULT_CREDIBILITY_SCORE: i64 = 50;
