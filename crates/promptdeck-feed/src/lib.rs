//! # promptdeck-feed
//!
//! Pure ranking and filtering over the platform entities.
//! No I/O and no clocks: every function takes `now` explicitly, so feed
//! ordering is reproducible. Callers re-rank whenever state changes.

pub mod ranking;
pub mod stats;
pub mod tabs;
pub mod windows;

pub use ranking::{agent_prominence, trending_score, trending_score_with, TrendingWeights};
pub use stats::FeedStats;
pub use tabs::FeedTab;
pub use windows::is_within_days;
