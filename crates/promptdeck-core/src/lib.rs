//! # promptdeck-core
//!
//! Foundation crate for the promptdeck platform.
//! Defines entity types, errors, config, constants, and tracing setup.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod observability;
pub mod types;

// Re-export the most commonly used types at the crate root.
pub use config::DeckConfig;
pub use errors::{DeckError, DeckResult};
pub use types::{Agent, PinnedPrompt, Prompt, PromptDraft, RatingSignals, Team, User};
