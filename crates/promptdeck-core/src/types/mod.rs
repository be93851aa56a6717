//! Shared entity types. Plain data shapes with no behavior beyond
//! constructors; the storage gateway is the only producer.

pub mod agent;
pub mod prompt;
pub mod team;
pub mod user;

pub use agent::Agent;
pub use prompt::{PinnedPrompt, Prompt, PromptDraft, RatingSignals};
pub use team::Team;
pub use user::User;
