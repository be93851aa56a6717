//! # promptdeck-playground
//!
//! Thin async clients for the two playground backends: an OpenRouter-style
//! chat-completions API and Mistral's Codestral FIM endpoint.
//! Shared retrying transport, per-service error surfacing, and the curated
//! model catalog shown in the playground picker.

pub mod chat;
pub mod fim;
pub mod models;
pub mod protocol;
pub mod transport;

pub use chat::{ChatRequest, OpenRouterClient};
pub use fim::{CodestralChatRequest, CodestralClient, FimRequest};
pub use models::{FeaturedModel, FEATURED_MODELS};
pub use protocol::{ChatMessage, ChatResponse, FimResponse};
pub use transport::{Transport, TransportConfig};
