//! # promptdeck-auth
//!
//! Credential store backing the sign-in/sign-up modal: a single JSON blob
//! mapping lowercased email to `{user, password}`. Passwords are stored in
//! plaintext by design parity with the UI it serves; this crate is a UI
//! boundary, not a security layer, and must never guard anything real.

pub mod avatar;
pub mod store;

pub use store::{AuthUser, CredentialStore, ProfileUpdate, Registration};
