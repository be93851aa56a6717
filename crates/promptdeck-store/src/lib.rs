//! # promptdeck-store
//!
//! In-memory state container over the storage gateway.
//! One `DataStore` per process: initialize once, read cloned snapshots,
//! and let every mutation re-fetch its collection so state always mirrors
//! the database.

pub mod manager;
pub mod state;

pub use manager::DataStore;
pub use state::StoreState;
