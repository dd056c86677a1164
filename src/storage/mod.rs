//! Storage Layer
//!
//! Persisted extension state: in-memory and JSON-file key-value stores.

pub mod state;

pub use state::*;
