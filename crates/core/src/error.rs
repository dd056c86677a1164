//! Core Error Types
//!
//! Defines the foundational error types used across the Prompt Modes workspace.
//! These error types are dependency-free (only thiserror + serde_json) so host
//! collaborator implementations can return them without pulling in the
//! application crate.
//!
//! The application crate extends these with mode-specific variants
//! (file restrictions, unknown modes, malformed images).

use thiserror::Error;

/// Core error type for the Prompt Modes workspace.
#[derive(Error, Debug)]
pub enum CoreError {
    /// A stored value could not be decoded into the requested type
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for core errors
pub type CoreResult<T> = Result<T, CoreError>;

/// Convert CoreError to a string
impl From<CoreError> for String {
    fn from(err: CoreError) -> String {
        err.to_string()
    }
}
