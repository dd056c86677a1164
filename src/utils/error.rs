//! Error Handling
//!
//! Unified error types for the application.
//! Uses thiserror for ergonomic error definitions.

use prompt_modes_core::CoreError;
use thiserror::Error;

/// Application-wide error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Errors raised by host collaborators
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Strict mode lookup found nothing for this slug
    #[error("No mode found for slug: {0}")]
    ModeNotFound(String),

    /// An edit-group tool targeted a file outside the mode's allowed pattern.
    /// Surfaced to the user as an explanation, not a silent denial.
    #[error(
        "This mode ({mode}) can only edit files matching pattern: {pattern}{}. Got: {path}",
        .description.as_ref().map(|d| format!(" ({})", d)).unwrap_or_default()
    )]
    FileRestriction {
        mode: String,
        pattern: String,
        description: Option<String>,
        path: String,
    },

    /// Malformed image data URL
    #[error("Invalid image data URL: {0}")]
    InvalidImage(String),
}

/// Result type alias for application errors
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Create a config error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create an invalid image error
    pub fn invalid_image(msg: impl Into<String>) -> Self {
        Self::InvalidImage(msg.into())
    }

    /// Whether this is a file restriction violation
    pub fn is_file_restriction(&self) -> bool {
        matches!(self, AppError::FileRestriction { .. })
    }
}

/// Convert AppError to a string suitable for host responses
impl From<AppError> for String {
    fn from(err: AppError) -> String {
        err.to_string()
    }
}
