//! Custom error types for outlay
//!
//! Quick-add validation is the only recoverable error class in the core; the
//! remaining variants cover the CLI and terminal boundaries.

use thiserror::Error;

use crate::models::ValidationError;

/// The main error type for outlay operations
#[derive(Error, Debug)]
pub enum OutlayError {
    /// Quick-add validation failures
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// A category name that is not in the budget's category list
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    /// Report serialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Terminal setup/teardown errors
    #[error("TUI error: {0}")]
    Tui(String),
}

impl From<serde_json::Error> for OutlayError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for outlay operations
pub type OutlayResult<T> = Result<T, OutlayError>;
