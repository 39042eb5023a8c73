//! # CLI Error Types
//!
//! `CliError` is what commands return; `ApiError` is its serialized form for
//! `--json` consumers.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ValidationError (breakeven-core) ──┐                                   │
//! │  bad flag / missing value ──────────┼──► CliError ──┬──► "Error: ..."   │
//! │  ConfigError ───────────────────────┤               │     (text)        │
//! │  stdin / JSON failure ──────────────┘               └──► ApiError JSON  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use thiserror::Error;

use breakeven_core::ValidationError;

use crate::config::ConfigError;

/// Errors produced while running a command.
#[derive(Debug, Error)]
pub enum CliError {
    /// Inputs were rejected by the calculator. Shown verbatim.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Unknown command or flag, or a flag missing its value.
    #[error("{0}")]
    InvalidArgument(String),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Failed to read form from stdin: {0}")]
    Stdin(#[from] std::io::Error),

    #[error("Invalid JSON form: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        CliError::InvalidArgument(message.into())
    }
}

/// Serialized error for JSON output.
///
/// ```json
/// {
///   "code": "VALIDATION_ERROR",
///   "message": "Please enter a valid positive number for Selling Price Per Unit.",
///   "field": "Selling Price Per Unit"
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,

    /// Input to correct, for validation errors
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

/// Error codes for JSON output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Calculator rejected the inputs
    ValidationError,

    /// Command line or JSON form could not be understood
    InvalidArgument,

    /// Configuration could not be loaded
    ConfigError,

    /// I/O failure
    Internal,
}

impl From<&CliError> for ApiError {
    fn from(error: &CliError) -> Self {
        let (code, field) = match error {
            CliError::Validation(e) => (ErrorCode::ValidationError, Some(e.field().to_string())),
            CliError::InvalidArgument(_) | CliError::Json(_) => (ErrorCode::InvalidArgument, None),
            CliError::Config(_) => (ErrorCode::ConfigError, None),
            CliError::Stdin(_) => (ErrorCode::Internal, None),
        };

        ApiError {
            code,
            message: error.to_string(),
            field,
        }
    }
}
