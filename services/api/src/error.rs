//! services/api/src/error.rs
//!
//! Defines the primary error type for the API service and the mapping from
//! kitchen failures to HTTP responses.

use crate::config::ConfigError;
use axum::http::StatusCode;
use recipe_assistant_core::KitchenError;
use tracing::error;

/// The primary error type for the `api` service.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Represents an error that occurred during configuration loading.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Represents an error raised by the kitchen service.
    #[error("Kitchen Error: {0}")]
    Kitchen(#[from] KitchenError),

    /// Represents a standard Input/Output error (e.g., binding to a network socket).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// The error half of every handler's return type.
pub type HandlerError = (StatusCode, String);

/// Maps a kitchen failure onto the status code clients see.
///
/// Storage failures are logged here and reported without their details.
pub fn reject(err: KitchenError) -> HandlerError {
    match err {
        KitchenError::Validation(msg) => (StatusCode::BAD_REQUEST, msg),
        KitchenError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
        KitchenError::NotApplicable(msg) => (StatusCode::CONFLICT, msg),
        KitchenError::Storage(msg) => {
            error!("Kitchen storage failure: {}", msg);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            )
        }
    }
}
