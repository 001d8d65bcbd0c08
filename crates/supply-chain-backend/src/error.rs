//! Startup errors and the API error type with HTTP response mapping.

use std::io;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Invalid values found while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid PORT value {value:?}: expected an integer in 0..=65535")]
    InvalidPort { value: String },

    #[error("invalid LOG_FORMAT value {value:?}: expected \"text\" or \"json\"")]
    InvalidLogFormat { value: String },
}

/// Errors that stop the server from starting or keep it from serving.
#[derive(Debug, Error)]
pub enum ServerError {
    /// Configuration could not be loaded.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The listener could not be bound, typically because the port is in use.
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: io::Error,
    },

    /// The accept loop terminated with an I/O error.
    #[error("server error: {0}")]
    Serve(#[source] io::Error),
}

/// Result type for server lifecycle operations.
pub type Result<T> = std::result::Result<T, ServerError>;

/// API-level error type that maps to HTTP responses.
#[derive(Debug)]
pub enum ApiError {
    /// No route matched the request.
    NotFound(String),
    /// Internal server error.
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::Internal(msg) => {
                tracing::error!(error = %msg, "internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        let body = serde_json::json!({ "error": message });
        (status, axum::Json(body)).into_response()
    }
}
