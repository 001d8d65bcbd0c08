//! Handlers for requests that match no route.

use std::any::Any;

use axum::http::Uri;
use axum::response::{IntoResponse, Response};

use crate::error::ApiError;

/// Fallback for unmatched paths.
pub async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(format!("no route for {}", uri.path()))
}

/// Converts a caught handler panic into a 500 response.
pub fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        (*s).to_string()
    } else {
        "unknown panic payload".to_string()
    };

    ApiError::Internal(format!("handler panicked: {detail}")).into_response()
}
