//! Server Error Types
//!
//! Errors of the dashboard host and their conversion to HTTP responses.
//! Response bodies use the `{"error": "<message>"}` shape the dashboard
//! surfaces verbatim.

use anchor_platform_core::NETWORK_ERROR_MESSAGE;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Server error types
#[derive(Error, Debug)]
pub enum ServerError {
    /// The Anchor Platform API could not be reached
    #[error("Upstream unavailable: {0}")]
    Upstream(String),

    /// The dashboard bundle directory is missing
    #[error("Dashboard bundle not found at {0}")]
    MissingBundle(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Error response body
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ServerError::Upstream(_) => (
                StatusCode::SERVICE_UNAVAILABLE,
                NETWORK_ERROR_MESSAGE.to_string(),
            ),
            ServerError::MissingBundle(_) => (StatusCode::NOT_FOUND, self.to_string()),
            ServerError::Io(_) | ServerError::Internal(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, self.to_string())
            }
        };

        tracing::error!(
            status = %status,
            error_message = %self,
            "Request failed"
        );

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

/// Result type for server operations
pub type ServerResult<T> = Result<T, ServerError>;
