//! Error types for the employee HTTP API.
//!
//! Every error is rendered as a JSON object with a single `error` member and
//! an HTTP status code:
//!
//! | Query Error | HTTP Status | Body |
//! |-------------|-------------|------|
//! | InvalidId | 400 | `{"error": "Invalid ID format"}` |
//! | NotFound | 404 | `{"error": "Employee not found"}` |
//! | InvalidFilter | 400 | `{"error": "Invalid filter '<param>': <reason>"}` |

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use roster_query::QueryError;
use std::fmt;

/// The primary error type for REST API operations.
#[derive(Debug, Clone, PartialEq)]
pub enum RestError {
    /// Employee not found (HTTP 404).
    NotFound {
        /// The requested identifier.
        id: i64,
    },

    /// Bad request (HTTP 400).
    BadRequest {
        /// Error message returned to the client.
        message: String,
    },
}

impl fmt::Display for RestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RestError::NotFound { id } => write!(f, "Employee not found: {}", id),
            RestError::BadRequest { message } => write!(f, "Bad request: {}", message),
        }
    }
}

impl std::error::Error for RestError {}

impl RestError {
    /// Returns the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            RestError::NotFound { .. } => StatusCode::NOT_FOUND,
            RestError::BadRequest { .. } => StatusCode::BAD_REQUEST,
        }
    }

    /// Returns the message placed in the response body.
    pub fn message(&self) -> &str {
        match self {
            RestError::NotFound { .. } => "Employee not found",
            RestError::BadRequest { message } => message,
        }
    }
}

impl IntoResponse for RestError {
    fn into_response(self) -> Response {
        let body = create_error_body(self.message());
        (self.status_code(), Json(body)).into_response()
    }
}

/// Creates the JSON error body `{"error": message}`.
pub fn create_error_body(message: &str) -> serde_json::Value {
    serde_json::json!({ "error": message })
}

impl From<QueryError> for RestError {
    fn from(err: QueryError) -> Self {
        match err {
            QueryError::InvalidId { .. } => RestError::BadRequest {
                message: "Invalid ID format".to_string(),
            },
            QueryError::NotFound { id } => RestError::NotFound { id },
            QueryError::InvalidFilter { parameter, source } => RestError::BadRequest {
                message: format!("Invalid filter '{}': {}", parameter, source),
            },
        }
    }
}

/// Result type alias for REST operations.
pub type RestResult<T> = Result<T, RestError>;
