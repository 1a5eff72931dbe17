//! Health check endpoint handlers.
//!
//! Provides health, liveness and readiness endpoints for monitoring and
//! load balancers.

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use roster_query::EmployeeSource;
use tracing::debug;

use crate::state::AppState;

/// Handler for the health check endpoint.
///
/// # HTTP Request
///
/// `GET [base]/health`
///
/// # Response
///
/// - `200 OK` - Status, backend name, record count and timestamp
pub async fn health_handler<S>(State(state): State<AppState<S>>) -> Response
where
    S: EmployeeSource,
{
    debug!("Processing health check request");

    let health_response = serde_json::json!({
        "status": "healthy",
        "backend": state.query().backend_name(),
        "employees": state.query().len(),
        "timestamp": chrono::Utc::now().to_rfc3339()
    });

    (StatusCode::OK, Json(health_response)).into_response()
}

/// Handler for the liveness probe.
///
/// # HTTP Request
///
/// `GET [base]/_liveness`
pub async fn liveness_handler() -> impl IntoResponse {
    StatusCode::OK
}

/// Handler for the readiness probe.
///
/// The collection is built before the listener binds, so a running server
/// is always ready.
///
/// # HTTP Request
///
/// `GET [base]/_readiness`
pub async fn readiness_handler<S>(State(state): State<AppState<S>>) -> Response
where
    S: EmployeeSource,
{
    debug!("Processing readiness check request");

    let response = serde_json::json!({
        "status": "ready",
        "backend": state.query().backend_name(),
        "checks": {
            "employees": state.query().len()
        }
    });

    (StatusCode::OK, Json(response)).into_response()
}
