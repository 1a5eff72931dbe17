//! Read handler.
//!
//! `GET [base]/api/employees/{id}`

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use roster_query::EmployeeSource;
use tracing::debug;

use crate::error::RestResult;
use crate::state::AppState;

/// Handler for reading one employee.
///
/// # HTTP Request
///
/// `GET [base]/api/employees/{id}`
///
/// # Response
///
/// - `200 OK` - The employee object
/// - `400 Bad Request` - `{"error": "Invalid ID format"}`
/// - `404 Not Found` - `{"error": "Employee not found"}`
pub async fn read_handler<S>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
) -> RestResult<Response>
where
    S: EmployeeSource,
{
    debug!(id = %id, "Processing read request");

    let employee = state.query().by_id(&id)?;

    Ok((StatusCode::OK, Json(employee)).into_response())
}
