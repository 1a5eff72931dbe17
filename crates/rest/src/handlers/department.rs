//! Department handler.
//!
//! `GET [base]/api/employees/department/{department}`

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use roster_query::EmployeeSource;
use tracing::debug;

use crate::state::AppState;

/// Handler for listing the employees of one department.
///
/// The department is compared case-insensitively. An unknown department is
/// not an error; it yields an empty array.
///
/// # HTTP Request
///
/// `GET [base]/api/employees/department/{department}`
///
/// # Response
///
/// - `200 OK` - JSON array of employees (possibly empty)
pub async fn department_handler<S>(
    State(state): State<AppState<S>>,
    Path(department): Path<String>,
) -> Response
where
    S: EmployeeSource,
{
    debug!(department = %department, "Processing department request");

    let employees = state.query().by_department(&department);

    (StatusCode::OK, Json(employees)).into_response()
}
