//! Search handler.
//!
//! `GET [base]/api/employees?params`
//!
//! Recognized parameters are `department`, `job_title`, `name`,
//! `years_of_service` and `salary`. Anything else is ignored.

use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use roster_query::EmployeeSource;
use std::collections::HashMap;
use tracing::debug;

use crate::error::RestResult;
use crate::state::AppState;

/// Handler for employee search.
///
/// Every supplied filter must hold for an employee to be returned. Results
/// keep collection order. A malformed `salary` or `years_of_service`
/// comparison matches nothing, or yields 400 when strict filters are enabled.
///
/// # HTTP Request
///
/// `GET [base]/api/employees?department=Engineering&salary=>=60000`
///
/// # Response
///
/// - `200 OK` - JSON array of matching employees (possibly empty)
/// - `400 Bad Request` - Malformed comparison under strict filters
pub async fn search_handler<S>(
    State(state): State<AppState<S>>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> RestResult<Response>
where
    S: EmployeeSource,
{
    let params = first_values(pairs);
    debug!(params = ?params, "Processing search request");

    let employees = state.query().search(&params)?;

    debug!(count = employees.len(), "Returning search results");
    Ok((StatusCode::OK, Json(employees)).into_response())
}

/// Collapses repeated parameters, keeping the first occurrence of each name.
fn first_values(pairs: Vec<(String, String)>) -> HashMap<String, String> {
    let mut params = HashMap::with_capacity(pairs.len());
    for (name, value) in pairs {
        params.entry(name).or_insert(value);
    }
    params
}
