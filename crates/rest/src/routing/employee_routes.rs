//! Employee route configuration.

use axum::{Router, routing::get};
use roster_query::EmployeeSource;

use crate::handlers;
use crate::state::AppState;

/// Creates all employee API routes.
///
/// # Routes
///
/// ## Probes
/// - `GET /health` - Health check
/// - `GET /_liveness` - Liveness probe
/// - `GET /_readiness` - Readiness probe
///
/// ## Employees
/// - `GET /api/employees` - Search
/// - `GET /api/employees/{id}` - Read
/// - `GET /api/employees/department/{department}` - Department listing
pub fn create_routes<S>(state: AppState<S>) -> Router
where
    S: EmployeeSource + 'static,
{
    Router::new()
        .route("/health", get(handlers::health_handler::<S>))
        .route("/_liveness", get(handlers::health::liveness_handler))
        .route("/_readiness", get(handlers::health::readiness_handler::<S>))
        .route("/api/employees", get(handlers::search_handler::<S>))
        .route("/api/employees/{id}", get(handlers::read_handler::<S>))
        .route(
            "/api/employees/department/{department}",
            get(handlers::department_handler::<S>),
        )
        .with_state(state)
}
