//! # roster-rest - Employee directory HTTP API
//!
//! This crate exposes a read-only employee collection over HTTP. Handlers
//! delegate to [`roster_query::EmployeeQuery`] and render results as JSON.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use roster_rest::{create_app_with_config, ServerConfig};
//! use roster_store::{GeneratorConfig, InMemoryStore};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = InMemoryStore::generate(&GeneratorConfig::default())?;
//!     let config = ServerConfig::default();
//!     let addr = config.socket_addr();
//!
//!     let app = create_app_with_config(store, config);
//!
//!     let listener = tokio::net::TcpListener::bind(addr).await?;
//!     axum::serve(listener, app).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## API Endpoints
//!
//! | Operation | HTTP Method | URL Pattern |
//! |-----------|-------------|-------------|
//! | search | GET | `/api/employees?params` |
//! | read | GET | `/api/employees/{id}` |
//! | department | GET | `/api/employees/department/{department}` |
//! | health | GET | `/health` |
//! | liveness | GET | `/_liveness` |
//! | readiness | GET | `/_readiness` |
//!
//! ## Search Parameters
//!
//! | Parameter | Matching |
//! |-----------|----------|
//! | `department` | Exact, case-insensitive |
//! | `job_title` | Exact, case-insensitive |
//! | `name` | Substring, case-insensitive |
//! | `years_of_service` | Comparison such as `>=5` |
//! | `salary` | Comparison such as `<60000` |
//!
//! ## Error Handling
//!
//! Errors are returned as `{"error": "<message>"}`:
//!
//! | HTTP Status | Description |
//! |-------------|-------------|
//! | 400 | Invalid ID format, or a malformed filter under strict filters |
//! | 404 | Employee not found |
//! | 408 | Request timed out |
//!
//! ## Architecture
//!
//! - [`error`] - Error types and JSON error bodies
//! - [`config`] - Server configuration
//! - [`state`] - Application state (query façade, configuration)
//! - [`handlers`] - HTTP request handlers
//! - [`routing`] - Route configuration

// Enforce documentation
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod error;
pub mod handlers;
pub mod routing;
pub mod state;

// Re-export commonly used types
pub use config::ServerConfig;
pub use error::{RestError, RestResult};
pub use state::AppState;

use std::sync::Arc;

use axum::Router;
use roster_query::EmployeeSource;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::info;

/// Creates the Axum application with default configuration.
///
/// This is a convenience function that creates the app with default settings.
/// For more control, use [`create_app_with_config`].
///
/// # Arguments
///
/// * `source` - The employee source to serve
pub fn create_app<S>(source: S) -> Router
where
    S: EmployeeSource + 'static,
{
    create_app_with_config(source, ServerConfig::default())
}

/// Creates the Axum application with custom configuration.
///
/// This function sets up all routes plus the tracing, timeout and
/// (optionally) CORS middleware.
///
/// # Arguments
///
/// * `source` - The employee source to serve
/// * `config` - Server configuration
///
/// # Example
///
/// ```rust
/// use roster_rest::{create_app_with_config, ServerConfig};
/// use roster_store::InMemoryStore;
///
/// let config = ServerConfig {
///     strict_filters: true,
///     ..Default::default()
/// };
/// let app = create_app_with_config(InMemoryStore::default(), config);
/// ```
pub fn create_app_with_config<S>(source: S, config: ServerConfig) -> Router
where
    S: EmployeeSource + 'static,
{
    info!(
        backend = source.backend_name(),
        employees = source.len(),
        strict_filters = config.strict_filters,
        "Creating employee API server"
    );

    // Create application state
    let state = AppState::new(Arc::new(source), config.clone());

    // Build the router with all employee routes
    let router = routing::create_routes(state);

    // Build middleware stack
    let service_builder = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            axum::http::StatusCode::REQUEST_TIMEOUT,
            std::time::Duration::from_secs(config.request_timeout),
        ));

    // Add CORS if enabled
    let router = if config.enable_cors {
        let cors = build_cors_layer(&config);
        router.layer(cors)
    } else {
        router
    };

    // Apply remaining middleware
    router.layer(service_builder)
}

/// Builds the CORS layer based on configuration.
fn build_cors_layer(config: &ServerConfig) -> CorsLayer {
    let mut cors = CorsLayer::new();

    // Configure origins
    if config.cors_origins == "*" {
        cors = cors.allow_origin(Any);
    } else {
        let origins: Vec<_> = config
            .cors_origins
            .split(',')
            .filter_map(|s| s.trim().parse().ok())
            .collect();
        cors = cors.allow_origin(origins);
    }

    // Configure methods
    if config.cors_methods == "*" {
        cors = cors.allow_methods(Any);
    } else {
        let methods: Vec<_> = config
            .cors_methods
            .split(',')
            .filter_map(|s| s.trim().parse().ok())
            .collect();
        cors = cors.allow_methods(methods);
    }

    // Configure headers
    if config.cors_headers == "*" {
        cors = cors.allow_headers(Any);
    } else {
        let headers: Vec<_> = config
            .cors_headers
            .split(',')
            .filter_map(|s| s.trim().parse().ok())
            .collect();
        cors = cors.allow_headers(headers);
    }

    cors
}

/// Initializes the tracing subscriber for logging.
///
/// This should be called once at application startup.
///
/// # Arguments
///
/// * `level` - The log level (error, warn, info, debug, trace)
pub fn init_logging(level: &str) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_directives(level)));

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();
}

/// Returns the default filter directives for the workspace crates at `level`.
fn log_directives(level: &str) -> String {
    format!(
        "roster_rest={level},roster_query={level},roster_store={level},roster_server={level},tower_http=debug"
    )
}
