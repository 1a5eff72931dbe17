//! Application state for the employee HTTP API.
//!
//! This module defines the shared application state that is available to all
//! request handlers: the query façade over the employee source and the server
//! configuration.

use std::sync::Arc;

use roster_query::{EmployeeQuery, EmployeeSource};

use crate::config::ServerConfig;

/// Shared application state for the REST API.
///
/// # Type Parameters
///
/// * `S` - The employee source type (must implement [`EmployeeSource`])
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
///
/// use roster_rest::{AppState, ServerConfig};
/// use roster_store::InMemoryStore;
///
/// let state = AppState::new(Arc::new(InMemoryStore::default()), ServerConfig::default());
/// assert!(state.query().is_empty());
/// ```
pub struct AppState<S> {
    /// Read-only queries over the employee source.
    query: EmployeeQuery<S>,

    /// Server configuration.
    config: Arc<ServerConfig>,
}

// Manually implement Clone since S is wrapped in Arc and doesn't need to be Clone
impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            query: self.query.clone(),
            config: Arc::clone(&self.config),
        }
    }
}

impl<S: EmployeeSource> AppState<S> {
    /// Creates a new AppState with the given source and configuration.
    ///
    /// The malformed filter policy is taken from the configuration.
    ///
    /// # Arguments
    ///
    /// * `source` - The employee source (wrapped in Arc)
    /// * `config` - Server configuration
    pub fn new(source: Arc<S>, config: ServerConfig) -> Self {
        let query = EmployeeQuery::new(source).with_policy(config.filter_policy());
        Self {
            query,
            config: Arc::new(config),
        }
    }

    /// Returns the query façade.
    pub fn query(&self) -> &EmployeeQuery<S> {
        &self.query
    }

    /// Returns a reference to the server configuration.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }
}
