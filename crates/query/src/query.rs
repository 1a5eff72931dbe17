//! The query façade.
//!
//! [`EmployeeQuery`] is the entry point the HTTP layer calls. It holds a
//! shared, read-only [`EmployeeSource`] and turns raw request arguments into
//! result lists.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{Datelike, Local};
use roster_store::{Employee, EmployeeSource};
use tracing::{debug, warn};

use crate::error::{QueryError, QueryResult};
use crate::filter::{FilterSet, filter};

/// What a search does with a comparison filter that does not parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MalformedFilterPolicy {
    /// The filter matches nothing, so the search returns an empty list.
    #[default]
    ExcludeAll,
    /// The search fails with [`QueryError::InvalidFilter`].
    Reject,
}

/// Read-only queries over a shared employee collection.
///
/// Cloning is cheap: the source is behind an `Arc` and never mutated, so any
/// number of concurrent requests can query it without locking.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
///
/// use roster_query::{EmployeeQuery, QueryError};
/// use roster_store::{Employee, InMemoryStore};
///
/// let store = InMemoryStore::new(vec![Employee {
///     id: 1,
///     department: "Engineering".to_string(),
///     ..Default::default()
/// }])
/// .unwrap();
/// let query = EmployeeQuery::new(Arc::new(store));
///
/// assert_eq!(query.by_department("engineering").len(), 1);
/// assert_eq!(query.by_id("1").unwrap().id, 1);
/// assert!(matches!(query.by_id("2"), Err(QueryError::NotFound { id: 2 })));
/// assert!(matches!(query.by_id("one"), Err(QueryError::InvalidId { .. })));
/// ```
pub struct EmployeeQuery<S> {
    source: Arc<S>,
    policy: MalformedFilterPolicy,
}

// Manually implement Clone since S is wrapped in Arc and doesn't need to be Clone
impl<S> Clone for EmployeeQuery<S> {
    fn clone(&self) -> Self {
        Self {
            source: Arc::clone(&self.source),
            policy: self.policy,
        }
    }
}

impl<S: EmployeeSource> EmployeeQuery<S> {
    /// Creates a query façade using [`MalformedFilterPolicy::ExcludeAll`].
    pub fn new(source: Arc<S>) -> Self {
        Self {
            source,
            policy: MalformedFilterPolicy::default(),
        }
    }

    /// Sets the malformed filter policy.
    pub fn with_policy(mut self, policy: MalformedFilterPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Returns the malformed filter policy.
    pub fn policy(&self) -> MalformedFilterPolicy {
        self.policy
    }

    /// Returns the underlying source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Returns the source's backend name.
    pub fn backend_name(&self) -> &'static str {
        self.source.backend_name()
    }

    /// Returns the number of employees in the source.
    pub fn len(&self) -> usize {
        self.source.len()
    }

    /// Returns true if the source is empty.
    pub fn is_empty(&self) -> bool {
        self.source.is_empty()
    }

    /// Searches with raw query parameters, using today's calendar year for
    /// years of service.
    pub fn search(&self, params: &HashMap<String, String>) -> QueryResult<Vec<&Employee>> {
        self.search_at(params, Local::now().year())
    }

    /// Searches with raw query parameters and an explicit current year.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::InvalidFilter`] only under
    /// [`MalformedFilterPolicy::Reject`].
    pub fn search_at(
        &self,
        params: &HashMap<String, String>,
        current_year: i32,
    ) -> QueryResult<Vec<&Employee>> {
        let filters = FilterSet::from_params(params);

        if let Some((parameter, error)) = filters.malformed().next() {
            match self.policy {
                MalformedFilterPolicy::Reject => {
                    return Err(QueryError::InvalidFilter {
                        parameter,
                        source: error.clone(),
                    });
                }
                MalformedFilterPolicy::ExcludeAll => {
                    warn!(
                        parameter,
                        error = %error,
                        "Malformed comparison filter matches no employees"
                    );
                }
            }
        }

        let matches = filter(self.source.employees(), &filters, current_year);
        debug!(
            predicates = filters.len(),
            matched = matches.len(),
            "Search completed"
        );
        Ok(matches)
    }

    /// Returns the employees of one department, ignoring case.
    ///
    /// An unknown department yields an empty list.
    pub fn by_department(&self, department: &str) -> Vec<&Employee> {
        let filters = FilterSet::department(department);
        // Department matching never reads the year
        let matches = filter(self.source.employees(), &filters, 0);
        debug!(
            department = %department,
            matched = matches.len(),
            "Department lookup completed"
        );
        matches
    }

    /// Looks up one employee by a textual identifier.
    ///
    /// # Errors
    ///
    /// - [`QueryError::InvalidId`] if `raw` is not an integer
    /// - [`QueryError::NotFound`] if no employee has that id
    pub fn by_id(&self, raw: &str) -> QueryResult<&Employee> {
        let id: i64 = raw.parse().map_err(|_| QueryError::InvalidId {
            value: raw.to_string(),
        })?;

        u32::try_from(id)
            .ok()
            .and_then(|id| self.source.get(id))
            .ok_or(QueryError::NotFound { id })
    }
}
