//! Immutable in-memory employee store.

use std::collections::HashSet;
use std::path::Path;

use tracing::{debug, info};

use crate::error::{StoreError, StoreResult};
use crate::generator::{GeneratorConfig, generate_employees};
use crate::snapshot::load_snapshot;
use crate::source::EmployeeSource;
use crate::types::Employee;

/// A `Vec`-backed [`EmployeeSource`].
///
/// The collection is fixed at construction. There are no mutating methods, so
/// an `Arc<InMemoryStore>` can be handed to any number of concurrent readers.
///
/// # Example
///
/// ```
/// use roster_store::{Employee, EmployeeSource, InMemoryStore};
///
/// let store = InMemoryStore::new(vec![
///     Employee { id: 1, ..Default::default() },
///     Employee { id: 2, ..Default::default() },
/// ])
/// .unwrap();
///
/// assert_eq!(store.len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    employees: Vec<Employee>,
}

impl InMemoryStore {
    /// Creates a store from an existing collection.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::DuplicateId`] if two records share an id.
    pub fn new(employees: Vec<Employee>) -> StoreResult<Self> {
        let mut seen = HashSet::with_capacity(employees.len());
        for employee in &employees {
            if !seen.insert(employee.id) {
                return Err(StoreError::DuplicateId { id: employee.id });
            }
        }

        debug!(count = employees.len(), "Created in-memory store");
        Ok(Self { employees })
    }

    /// Generates a fresh synthetic collection.
    pub fn generate(config: &GeneratorConfig) -> StoreResult<Self> {
        let employees = generate_employees(config)?;
        Self::new(employees)
    }

    /// Loads a collection previously written with
    /// [`save_snapshot`](crate::snapshot::save_snapshot).
    pub fn from_snapshot(path: impl AsRef<Path>) -> StoreResult<Self> {
        let path = path.as_ref();
        let employees = load_snapshot(path)?;
        info!(
            path = %path.display(),
            count = employees.len(),
            "Loaded employees from snapshot"
        );
        Self::new(employees)
    }
}

impl EmployeeSource for InMemoryStore {
    fn backend_name(&self) -> &'static str {
        "memory"
    }

    fn employees(&self) -> &[Employee] {
        &self.employees
    }
}
