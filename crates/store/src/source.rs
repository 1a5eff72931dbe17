//! The read-only record source trait.
//!
//! The query layer is written against [`EmployeeSource`] rather than a
//! concrete store, so any immutable collection can be served.

use crate::types::Employee;

/// Read-only access to an immutable collection of employees.
///
/// Implementations must return the same records, in the same order, for the
/// lifetime of the value. Because nothing is ever mutated, a source can be
/// shared across request handlers behind an `Arc` without locking.
pub trait EmployeeSource: Send + Sync {
    /// Returns a human-readable name for this source.
    fn backend_name(&self) -> &'static str;

    /// Returns all employees in generation order.
    fn employees(&self) -> &[Employee];

    /// Returns the employee with the given identifier, if any.
    ///
    /// The default implementation is a linear scan.
    fn get(&self, id: u32) -> Option<&Employee> {
        self.employees().iter().find(|employee| employee.id == id)
    }

    /// Returns the number of employees.
    fn len(&self) -> usize {
        self.employees().len()
    }

    /// Returns true if the source holds no employees.
    fn is_empty(&self) -> bool {
        self.employees().is_empty()
    }
}
