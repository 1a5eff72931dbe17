//! # roster-query - Employee filtering engine
//!
//! Parses ad-hoc comparison expressions from request parameters and applies
//! multi-field predicates over an immutable [`EmployeeSource`].
//!
//! ## Parameters
//!
//! | Parameter | Field | Match |
//! |-----------|-------|-------|
//! | `department` | department | case-insensitive exact |
//! | `job_title` | job title | case-insensitive exact |
//! | `name` | name | case-insensitive substring |
//! | `years_of_service` | current year - hire year | comparison |
//! | `salary` | salary | comparison |
//!
//! Comparison values are an operator (`>=`, `<=`, `>`, `<`, `=`) followed by a
//! number, e.g. `salary=>=60000`. All supplied parameters must match. An empty
//! or missing parameter places no constraint on the result.
//!
//! ## Malformed comparisons
//!
//! By default a comparison that does not parse matches no record, so the
//! whole search returns an empty list rather than failing
//! ([`MalformedFilterPolicy::ExcludeAll`]). Consumers that prefer an explicit
//! error can opt into [`MalformedFilterPolicy::Reject`].
//!
//! ## Example
//!
//! ```
//! use std::collections::HashMap;
//! use std::sync::Arc;
//!
//! use roster_query::EmployeeQuery;
//! use roster_store::{GeneratorConfig, InMemoryStore};
//!
//! let store = InMemoryStore::generate(&GeneratorConfig {
//!     count: 20,
//!     seed: Some(3),
//!     ..Default::default()
//! })
//! .unwrap();
//! let query = EmployeeQuery::new(Arc::new(store));
//!
//! let params = HashMap::from([("salary".to_string(), ">=60000".to_string())]);
//! let matches = query.search(&params).unwrap();
//! assert!(matches.iter().all(|e| e.salary >= 60000.0));
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod condition;
pub mod error;
pub mod evaluator;
pub mod filter;
pub mod query;

pub use condition::{Condition, Operator, parse};
pub use error::{ConditionParseError, QueryError, QueryResult};
pub use evaluator::evaluate;
pub use filter::{FieldPredicate, FilterSet, NumericFilter, filter};
pub use query::{EmployeeQuery, MalformedFilterPolicy};

pub use roster_store::{Employee, EmployeeSource};
