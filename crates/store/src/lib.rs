//! Roster record store.
//!
//! This crate owns the employee records served by Roster. Records are produced
//! once at startup, either by the synthetic [`generator`] or by loading a JSON
//! [`snapshot`], and are never mutated afterwards.
//!
//! # Architecture
//!
//! - [`types`] - The [`Employee`] record
//! - [`error`] - Error types for generation, snapshots and store construction
//! - [`source`] - The [`EmployeeSource`] trait consumed by the query layer
//! - [`memory`] - [`InMemoryStore`], the immutable `Vec`-backed source
//! - [`generator`] - Synthetic employee generation
//! - [`snapshot`] - Pretty-printed JSON snapshot files
//!
//! # Quick Start
//!
//! ```
//! use roster_store::{EmployeeSource, GeneratorConfig, InMemoryStore};
//!
//! let config = GeneratorConfig {
//!     count: 10,
//!     seed: Some(7),
//!     ..Default::default()
//! };
//! let store = InMemoryStore::generate(&config).unwrap();
//!
//! assert_eq!(store.employees().len(), 10);
//! assert_eq!(store.get(1).map(|e| e.id), Some(1));
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod generator;
pub mod memory;
pub mod snapshot;
pub mod source;
pub mod types;

pub use error::{StoreError, StoreResult};
pub use generator::{GeneratorConfig, generate_employees};
pub use memory::InMemoryStore;
pub use snapshot::{load_snapshot, save_snapshot};
pub use source::EmployeeSource;
pub use types::Employee;

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
