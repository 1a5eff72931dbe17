//! HTTP request handlers for the employee API.
//!
//! - [`search`] - List employees, optionally filtered by query parameters
//! - [`read`] - Read one employee by ID
//! - [`department`] - List the employees of a department
//! - [`health`] - Health check endpoints

pub mod department;
pub mod health;
pub mod read;
pub mod search;

// Re-export handlers for convenience
pub use department::department_handler;
pub use health::health_handler;
pub use read::read_handler;
pub use search::search_handler;
