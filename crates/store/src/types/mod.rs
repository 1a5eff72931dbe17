//! Record types held by the store.

mod employee;

pub use employee::Employee;
