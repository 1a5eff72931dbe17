//! JSON snapshot files.
//!
//! A snapshot is the full record collection written as a pretty-printed JSON
//! array (two-space indent). It is an export artifact: the query layer never
//! reads it, but a snapshot can seed an [`InMemoryStore`](crate::InMemoryStore)
//! in place of generation.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{StoreError, StoreResult};
use crate::types::Employee;

/// Writes `employees` to `path`, replacing any existing file.
pub fn save_snapshot(employees: &[Employee], path: impl AsRef<Path>) -> StoreResult<()> {
    let path = path.as_ref();
    let json = serde_json::to_string_pretty(employees)?;

    fs::write(path, json).map_err(|source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    info!(
        path = %path.display(),
        count = employees.len(),
        "Saved employee snapshot"
    );
    Ok(())
}

/// Reads a snapshot written by [`save_snapshot`].
pub fn load_snapshot(path: impl AsRef<Path>) -> StoreResult<Vec<Employee>> {
    let path = path.as_ref();
    let json = fs::read_to_string(path).map_err(|source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(serde_json::from_str(&json)?)
}
