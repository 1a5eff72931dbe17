//! Error types for the record store.

// Error enum variant fields are self-documenting via their #[error(...)] messages
#![allow(missing_docs)]

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while building or persisting the record collection.
///
/// None of these can occur once a store has been constructed: lookups on an
/// existing store are infallible.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Reading or writing a snapshot file failed.
    #[error("snapshot I/O failed for {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Snapshot contents could not be encoded or decoded.
    #[error("snapshot serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Two records share an identifier.
    #[error("duplicate employee id: {id}")]
    DuplicateId { id: u32 },

    /// A generator year range is empty or not representable as dates.
    #[error("invalid {field} year range: {start}..{end}")]
    InvalidYearRange {
        field: &'static str,
        start: i32,
        end: i32,
    },
}

/// Result type alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
