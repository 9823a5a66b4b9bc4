//! Error types for the content store.

use thiserror::Error;

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, StoreError>;

/// Errors that can occur while querying the content store.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Underlying SQLite error (open, prepare, bind, or row decode).
    #[error("database error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}
