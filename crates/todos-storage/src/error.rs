//! Storage error types for todos-storage.
//!
//! [`StorageError`] covers the anticipated failure modes in the storage
//! layer: database faults and migration failures. A missing todo is not an
//! error -- lookups return `Option` instead.

use thiserror::Error;

/// Errors produced by storage operations.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The underlying SQLite call failed (connectivity, constraint
    /// violation, corrupt database).
    #[error("database error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// Applying schema migrations failed.
    #[error("migration error: {0}")]
    Migration(String),
}
