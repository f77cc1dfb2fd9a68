//! Application state holding the injected storage backend.
//!
//! [`AppState`] wraps the store in `Arc<tokio::sync::Mutex<>>` for use
//! with axum handlers. The mutex is async-aware so handlers await the
//! lock without blocking the tokio runtime; `tokio::sync::RwLock` would
//! allow concurrent reads, but `rusqlite::Connection` is `!Sync`, which
//! rules it out for the SQLite backend.

use std::sync::Arc;

use todos_storage::{InMemoryStore, SqliteStore, TodoStore};

use crate::error::ApiError;

/// The injected storage backend, shared across handler tasks.
///
/// Holding the trait object rather than a concrete store keeps handlers
/// agnostic of the backend; tests inject [`InMemoryStore`].
pub type SharedStore = Arc<tokio::sync::Mutex<dyn TodoStore + Send>>;

/// Shared application state for the HTTP server.
#[derive(Clone)]
pub struct AppState {
    /// The shared todo store (async Mutex -- non-blocking await).
    pub store: SharedStore,
}

impl AppState {
    /// Creates an `AppState` around any storage backend.
    pub fn with_store<S>(store: S) -> Self
    where
        S: TodoStore + Send + 'static,
    {
        let store: SharedStore = Arc::new(tokio::sync::Mutex::new(store));
        AppState { store }
    }

    /// Creates an `AppState` backed by a SQLite database at `db_path`.
    pub fn new(db_path: &str) -> Result<Self, ApiError> {
        let store = SqliteStore::new(db_path)?;
        Ok(Self::with_store(store))
    }

    /// Creates an `AppState` backed by an in-memory store (for testing).
    pub fn in_memory() -> Self {
        Self::with_store(InMemoryStore::new())
    }
}
