//! The [`TodoStore`] trait defining the storage contract for todo items.
//!
//! Each method performs exactly one store operation. All backends
//! (InMemoryStore, SqliteStore) implement this trait with identical
//! semantics, ensuring they are fully swappable without changing the
//! HTTP layer.

use crate::error::StorageError;
use crate::types::{TodoDraft, TodoId, TodoItem};

/// The storage contract for todo items.
///
/// The trait is synchronous (not async): every backend performs one
/// in-process call per method, and the server serializes access behind an
/// async-aware mutex.
pub trait TodoStore {
    /// Returns every persisted item, in storage order.
    ///
    /// The order is stable for unchanged data but otherwise unspecified.
    fn list_all(&self) -> Result<Vec<TodoItem>, StorageError>;

    /// Returns the item with the given ID, or `None` if absent.
    ///
    /// Absence is a normal outcome, never an error.
    fn get_by_id(&self, id: TodoId) -> Result<Option<TodoItem>, StorageError>;

    /// Persists a new item, assigning it a fresh unique ID.
    ///
    /// Returns the stored record including the assigned ID. IDs are never
    /// reused within a store's lifetime, even after deletes.
    fn create(&mut self, draft: &TodoDraft) -> Result<TodoItem, StorageError>;

    /// Replaces the full record whose ID matches `item.id`.
    ///
    /// Returns `true` if a record was replaced, `false` if no record with
    /// that ID exists. Never an upsert.
    fn update(&mut self, item: &TodoItem) -> Result<bool, StorageError>;

    /// Removes the record with the given ID, if present.
    ///
    /// Returns `true` if a record was removed. A missing ID is a
    /// deliberate no-op reported as `false`, not an error.
    fn delete_by_id(&mut self, id: TodoId) -> Result<bool, StorageError>;
}
