//! In-memory implementation of [`TodoStore`].
//!
//! [`InMemoryStore`] is a first-class backend for tests and ephemeral use.
//! It keeps items in a `BTreeMap` keyed by ID (matching the SQLite
//! backend's id-ordered listing) and assigns IDs from a monotonically
//! increasing counter so deleted IDs are never reused.

use std::collections::BTreeMap;

use crate::error::StorageError;
use crate::traits::TodoStore;
use crate::types::{TodoDraft, TodoId, TodoItem};

/// In-memory backend with identical semantics to [`crate::SqliteStore`].
#[derive(Debug)]
pub struct InMemoryStore {
    items: BTreeMap<TodoId, TodoItem>,
    next_id: i64,
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryStore {
    /// Creates an empty store. The first assigned ID is 1, matching
    /// SQLite's rowid behavior.
    pub fn new() -> Self {
        InMemoryStore {
            items: BTreeMap::new(),
            next_id: 1,
        }
    }
}

impl TodoStore for InMemoryStore {
    fn list_all(&self) -> Result<Vec<TodoItem>, StorageError> {
        let items: Vec<TodoItem> = self.items.values().cloned().collect();
        tracing::info!(count = items.len(), "retrieved todo items from memory");
        Ok(items)
    }

    fn get_by_id(&self, id: TodoId) -> Result<Option<TodoItem>, StorageError> {
        let item = self.items.get(&id).cloned();
        if item.is_none() {
            tracing::warn!(%id, "todo item not found in memory");
        }
        Ok(item)
    }

    fn create(&mut self, draft: &TodoDraft) -> Result<TodoItem, StorageError> {
        let id = TodoId(self.next_id);
        self.next_id += 1;
        let item = TodoItem {
            id,
            name: draft.name.clone(),
            is_complete: draft.is_complete,
        };
        self.items.insert(id, item.clone());
        tracing::info!(%id, "new todo item added to memory");
        Ok(item)
    }

    fn update(&mut self, item: &TodoItem) -> Result<bool, StorageError> {
        match self.items.get_mut(&item.id) {
            Some(stored) => {
                *stored = item.clone();
                tracing::info!(id = %item.id, "todo item updated in memory");
                Ok(true)
            }
            None => {
                tracing::warn!(id = %item.id, "todo item not found in memory, nothing updated");
                Ok(false)
            }
        }
    }

    fn delete_by_id(&mut self, id: TodoId) -> Result<bool, StorageError> {
        let removed = self.items.remove(&id).is_some();
        if removed {
            tracing::info!(%id, "todo item deleted from memory");
        } else {
            tracing::warn!(%id, "todo item not found in memory, nothing deleted");
        }
        Ok(removed)
    }
}
