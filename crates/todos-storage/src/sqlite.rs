//! SQLite implementation of [`TodoStore`].
//!
//! [`SqliteStore`] persists todo items in a SQLite database with WAL mode
//! and automatic schema migrations. Every operation is a single SQL
//! statement; rusqlite wraps each in its own implicit transaction.

use rusqlite::{params, Connection, OptionalExtension, Row};

use crate::error::StorageError;
use crate::traits::TodoStore;
use crate::types::{TodoDraft, TodoId, TodoItem};

/// SQLite-backed implementation of [`TodoStore`].
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Opens (or creates) a SQLite database at `path`.
    pub fn new(path: &str) -> Result<Self, StorageError> {
        let conn = crate::schema::open_database(path)?;
        Ok(SqliteStore { conn })
    }

    /// Opens an in-memory SQLite database (for testing).
    pub fn in_memory() -> Result<Self, StorageError> {
        let conn = crate::schema::open_in_memory()?;
        Ok(SqliteStore { conn })
    }

    /// Maps a `todo_items` row (id, name, is_complete) to a [`TodoItem`].
    fn row_to_item(row: &Row<'_>) -> rusqlite::Result<TodoItem> {
        Ok(TodoItem {
            id: TodoId(row.get(0)?),
            name: row.get(1)?,
            is_complete: row.get(2)?,
        })
    }
}

impl TodoStore for SqliteStore {
    fn list_all(&self) -> Result<Vec<TodoItem>, StorageError> {
        tracing::info!("fetching todo items from database");
        let mut stmt = self
            .conn
            .prepare_cached("SELECT id, name, is_complete FROM todo_items ORDER BY id")?;
        let items = stmt
            .query_map([], Self::row_to_item)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        tracing::info!(count = items.len(), "retrieved todo items from database");
        Ok(items)
    }

    fn get_by_id(&self, id: TodoId) -> Result<Option<TodoItem>, StorageError> {
        tracing::info!(%id, "fetching todo item from database");
        let item = self
            .conn
            .query_row(
                "SELECT id, name, is_complete FROM todo_items WHERE id = ?1",
                params![id.0],
                Self::row_to_item,
            )
            .optional()?;
        if item.is_none() {
            tracing::warn!(%id, "todo item not found in database");
        }
        Ok(item)
    }

    fn create(&mut self, draft: &TodoDraft) -> Result<TodoItem, StorageError> {
        tracing::info!("adding new todo item to database");
        self.conn.execute(
            "INSERT INTO todo_items (name, is_complete) VALUES (?1, ?2)",
            params![draft.name, draft.is_complete],
        )?;
        let id = TodoId(self.conn.last_insert_rowid());
        tracing::info!(%id, "new todo item added to database");
        Ok(TodoItem {
            id,
            name: draft.name.clone(),
            is_complete: draft.is_complete,
        })
    }

    fn update(&mut self, item: &TodoItem) -> Result<bool, StorageError> {
        tracing::info!(id = %item.id, "updating todo item in database");
        let changed = self.conn.execute(
            "UPDATE todo_items SET name = ?2, is_complete = ?3 WHERE id = ?1",
            params![item.id.0, item.name, item.is_complete],
        )?;
        if changed == 0 {
            tracing::warn!(id = %item.id, "todo item not found in database, nothing updated");
        } else {
            tracing::info!(id = %item.id, "todo item updated in database");
        }
        Ok(changed > 0)
    }

    fn delete_by_id(&mut self, id: TodoId) -> Result<bool, StorageError> {
        tracing::info!(%id, "deleting todo item from database");
        let removed = self
            .conn
            .execute("DELETE FROM todo_items WHERE id = ?1", params![id.0])?;
        if removed == 0 {
            tracing::warn!(%id, "todo item not found in database, nothing deleted");
        } else {
            tracing::info!(%id, "todo item deleted from database");
        }
        Ok(removed > 0)
    }
}
