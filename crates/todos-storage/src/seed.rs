//! Idempotent startup seed for an empty store.
//!
//! Invoked by the server binary at startup (unless disabled); not part of
//! the storage contract itself.

use crate::error::StorageError;
use crate::traits::TodoStore;
use crate::types::TodoDraft;

/// The fixed example items inserted into an empty store.
fn example_items() -> Vec<TodoDraft> {
    vec![
        TodoDraft {
            name: "Learn axum".to_string(),
            is_complete: false,
        },
        TodoDraft {
            name: "Build a todo API".to_string(),
            is_complete: false,
        },
        TodoDraft {
            name: "Explore rusqlite".to_string(),
            is_complete: true,
        },
    ]
}

/// Inserts the example items if the store holds zero items.
///
/// Returns how many items were inserted: zero when the store was already
/// populated, making repeat invocations idempotent.
pub fn seed_if_empty<S: TodoStore + ?Sized>(store: &mut S) -> Result<usize, StorageError> {
    if !store.list_all()?.is_empty() {
        tracing::info!("store already has todo items, skipping seed");
        return Ok(0);
    }

    let items = example_items();
    for draft in &items {
        store.create(draft)?;
    }
    tracing::info!(count = items.len(), "seeded example todo items");
    Ok(items.len())
}
