//! Storage abstraction for todo items.
//!
//! Provides the [`TodoStore`] trait defining the storage contract that all
//! backends implement, plus [`SqliteStore`] and [`InMemoryStore`] as
//! first-class backends.
//!
//! # Modules
//!
//! - [`error`]: StorageError enum with all failure modes
//! - [`types`]: TodoId, TodoItem, TodoDraft storage-layer types
//! - [`traits`]: TodoStore trait definition
//! - [`schema`]: SQL schema constants and migration setup
//! - [`sqlite`]: SqliteStore implementation
//! - [`memory`]: InMemoryStore implementation
//! - [`seed`]: idempotent startup seed routine

pub mod error;
pub mod memory;
pub mod schema;
pub mod seed;
pub mod sqlite;
pub mod traits;
pub mod types;

// Re-export key types for ergonomic use.
pub use error::StorageError;
pub use memory::InMemoryStore;
pub use sqlite::SqliteStore;
pub use traits::TodoStore;
pub use types::{TodoDraft, TodoId, TodoItem};
