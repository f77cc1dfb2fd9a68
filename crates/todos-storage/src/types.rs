//! Storage-layer types for todo identity and records.
//!
//! [`TodoId`] is defined here because item identity is a storage concern --
//! a todo only gains an ID when persisted.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Unique identifier for a stored todo item.
///
/// The inner `i64` aligns with SQLite's `INTEGER PRIMARY KEY`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TodoId(pub i64);

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A persisted todo item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoItem {
    /// Identifier assigned by the store at creation time.
    pub id: TodoId,
    /// Task label.
    pub name: String,
    /// Completion flag.
    pub is_complete: bool,
}

/// The caller-side shape of a todo before it is persisted.
///
/// Carries no ID: the store assigns one on create, and any ID supplied by
/// an external caller is discarded before a draft is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoDraft {
    /// Task label.
    pub name: String,
    /// Completion flag.
    pub is_complete: bool,
}
