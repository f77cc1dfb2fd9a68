//! Request payload types for the todo API.
//!
//! [`TodoPayload`] is the write-side body shape for create and update.
//! Fields are optional at the serde level so that field validation can
//! produce structured per-field errors instead of a bare parse failure.

use std::collections::BTreeMap;

use serde::Deserialize;

use todos_storage::TodoDraft;

use crate::error::ApiError;

/// Body of `POST /api/todoitem` and `PUT /api/todoitem/{id}`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoPayload {
    /// Ignored: IDs are assigned by the store (create) or taken from the
    /// path (update), never from the body.
    #[serde(default)]
    pub id: Option<i64>,
    /// Task label, required and non-empty.
    #[serde(default)]
    pub name: Option<String>,
    /// Completion flag, defaults to false.
    #[serde(default)]
    pub is_complete: bool,
}

impl TodoPayload {
    /// Validates field constraints and converts to a storage draft.
    ///
    /// Runs before any storage call; a failure here never reaches the
    /// store.
    pub fn validate(self) -> Result<TodoDraft, ApiError> {
        let mut errors: BTreeMap<String, Vec<String>> = BTreeMap::new();

        let name = self.name.unwrap_or_default();
        if name.trim().is_empty() {
            errors
                .entry("name".to_string())
                .or_default()
                .push("The name field is required.".to_string());
        }

        if !errors.is_empty() {
            return Err(ApiError::Validation(errors));
        }

        Ok(TodoDraft {
            name,
            is_complete: self.is_complete,
        })
    }
}
