//! HTTP handlers for the todo API.
//!
//! Handlers are thin: validate the request as the first step, acquire the
//! store lock, delegate one call to [`todos_storage::TodoStore`], and map
//! the outcome to a JSON response. No business logic lives here.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Json;

use todos_storage::{TodoDraft, TodoId, TodoItem};

use crate::error::ApiError;
use crate::schema::TodoPayload;
use crate::state::AppState;

/// Unwraps the body extraction for write endpoints: a JSON `null` body and
/// an unparseable body are both client errors, reported before any
/// validation or storage work.
fn require_body(
    payload: Result<Json<Option<TodoPayload>>, JsonRejection>,
) -> Result<TodoPayload, ApiError> {
    match payload {
        Ok(Json(Some(payload))) => Ok(payload),
        Ok(Json(None)) => {
            tracing::warn!("request body is null");
            Err(ApiError::BadRequest("Request body is null.".to_string()))
        }
        Err(rejection) => {
            tracing::warn!(error = %rejection.body_text(), "request body rejected");
            Err(ApiError::BadRequest(rejection.body_text()))
        }
    }
}

/// Lists all todo items.
///
/// `GET /api/todoitem`
pub async fn list_todos(
    State(state): State<AppState>,
) -> Result<Json<Vec<TodoItem>>, ApiError> {
    tracing::info!("list todos endpoint called");
    let store = state.store.lock().await;
    let items = store.list_all()?;
    tracing::info!(count = items.len(), "retrieved todo items");
    Ok(Json(items))
}

/// Fetches a single todo item by ID.
///
/// `GET /api/todoitem/{id}`
pub async fn get_todo(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<TodoItem>, ApiError> {
    tracing::info!(id, "get todo endpoint called");
    let store = state.store.lock().await;
    match store.get_by_id(TodoId(id))? {
        Some(item) => Ok(Json(item)),
        None => {
            tracing::warn!(id, "todo item not found");
            Err(ApiError::todo_not_found(id))
        }
    }
}

/// Creates a new todo item.
///
/// `POST /api/todoitem`. Any ID in the body is ignored; the store assigns
/// one. Responds 201 with a `Location` header for the new item.
pub async fn create_todo(
    State(state): State<AppState>,
    payload: Result<Json<Option<TodoPayload>>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    tracing::info!("create todo endpoint called");
    let draft = require_body(payload)?.validate()?;

    let mut store = state.store.lock().await;
    let item = store.create(&draft)?;
    tracing::info!(id = %item.id, "todo item created");

    let location = format!("/api/todoitem/{}", item.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(item),
    ))
}

/// Replaces the full record of an existing todo item.
///
/// `PUT /api/todoitem/{id}`. The target ID comes from the path; an ID in
/// the body is ignored. Responds 404 when no item with that ID exists
/// (no upsert).
pub async fn update_todo(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    payload: Result<Json<Option<TodoPayload>>, JsonRejection>,
) -> Result<Json<TodoItem>, ApiError> {
    tracing::info!(id, "update todo endpoint called");
    let TodoDraft { name, is_complete } = require_body(payload)?.validate()?;

    let item = TodoItem {
        id: TodoId(id),
        name,
        is_complete,
    };
    let mut store = state.store.lock().await;
    if !store.update(&item)? {
        tracing::warn!(id, "todo item not found, nothing updated");
        return Err(ApiError::todo_not_found(id));
    }
    tracing::info!(id, "todo item updated");
    Ok(Json(item))
}

/// Deletes a todo item by ID.
///
/// `DELETE /api/todoitem/{id}`. Deleting an absent ID is a logged no-op;
/// the response is 204 either way.
pub async fn delete_todo(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    tracing::info!(id, "delete todo endpoint called");
    let mut store = state.store.lock().await;
    if store.delete_by_id(TodoId(id))? {
        tracing::info!(id, "todo item deleted");
    } else {
        tracing::warn!(id, "todo item not found, nothing deleted");
    }
    Ok(StatusCode::NO_CONTENT)
}
