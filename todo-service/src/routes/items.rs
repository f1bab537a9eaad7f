//! Handlers for `/todos/{note_id}/items` and `/todos/items/{item_id}`

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json;
use std::sync::Arc;
use todo_notes_types::{CreateItemRequest, TodoItem, UpdateItemRequest};

use super::AppState;
use super::extract::{IdPath, JsonBody};
use crate::error::AppError;
use crate::validate;

// GET /todos/{note_id}/items
pub async fn list_items(
    State(state): State<Arc<AppState>>,
    IdPath(note_id): IdPath<i64>,
) -> Result<Json<Vec<TodoItem>>, AppError> {
    state
        .db
        .list_items(note_id)?
        .map(Json)
        .ok_or_else(|| AppError::note_not_found(note_id))
}

// POST /todos/{note_id}/items
pub async fn create_item(
    State(state): State<Arc<AppState>>,
    IdPath(note_id): IdPath<i64>,
    JsonBody(req): JsonBody<CreateItemRequest>,
) -> Result<(StatusCode, Json<TodoItem>), AppError> {
    let input = validate::new_item(req)?;
    let item = state
        .db
        .create_item(note_id, &input.task)?
        .ok_or_else(|| AppError::note_not_found(note_id))?;
    Ok((StatusCode::CREATED, Json(item)))
}

// DELETE /todos/{note_id}/items
pub async fn delete_items(
    State(state): State<Arc<AppState>>,
    IdPath(note_id): IdPath<i64>,
) -> Result<StatusCode, AppError> {
    state
        .db
        .delete_items_in_note(note_id)?
        .ok_or_else(|| AppError::note_not_found(note_id))?;
    Ok(StatusCode::NO_CONTENT)
}

// GET /todos/items/{item_id}
pub async fn get_item(
    State(state): State<Arc<AppState>>,
    IdPath(item_id): IdPath<i64>,
) -> Result<Json<TodoItem>, AppError> {
    state
        .db
        .get_item(item_id)?
        .map(Json)
        .ok_or_else(|| AppError::item_not_found(item_id))
}

// PUT /todos/items/{item_id}
// An omitted `completed` resets the flag to false.
pub async fn update_item(
    State(state): State<Arc<AppState>>,
    IdPath(item_id): IdPath<i64>,
    JsonBody(req): JsonBody<UpdateItemRequest>,
) -> Result<(StatusCode, Json<TodoItem>), AppError> {
    let changes = validate::item_changes(req);
    let item = state
        .db
        .update_item(item_id, changes.task.as_deref(), changes.completed)?
        .ok_or_else(|| AppError::item_not_found(item_id))?;
    Ok((StatusCode::CREATED, Json(item)))
}

// DELETE /todos/items/{item_id}
pub async fn delete_item(
    State(state): State<Arc<AppState>>,
    IdPath(item_id): IdPath<i64>,
) -> Result<StatusCode, AppError> {
    if !state.db.delete_item(item_id)? {
        return Err(AppError::item_not_found(item_id));
    }
    Ok(StatusCode::NO_CONTENT)
}
