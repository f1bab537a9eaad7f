//! Handlers for `/todos` and `/todos/{note_id}`

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json;
use std::sync::Arc;
use todo_notes_types::{NoteRequest, TodoNote};

use super::AppState;
use super::extract::{IdPath, JsonBody};
use crate::error::AppError;
use crate::validate;

// GET /todos
pub async fn list_notes(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<TodoNote>>, AppError> {
    Ok(Json(state.db.list_notes()?))
}

// POST /todos
pub async fn create_note(
    State(state): State<Arc<AppState>>,
    JsonBody(req): JsonBody<NoteRequest>,
) -> Result<(StatusCode, Json<TodoNote>), AppError> {
    let input = validate::new_note(req)?;
    let note = state.db.create_note(&input.title)?;
    Ok((StatusCode::CREATED, Json(note)))
}

// DELETE /todos
pub async fn delete_all_notes(State(state): State<Arc<AppState>>) -> Result<StatusCode, AppError> {
    state.db.delete_all_notes()?;
    Ok(StatusCode::NO_CONTENT)
}

// GET /todos/{note_id}
pub async fn get_note(
    State(state): State<Arc<AppState>>,
    IdPath(note_id): IdPath<i64>,
) -> Result<Json<TodoNote>, AppError> {
    state
        .db
        .get_note(note_id)?
        .map(Json)
        .ok_or_else(|| AppError::note_not_found(note_id))
}

// PUT /todos/{note_id}
// Answers 201 rather than 200; existing clients expect it.
pub async fn update_note(
    State(state): State<Arc<AppState>>,
    IdPath(note_id): IdPath<i64>,
    JsonBody(req): JsonBody<NoteRequest>,
) -> Result<(StatusCode, Json<TodoNote>), AppError> {
    let changes = validate::note_changes(req);
    let note = state
        .db
        .update_note(note_id, changes.title.as_deref())?
        .ok_or_else(|| AppError::note_not_found(note_id))?;
    Ok((StatusCode::CREATED, Json(note)))
}

// DELETE /todos/{note_id}
pub async fn delete_note(
    State(state): State<Arc<AppState>>,
    IdPath(note_id): IdPath<i64>,
) -> Result<StatusCode, AppError> {
    if !state.db.delete_note(note_id)? {
        return Err(AppError::note_not_found(note_id));
    }
    Ok(StatusCode::NO_CONTENT)
}

// PUT /todos/{note_id}/completed
pub async fn complete_note(
    State(state): State<Arc<AppState>>,
    IdPath(note_id): IdPath<i64>,
) -> Result<(StatusCode, Json<TodoNote>), AppError> {
    let note = state
        .db
        .complete_all_items(note_id)?
        .ok_or_else(|| AppError::note_not_found(note_id))?;
    Ok((StatusCode::CREATED, Json(note)))
}
