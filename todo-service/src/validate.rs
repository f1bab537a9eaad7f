//! Request bodies checked into typed inputs before any store access.

use todo_notes_types::{CreateItemRequest, NoteRequest, UpdateItemRequest};

use crate::error::AppError;

#[derive(Debug, PartialEq, Eq)]
pub struct NewNote {
    pub title: String,
}

#[derive(Debug, PartialEq, Eq)]
pub struct NoteChanges {
    pub title: Option<String>,
}

#[derive(Debug, PartialEq, Eq)]
pub struct NewItem {
    pub task: String,
}

/// `completed` is always written; a missing flag means `false`.
#[derive(Debug, PartialEq, Eq)]
pub struct ItemChanges {
    pub task: Option<String>,
    pub completed: bool,
}

/// Empty strings count as absent.
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

pub fn new_note(req: NoteRequest) -> Result<NewNote, AppError> {
    non_empty(req.title)
        .map(|title| NewNote { title })
        .ok_or_else(|| AppError::Validation("Title of the Todo Note is required".to_string()))
}

pub fn note_changes(req: NoteRequest) -> NoteChanges {
    NoteChanges {
        title: non_empty(req.title),
    }
}

pub fn new_item(req: CreateItemRequest) -> Result<NewItem, AppError> {
    non_empty(req.task)
        .map(|task| NewItem { task })
        .ok_or_else(|| AppError::Validation("Task of the Todo Item is required".to_string()))
}

pub fn item_changes(req: UpdateItemRequest) -> ItemChanges {
    ItemChanges {
        task: non_empty(req.task),
        completed: req.completed.unwrap_or(false),
    }
}
