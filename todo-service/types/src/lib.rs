//! Shared types for the todo notes service and its HTTP clients.

use serde::{Deserialize, Deserializer, Serialize};

// =====================================================
// Request Types
// =====================================================

/// Body of `POST /todos` and `PUT /todos/{note_id}`
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct NoteRequest {
    /// Title of the note (required on create)
    #[serde(default)]
    pub title: Option<String>,
}

/// Body of `POST /todos/{note_id}/items`
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct CreateItemRequest {
    /// Task description (required)
    #[serde(default)]
    pub task: Option<String>,
}

/// Body of `PUT /todos/items/{item_id}`
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct UpdateItemRequest {
    #[serde(default)]
    pub task: Option<String>,
    /// Accepts `true`/`false` or a string; strings are `true` only when they
    /// read "true" in any case.
    #[serde(default, deserialize_with = "deserialize_flag")]
    pub completed: Option<bool>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Flag {
    Bool(bool),
    Text(String),
}

fn deserialize_flag<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    let flag: Option<Flag> = Option::deserialize(deserializer)?;
    Ok(flag.map(|f| match f {
        Flag::Bool(b) => b,
        Flag::Text(s) => s.eq_ignore_ascii_case("true"),
    }))
}

// =====================================================
// Response Types
// =====================================================

/// A single task entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    pub id: i64,
    pub task: String,
    pub completed: bool,
}

/// A named list of items
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoNote {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub items: Vec<TodoItem>,
}

/// Error body returned with every 4xx/5xx response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub message: String,
}
