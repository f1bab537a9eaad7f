//! Note table operations

use rusqlite::{Connection, OptionalExtension, Result as SqliteResult, Row, params};
use std::collections::HashMap;
use todo_notes_types::{TodoItem, TodoNote};

use crate::db::Database;

pub(super) fn item_from_row(row: &Row<'_>) -> SqliteResult<TodoItem> {
    Ok(TodoItem {
        id: row.get(0)?,
        task: row.get(1)?,
        completed: row.get(2)?,
    })
}

pub(super) fn note_exists(conn: &Connection, note_id: i64) -> SqliteResult<bool> {
    let count: i64 = conn.query_row(
        "SELECT COUNT(*) FROM note WHERE id = ?1",
        params![note_id],
        |row| row.get(0),
    )?;
    Ok(count > 0)
}

/// Items of a note in insertion order
pub(super) fn load_items(conn: &Connection, note_id: i64) -> SqliteResult<Vec<TodoItem>> {
    let mut stmt = conn.prepare(
        "SELECT id, task, completed FROM item WHERE note_id = ?1 ORDER BY id",
    )?;
    let rows = stmt.query_map(params![note_id], item_from_row)?;
    rows.collect()
}

pub(super) fn load_note(conn: &Connection, note_id: i64) -> SqliteResult<Option<TodoNote>> {
    let title: Option<String> = conn
        .query_row(
            "SELECT title FROM note WHERE id = ?1",
            params![note_id],
            |row| row.get(0),
        )
        .optional()?;

    match title {
        Some(title) => Ok(Some(TodoNote {
            id: note_id,
            title,
            items: load_items(conn, note_id)?,
        })),
        None => Ok(None),
    }
}

impl Database {
    /// All notes with their items, ordered by id
    pub fn list_notes(&self) -> SqliteResult<Vec<TodoNote>> {
        let conn = self.conn();

        let mut items_by_note: HashMap<i64, Vec<TodoItem>> = HashMap::new();
        {
            let mut stmt = conn.prepare(
                "SELECT id, task, completed, note_id FROM item ORDER BY note_id, id",
            )?;
            let rows = stmt.query_map([], |row| Ok((row.get::<_, i64>(3)?, item_from_row(row)?)))?;
            for row in rows {
                let (note_id, item) = row?;
                items_by_note.entry(note_id).or_default().push(item);
            }
        }

        let mut stmt = conn.prepare("SELECT id, title FROM note ORDER BY id")?;
        let notes = stmt.query_map([], |row| {
            let id: i64 = row.get(0)?;
            Ok(TodoNote {
                id,
                title: row.get(1)?,
                items: Vec::new(),
            })
        })?;

        notes
            .map(|note| {
                note.map(|mut note| {
                    note.items = items_by_note.remove(&note.id).unwrap_or_default();
                    note
                })
            })
            .collect()
    }

    /// Get a note with its items
    pub fn get_note(&self, note_id: i64) -> SqliteResult<Option<TodoNote>> {
        let conn = self.conn();
        load_note(&conn, note_id)
    }

    /// Create a note with no items
    pub fn create_note(&self, title: &str) -> SqliteResult<TodoNote> {
        let conn = self.conn();
        conn.execute("INSERT INTO note (title) VALUES (?1)", params![title])?;
        let id = conn.last_insert_rowid();
        log::info!("[TODOS] Created note {}", id);
        Ok(TodoNote {
            id,
            title: title.to_string(),
            items: Vec::new(),
        })
    }

    /// Update a note's title. `None` leaves the note untouched.
    /// Returns `None` when the note doesn't exist.
    pub fn update_note(&self, note_id: i64, title: Option<&str>) -> SqliteResult<Option<TodoNote>> {
        let mut conn = self.conn();
        let tx = conn.transaction()?;

        if !note_exists(&tx, note_id)? {
            return Ok(None);
        }
        if let Some(title) = title {
            tx.execute(
                "UPDATE note SET title = ?1 WHERE id = ?2",
                params![title, note_id],
            )?;
            log::info!("[TODOS] Updated note {}", note_id);
        }

        let note = load_note(&tx, note_id)?;
        tx.commit()?;
        Ok(note)
    }

    /// Delete a note and, through the foreign key cascade, its items
    pub fn delete_note(&self, note_id: i64) -> SqliteResult<bool> {
        let conn = self.conn();
        let count = conn.execute("DELETE FROM note WHERE id = ?1", params![note_id])?;
        if count > 0 {
            log::info!("[TODOS] Deleted note {}", note_id);
        }
        Ok(count > 0)
    }

    /// Delete every note and every item
    pub fn delete_all_notes(&self) -> SqliteResult<usize> {
        let conn = self.conn();
        let count = conn.execute("DELETE FROM note", [])?;
        log::info!("[TODOS] Deleted all notes ({})", count);
        Ok(count)
    }
}
