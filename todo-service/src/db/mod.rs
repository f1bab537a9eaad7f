//! SQLite storage for notes and their items.
//!
//! A single connection lives behind a mutex; every store operation locks it,
//! runs inside one transaction and commits before returning.

mod seed;
pub mod tables;

use parking_lot::{Mutex, MutexGuard};
use rusqlite::{Connection, Result as SqliteResult};
use std::path::Path;

pub const IN_MEMORY: &str = ":memory:";

pub struct Database {
    conn: Mutex<Connection>,
}

impl Database {
    /// Open (or create) the database at `path` and make sure the schema exists.
    pub fn open(path: &str) -> SqliteResult<Self> {
        if path == IN_MEMORY {
            return Self::open_in_memory();
        }
        if let Some(parent) = Path::new(path).parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).ok();
            }
        }
        Self::from_connection(Connection::open(path)?)
    }

    pub fn open_in_memory() -> SqliteResult<Self> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> SqliteResult<Self> {
        // Off by default in SQLite; cascades depend on it.
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        create_tables(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    pub(crate) fn conn(&self) -> MutexGuard<'_, Connection> {
        self.conn.lock()
    }

    /// Drop both tables and recreate them empty. Id sequences restart at 1.
    pub fn reset(&self) -> SqliteResult<()> {
        let mut conn = self.conn();
        let tx = conn.transaction()?;
        tx.execute_batch(
            "DROP TABLE IF EXISTS item;
             DROP TABLE IF EXISTS note;",
        )?;
        create_tables(&tx)?;
        tx.commit()?;
        log::info!("[TODOS] Initialized fresh database");
        Ok(())
    }
}

fn create_tables(conn: &Connection) -> SqliteResult<()> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS note (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS item (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            task TEXT NOT NULL,
            completed INTEGER NOT NULL DEFAULT 0,
            note_id INTEGER NOT NULL REFERENCES note(id) ON DELETE CASCADE
        );

        CREATE INDEX IF NOT EXISTS idx_item_note_id ON item(note_id);",
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_open_creates_parent_dir_and_persists() {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("nested").join("todolist.db");
        let db_path = db_path.to_str().unwrap();

        {
            let db = Database::open(db_path).expect("Failed to open database");
            db.create_note("Persisted").unwrap();
        }

        let db = Database::open(db_path).expect("Failed to reopen database");
        let notes = db.list_notes().unwrap();
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].title, "Persisted");
    }

    #[test]
    fn test_reset_clears_rows_and_restarts_ids() {
        let db = Database::open(IN_MEMORY).unwrap();
        let note = db.create_note("Old").unwrap();
        db.create_item(note.id, "Old task").unwrap();

        db.reset().unwrap();
        assert!(db.list_notes().unwrap().is_empty());

        let note = db.create_note("New").unwrap();
        assert_eq!(note.id, 1);
    }

    #[test]
    fn test_foreign_keys_enforced() {
        let db = Database::open_in_memory().unwrap();
        let conn = db.conn();
        let result = conn.execute(
            "INSERT INTO item (task, completed, note_id) VALUES ('orphan', 0, 42)",
            [],
        );
        assert!(result.is_err());
    }
}
