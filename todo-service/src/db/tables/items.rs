//! Item table operations

use rusqlite::{OptionalExtension, Result as SqliteResult, params};
use todo_notes_types::{TodoItem, TodoNote};

use super::notes::{item_from_row, load_items, load_note, note_exists};
use crate::db::Database;

impl Database {
    /// Items of a note, or `None` when the note doesn't exist
    pub fn list_items(&self, note_id: i64) -> SqliteResult<Option<Vec<TodoItem>>> {
        let conn = self.conn();
        if !note_exists(&conn, note_id)? {
            return Ok(None);
        }
        load_items(&conn, note_id).map(Some)
    }

    /// Append a new, uncompleted item to a note
    pub fn create_item(&self, note_id: i64, task: &str) -> SqliteResult<Option<TodoItem>> {
        let mut conn = self.conn();
        let tx = conn.transaction()?;

        if !note_exists(&tx, note_id)? {
            return Ok(None);
        }
        tx.execute(
            "INSERT INTO item (task, completed, note_id) VALUES (?1, 0, ?2)",
            params![task, note_id],
        )?;
        let id = tx.last_insert_rowid();
        tx.commit()?;

        log::info!("[TODOS] Created item {} in note {}", id, note_id);
        Ok(Some(TodoItem {
            id,
            task: task.to_string(),
            completed: false,
        }))
    }

    pub fn get_item(&self, item_id: i64) -> SqliteResult<Option<TodoItem>> {
        let conn = self.conn();
        conn.query_row(
            "SELECT id, task, completed FROM item WHERE id = ?1",
            params![item_id],
            item_from_row,
        )
        .optional()
    }

    /// Replace the task (when given) and the completion flag of an item
    pub fn update_item(
        &self,
        item_id: i64,
        task: Option<&str>,
        completed: bool,
    ) -> SqliteResult<Option<TodoItem>> {
        let mut conn = self.conn();
        let tx = conn.transaction()?;

        let count = match task {
            Some(task) => tx.execute(
                "UPDATE item SET task = ?1, completed = ?2 WHERE id = ?3",
                params![task, completed, item_id],
            )?,
            None => tx.execute(
                "UPDATE item SET completed = ?1 WHERE id = ?2",
                params![completed, item_id],
            )?,
        };
        if count == 0 {
            return Ok(None);
        }

        let item = tx
            .query_row(
                "SELECT id, task, completed FROM item WHERE id = ?1",
                params![item_id],
                item_from_row,
            )
            .optional()?;
        tx.commit()?;

        log::info!("[TODOS] Updated item {}", item_id);
        Ok(item)
    }

    pub fn delete_item(&self, item_id: i64) -> SqliteResult<bool> {
        let conn = self.conn();
        let count = conn.execute("DELETE FROM item WHERE id = ?1", params![item_id])?;
        if count > 0 {
            log::info!("[TODOS] Deleted item {}", item_id);
        }
        Ok(count > 0)
    }

    /// Delete every item of a note. Returns the number removed, or `None`
    /// when the note doesn't exist.
    pub fn delete_items_in_note(&self, note_id: i64) -> SqliteResult<Option<usize>> {
        let mut conn = self.conn();
        let tx = conn.transaction()?;

        if !note_exists(&tx, note_id)? {
            return Ok(None);
        }
        let count = tx.execute("DELETE FROM item WHERE note_id = ?1", params![note_id])?;
        tx.commit()?;

        log::info!("[TODOS] Deleted {} items from note {}", count, note_id);
        Ok(Some(count))
    }

    /// Mark every item of a note completed and return the updated note
    pub fn complete_all_items(&self, note_id: i64) -> SqliteResult<Option<TodoNote>> {
        let mut conn = self.conn();
        let tx = conn.transaction()?;

        if !note_exists(&tx, note_id)? {
            return Ok(None);
        }
        let count = tx.execute(
            "UPDATE item SET completed = 1 WHERE note_id = ?1",
            params![note_id],
        )?;
        let note = load_note(&tx, note_id)?;
        tx.commit()?;

        log::info!("[TODOS] Completed {} items in note {}", count, note_id);
        Ok(note)
    }
}

#[cfg(test)]
mod tests {
    use crate::db::Database;

    #[test]
    fn test_create_item_defaults_to_incomplete() {
        let db = Database::open_in_memory().unwrap();
        let note = db.create_note("Work Out").unwrap();

        let item = db.create_item(note.id, "Buy shoes").unwrap().unwrap();
        assert_eq!(item.id, 1);
        assert_eq!(item.task, "Buy shoes");
        assert!(!item.completed);

        let note = db.get_note(note.id).unwrap().unwrap();
        assert_eq!(note.items, vec![item]);
    }

    #[test]
    fn test_create_item_missing_note() {
        let db = Database::open_in_memory().unwrap();
        assert!(db.create_item(7, "Nowhere").unwrap().is_none());
    }

    #[test]
    fn test_list_items() {
        let db = Database::open_in_memory().unwrap();
        let note = db.create_note("List").unwrap();
        db.create_item(note.id, "first").unwrap();
        db.create_item(note.id, "second").unwrap();

        let items = db.list_items(note.id).unwrap().unwrap();
        let tasks: Vec<_> = items.iter().map(|i| i.task.as_str()).collect();
        assert_eq!(tasks, vec!["first", "second"]);

        assert!(db.list_items(99).unwrap().is_none());
    }

    #[test]
    fn test_update_item() {
        let db = Database::open_in_memory().unwrap();
        let note = db.create_note("Chores").unwrap();
        let item = db.create_item(note.id, "Dishes").unwrap().unwrap();

        let updated = db.update_item(item.id, Some("Laundry"), true).unwrap().unwrap();
        assert_eq!(updated.task, "Laundry");
        assert!(updated.completed);

        // Task-only update still writes the flag it is given
        let updated = db.update_item(item.id, None, false).unwrap().unwrap();
        assert_eq!(updated.task, "Laundry");
        assert!(!updated.completed);

        assert!(db.update_item(99, Some("x"), true).unwrap().is_none());
    }

    #[test]
    fn test_delete_item() {
        let db = Database::open_in_memory().unwrap();
        let note = db.create_note("Chores").unwrap();
        let item = db.create_item(note.id, "Dishes").unwrap().unwrap();

        assert!(db.delete_item(item.id).unwrap());
        assert!(db.get_item(item.id).unwrap().is_none());
        assert!(!db.delete_item(item.id).unwrap());
        assert!(db.get_note(note.id).unwrap().is_some());
    }

    #[test]
    fn test_delete_items_in_note_leaves_other_notes() {
        let db = Database::open_in_memory().unwrap();
        let a = db.create_note("A").unwrap();
        let b = db.create_note("B").unwrap();
        db.create_item(a.id, "a1").unwrap();
        db.create_item(a.id, "a2").unwrap();
        db.create_item(b.id, "b1").unwrap();

        assert_eq!(db.delete_items_in_note(a.id).unwrap(), Some(2));
        assert!(db.list_items(a.id).unwrap().unwrap().is_empty());
        assert_eq!(db.list_items(b.id).unwrap().unwrap().len(), 1);
        assert_eq!(db.delete_items_in_note(99).unwrap(), None);
    }

    #[test]
    fn test_complete_all_items() {
        let db = Database::open_in_memory().unwrap();
        let note = db.create_note("Mixed").unwrap();
        let first = db.create_item(note.id, "open").unwrap().unwrap();
        let second = db.create_item(note.id, "done").unwrap().unwrap();
        db.update_item(second.id, None, true).unwrap();

        let note = db.complete_all_items(note.id).unwrap().unwrap();
        assert_eq!(note.items.len(), 2);
        assert!(note.items.iter().all(|i| i.completed));
        assert!(db.get_item(first.id).unwrap().unwrap().completed);

        assert!(db.complete_all_items(99).unwrap().is_none());
    }
}
