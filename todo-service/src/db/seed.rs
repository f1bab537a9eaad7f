//! Development dataset

use rusqlite::{Result as SqliteResult, params};

use super::Database;

const SEED_NOTES: &[(&str, &[(&str, bool)])] = &[
    (
        "Get in Digital Factory",
        &[
            ("Initial interview with Victor", true),
            ("Do code challenge", true),
            ("Final interview", false),
            ("Final decision", false),
        ],
    ),
    (
        "Work Out",
        &[
            ("Initial interview with Victor", true),
            ("Do code challenge", true),
        ],
    ),
];

impl Database {
    /// Recreate the schema and load the development dataset
    pub fn seed(&self) -> SqliteResult<()> {
        self.reset()?;

        let mut conn = self.conn();
        let tx = conn.transaction()?;
        for (title, items) in SEED_NOTES {
            tx.execute("INSERT INTO note (title) VALUES (?1)", params![title])?;
            let note_id = tx.last_insert_rowid();
            for (task, completed) in items.iter() {
                tx.execute(
                    "INSERT INTO item (task, completed, note_id) VALUES (?1, ?2, ?3)",
                    params![task, completed, note_id],
                )?;
            }
        }
        tx.commit()?;

        log::info!("[TODOS] Added development dataset ({} notes)", SEED_NOTES.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::db::Database;

    #[test]
    fn test_seed_loads_dataset() {
        let db = Database::open_in_memory().unwrap();
        db.create_note("Will be dropped").unwrap();

        db.seed().unwrap();

        let notes = db.list_notes().unwrap();
        assert_eq!(notes.len(), 2);
        assert_eq!(notes[0].id, 1);
        assert_eq!(notes[0].title, "Get in Digital Factory");
        assert_eq!(notes[0].items.len(), 4);
        assert_eq!(notes[0].items.iter().filter(|i| i.completed).count(), 2);
        assert_eq!(notes[1].title, "Work Out");
        assert_eq!(notes[1].items.len(), 2);
    }
}
