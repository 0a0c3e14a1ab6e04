use std::path::PathBuf;

use refinery::embed_migrations;
use rusqlite::Connection;

use crate::platform;

pub mod average;

embed_migrations!("migrations");

pub fn get_db_path() -> PathBuf {
    platform::data_dir().join("reviewer.db")
}

/// Opens the database, creating the data directory on first launch and
/// bringing the schema up to the current migration.
pub fn init_db() -> Result<Connection, Box<dyn std::error::Error + Send + Sync>> {
    let db_path = get_db_path();

    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent).ok();
    }

    let mut conn = Connection::open(&db_path)?;

    run_migrations(&mut conn)?;

    Ok(conn)
}

pub fn run_migrations(conn: &mut Connection) -> Result<(), refinery::Error> {
    migrations::runner().run(conn)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_migrated() -> Connection {
        let mut conn = Connection::open_in_memory().unwrap();
        run_migrations(&mut conn).unwrap();
        conn
    }

    #[test]
    fn test_migrations_create_averages_table() {
        let conn = open_migrated();

        let tables: Vec<String> = conn
            .prepare("SELECT name FROM sqlite_master WHERE type='table'")
            .unwrap()
            .query_map([], |row| row.get(0))
            .unwrap()
            .filter_map(|r| r.ok())
            .collect();

        assert!(tables.contains(&"averages".to_string()));
    }

    #[test]
    fn test_migrations_add_recorded_at_column() {
        let conn = open_migrated();

        let columns: Vec<String> = conn
            .prepare("PRAGMA table_info(averages)")
            .unwrap()
            .query_map([], |row| row.get(1))
            .unwrap()
            .filter_map(|r| r.ok())
            .collect();

        assert!(columns.contains(&"setting_index".to_string()));
        assert!(columns.contains(&"score".to_string()));
        assert!(columns.contains(&"question_count".to_string()));
        assert!(columns.contains(&"category_id".to_string()));
        assert!(columns.contains(&"recorded_at".to_string()));
    }

    #[test]
    fn test_migrations_are_idempotent() {
        let temp_dir = tempfile::tempdir().unwrap();
        let db_path = temp_dir.path().join("test.db");

        let mut conn = Connection::open(&db_path).unwrap();
        run_migrations(&mut conn).unwrap();
        drop(conn);

        let mut conn = Connection::open(&db_path).unwrap();
        run_migrations(&mut conn).unwrap();
    }
}
