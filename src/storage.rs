//! Key-value persistence for local state.
//!
//! The browser only ever stores strings under fixed keys (currently just
//! `favorites`), so the capability is a two-method trait. `SqliteStorage`
//! backs the real application with a single `kv` table in `mealdeck.db`
//! under the platform data directory; `MemoryStorage` is the in-process
//! stand-in used by tests and throwaway sessions.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use rusqlite::{Connection, OptionalExtension, params};
use thiserror::Error;

/// Errors from a storage backend
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Could not determine data directory")]
    NoDataDir,

    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

/// String key-value store
pub trait Storage {
    /// Read a value; `Ok(None)` when the key was never written
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write a value, replacing any previous one
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// SQLite-backed storage
pub struct SqliteStorage {
    conn: Connection,
}

impl SqliteStorage {
    /// Get the database file path
    pub fn db_path() -> Result<PathBuf, StorageError> {
        let dirs = directories::ProjectDirs::from("com", "mealdeck", "Mealdeck")
            .ok_or(StorageError::NoDataDir)?;

        let data_dir = dirs.data_dir();
        std::fs::create_dir_all(data_dir)?;

        Ok(data_dir.join("mealdeck.db"))
    }

    /// Open or create the database at the default location
    pub fn open() -> Result<Self, StorageError> {
        Self::open_at(&Self::db_path()?)
    }

    /// Open or create the database at a specific path
    pub fn open_at(path: &Path) -> Result<Self, StorageError> {
        let conn = Connection::open(path)?;

        let storage = Self { conn };
        storage.init_schema()?;

        tracing::info!("Opened storage at {:?}", path);
        Ok(storage)
    }

    /// Open a private in-memory database
    #[cfg(test)]
    pub fn open_in_memory() -> Result<Self, StorageError> {
        let storage = Self {
            conn: Connection::open_in_memory()?,
        };
        storage.init_schema()?;
        Ok(storage)
    }

    fn init_schema(&self) -> Result<(), StorageError> {
        self.conn.execute_batch(
            "
            CREATE TABLE IF NOT EXISTS kv (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL,
                updated_on TEXT NOT NULL DEFAULT (datetime('now'))
            );
            ",
        )?;
        Ok(())
    }
}

impl Storage for SqliteStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let value = self
            .conn
            .query_row("SELECT value FROM kv WHERE key = ?", params![key], |row| {
                row.get::<_, String>(0)
            })
            .optional()?;
        Ok(value)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.conn.execute(
            "INSERT OR REPLACE INTO kv (key, value, updated_on) VALUES (?, ?, datetime('now'))",
            params![key, value],
        )?;
        Ok(())
    }
}

/// In-memory storage. Clones share the same map.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    values: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let values = self
            .values
            .lock()
            .map_err(|e| StorageError::Unavailable(e.to_string()))?;
        Ok(values.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut values = self
            .values
            .lock()
            .map_err(|e| StorageError::Unavailable(e.to_string()))?;
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sqlite_missing_key() {
        let storage = SqliteStorage::open_in_memory().unwrap();
        assert_eq!(storage.get("favorites").unwrap(), None);
    }

    #[test]
    fn test_sqlite_set_replaces() {
        let storage = SqliteStorage::open_in_memory().unwrap();
        storage.set("favorites", "[]").unwrap();
        storage.set("favorites", r#"[{"idMeal":"1"}]"#).unwrap();
        assert_eq!(
            storage.get("favorites").unwrap().as_deref(),
            Some(r#"[{"idMeal":"1"}]"#)
        );
    }

    #[test]
    fn test_sqlite_persists_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mealdeck.db");

        {
            let storage = SqliteStorage::open_at(&path).unwrap();
            storage.set("favorites", "[]").unwrap();
        }

        let storage = SqliteStorage::open_at(&path).unwrap();
        assert_eq!(storage.get("favorites").unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_memory_clones_share_values() {
        let storage = MemoryStorage::new();
        let handle = storage.clone();
        storage.set("favorites", "[]").unwrap();
        assert_eq!(handle.get("favorites").unwrap().as_deref(), Some("[]"));
        assert_eq!(handle.get("other").unwrap(), None);
    }
}
