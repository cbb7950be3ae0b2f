mod queries;

use std::fs;
use std::path::PathBuf;

use meme_room_application::{ApplicationError, KeyValueStore};
use rusqlite::Connection;
use tracing::debug;

use crate::migrations::MIGRATIONS;

/// Durable key-value slots in a single SQLite table. A connection is opened
/// per call.
#[derive(Debug, Clone)]
pub struct SqliteKeyValueStore {
    path: PathBuf,
}

impl SqliteKeyValueStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn open_connection(&self) -> Result<Connection, ApplicationError> {
        Connection::open(&self.path)
            .map_err(|error| ApplicationError::Persistence(error.to_string()))
    }
}

impl KeyValueStore for SqliteKeyValueStore {
    fn initialize(&self) -> Result<(), ApplicationError> {
        if self.path.as_os_str().is_empty() {
            return Err(ApplicationError::InvalidInput(
                "store path must not be empty".to_string(),
            ));
        }

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .map_err(|error| ApplicationError::Io(error.to_string()))?;
            }
        }

        let conn = self.open_connection()?;
        conn.execute_batch("PRAGMA journal_mode=WAL;")
            .map_err(|error| ApplicationError::Persistence(error.to_string()))?;

        for migration in MIGRATIONS {
            conn.execute_batch(migration)
                .map_err(|error| ApplicationError::Persistence(error.to_string()))?;
        }

        debug!(path = %self.path.display(), "key-value store ready");
        Ok(())
    }

    fn get(&self, key: &str) -> Result<Option<String>, ApplicationError> {
        let conn = self.open_connection()?;
        queries::find_value(&conn, key)
            .map_err(|error| ApplicationError::Persistence(error.to_string()))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), ApplicationError> {
        let conn = self.open_connection()?;
        queries::upsert_value(&conn, key, value)
            .map_err(|error| ApplicationError::Persistence(error.to_string()))?;
        debug!(key, bytes = value.len(), "stored value");
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), ApplicationError> {
        let conn = self.open_connection()?;
        queries::delete_value(&conn, key)
            .map_err(|error| ApplicationError::Persistence(error.to_string()))
    }
}
