//! SQLite-backed key/value store

use anyhow::{Context, Result};
use rusqlite::{params, Connection, OptionalExtension};
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::{debug, info};

use super::Store;
use crate::error::StatsError;

/// Key/value store persisted in a single `kv` table
pub struct SqliteStore {
    pub(crate) conn: Connection,
}

impl SqliteStore {
    /// Open (or create) the store at `path` and ensure the table exists
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        let conn = Connection::open(path)
            .with_context(|| format!("Failed to open store at {}", path.display()))?;
        let mut store = Self { conn };
        store.initialize_schema()?;
        info!(path = %path.display(), "opened store");
        Ok(store)
    }

    /// Store that disappears with the connection
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let mut store = Self { conn };
        store.initialize_schema()?;
        Ok(store)
    }

    /// Default location: `<cache dir>/baseball-stats/store.db`
    pub fn default_path() -> std::result::Result<PathBuf, StatsError> {
        let cache_dir = dirs::cache_dir().ok_or_else(|| StatsError::Storage {
            message: "Could not determine cache directory".to_string(),
        })?;
        Ok(cache_dir.join("baseball-stats").join("store.db"))
    }

    pub(crate) fn initialize_schema(&mut self) -> Result<()> {
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS kv (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL,
                updated_at INTEGER NOT NULL
            )",
            [],
        )?;
        Ok(())
    }

    /// All keys currently stored, sorted
    pub fn keys(&self) -> Result<Vec<String>> {
        let mut stmt = self.conn.prepare("SELECT key FROM kv ORDER BY key")?;
        let rows = stmt.query_map([], |row| row.get(0))?;

        let mut keys = Vec::new();
        for row in rows {
            keys.push(row?);
        }
        Ok(keys)
    }

    /// Seconds since the epoch at which `key` was last written
    pub fn updated_at(&self, key: &str) -> Result<Option<u64>> {
        let ts = self
            .conn
            .query_row(
                "SELECT updated_at FROM kv WHERE key = ?",
                params![key],
                |row| row.get(0),
            )
            .optional()?;
        Ok(ts)
    }

    fn read_value(&self, key: &str) -> Result<Option<String>> {
        let value = self
            .conn
            .query_row("SELECT value FROM kv WHERE key = ?", params![key], |row| {
                row.get(0)
            })
            .optional()
            .with_context(|| format!("Failed to read key {key}"))?;
        Ok(value)
    }

    fn write_value(&mut self, key: &str, json: &str) -> Result<()> {
        let now = SystemTime::now().duration_since(UNIX_EPOCH)?.as_secs();
        self.conn
            .execute(
                "INSERT OR REPLACE INTO kv (key, value, updated_at) VALUES (?, ?, ?)",
                params![key, json, now],
            )
            .with_context(|| format!("Failed to write key {key}"))?;
        Ok(())
    }

    fn write_values(&mut self, entries: &[(&str, &str)]) -> Result<()> {
        let now = SystemTime::now().duration_since(UNIX_EPOCH)?.as_secs();
        let tx = self.conn.transaction()?;
        for (key, json) in entries {
            tx.execute(
                "INSERT OR REPLACE INTO kv (key, value, updated_at) VALUES (?, ?, ?)",
                params![key, json, now],
            )
            .with_context(|| format!("Failed to write key {key}"))?;
        }
        tx.commit()?;
        debug!(count = entries.len(), "batch written");
        Ok(())
    }

    fn delete_value(&mut self, key: &str) -> Result<()> {
        let removed = self
            .conn
            .execute("DELETE FROM kv WHERE key = ?", params![key])
            .with_context(|| format!("Failed to remove key {key}"))?;
        debug!(key, removed, "data removed");
        Ok(())
    }

    fn delete_all(&mut self) -> Result<()> {
        self.conn.execute("DELETE FROM kv", [])?;
        info!("all data cleared");
        Ok(())
    }
}

impl Store for SqliteStore {
    fn get(&self, key: &str) -> crate::Result<Option<String>> {
        Ok(self.read_value(key)?)
    }

    fn set(&mut self, key: &str, json: &str) -> crate::Result<()> {
        Ok(self.write_value(key, json)?)
    }

    fn set_all(&mut self, entries: &[(&str, &str)]) -> crate::Result<()> {
        Ok(self.write_values(entries)?)
    }

    fn remove(&mut self, key: &str) -> crate::Result<()> {
        Ok(self.delete_value(key)?)
    }

    fn clear(&mut self) -> crate::Result<()> {
        Ok(self.delete_all()?)
    }
}
