//! SQLite cache store
//!
//! Persists biography entries in a local database file so a cache survives
//! between runs without an external server. Expiry is stored as a unix
//! timestamp in milliseconds and checked on read.

use crate::cache::traits::{CacheError, CacheResult, CacheStore};
use async_trait::async_trait;
use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;
use std::sync::{Mutex, PoisonError};
use std::time::Duration;

/// SQL schema for the cache table
pub const SCHEMA_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS bio_cache (
    key TEXT PRIMARY KEY,
    value TEXT NOT NULL,
    expires_at INTEGER NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_bio_cache_expires ON bio_cache(expires_at);
"#;

/// SQLite-backed cache store
pub struct SqliteStore {
    conn: Mutex<Connection>,
}

impl SqliteStore {
    /// Opens or creates the cache database at `path`
    ///
    /// Expired rows are purged on open.
    pub fn new(path: &Path) -> CacheResult<Self> {
        let conn = Connection::open(path)?;

        conn.execute_batch(
            "
            PRAGMA journal_mode = WAL;
            PRAGMA synchronous = NORMAL;
        ",
        )?;
        conn.execute_batch(SCHEMA_SQL)?;

        let store = Self {
            conn: Mutex::new(conn),
        };
        let purged = store.purge_expired()?;
        if purged > 0 {
            tracing::debug!("Purged {} expired biography entries", purged);
        }

        Ok(store)
    }

    /// Creates an in-memory database (for testing)
    pub fn new_in_memory() -> CacheResult<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch(SCHEMA_SQL)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Deletes expired rows, returning how many were removed
    pub fn purge_expired(&self) -> CacheResult<usize> {
        let conn = self.conn.lock().unwrap_or_else(PoisonError::into_inner);
        let removed = conn.execute(
            "DELETE FROM bio_cache WHERE expires_at <= ?1",
            params![Utc::now().timestamp_millis()],
        )?;
        Ok(removed)
    }
}

#[async_trait]
impl CacheStore for SqliteStore {
    async fn get(&self, key: &str) -> CacheResult<Option<String>> {
        let conn = self.conn.lock().unwrap_or_else(PoisonError::into_inner);
        let value = conn
            .query_row(
                "SELECT value FROM bio_cache WHERE key = ?1 AND expires_at > ?2",
                params![key, Utc::now().timestamp_millis()],
                |row| row.get(0),
            )
            .optional()?;
        Ok(value)
    }

    async fn set_ex(&self, key: &str, value: &str, ttl: Duration) -> CacheResult<()> {
        let ttl_ms = i64::try_from(ttl.as_millis()).map_err(|_| CacheError::InvalidTtl(ttl))?;
        let expires_at = Utc::now()
            .timestamp_millis()
            .checked_add(ttl_ms)
            .ok_or(CacheError::InvalidTtl(ttl))?;

        let conn = self.conn.lock().unwrap_or_else(PoisonError::into_inner);
        conn.execute(
            "INSERT INTO bio_cache (key, value, expires_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, expires_at = excluded.expires_at",
            params![key, value, expires_at],
        )?;
        Ok(())
    }

    fn name(&self) -> &'static str {
        "sqlite"
    }
}
