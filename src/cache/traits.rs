//! Cache store trait and error types

use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur while talking to a cache store
#[derive(Debug, Error)]
pub enum CacheError {
    #[error("Redis error: {0}")]
    Redis(#[from] redis::RedisError),

    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("TTL out of range: {0:?}")]
    InvalidTtl(Duration),
}

/// Result type for cache operations
pub type CacheResult<T> = Result<T, CacheError>;

/// A string key-value store whose entries expire after a TTL
///
/// The store owns expiry: `get` never returns an entry older than the TTL it
/// was written with. There is no transaction spanning a `get` and the
/// following `set_ex`.
#[async_trait]
pub trait CacheStore: Send + Sync {
    /// Returns the live value for `key`, or `None` if absent or expired
    async fn get(&self, key: &str) -> CacheResult<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value, expiring after `ttl`
    async fn set_ex(&self, key: &str, value: &str, ttl: Duration) -> CacheResult<()>;

    /// Short backend name for logs
    fn name(&self) -> &'static str;
}
