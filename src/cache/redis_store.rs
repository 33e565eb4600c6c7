//! Redis cache store
//!
//! Entries are written with `SETEX` so the server enforces the TTL.

use crate::cache::traits::{CacheError, CacheResult, CacheStore};
use async_trait::async_trait;
use redis::aio::ConnectionManager;
use redis::{AsyncCommands, Client};
use std::time::Duration;

/// Redis-backed cache store
#[derive(Clone)]
pub struct RedisStore {
    conn: ConnectionManager,
}

impl RedisStore {
    /// Connects to the server at `url` (`redis://host:port/index`)
    pub async fn connect(url: &str) -> CacheResult<Self> {
        let client = Client::open(url)?;
        let conn = ConnectionManager::new(client).await?;
        tracing::debug!("Connected to redis at {}", url);
        Ok(Self { conn })
    }
}

#[async_trait]
impl CacheStore for RedisStore {
    async fn get(&self, key: &str) -> CacheResult<Option<String>> {
        let mut conn = self.conn.clone();
        let value: Option<String> = conn.get(key).await?;
        Ok(value)
    }

    async fn set_ex(&self, key: &str, value: &str, ttl: Duration) -> CacheResult<()> {
        // SETEX rejects a zero expiry
        let seconds = ttl.as_secs();
        if seconds == 0 {
            return Err(CacheError::InvalidTtl(ttl));
        }

        let mut conn = self.conn.clone();
        conn.set_ex::<_, _, ()>(key, value, seconds).await?;
        Ok(())
    }

    fn name(&self) -> &'static str {
        "redis"
    }
}
