//! Biography cache and its backing stores
//!
//! This module contains:
//! - The [`CacheStore`] trait and its Redis, SQLite and in-memory backends
//! - The [`BiographyCache`] that sits in front of biography page fetches

mod bio;
mod memory;
mod redis_store;
mod sqlite;
mod traits;

pub use bio::{BioLookup, BiographyCache, DEFAULT_TTL};
pub use memory::MemoryStore;
pub use redis_store::RedisStore;
pub use sqlite::SqliteStore;
pub use traits::{CacheError, CacheResult, CacheStore};

use crate::config::{CacheBackend, CacheConfig};
use std::path::Path;
use std::sync::Arc;

/// Opens the store selected by configuration
///
/// # Arguments
///
/// * `config` - The cache configuration
///
/// # Returns
///
/// * `Ok(Arc<dyn CacheStore>)` - Connected store
/// * `Err(CacheError)` - The store could not be reached or opened
pub async fn open_store(config: &CacheConfig) -> CacheResult<Arc<dyn CacheStore>> {
    let store: Arc<dyn CacheStore> = match config.backend {
        CacheBackend::Redis => Arc::new(RedisStore::connect(&config.redis_url()).await?),
        CacheBackend::Sqlite => Arc::new(SqliteStore::new(Path::new(&config.database_path))?),
        CacheBackend::Memory => Arc::new(MemoryStore::new()),
    };
    tracing::info!("Biography cache backend: {}", store.name());
    Ok(store)
}
