//! Biography cache
//!
//! Resolves an author's biography through a [`CacheStore`], falling back to
//! fetching and parsing the biography page on a miss.

use crate::cache::traits::CacheStore;
use crate::config::{CacheConfig, KeyScheme};
use crate::crawler::{parse_bio, PageFetcher};
use crate::model::url_slug;
use std::sync::Arc;
use std::time::Duration;
use url::Url;

/// Default entry lifetime: 24 hours
pub const DEFAULT_TTL: Duration = Duration::from_secs(86_400);

/// Outcome of a biography lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BioLookup {
    pub bio: String,
    /// True when served from the store without fetching
    pub hit: bool,
}

/// Two-tier biography resolver: cache store first, live fetch on miss
///
/// There is no in-process memo: every call consults the store, and a miss
/// always fetches and writes back, even if another miss for the same author
/// is in flight.
pub struct BiographyCache {
    store: Arc<dyn CacheStore>,
    fetcher: Arc<dyn PageFetcher>,
    ttl: Duration,
    key_scheme: KeyScheme,
}

impl BiographyCache {
    pub fn new(store: Arc<dyn CacheStore>, fetcher: Arc<dyn PageFetcher>) -> Self {
        Self {
            store,
            fetcher,
            ttl: DEFAULT_TTL,
            key_scheme: KeyScheme::AuthorName,
        }
    }

    /// Builds a cache using the TTL and key scheme from configuration
    pub fn from_config(
        store: Arc<dyn CacheStore>,
        fetcher: Arc<dyn PageFetcher>,
        config: &CacheConfig,
    ) -> Self {
        Self::new(store, fetcher)
            .with_ttl(Duration::from_secs(config.ttl_seconds))
            .with_key_scheme(config.key_scheme)
    }

    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    pub fn with_key_scheme(mut self, key_scheme: KeyScheme) -> Self {
        self.key_scheme = key_scheme;
        self
    }

    /// Key under which `author_name`'s biography is stored
    pub fn cache_key(&self, author_name: &str, bio_url: &Url) -> String {
        match self.key_scheme {
            KeyScheme::AuthorName => author_name.to_string(),
            KeyScheme::AuthorSlug => match url_slug(bio_url) {
                Some(slug) => format!("{}|{}", author_name, slug),
                None => author_name.to_string(),
            },
        }
    }

    /// Returns the biography text for an author
    pub async fn get_bio(&self, author_name: &str, bio_url: &Url) -> crate::Result<String> {
        Ok(self.lookup(author_name, bio_url).await?.bio)
    }

    /// Returns the biography text and whether it came from the store
    pub async fn lookup(&self, author_name: &str, bio_url: &Url) -> crate::Result<BioLookup> {
        let key = self.cache_key(author_name, bio_url);

        if let Some(raw) = self.store.get(&key).await? {
            match serde_json::from_str::<String>(&raw) {
                Ok(bio) => {
                    tracing::debug!("Biography cache hit for '{}' ({})", key, self.store.name());
                    return Ok(BioLookup { bio, hit: true });
                }
                Err(e) => {
                    tracing::warn!("Discarding undecodable cache entry '{}': {}", key, e);
                }
            }
        }

        tracing::debug!("Biography cache miss for '{}', fetching {}", key, bio_url);
        let body = self.fetcher.fetch(bio_url).await?;
        let bio = parse_bio(&body)?;

        let raw = serde_json::to_string(&bio).map_err(crate::cache::CacheError::from)?;
        self.store.set_ex(&key, &raw, self.ttl).await?;

        Ok(BioLookup { bio, hit: false })
    }
}
