use crate::ConfigError;
use serde::Deserialize;
use url::Url;

/// Main configuration structure for Quote-Harvest
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub scraper: ScraperConfig,
    #[serde(rename = "user-agent", default)]
    pub user_agent: UserAgentConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub cache: CacheConfig,
}

/// Crawl target and behavior
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ScraperConfig {
    /// Site root; next-page links are resolved against it
    #[serde(rename = "base-url")]
    pub base_url: String,

    /// Path of the first listing page, relative to `base_url`
    #[serde(rename = "start-path")]
    pub start_path: String,

    /// Whether author biographies are resolved and written
    #[serde(rename = "fetch-bios")]
    pub fetch_bios: bool,

    /// Per-request timeout (seconds)
    #[serde(rename = "request-timeout")]
    pub request_timeout: u64,
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            base_url: "https://quotes.toscrape.com".to_string(),
            start_path: "/".to_string(),
            fetch_bios: false,
            request_timeout: 30,
        }
    }
}

/// User agent identification configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UserAgentConfig {
    /// Name of the crawler
    #[serde(rename = "crawler-name")]
    pub crawler_name: String,

    /// Version of the crawler
    #[serde(rename = "crawler-version")]
    pub crawler_version: String,

    /// URL with information about the crawler
    #[serde(rename = "contact-url")]
    pub contact_url: String,
}

impl Default for UserAgentConfig {
    fn default() -> Self {
        Self {
            crawler_name: "quote-harvest".to_string(),
            crawler_version: env!("CARGO_PKG_VERSION").to_string(),
            contact_url: "https://quotes.toscrape.com".to_string(),
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Quotes CSV path; the author file is derived from it
    #[serde(rename = "quotes-path")]
    pub quotes_path: String,

    /// Append-only log file
    #[serde(rename = "log-path")]
    pub log_path: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            quotes_path: "quotes.csv".to_string(),
            log_path: "parser.log".to_string(),
        }
    }
}

/// Which store backs the biography cache
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CacheBackend {
    Redis,
    Sqlite,
    Memory,
}

/// How biography cache keys are derived
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum KeyScheme {
    /// The author display name alone; two authors sharing a name collide
    #[default]
    AuthorName,
    /// Display name plus the biography URL slug
    AuthorSlug,
}

/// Biography cache configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    pub backend: CacheBackend,

    /// Redis host
    pub host: String,

    /// Redis port
    pub port: u16,

    /// Redis database index
    pub index: u8,

    /// Entry lifetime (seconds)
    #[serde(rename = "ttl-seconds")]
    pub ttl_seconds: u64,

    /// SQLite file used by the `sqlite` backend
    #[serde(rename = "database-path")]
    pub database_path: String,

    #[serde(rename = "key-scheme")]
    pub key_scheme: KeyScheme,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            backend: CacheBackend::Redis,
            host: "localhost".to_string(),
            port: 6379,
            index: 0,
            ttl_seconds: 86_400,
            database_path: "bio_cache.db".to_string(),
            key_scheme: KeyScheme::AuthorName,
        }
    }
}

impl CacheConfig {
    /// Connection URL for the Redis backend
    pub fn redis_url(&self) -> String {
        format!("redis://{}:{}/{}", self.host, self.port, self.index)
    }
}

impl ScraperConfig {
    /// Parsed site root
    pub fn base_url(&self) -> Result<Url, ConfigError> {
        Url::parse(&self.base_url)
            .map_err(|e| ConfigError::InvalidUrl(format!("Invalid base-url '{}': {}", self.base_url, e)))
    }

    /// First listing page: `start_path` resolved against the site root
    pub fn start_url(&self) -> Result<Url, ConfigError> {
        self.base_url()?.join(&self.start_path).map_err(|e| {
            ConfigError::InvalidUrl(format!("Invalid start-path '{}': {}", self.start_path, e))
        })
    }
}
