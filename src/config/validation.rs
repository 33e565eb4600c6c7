use crate::config::types::{
    CacheBackend, CacheConfig, Config, OutputConfig, ScraperConfig, UserAgentConfig,
};
use crate::ConfigError;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_scraper_config(&config.scraper)?;
    validate_user_agent_config(&config.user_agent)?;
    validate_output_config(&config.output)?;
    validate_cache_config(&config.cache)?;
    Ok(())
}

/// Validates the crawl target
fn validate_scraper_config(config: &ScraperConfig) -> Result<(), ConfigError> {
    let base = config.base_url()?;

    if base.scheme() != "http" && base.scheme() != "https" {
        return Err(ConfigError::Validation(format!(
            "base-url '{}' must use http or https",
            config.base_url
        )));
    }

    config.start_url()?;

    if config.request_timeout < 1 {
        return Err(ConfigError::Validation(format!(
            "request-timeout must be >= 1s, got {}s",
            config.request_timeout
        )));
    }

    Ok(())
}

/// Validates user agent configuration
fn validate_user_agent_config(config: &UserAgentConfig) -> Result<(), ConfigError> {
    if config.crawler_name.is_empty() {
        return Err(ConfigError::Validation(
            "crawler-name cannot be empty".to_string(),
        ));
    }

    if !config
        .crawler_name
        .chars()
        .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
    {
        return Err(ConfigError::Validation(format!(
            "crawler-name must contain only alphanumeric characters, hyphens and underscores, got '{}'",
            config.crawler_name
        )));
    }

    url::Url::parse(&config.contact_url)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid contact-url: {}", e)))?;

    Ok(())
}

/// Validates output configuration
fn validate_output_config(config: &OutputConfig) -> Result<(), ConfigError> {
    if config.quotes_path.trim().is_empty() {
        return Err(ConfigError::Validation(
            "quotes-path cannot be empty".to_string(),
        ));
    }

    if config.log_path.trim().is_empty() {
        return Err(ConfigError::Validation("log-path cannot be empty".to_string()));
    }

    Ok(())
}

/// Validates biography cache configuration
fn validate_cache_config(config: &CacheConfig) -> Result<(), ConfigError> {
    if config.ttl_seconds < 1 {
        return Err(ConfigError::Validation(format!(
            "ttl-seconds must be >= 1, got {}",
            config.ttl_seconds
        )));
    }

    match config.backend {
        CacheBackend::Redis => {
            if config.host.is_empty() {
                return Err(ConfigError::Validation(
                    "cache host cannot be empty".to_string(),
                ));
            }
            if config.port == 0 {
                return Err(ConfigError::Validation(
                    "cache port must be >= 1".to_string(),
                ));
            }
        }
        CacheBackend::Sqlite => {
            if config.database_path.trim().is_empty() {
                return Err(ConfigError::Validation(
                    "database-path is required for the sqlite cache backend".to_string(),
                ));
            }
        }
        CacheBackend::Memory => {}
    }

    Ok(())
}
