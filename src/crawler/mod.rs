//! Crawler module for page fetching and processing
//!
//! This module contains the core scraping logic, including:
//! - HTTP fetching behind the [`PageFetcher`] trait
//! - HTML parsing of listing and author pages
//! - The pagination loop that ties them together

mod coordinator;
mod fetcher;
#[cfg(test)]
pub(crate) mod fixtures;
mod parser;

pub use coordinator::{CrawlOutput, Crawler};
pub use fetcher::{build_http_client, HttpFetcher, PageFetcher};
pub use parser::{
    extract_authors, extract_next_page_link, extract_quotes, parse_bio, parse_listing,
    ListingPage,
};

pub use crate::output::CrawlStats;

use crate::cache::{open_store, BiographyCache};
use crate::config::Config;
use crate::output::{log_statistics, write_authors, write_quotes};
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

/// Runs a complete harvest
///
/// This is the main entry point for a run. It will:
/// 1. Build the HTTP client
/// 2. Open the biography cache store, if biographies are enabled
/// 3. Crawl every listing page from the configured start page
/// 4. Write the quotes CSV and, if enabled, the author CSV
///
/// Nothing is written if the crawl fails.
///
/// # Arguments
///
/// * `config` - The scraper configuration
///
/// # Returns
///
/// * `Ok(CrawlOutput)` - Crawl completed and output written
/// * `Err(ScrapeError)` - Crawl or output failed
///
/// # Example
///
/// ```no_run
/// use quote_harvest::config::Config;
/// use quote_harvest::crawler::run_harvest;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let output = run_harvest(&Config::default()).await?;
/// println!("{} quotes", output.quotes.len());
/// # Ok(())
/// # }
/// ```
pub async fn run_harvest(config: &Config) -> crate::Result<CrawlOutput> {
    let timeout = Duration::from_secs(config.scraper.request_timeout);
    let fetcher: Arc<dyn PageFetcher> = Arc::new(HttpFetcher::new(&config.user_agent, timeout)?);

    let mut crawler = Crawler::new(fetcher.clone(), config.scraper.base_url()?);
    if config.scraper.fetch_bios {
        let store = open_store(&config.cache).await?;
        crawler = crawler.with_biographies(BiographyCache::from_config(
            store,
            fetcher,
            &config.cache,
        ));
    }

    let output = crawler.crawl(&config.scraper.start_url()?).await?;

    let quotes_path = Path::new(&config.output.quotes_path);
    write_quotes(quotes_path, &output.quotes)?;
    if crawler.collects_biographies() {
        write_authors(quotes_path, &output.authors)?;
    }

    log_statistics(&output.stats);
    Ok(output)
}
