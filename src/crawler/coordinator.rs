//! Crawl coordinator - the pagination loop
//!
//! Starting from one listing page, the coordinator fetches and parses each
//! page, follows its next-page link, and accumulates quotes (and, when a
//! biography cache is attached, authors with biographies) in page order.
//! The first error aborts the crawl.

use crate::cache::BiographyCache;
use crate::crawler::parser::parse_listing;
use crate::crawler::PageFetcher;
use crate::model::{Author, AuthorLink, Quote};
use crate::output::CrawlStats;
use std::sync::Arc;
use std::time::Instant;
use url::Url;

/// Everything collected by one crawl
#[derive(Debug, Clone, Default)]
pub struct CrawlOutput {
    /// Quotes in page order, then in-page order
    pub quotes: Vec<Quote>,

    /// One entry per quote when biographies are enabled, otherwise empty
    pub authors: Vec<Author>,

    pub stats: CrawlStats,
}

/// Main crawler structure
pub struct Crawler {
    fetcher: Arc<dyn PageFetcher>,
    base_url: Url,
    bios: Option<BiographyCache>,
}

impl Crawler {
    /// Creates a crawler that collects quotes only
    ///
    /// # Arguments
    ///
    /// * `fetcher` - Source of page content
    /// * `base_url` - Site root that next-page links are resolved against
    pub fn new(fetcher: Arc<dyn PageFetcher>, base_url: Url) -> Self {
        Self {
            fetcher,
            base_url,
            bios: None,
        }
    }

    /// Also resolves an author record with biography for every quote
    pub fn with_biographies(mut self, bios: BiographyCache) -> Self {
        self.bios = Some(bios);
        self
    }

    /// Whether author biographies are collected
    pub fn collects_biographies(&self) -> bool {
        self.bios.is_some()
    }

    /// Runs the pagination loop from `start_url` until a page has no next link
    ///
    /// There is no page bound: termination relies on the site's pagination
    /// ending. Any fetch, parse or cache error is returned immediately and
    /// the partial results are dropped.
    pub async fn crawl(&self, start_url: &Url) -> crate::Result<CrawlOutput> {
        let mut output = CrawlOutput::default();
        let start_time = Instant::now();
        let mut next = Some(start_url.clone());

        while let Some(page_url) = next.take() {
            output.stats.pages_visited += 1;
            tracing::info!("Scraping page {}: {}", output.stats.pages_visited, page_url);

            let body = self.fetcher.fetch(&page_url).await?;
            let page = parse_listing(&body, &page_url, &self.base_url)?;
            tracing::debug!("Found {} quotes on {}", page.quotes.len(), page_url);

            if let Some(bios) = &self.bios {
                for link in &page.authors {
                    let author = self.resolve_author(bios, link, &mut output.stats).await?;
                    output.authors.push(author);
                }
            }

            output.quotes.extend(page.quotes);
            next = page.next_page;
        }

        output.stats.quotes = output.quotes.len() as u64;
        output.stats.authors = output.authors.len() as u64;

        tracing::info!(
            "Crawl completed: {} pages, {} quotes in {:?}",
            output.stats.pages_visited,
            output.stats.quotes,
            start_time.elapsed()
        );

        Ok(output)
    }

    /// Builds the author record for one quote block
    async fn resolve_author(
        &self,
        bios: &BiographyCache,
        link: &AuthorLink,
        stats: &mut CrawlStats,
    ) -> crate::Result<Author> {
        let bio = match &link.bio_url {
            Some(bio_url) => {
                let lookup = bios.lookup(&link.name, bio_url).await?;
                if lookup.hit {
                    stats.bio_cache_hits += 1;
                } else {
                    stats.bio_cache_misses += 1;
                }
                lookup.bio
            }
            None => String::new(),
        };

        Ok(Author {
            author: link.name.clone(),
            bio,
        })
    }
}
