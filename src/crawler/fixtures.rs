//! Test fixtures: an in-memory page fetcher and HTML builders shaped like
//! the quotes site markup

use crate::crawler::PageFetcher;
use crate::ScrapeError;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use url::Url;

/// Serves canned pages by URL and counts fetches; unknown URLs are a 404
#[derive(Debug, Default)]
pub(crate) struct FixtureFetcher {
    pages: Mutex<HashMap<String, String>>,
    fetches: Mutex<Vec<String>>,
}

impl FixtureFetcher {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn insert(&self, url: &str, body: String) {
        self.pages.lock().unwrap().insert(url.to_string(), body);
    }

    pub(crate) fn fetch_count(&self, url: &str) -> usize {
        self.fetches
            .lock()
            .unwrap()
            .iter()
            .filter(|fetched| fetched.as_str() == url)
            .count()
    }

    /// Every URL requested, in order
    pub(crate) fn fetched(&self) -> Vec<String> {
        self.fetches.lock().unwrap().clone()
    }
}

#[async_trait]
impl PageFetcher for FixtureFetcher {
    async fn fetch(&self, url: &Url) -> crate::Result<String> {
        self.fetches.lock().unwrap().push(url.to_string());
        self.pages
            .lock()
            .unwrap()
            .get(url.as_str())
            .cloned()
            .ok_or_else(|| ScrapeError::HttpStatus {
                url: url.to_string(),
                status: 404,
            })
    }
}

/// One `.quote` block
pub(crate) struct QuoteBlock {
    text: String,
    author: String,
    tags: Option<Vec<String>>,
    bio_href: Option<String>,
}

impl QuoteBlock {
    pub(crate) fn new(text: &str, author: &str) -> Self {
        Self {
            text: text.to_string(),
            author: author.to_string(),
            tags: None,
            bio_href: None,
        }
    }

    pub(crate) fn tags(mut self, tags: &[&str]) -> Self {
        self.tags = Some(tags.iter().map(|t| t.to_string()).collect());
        self
    }

    pub(crate) fn bio(mut self, href: &str) -> Self {
        self.bio_href = Some(href.to_string());
        self
    }

    fn render(&self) -> String {
        let link = self
            .bio_href
            .as_ref()
            .map(|href| format!(r#" <a href="{}">(about)</a>"#, href))
            .unwrap_or_default();

        let tags = self
            .tags
            .as_ref()
            .map(|tags| {
                let links: String = tags
                    .iter()
                    .map(|t| format!(r#"<a class="tag" href="/tag/{0}/page/1/">{0}</a>"#, t))
                    .collect();
                format!(
                    r#"<div class="tags">Tags: <meta class="keywords" itemprop="keywords" content="{}"> {}</div>"#,
                    tags.join(","),
                    links
                )
            })
            .unwrap_or_default();

        format!(
            r#"<div class="quote" itemscope itemtype="http://schema.org/CreativeWork">
    <span class="text" itemprop="text">{}</span>
    <span>by <small class="author" itemprop="author">{}</small>{}</span>
    {}
</div>"#,
            self.text, self.author, link, tags
        )
    }
}

/// A listing page with the given blocks and optional next-page href
pub(crate) fn listing_page(blocks: &[QuoteBlock], next_href: Option<&str>) -> String {
    let quotes: String = blocks.iter().map(QuoteBlock::render).collect();
    let pager = next_href
        .map(|href| {
            format!(
                r#"<nav><ul class="pager"><li class="next"><a href="{}">Next <span aria-hidden="true">&rarr;</span></a></li></ul></nav>"#,
                href
            )
        })
        .unwrap_or_default();

    format!(
        r#"<!DOCTYPE html><html><head><title>Quotes</title></head><body><div class="container"><div class="col-md-8">{}{}</div></div></body></html>"#,
        quotes, pager
    )
}

/// An author page with the standard details layout
pub(crate) fn author_page(born_date: &str, born_location: &str, description: &str) -> String {
    format!(
        r#"<!DOCTYPE html><html><body><div class="container"><div class="author-details">
    <h3 class="author-title">Author</h3>
    <p><strong>Born:</strong> <span class="author-born-date">{}</span> <span class="author-born-location">{}</span></p>
    <p><strong>Description:</strong></p>
    <div class="author-description">{}</div>
</div></div></body></html>"#,
        born_date, born_location, description
    )
}
