//! HTML parser for quote listing pages and author pages
//!
//! This module handles parsing HTML content to extract:
//! - Quote records (text, author, tags)
//! - Author references with their biography links
//! - The next-page link
//! - Composed biography text from an author page
//!
//! Optional markup (tags, biography link, biography fields) falls back to an
//! empty value. A quote block without text or author is a fatal error.

use crate::model::{AuthorLink, Quote};
use crate::ScrapeError;
use scraper::{ElementRef, Html, Selector};
use url::Url;

const QUOTE: &str = ".quote";
const QUOTE_TEXT: &str = ".text";
const QUOTE_AUTHOR: &str = ".author";
const QUOTE_KEYWORDS: &str = "meta.keywords";
const QUOTE_TAG: &str = "a.tag";
const AUTHOR_LINK: &str = "a[href]";
const NEXT_PAGE: &str = "li.next > a[href]";

const DETAILS_LABEL: &str = ".author-details strong";
const BORN_DATE: &str = ".author-born-date";
const BORN_LOCATION: &str = ".author-born-location";
const DESCRIPTION: &str = ".author-description";

/// Everything extracted from one listing page
#[derive(Debug, Clone, Default)]
pub struct ListingPage {
    pub quotes: Vec<Quote>,

    /// One entry per quote block, in the same order as `quotes`
    pub authors: Vec<AuthorLink>,

    /// Absolute URL of the following page, if any
    pub next_page: Option<Url>,
}

/// Parses a listing page into owned records
///
/// # Arguments
///
/// * `html` - The page body
/// * `page_url` - Where the page was fetched from (used in error messages)
/// * `base_url` - Site root that relative links are resolved against
///
/// # Example
///
/// ```no_run
/// use quote_harvest::crawler::parse_listing;
/// use url::Url;
///
/// let html = r#"<div class="quote"><span class="text">Hi</span><small class="author">Me</small></div>"#;
/// let base = Url::parse("https://quotes.toscrape.com").unwrap();
/// let page = parse_listing(html, &base, &base).unwrap();
/// assert_eq!(page.quotes[0].author, "Me");
/// assert!(page.next_page.is_none());
/// ```
pub fn parse_listing(html: &str, page_url: &Url, base_url: &Url) -> crate::Result<ListingPage> {
    let document = Html::parse_document(html);

    Ok(ListingPage {
        quotes: extract_quotes(&document, page_url)?,
        authors: extract_authors(&document, page_url, base_url)?,
        next_page: extract_next_page_link(&document, base_url)?,
    })
}

/// Extracts one [`Quote`] per `.quote` block
pub fn extract_quotes(document: &Html, page_url: &Url) -> crate::Result<Vec<Quote>> {
    let quote_selector = selector(QUOTE)?;
    let text_selector = selector(QUOTE_TEXT)?;
    let author_selector = selector(QUOTE_AUTHOR)?;

    document
        .select(&quote_selector)
        .map(|block| -> crate::Result<Quote> {
            Ok(Quote {
                text: required_text(block, &text_selector, page_url, "text")?,
                author: required_text(block, &author_selector, page_url, "author")?,
                tags: extract_tags(block)?,
            })
        })
        .collect()
}

/// Extracts the author of each `.quote` block with its biography link
pub fn extract_authors(
    document: &Html,
    page_url: &Url,
    base_url: &Url,
) -> crate::Result<Vec<AuthorLink>> {
    let quote_selector = selector(QUOTE)?;
    let author_selector = selector(QUOTE_AUTHOR)?;
    let link_selector = selector(AUTHOR_LINK)?;

    document
        .select(&quote_selector)
        .map(|block| -> crate::Result<AuthorLink> {
            let name = required_text(block, &author_selector, page_url, "author")?;
            // The biography link sits next to `.author` inside the same span
            let bio_url = block
                .select(&author_selector)
                .next()
                .and_then(|author| author.parent())
                .and_then(ElementRef::wrap)
                .and_then(|span| span.select(&link_selector).next())
                .and_then(|a| a.value().attr("href"))
                .and_then(|href| resolve_link(href, base_url));
            Ok(AuthorLink { name, bio_url })
        })
        .collect()
}

/// Finds the next-page link, resolved against the site root
pub fn extract_next_page_link(document: &Html, base_url: &Url) -> crate::Result<Option<Url>> {
    let next_selector = selector(NEXT_PAGE)?;

    Ok(document
        .select(&next_selector)
        .next()
        .and_then(|a| a.value().attr("href"))
        .and_then(|href| resolve_link(href, base_url)))
}

/// Composes the biography text from an author page
///
/// Layout: `{born label}{born date} {born location}\n{description label}{description} `.
/// Missing pieces are left empty.
pub fn parse_bio(html: &str) -> crate::Result<String> {
    let document = Html::parse_document(html);

    let label_selector = selector(DETAILS_LABEL)?;
    let mut labels = document
        .select(&label_selector)
        .map(|element| element.text().collect::<String>().trim().to_string());
    let born_label = labels.next().unwrap_or_default();
    let description_label = labels.next().unwrap_or_default();

    let born_date = optional_text(&document, BORN_DATE)?;
    let born_location = optional_text(&document, BORN_LOCATION)?;
    let description = optional_text(&document, DESCRIPTION)?;

    Ok(format!(
        "{}{} {}\n{}{} ",
        born_label, born_date, born_location, description_label, description
    ))
}

/// Tags from the keywords meta tag, falling back to the tag links
fn extract_tags(block: ElementRef<'_>) -> crate::Result<Vec<String>> {
    let keywords_selector = selector(QUOTE_KEYWORDS)?;

    if let Some(content) = block
        .select(&keywords_selector)
        .next()
        .and_then(|meta| meta.value().attr("content"))
    {
        return Ok(split_tags(content));
    }

    let tag_selector = selector(QUOTE_TAG)?;
    Ok(block
        .select(&tag_selector)
        .map(|a| a.text().collect::<String>().trim().to_string())
        .filter(|tag| !tag.is_empty())
        .collect())
}

/// Splits a comma-joined tag list; an empty list yields no tags
fn split_tags(content: &str) -> Vec<String> {
    if content.trim().is_empty() {
        return Vec::new();
    }
    content.split(',').map(|tag| tag.trim().to_string()).collect()
}

fn required_text(
    block: ElementRef<'_>,
    field_selector: &Selector,
    page_url: &Url,
    field: &'static str,
) -> crate::Result<String> {
    block
        .select(field_selector)
        .next()
        .map(|element| element.text().collect::<String>().trim().to_string())
        .ok_or_else(|| ScrapeError::MissingField {
            url: page_url.to_string(),
            field,
        })
}

fn optional_text(document: &Html, css: &str) -> crate::Result<String> {
    let field_selector = selector(css)?;
    Ok(document
        .select(&field_selector)
        .next()
        .map(|element| element.text().collect::<String>().trim().to_string())
        .unwrap_or_default())
}

fn selector(css: &str) -> crate::Result<Selector> {
    Selector::parse(css).map_err(|e| ScrapeError::Selector {
        selector: css.to_string(),
        message: format!("{:?}", e),
    })
}

/// Resolves an href against the site root
///
/// Returns None for empty, fragment-only and non-HTTP(S) links.
fn resolve_link(href: &str, base_url: &Url) -> Option<Url> {
    let href = href.trim();

    if href.is_empty() || href.starts_with('#') {
        return None;
    }

    match base_url.join(href) {
        Ok(absolute_url) if matches!(absolute_url.scheme(), "http" | "https") => {
            Some(absolute_url)
        }
        _ => None,
    }
}
