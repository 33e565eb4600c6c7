//! Records produced by a crawl

use url::Url;

/// A single quote scraped from a listing page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quote {
    /// The quote text, including the typographic quote marks the site uses
    pub text: String,

    /// Author display name
    pub author: String,

    /// Tags in page order; empty when the block carries none
    pub tags: Vec<String>,
}

/// An author occurrence paired with its resolved biography
///
/// One record is produced per quote block, so the same author appears once
/// for every quote attributed to them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Author {
    /// Author display name
    pub author: String,

    /// Composed biography text, empty when the block has no biography link
    pub bio: String,
}

/// An author reference found in a quote block, before biography resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorLink {
    pub name: String,
    pub bio_url: Option<Url>,
}

impl AuthorLink {
    /// Last non-empty path segment of the biography URL (e.g. `Albert-Einstein`)
    pub fn slug(&self) -> Option<&str> {
        self.bio_url.as_ref().and_then(url_slug)
    }
}

/// Returns the last non-empty path segment of a URL
pub fn url_slug(url: &Url) -> Option<&str> {
    url.path_segments()?.filter(|s| !s.is_empty()).last()
}
