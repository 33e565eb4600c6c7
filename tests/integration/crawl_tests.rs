//! Integration tests for the scraper
//!
//! These tests use wiremock to serve a small quotes site and run the full
//! crawl → CSV pipeline against it.

use quote_harvest::cache::{BiographyCache, MemoryStore};
use quote_harvest::config::{CacheBackend, Config};
use quote_harvest::crawler::{run_harvest, Crawler, HttpFetcher, PageFetcher};
use quote_harvest::ScrapeError;
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;
use url::Url;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn quote_block(text: &str, author: &str, slug: Option<&str>, tags: &[&str]) -> String {
    let link = slug
        .map(|s| format!(r#" <a href="/author/{}">(about)</a>"#, s))
        .unwrap_or_default();
    let tags = if tags.is_empty() {
        String::new()
    } else {
        format!(
            r#"<div class="tags">Tags: <meta class="keywords" itemprop="keywords" content="{}"></div>"#,
            tags.join(",")
        )
    };

    format!(
        r#"<div class="quote"><span class="text">{}</span><span>by <small class="author">{}</small>{}</span>{}</div>"#,
        text, author, link, tags
    )
}

fn listing(blocks: &[String], next: Option<&str>) -> String {
    let pager = next
        .map(|href| format!(r#"<ul class="pager"><li class="next"><a href="{}">Next</a></li></ul>"#, href))
        .unwrap_or_default();
    format!(
        "<html><body><div class=\"container\">{}{}</div></body></html>",
        blocks.concat(),
        pager
    )
}

fn author_page(date: &str, location: &str, description: &str) -> String {
    format!(
        r#"<html><body><div class="author-details"><h3 class="author-title">x</h3>
<p><strong>Born:</strong> <span class="author-born-date">{}</span> <span class="author-born-location">{}</span></p>
<p><strong>Description:</strong></p>
<div class="author-description">
    {}
</div></div></body></html>"#,
        date, location, description
    )
}

async fn mount_page(server: &MockServer, route: &str, body: String, expected_calls: u64) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(body)
                .insert_header("content-type", "text/html; charset=utf-8"),
        )
        .expect(expected_calls)
        .mount(server)
        .await;
}

/// Two listing pages (2 + 1 quotes) and one author page
async fn two_page_site() -> MockServer {
    let server = MockServer::start().await;

    mount_page(
        &server,
        "/",
        listing(
            &[
                quote_block(
                    "\u{201c}The world as we have created it is a process of our thinking.\u{201d}",
                    "Albert Einstein",
                    Some("Albert-Einstein"),
                    &["change", "deep-thoughts", "thinking", "world"],
                ),
                quote_block("\u{201c}A day without sunshine is like, you know, night.\u{201d}", "Steve Martin", None, &[]),
            ],
            Some("/page/2/"),
        ),
        1,
    )
    .await;

    mount_page(
        &server,
        "/page/2/",
        listing(
            &[quote_block(
                "\u{201c}Try not to become a man of success.\u{201d}",
                "Albert Einstein",
                Some("Albert-Einstein"),
                &["adulthood", "success", "value"],
            )],
            None,
        ),
        1,
    )
    .await;

    server
}

fn test_config(server: &MockServer, dir: &TempDir, fetch_bios: bool) -> Config {
    let mut config = Config::default();
    config.scraper.base_url = server.uri();
    config.scraper.fetch_bios = fetch_bios;
    config.scraper.request_timeout = 5;
    config.output.quotes_path = dir.path().join("quotes.csv").display().to_string();
    config.output.log_path = dir.path().join("parser.log").display().to_string();
    config.cache.backend = CacheBackend::Memory;
    config
}

#[tokio::test]
async fn test_two_page_crawl_writes_csv() {
    let server = two_page_site().await;
    let dir = TempDir::new().expect("Failed to create temp dir");
    let config = test_config(&server, &dir, false);

    let output = run_harvest(&config).await.expect("Harvest failed");

    let texts: Vec<_> = output.quotes.iter().map(|q| q.text.as_str()).collect();
    assert_eq!(
        texts,
        vec![
            "\u{201c}The world as we have created it is a process of our thinking.\u{201d}",
            "\u{201c}A day without sunshine is like, you know, night.\u{201d}",
            "\u{201c}Try not to become a man of success.\u{201d}",
        ]
    );
    assert!(output.quotes[1].tags.is_empty());
    assert!(output.authors.is_empty());
    assert_eq!(output.stats.pages_visited, 2);

    let content = std::fs::read_to_string(dir.path().join("quotes.csv")).expect("No quotes.csv");
    let lines: Vec<_> = content.lines().collect();
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0], "text,author,tags");
    assert!(lines[1].ends_with(",Albert Einstein,\"change,deep-thoughts,thinking,world\""));
    assert!(lines[2].ends_with(",Steve Martin,"));

    assert!(!dir.path().join("quotes_bio.csv").exists());
}

#[tokio::test]
async fn test_crawl_with_biographies_fetches_each_author_once() {
    let server = two_page_site().await;
    mount_page(
        &server,
        "/author/Albert-Einstein",
        author_page("March 14, 1879", "in Ulm, Germany", "In 1879, Albert Einstein was born in Ulm."),
        1,
    )
    .await;

    let dir = TempDir::new().expect("Failed to create temp dir");
    let config = test_config(&server, &dir, true);

    let output = run_harvest(&config).await.expect("Harvest failed");

    let expected_bio =
        "Born:March 14, 1879 in Ulm, Germany\nDescription:In 1879, Albert Einstein was born in Ulm. ";
    assert_eq!(output.authors.len(), 3);
    assert_eq!(output.authors[0].bio, expected_bio);
    assert_eq!(output.authors[1].author, "Steve Martin");
    assert_eq!(output.authors[1].bio, "");
    assert_eq!(output.authors[2].bio, expected_bio);
    assert_eq!(output.stats.bio_cache_misses, 1);
    assert_eq!(output.stats.bio_cache_hits, 1);

    let mut reader =
        csv::Reader::from_path(dir.path().join("quotes_bio.csv")).expect("No quotes_bio.csv");
    let headers: Vec<String> = reader
        .headers()
        .expect("No header")
        .iter()
        .map(String::from)
        .collect();
    assert_eq!(headers, vec!["author", "bio"]);
    let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.expect("Bad row")).collect();
    assert_eq!(rows.len(), 3);
    assert_eq!(&rows[0][0], "Albert Einstein");
    assert_eq!(&rows[0][1], expected_bio);

    // Dropping the server verifies the `expect` call counts
    drop(server);
}

#[tokio::test]
async fn test_failed_page_aborts_without_output() {
    let server = MockServer::start().await;
    mount_page(
        &server,
        "/",
        listing(&[quote_block("Q", "A", None, &[])], Some("/page/2/")),
        1,
    )
    .await;
    Mock::given(method("GET"))
        .and(path("/page/2/"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let dir = TempDir::new().expect("Failed to create temp dir");
    let config = test_config(&server, &dir, false);

    let result = run_harvest(&config).await;

    assert!(matches!(
        result,
        Err(ScrapeError::HttpStatus { status: 500, .. })
    ));
    assert!(!dir.path().join("quotes.csv").exists());
}

#[tokio::test]
async fn test_shared_store_serves_later_crawl_from_cache() {
    let server = MockServer::start().await;
    mount_page(
        &server,
        "/",
        listing(
            &[quote_block("Q", "Albert Einstein", Some("Albert-Einstein"), &[])],
            None,
        ),
        1,
    )
    .await;
    // One fetch in total across the direct lookup and the crawl
    mount_page(
        &server,
        "/author/Albert-Einstein",
        author_page("March 14, 1879", "in Ulm, Germany", "Physicist."),
        1,
    )
    .await;

    let base = Url::parse(&server.uri()).expect("Bad server URI");
    let fetcher: Arc<dyn PageFetcher> = Arc::new(
        HttpFetcher::new(&Config::default().user_agent, Duration::from_secs(5))
            .expect("Failed to build client"),
    );
    let store = Arc::new(MemoryStore::new());

    let bio_url = base.join("/author/Albert-Einstein").expect("Bad bio URL");
    let first = BiographyCache::new(store.clone(), fetcher.clone())
        .get_bio("Albert Einstein", &bio_url)
        .await
        .expect("First lookup failed");

    let crawler = Crawler::new(fetcher.clone(), base.clone())
        .with_biographies(BiographyCache::new(store.clone(), fetcher.clone()));
    let output = crawler.crawl(&base).await.expect("Crawl failed");

    assert_eq!(output.authors.len(), 1);
    assert_eq!(output.authors[0].bio, first);
    assert_eq!(output.stats.bio_cache_hits, 1);
    assert_eq!(output.stats.bio_cache_misses, 0);
}
