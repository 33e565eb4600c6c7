//! Crawl statistics

/// Counters collected over one crawl
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CrawlStats {
    pub pages_visited: u64,
    pub quotes: u64,
    pub authors: u64,
    pub bio_cache_hits: u64,
    pub bio_cache_misses: u64,
}

impl CrawlStats {
    /// Share of biography lookups served from the cache, as a percentage
    pub fn cache_hit_rate(&self) -> f64 {
        let lookups = self.bio_cache_hits + self.bio_cache_misses;
        if lookups == 0 {
            return 0.0;
        }
        (self.bio_cache_hits as f64 / lookups as f64) * 100.0
    }
}

/// Formats statistics as a short multi-line report
pub fn format_statistics(stats: &CrawlStats) -> String {
    let mut out = String::new();
    out.push_str(&format!("Pages visited: {}\n", stats.pages_visited));
    out.push_str(&format!("Quotes: {}\n", stats.quotes));
    if stats.authors > 0 {
        out.push_str(&format!("Authors: {}\n", stats.authors));
        out.push_str(&format!(
            "Biography cache: {} hits, {} misses ({:.1}% hit rate)\n",
            stats.bio_cache_hits,
            stats.bio_cache_misses,
            stats.cache_hit_rate()
        ));
    }
    out
}

/// Logs statistics at info level
pub fn log_statistics(stats: &CrawlStats) {
    for line in format_statistics(stats).lines() {
        tracing::info!("{}", line);
    }
}
