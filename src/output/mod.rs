//! Output module for persisting crawl results
//!
//! This module handles:
//! - Writing quotes and author biographies to CSV
//! - Deriving the author file path from the quotes path
//! - Reporting crawl statistics

mod csv_writer;
pub mod stats;
mod traits;

pub use csv_writer::{bio_output_path, write_authors, write_csv, write_quotes};
pub use stats::{format_statistics, log_statistics, CrawlStats};
pub use traits::{CsvRecord, OutputError, OutputResult};
