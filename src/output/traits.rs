//! Output record trait and error types
//!
//! This module defines how a record maps to a CSV row and the errors that can
//! occur while writing one.

use crate::model::{Author, Quote};
use std::borrow::Cow;
use thiserror::Error;

/// Errors that can occur during output operations
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}

/// Result type for output operations
pub type OutputResult<T> = Result<T, OutputError>;

/// A record with a fixed column schema
pub trait CsvRecord {
    /// Header row, in declared field order
    fn columns() -> &'static [&'static str];

    /// Field values, in the same order as [`CsvRecord::columns`]
    fn fields(&self) -> Vec<Cow<'_, str>>;
}

impl CsvRecord for Quote {
    fn columns() -> &'static [&'static str] {
        &["text", "author", "tags"]
    }

    fn fields(&self) -> Vec<Cow<'_, str>> {
        vec![
            Cow::Borrowed(self.text.as_str()),
            Cow::Borrowed(self.author.as_str()),
            Cow::Owned(self.tags.join(",")),
        ]
    }
}

impl CsvRecord for Author {
    fn columns() -> &'static [&'static str] {
        &["author", "bio"]
    }

    fn fields(&self) -> Vec<Cow<'_, str>> {
        vec![
            Cow::Borrowed(self.author.as_str()),
            Cow::Borrowed(self.bio.as_str()),
        ]
    }
}
