//! CSV output
//!
//! Writes a header row followed by one row per record. The author file lives
//! next to the quotes file with a `_bio` suffix on the stem.

use crate::model::{Author, Quote};
use crate::output::traits::{CsvRecord, OutputError, OutputResult};
use std::path::{Path, PathBuf};

/// Writes `rows` to `path` under the record's fixed header
///
/// Missing parent directories are created. Returns the number of data rows
/// written.
pub fn write_csv<R: CsvRecord>(path: &Path, rows: &[R]) -> OutputResult<usize> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }

    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(R::columns())?;
    for row in rows {
        writer.write_record(row.fields().iter().map(|field| field.as_bytes()))?;
    }
    writer.flush()?;

    Ok(rows.len())
}

/// Writes quotes with header `text,author,tags`
pub fn write_quotes(path: &Path, quotes: &[Quote]) -> OutputResult<usize> {
    let written = write_csv(path, quotes)?;
    tracing::info!("Wrote {} quotes to {}", written, path.display());
    Ok(written)
}

/// Writes authors with header `author,bio` to the path derived from `quotes_path`
///
/// Returns the path written.
pub fn write_authors(quotes_path: &Path, authors: &[Author]) -> OutputResult<PathBuf> {
    let path = bio_output_path(quotes_path)?;
    let written = write_csv(&path, authors)?;
    tracing::info!("Wrote {} authors to {}", written, path.display());
    Ok(path)
}

/// Derives the author file path: `dir/quotes.csv` -> `dir/quotes_bio.csv`
///
/// A path without an extension gets the bare `_bio` suffix.
pub fn bio_output_path(quotes_path: &Path) -> OutputResult<PathBuf> {
    let stem = quotes_path
        .file_stem()
        .and_then(|s| s.to_str())
        .ok_or_else(|| OutputError::InvalidPath(quotes_path.display().to_string()))?;

    let file_name = match quotes_path.extension().and_then(|e| e.to_str()) {
        Some(ext) => format!("{}_bio.{}", stem, ext),
        None => format!("{}_bio", stem),
    };

    Ok(quotes_path.with_file_name(file_name))
}
