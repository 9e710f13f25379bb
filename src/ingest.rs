//! Snapshot Ingestion Module
//!
//! One-shot load of the permit CSV snapshot:
//! - Header-keyed parsing into RawRows (absent-tolerant, flexible widths)
//! - An empty source is a valid zero-row result, not an error
//! - An unreadable or structurally unparsable source is a terminal error

use crate::normalize::normalize_rows;
use crate::types::{Lead, RawRow};
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Parse raw tabular snapshot text into header-keyed rows.
/// Rows shorter than the header are tolerated; the missing fields are
/// simply absent and default during normalization.
pub fn parse_snapshot(text: &str) -> Result<Vec<RawRow>> {
    if text.trim().is_empty() {
        return Ok(vec![]);
    }

    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers = reader
        .headers()
        .context("Failed to read snapshot header row")?
        .clone();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.context("Failed to parse snapshot row")?;

        let mut row = RawRow::new();
        for (i, header) in headers.iter().enumerate() {
            if header.is_empty() {
                continue;
            }
            if let Some(value) = record.get(i) {
                row.insert(header.to_string(), value.to_string());
            }
        }
        rows.push(row);
    }

    Ok(rows)
}

/// Load and normalize the snapshot at `path`
pub fn load_snapshot(path: &Path) -> Result<Vec<Lead>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read snapshot from {:?}", path))?;

    let rows = parse_snapshot(&text)?;
    Ok(normalize_rows(&rows))
}
