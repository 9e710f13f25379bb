//! Permit Dataset Fetcher
//!
//! One-shot paged download from the city data portal:
//! - $limit/$offset paging, newest first ($order=issue_date DESC)
//! - Hard row cap to keep snapshots small
//! - Short pause between pages to stay within fair-use limits
//!
//! Produces the CSV snapshot consumed by the list pipeline. A network
//! or decode failure is terminal; no partial snapshot is written.

use crate::types::RawRow;
use anyhow::{Context, Result};
use std::collections::BTreeSet;
use std::path::Path;
use std::time::Duration;

/// Chicago building permits dataset endpoint
pub const DEFAULT_DATASET_URL: &str = "https://data.cityofchicago.org/resource/ydr8-5enu.json";

/// Rows pulled per page
const PAGE_LIMIT: usize = 5_000;

/// Hard cap on downloaded rows
const MAX_ROWS: usize = 20_000;

/// Pause between pages
const PAGE_PAUSE_MS: u64 = 100;

/// Download the permit dataset page by page until the source is
/// exhausted or the row cap is reached
pub async fn fetch_permits(url: &str) -> Result<Vec<RawRow>> {
    let client = reqwest::Client::new();
    let mut rows: Vec<RawRow> = Vec::new();

    println!("Connecting to permit data portal...");

    loop {
        let page: Vec<serde_json::Map<String, serde_json::Value>> = client
            .get(url)
            .query(&[
                ("$limit", PAGE_LIMIT.to_string()),
                ("$offset", rows.len().to_string()),
                ("$order", "issue_date DESC".to_string()),
            ])
            .send()
            .await
            .context("Failed to reach the permit dataset")?
            .error_for_status()
            .context("Permit dataset returned an error status")?
            .json()
            .await
            .context("Failed to decode the permit dataset response")?;

        // Empty page means the source is exhausted
        if page.is_empty() {
            break;
        }

        rows.extend(page.into_iter().map(json_row_to_raw));
        println!("Downloaded {} rows total...", rows.len());

        if rows.len() >= MAX_ROWS {
            break;
        }

        tokio::time::sleep(Duration::from_millis(PAGE_PAUSE_MS)).await;
    }

    Ok(rows)
}

/// Flatten a JSON record into the header-keyed string row the
/// normalizer expects
fn json_row_to_raw(record: serde_json::Map<String, serde_json::Value>) -> RawRow {
    record
        .into_iter()
        .map(|(key, value)| {
            let text = match value {
                serde_json::Value::String(s) => s,
                serde_json::Value::Null => String::new(),
                other => other.to_string(),
            };
            (key, text)
        })
        .collect()
}

/// Write rows as the CSV snapshot. The header is the key-sorted union
/// of all row fields; missing values write as empty strings.
pub fn save_snapshot(path: &Path, rows: &[RawRow]) -> Result<()> {
    if rows.is_empty() {
        std::fs::write(path, "")
            .with_context(|| format!("Failed to write empty snapshot {:?}", path))?;
        return Ok(());
    }

    let mut headers: BTreeSet<&str> = BTreeSet::new();
    for row in rows {
        for key in row.keys() {
            headers.insert(key.as_str());
        }
    }
    let headers: Vec<&str> = headers.into_iter().collect();

    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("Failed to open snapshot {:?}", path))?;
    writer
        .write_record(&headers)
        .context("Failed to write snapshot header")?;

    for row in rows {
        let record: Vec<&str> = headers
            .iter()
            .map(|h| row.get(*h).map(String::as_str).unwrap_or(""))
            .collect();
        writer
            .write_record(&record)
            .context("Failed to write snapshot row")?;
    }

    writer.flush().context("Failed to flush snapshot")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ingest::parse_snapshot;

    fn make_row(pairs: &[(&str, &str)]) -> RawRow {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_json_row_flattening() {
        let mut record = serde_json::Map::new();
        record.insert("reported_cost".to_string(), serde_json::json!("75000"));
        record.insert("total_fee".to_string(), serde_json::json!(325.5));
        record.insert("contact_1_name".to_string(), serde_json::Value::Null);

        let row = json_row_to_raw(record);
        assert_eq!(row["reported_cost"], "75000");
        assert_eq!(row["total_fee"], "325.5");
        assert_eq!(row["contact_1_name"], "");
    }

    #[test]
    fn test_snapshot_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("permits.csv");

        let rows = vec![
            make_row(&[("id", "a"), ("reported_cost", "75000")]),
            make_row(&[("id", "b"), ("street_name", "Main St")]),
        ];
        save_snapshot(&path, &rows).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let parsed = parse_snapshot(&text).unwrap();
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[0]["id"], "a");
        assert_eq!(parsed[0]["reported_cost"], "75000");
        // Union header: fields absent from a row read back empty
        assert_eq!(parsed[1]["reported_cost"], "");
        assert_eq!(parsed[1]["street_name"], "Main St");
    }

    #[test]
    fn test_empty_snapshot_writes_valid_empty_source() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("permits.csv");
        save_snapshot(&path, &[]).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(parse_snapshot(&text).unwrap().is_empty());
    }
}
