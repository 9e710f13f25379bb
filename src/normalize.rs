//! Row Normalization Module
//!
//! Converts raw header-keyed rows into typed Lead records:
//! - Derives a stable id (dataset id, permit number, content hash)
//! - Parses reported cost (parse failure yields 0.0)
//! - Parses issue timestamps (parse failure yields None, sorts least-recent)
//! - Defaults every missing field so downstream predicates are total
//!
//! Normalization never drops or reorders rows; qualification filtering
//! happens downstream.

use crate::types::{Lead, RawRow};
use chrono::{NaiveDate, NaiveDateTime};
use sha2::{Digest, Sha256};

/// Timestamp formats accepted for issue_date
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
];

/// Date-only formats accepted for issue_date (midnight assumed)
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%m/%d/%Y"];

/// Normalize all rows, preserving cardinality and input order
pub fn normalize_rows(rows: &[RawRow]) -> Vec<Lead> {
    rows.iter().map(normalize_row).collect()
}

/// Normalize a single raw row into a Lead with defined defaults
pub fn normalize_row(row: &RawRow) -> Lead {
    Lead {
        id: derive_id(row),
        cost: parse_cost(field(row, "reported_cost")),
        category: field(row, "permit_type").to_string(),
        description: field(row, "work_description").to_string(),
        street_number: field(row, "street_number").to_string(),
        street_name: field(row, "street_name").to_string(),
        contact_name: field(row, "contact_1_name").to_string(),
        contact_type: field(row, "contact_1_type").to_string(),
        issued_at: parse_issue_date(field(row, "issue_date")),
        status: field(row, "permit_status").to_string(),
        total_fee: field(row, "total_fee").to_string(),
        zip: field(row, "contact_1_zipcode").to_string(),
    }
}

/// Missing fields read as empty strings
fn field<'a>(row: &'a RawRow, name: &str) -> &'a str {
    row.get(name).map(String::as_str).unwrap_or("")
}

/// Stable row identifier: dataset id, then permit number, then a
/// content hash of the full row. Deterministic for the same raw row
/// across sessions so bookmarks survive reloads.
fn derive_id(row: &RawRow) -> String {
    let explicit = field(row, "id").trim();
    if !explicit.is_empty() {
        return explicit.to_string();
    }

    let permit = field(row, "permit_").trim();
    if !permit.is_empty() {
        return permit.to_string();
    }

    row_content_hash(row)
}

/// SHA-256 over key-sorted field pairs
fn row_content_hash(row: &RawRow) -> String {
    let mut pairs: Vec<(&str, &str)> = row
        .iter()
        .map(|(k, v)| (k.as_str(), v.as_str()))
        .collect();
    pairs.sort();

    let mut hasher = Sha256::new();
    for (key, value) in pairs {
        hasher.update(key.as_bytes());
        hasher.update(b"=");
        hasher.update(value.as_bytes());
        hasher.update(b"|");
    }

    let digest = format!("{:x}", hasher.finalize());
    format!("row-{}", &digest[..16])
}

/// Parse a reported cost string, stripping currency symbols and
/// thousands separators. Parse failure yields 0.0, never an error.
pub fn parse_cost(raw: &str) -> f64 {
    let cleaned = raw.trim().replace('$', "").replace(',', "");

    if let Ok(value) = cleaned.parse::<f64>() {
        return value;
    }

    0.0
}

/// Parse an issue timestamp. Unparsable values yield None, which sorts
/// as least-recent and is never fresh.
pub fn parse_issue_date(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    for fmt in DATETIME_FORMATS {
        if let Ok(ts) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(ts);
        }
    }

    for fmt in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(raw, fmt) {
            return date.and_hms_opt(0, 0, 0);
        }
    }

    // Fallback: pull a bare Y-m-d out of messier strings
    if let Ok(re) = regex::Regex::new(r"(\d{4})-(\d{2})-(\d{2})") {
        if let Some(caps) = re.captures(raw) {
            let year: i32 = caps[1].parse().unwrap_or(0);
            let month: u32 = caps[2].parse().unwrap_or(0);
            let day: u32 = caps[3].parse().unwrap_or(0);
            if let Some(date) = NaiveDate::from_ymd_opt(year, month, day) {
                return date.and_hms_opt(0, 0, 0);
            }
        }
    }

    None
}
