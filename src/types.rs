use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Raw header-keyed row as parsed from the tabular snapshot
pub type RawRow = HashMap<String, String>;

/// Normalized permit record. Every field is defined after normalization:
/// unparsable costs become 0.0 and unparsable issue dates become None,
/// so downstream predicates and comparators are total.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Lead {
    pub id: String,
    pub cost: f64,
    pub category: String,
    pub description: String,
    pub street_number: String,
    pub street_name: String,
    pub contact_name: String,
    pub contact_type: String,
    pub issued_at: Option<NaiveDateTime>,
    pub status: String,
    pub total_fee: String,
    pub zip: String,
}

/// Sort orders supported by the lead list, both descending
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum SortKey {
    Cost,
    Date,
}

impl std::str::FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "cost" => Ok(SortKey::Cost),
            "date" => Ok(SortKey::Date),
            other => Err(format!("Unknown sort key: {} (expected cost or date)", other)),
        }
    }
}
