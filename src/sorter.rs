//! Lead Sorting Module
//!
//! Two total orders over the qualified set, both descending only:
//! - Cost: highest reported cost first
//! - Date: most recently issued first, unparsed dates last
//!
//! Sorting is stable: ties keep their original input order, so repeated
//! runs over identical input produce identical sequences.

use crate::types::{Lead, SortKey};
use std::cmp::Ordering;

/// Sort leads in place by the given key
pub fn sort_leads(leads: &mut [Lead], key: SortKey) {
    match key {
        SortKey::Cost => {
            leads.sort_by(|a, b| b.cost.partial_cmp(&a.cost).unwrap_or(Ordering::Equal));
        }
        SortKey::Date => {
            // None is the smallest Option value, so descending order
            // places unparsed dates after every valid timestamp
            leads.sort_by(|a, b| b.issued_at.cmp(&a.issued_at));
        }
    }
}
