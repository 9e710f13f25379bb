//! Lead Filtering Module
//!
//! Qualification threshold, free-text search, and category matching.
//! All predicates are total over normalized leads and compose
//! conjunctively in the pipeline.

use crate::types::Lead;

/// Category sentinel that disables category filtering
pub const ALL_CATEGORIES: &str = "All";

/// Coarse work-type filters offered by the dashboard
pub const CATEGORY_FILTERS: &[&str] = &[
    "All",
    "Electrical",
    "Plumbing",
    "Renovation",
    "New Construction",
    "Wrecking",
    "Elevator",
    "Signs",
];

/// A row qualifies as a lead when its reported cost meets the minimum
pub fn qualifies(lead: &Lead, min_value: f64) -> bool {
    lead.cost >= min_value
}

/// Case-insensitive substring search over category, description, and
/// street name. An empty query matches everything.
pub fn matches_search(lead: &Lead, query: &str) -> bool {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return true;
    }

    lead.category.to_lowercase().contains(&query)
        || lead.description.to_lowercase().contains(&query)
        || lead.street_name.to_lowercase().contains(&query)
}

/// Category filter. "All" (or an empty selection) matches everything;
/// otherwise the selected token must appear in the category label OR the
/// work description. Permits are often mistyped upstream but still name
/// the trade in free text, so both fields are checked.
pub fn matches_category(lead: &Lead, selected: &str) -> bool {
    let selected = selected.trim();
    if selected.is_empty() || selected.eq_ignore_ascii_case(ALL_CATEGORIES) {
        return true;
    }

    let token = selected.to_lowercase();
    lead.category.to_lowercase().contains(&token)
        || lead.description.to_lowercase().contains(&token)
}
