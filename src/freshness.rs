//! Freshness Classification
//!
//! A lead is fresh when it was issued within the last 72 hours.

use chrono::{Duration, NaiveDateTime};

/// Age limit for a lead to count as fresh
pub const FRESH_WINDOW_HOURS: i64 = 72;

/// True iff `issued_at` is within the freshness window of `now`.
/// Unparsed issue dates are never fresh.
pub fn is_fresh(issued_at: Option<NaiveDateTime>, now: NaiveDateTime) -> bool {
    match issued_at {
        Some(ts) => now - ts < Duration::hours(FRESH_WINDOW_HOURS),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    #[test]
    fn test_just_inside_window_is_fresh() {
        let now = at(2024, 3, 10, 12, 0);
        let issued = now - Duration::hours(71) - Duration::minutes(59);
        assert!(is_fresh(Some(issued), now));
    }

    #[test]
    fn test_just_outside_window_is_stale() {
        let now = at(2024, 3, 10, 12, 0);
        let issued = now - Duration::hours(72) - Duration::minutes(1);
        assert!(!is_fresh(Some(issued), now));
    }

    #[test]
    fn test_exact_boundary_is_stale() {
        let now = at(2024, 3, 10, 12, 0);
        let issued = now - Duration::hours(FRESH_WINDOW_HOURS);
        assert!(!is_fresh(Some(issued), now));
    }

    #[test]
    fn test_invalid_date_is_never_fresh() {
        let now = at(2024, 3, 10, 12, 0);
        assert!(!is_fresh(None, now));
    }
}
