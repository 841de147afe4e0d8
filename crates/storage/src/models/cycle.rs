//! Week-scoped cycle keys.
//!
//! Every vote, ballot and draw belongs to a cycle identified by its ISO-8601
//! week, formatted as `YYYY-Www` (for example `2025-W07`).

use chrono::{DateTime, Datelike, Local, TimeZone};

/// Formats the ISO week containing `at`.
///
/// The year is the ISO week-numbering year, so the last days of December can
/// belong to week 1 of the following year.
pub fn derive_cycle_key<Tz: TimeZone>(at: &DateTime<Tz>) -> String {
    let week = at.iso_week();
    format!("{}-W{:02}", week.year(), week.week())
}

/// Cycle key of the current week in the server's local time zone.
pub fn current_cycle_key() -> String {
    derive_cycle_key(&Local::now())
}

/// Uses `explicit` when it is present and not blank, otherwise derives the
/// key for `at`.
pub fn resolve_cycle_key_at<Tz: TimeZone>(explicit: Option<&str>, at: &DateTime<Tz>) -> String {
    match explicit.map(str::trim) {
        Some(key) if !key.is_empty() => key.to_string(),
        _ => derive_cycle_key(at),
    }
}

pub fn resolve_cycle_key(explicit: Option<&str>) -> String {
    resolve_cycle_key_at(explicit, &Local::now())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn utc(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_pads_single_digit_weeks() {
        assert_eq!(derive_cycle_key(&utc(2025, 2, 12)), "2025-W07");
    }

    #[test]
    fn test_first_week_of_year() {
        assert_eq!(derive_cycle_key(&utc(2024, 1, 1)), "2024-W01");
    }

    #[test]
    fn test_uses_iso_week_year_at_year_boundary() {
        // Monday 30 December 2024 belongs to ISO week 1 of 2025.
        assert_eq!(derive_cycle_key(&utc(2024, 12, 30)), "2025-W01");
        // Friday 1 January 2021 still belongs to 2020-W53.
        assert_eq!(derive_cycle_key(&utc(2021, 1, 1)), "2020-W53");
    }

    #[test]
    fn test_same_week_same_key() {
        assert_eq!(
            derive_cycle_key(&utc(2025, 10, 13)),
            derive_cycle_key(&utc(2025, 10, 19))
        );
        assert_ne!(
            derive_cycle_key(&utc(2025, 10, 19)),
            derive_cycle_key(&utc(2025, 10, 20))
        );
    }

    #[test]
    fn test_explicit_key_wins() {
        let at = utc(2025, 10, 13);
        assert_eq!(resolve_cycle_key_at(Some("2024-W10"), &at), "2024-W10");
        assert_eq!(resolve_cycle_key_at(Some("  2024-W10 "), &at), "2024-W10");
    }

    #[test]
    fn test_blank_key_falls_back_to_derived() {
        let at = utc(2025, 10, 13);
        assert_eq!(resolve_cycle_key_at(Some("   "), &at), "2025-W42");
        assert_eq!(resolve_cycle_key_at(None, &at), "2025-W42");
    }
}
