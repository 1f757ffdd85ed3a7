//! Join-date rendering for the Welcome Wagon table.

use chrono::{DateTime, NaiveDateTime};

/// Placeholder for absent or unusable timestamps.
pub const MISSING_DATE: &str = "N/A";

const LONG_DATE: &str = "%B %-d, %Y";

/// Format an ISO-8601 timestamp as a long date, e.g. "January 5, 2024".
///
/// Absent, empty, and unparseable inputs all render as `N/A`. Timestamps
/// without a UTC offset are accepted; some producers omit it.
pub fn format_join_date(joined_at: Option<&str>) -> String {
    let Some(raw) = joined_at.filter(|s| !s.is_empty()) else {
        return MISSING_DATE.to_string();
    };
    if let Ok(stamped) = DateTime::parse_from_rfc3339(raw) {
        return stamped.format(LONG_DATE).to_string();
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return naive.format(LONG_DATE).to_string();
    }
    MISSING_DATE.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_utc_timestamp_as_long_date() {
        assert_eq!(
            format_join_date(Some("2024-01-05T00:00:00Z")),
            "January 5, 2024"
        );
    }

    #[test]
    fn accepts_explicit_offset() {
        assert_eq!(
            format_join_date(Some("2024-12-25T18:30:00+00:00")),
            "December 25, 2024"
        );
    }

    #[test]
    fn accepts_offset_free_timestamp_with_fractional_seconds() {
        assert_eq!(
            format_join_date(Some("2023-06-09T12:30:00.123456")),
            "June 9, 2023"
        );
    }

    #[test]
    fn absent_and_empty_render_na() {
        assert_eq!(format_join_date(None), MISSING_DATE);
        assert_eq!(format_join_date(Some("")), MISSING_DATE);
    }

    #[test]
    fn garbage_renders_na() {
        assert_eq!(format_join_date(Some("yesterday")), MISSING_DATE);
    }
}
