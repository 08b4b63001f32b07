use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Text shown for timestamps that cannot be read as a calendar date.
pub const INVALID_DATE: &str = "Invalid Date";

/// Format a GitHub timestamp as a short display date, e.g. "Mar 5, 2021".
///
/// Accepts RFC 3339 timestamps (`2021-03-05T10:00:00Z`), naive date-times and
/// plain `YYYY-MM-DD` dates. The calendar date is taken as written, without
/// converting to the local timezone.
pub fn format_date(value: &str) -> String {
    match parse_date(value.trim()) {
        Some(date) => date.format("%b %-d, %Y").to_string(),
        None => INVALID_DATE.to_string(),
    }
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.date_naive());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt.date());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S") {
        return Some(dt.date());
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_github_timestamp() {
        assert_eq!(format_date("2021-03-05T10:22:01Z"), "Mar 5, 2021");
        assert_eq!(format_date("2011-01-25T18:44:36Z"), "Jan 25, 2011");
    }

    #[test]
    fn accepts_offsets_and_plain_dates() {
        assert_eq!(format_date("2019-12-31T23:00:00+02:00"), "Dec 31, 2019");
        assert_eq!(format_date("2020-07-04"), "Jul 4, 2020");
        assert_eq!(format_date("2020-07-04T08:00:00"), "Jul 4, 2020");
    }

    #[test]
    fn garbage_is_invalid_date() {
        assert_eq!(format_date("yesterday"), INVALID_DATE);
        assert_eq!(format_date(""), INVALID_DATE);
    }
}
