use chrono::{DateTime, NaiveDate};

/// Parses a release date from client input.
///
/// Accepts either a plain calendar date (`2024-01-01`) or an RFC 3339 datetime
/// (`2024-01-01T00:00:00Z`). For datetimes only the calendar date in the given
/// offset is kept.
///
/// # Arguments
/// - `value` - The raw string from the request body
///
/// # Returns
/// - `Some(NaiveDate)` - Successfully parsed date
/// - `None` - The string is neither a date nor an RFC 3339 datetime
pub fn parse_release_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();

    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Some(date);
    }

    DateTime::parse_from_rfc3339(value)
        .ok()
        .map(|datetime| datetime.date_naive())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_date() {
        assert_eq!(
            parse_release_date("2024-01-01"),
            NaiveDate::from_ymd_opt(2024, 1, 1)
        );
    }

    #[test]
    fn parses_rfc3339_datetime() {
        assert_eq!(
            parse_release_date("2021-01-03T10:30:00+07:00"),
            NaiveDate::from_ymd_opt(2021, 1, 3)
        );
        assert_eq!(
            parse_release_date("2021-01-03T00:00:00.000Z"),
            NaiveDate::from_ymd_opt(2021, 1, 3)
        );
    }

    #[test]
    fn rejects_garbage_and_impossible_dates() {
        assert_eq!(parse_release_date("not a date"), None);
        assert_eq!(parse_release_date("2024-02-30"), None);
        assert_eq!(parse_release_date(""), None);
    }
}
