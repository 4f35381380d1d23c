//! Date parsing and formatting shared by list sorting and table cells.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Parse an ISO-ish date or datetime string into epoch milliseconds (UTC).
///
/// Accepts RFC 3339 ("2024-03-15T14:02:26Z", with offset), a naive
/// datetime ("2024-03-15T14:02:26") or a bare date ("2024-03-15").
/// Returns `None` for anything else; callers decide how to surface that.
pub fn parse_instant_ms(value: &str) -> Option<i64> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.timestamp_millis());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S") {
        return Some(dt.and_utc().timestamp_millis());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M") {
        return Some(dt.and_utc().timestamp_millis());
    }
    if let Ok(d) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Some(d.and_hms_opt(0, 0, 0)?.and_utc().timestamp_millis());
    }
    None
}

fn parse_naive_datetime(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim().trim_end_matches('Z');
    // Strip fractional seconds, if any
    let value = value.split('.').next().unwrap_or(value);
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M"))
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(value, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}

/// Format an ISO datetime string as "DD.MM.YYYY HH:MM".
/// Unparsable input is shown as-is.
pub fn format_datetime(value: &str) -> String {
    match parse_naive_datetime(value) {
        Some(dt) => dt.format("%d.%m.%Y %H:%M").to_string(),
        None => value.to_string(),
    }
}

/// Format an ISO date or datetime string as "DD.MM.YYYY".
/// Unparsable input is shown as-is.
pub fn format_date(value: &str) -> String {
    match parse_naive_datetime(value) {
        Some(dt) => dt.format("%d.%m.%Y").to_string(),
        None => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_rfc3339_naive_and_bare_dates() {
        assert_eq!(parse_instant_ms("1970-01-01T00:00:00Z"), Some(0));
        assert_eq!(
            parse_instant_ms("1970-01-02"),
            Some(24 * 60 * 60 * 1000)
        );
        assert_eq!(
            parse_instant_ms("1970-01-01T01:00:00"),
            Some(60 * 60 * 1000)
        );
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(parse_instant_ms("not-a-date"), None);
        assert_eq!(parse_instant_ms(""), None);
        assert_eq!(parse_instant_ms("2024-13-40"), None);
    }

    #[test]
    fn formats_dates() {
        assert_eq!(format_date("2024-03-15"), "15.03.2024");
        assert_eq!(format_date("2024-03-15T14:02:26.123Z"), "15.03.2024");
        assert_eq!(
            format_datetime("2024-03-15T14:02:26Z"),
            "15.03.2024 14:02"
        );
    }

    #[test]
    fn unparsable_input_is_passed_through() {
        assert_eq!(format_date("TBA"), "TBA");
        assert_eq!(format_datetime("invalid"), "invalid");
    }
}
