//! Lenient date parsing for stored records.
//!
//! Dates come from HTML form inputs (`2024-03-01`, `2024-03-01T20:00`), from
//! round materialization (`2024-03-01T20:00:00`) and from the hosted backend
//! (RFC 3339 with offset). Empty strings mean "not set". Dates are only
//! displayed, so a value that does not parse is read as "not set" too.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer};

const DATETIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S"];

/// Parse a stored date/time value, keeping the wall-clock time as written.
pub fn parse_datetime(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_local());
    }
    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(dt);
        }
    }
    parse_date(raw).and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// Parse a stored calendar date. Date-time values are truncated to their date.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(d) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(d);
    }
    // Avoid recursing through parse_datetime's date-only fallback.
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_local().date());
    }
    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|dt| dt.date())
}

pub(crate) fn optional_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(|s| lenient(s, parse_date)))
}

pub(crate) fn optional_datetime<'de, D>(
    deserializer: D,
) -> Result<Option<NaiveDateTime>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(|s| lenient(s, parse_datetime)))
}

fn lenient<T>(raw: &str, parse: fn(&str) -> Option<T>) -> Option<T> {
    let parsed = parse(raw);
    if parsed.is_none() && !raw.trim().is_empty() {
        tracing::warn!(value = raw, "ignoring unparseable date");
    }
    parsed
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd_hm(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    #[test]
    fn test_parse_datetime_local_input_without_seconds() {
        assert_eq!(
            parse_datetime("2024-03-01T20:00"),
            Some(ymd_hm(2024, 3, 1, 20, 0))
        );
    }

    #[test]
    fn test_parse_datetime_materialized_round_kickoff() {
        assert_eq!(
            parse_datetime("2024-03-01T20:00:00"),
            Some(ymd_hm(2024, 3, 1, 20, 0))
        );
    }

    #[test]
    fn test_parse_datetime_rfc3339_keeps_wall_clock() {
        assert_eq!(
            parse_datetime("2024-03-01T20:00:00-03:00"),
            Some(ymd_hm(2024, 3, 1, 20, 0))
        );
    }

    #[test]
    fn test_parse_datetime_date_only_is_midnight() {
        assert_eq!(parse_datetime("2024-03-01"), Some(ymd_hm(2024, 3, 1, 0, 0)));
    }

    #[test]
    fn test_parse_date_truncates_datetime() {
        assert_eq!(
            parse_date("2024-03-01T20:00"),
            NaiveDate::from_ymd_opt(2024, 3, 1)
        );
    }

    #[derive(Deserialize)]
    struct Dated {
        #[serde(default, deserialize_with = "optional_date")]
        day: Option<NaiveDate>,
        #[serde(default, deserialize_with = "optional_datetime")]
        at: Option<NaiveDateTime>,
    }

    #[test]
    fn test_unparseable_values_read_as_unset() {
        // A round saved without a date materializes as a bare kickoff time.
        let dated: Dated =
            serde_json::from_str(r#"{"day": "someday", "at": "T20:00:00"}"#).unwrap();
        assert_eq!(dated.day, None);
        assert_eq!(dated.at, None);

        let dated: Dated =
            serde_json::from_str(r#"{"day": "2024-03-01", "at": "2024-03-01T20:00:00"}"#).unwrap();
        assert_eq!(dated.day, NaiveDate::from_ymd_opt(2024, 3, 1));
        assert_eq!(dated.at, Some(ymd_hm(2024, 3, 1, 20, 0)));
    }

    #[test]
    fn test_empty_is_none() {
        assert_eq!(parse_date("  "), None);
        assert_eq!(parse_datetime(""), None);
    }
}
