//! Show start time formatting and parsing.

use chrono::{DateTime, NaiveDateTime, Utc};

use crate::config::{SHOW_TIME_FORMAT, SHOW_TIME_INPUT_FORMATS};

/// Format a start time the way every page displays it
pub fn format_show_time(start_time: &DateTime<Utc>) -> String {
    start_time.format(SHOW_TIME_FORMAT).to_string()
}

/// Parse a submitted start time.
///
/// RFC 3339 values keep their offset and are converted to UTC; naive
/// values in one of the accepted input formats are taken as UTC.
pub fn parse_start_time(input: &str) -> Option<DateTime<Utc>> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Some(dt.with_timezone(&Utc));
    }

    SHOW_TIME_INPUT_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(input, fmt).ok())
        .map(|naive| naive.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_show_time() {
        let dt = Utc.with_ymd_and_hms(2035, 4, 1, 20, 0, 0).unwrap();
        assert_eq!(format_show_time(&dt), "2035-04-01 20:00:00");
    }

    #[test]
    fn test_parse_accepts_form_formats() {
        let expected = Utc.with_ymd_and_hms(2035, 4, 1, 20, 0, 0).unwrap();

        assert_eq!(parse_start_time("2035-04-01 20:00:00"), Some(expected));
        assert_eq!(parse_start_time("2035-04-01 20:00"), Some(expected));
        assert_eq!(parse_start_time("2035-04-01T20:00"), Some(expected));
        assert_eq!(parse_start_time(" 2035-04-01T20:00:00 "), Some(expected));
    }

    #[test]
    fn test_parse_converts_offsets_to_utc() {
        let expected = Utc.with_ymd_and_hms(2035, 4, 1, 18, 0, 0).unwrap();
        assert_eq!(parse_start_time("2035-04-01T20:00:00+02:00"), Some(expected));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(parse_start_time(""), None);
        assert_eq!(parse_start_time("tomorrow night"), None);
        assert_eq!(parse_start_time("2035-13-01 20:00:00"), None);
    }
}
