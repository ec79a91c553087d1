use chrono::{DateTime, FixedOffset};
use lazy_static::lazy_static;
use regex::Regex;

use crate::error::ParseError;

/// Layout of `<published>` and `<updated>` in a Blogger export.
/// Example: 2020-01-02T03:04:05.000+00:00
pub const EXPORT_DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3f%:z";

/// Layout used in the front matter. The offset is dropped, not applied.
pub const FRONT_MATTER_DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

// chrono alone lets the milliseconds go missing and takes +0000 for +00:00
fn has_export_shape(value: &str) -> bool {
    lazy_static! {
        static ref EXPORT_DATE_REGEX: Regex = Regex::new(
            r"^\d{4}-\d{2}-\d{2}T\d{2}:\d{2}:\d{2}\.\d{3}[+-]\d{2}:\d{2}$"
        ).unwrap();
    }
    EXPORT_DATE_REGEX.is_match(value)
}

pub fn parse_timestamp(value: &str) -> Result<DateTime<FixedOffset>, ParseError> {
    let timestamp_error = |reason: String| ParseError::Timestamp {
        value: value.to_string(),
        reason,
    };

    if !has_export_shape(value) {
        return Err(timestamp_error("expected YYYY-MM-DDTHH:MM:SS.fff±HH:MM".to_string()));
    }
    DateTime::parse_from_str(value, EXPORT_DATE_FORMAT).map_err(|e| timestamp_error(e.to_string()))
}

/// Wall clock time of the post with a literal `Z`.
pub fn format_timestamp(date: &DateTime<FixedOffset>) -> String {
    date.naive_local().format(FRONT_MATTER_DATE_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use chrono::{Datelike, Timelike};

    use super::*;

    #[test]
    fn test_parse_timestamp() {
        let date = parse_timestamp("2020-01-02T03:04:05.000+00:00").unwrap();
        assert_eq!(date.year(), 2020);
        assert_eq!(date.month(), 1);
        assert_eq!(date.day(), 2);
        assert_eq!(date.hour(), 3);
        assert_eq!(date.minute(), 4);
        assert_eq!(date.second(), 5);
        assert_eq!(date.offset().local_minus_utc(), 0);

        let date = parse_timestamp("2016-06-25T00:25:23.342-03:00").unwrap();
        assert_eq!(date.offset().local_minus_utc(), -3 * 3600);
    }

    #[test]
    fn test_parse_timestamp_rejects_other_layouts() {
        for value in [
            "2020-01-02 03:04:05",
            "2020-01-02T03:04:05+00:00",
            "2020-01-02T03:04:05.000+0000",
            "2020-01-02T03:04:05.0+00:00",
            "2020-01-02T03:04:05.000Z",
            " 2020-01-02T03:04:05.000+00:00",
            "2020-13-02T03:04:05.000+00:00",
            "yesterday",
            "",
        ] {
            match parse_timestamp(value) {
                Err(ParseError::Timestamp { value: bad, .. }) => assert_eq!(bad, value),
                other => panic!("expected timestamp error for {:?}, got {:?}", value, other),
            }
        }
    }

    #[test]
    fn test_format_timestamp() {
        let date = parse_timestamp("2020-01-02T03:04:05.000+00:00").unwrap();
        assert_eq!(format_timestamp(&date), "2020-01-02T03:04:05Z");

        let date = parse_timestamp("2016-06-25T22:25:23.342-03:00").unwrap();
        assert_eq!(format_timestamp(&date), "2016-06-25T22:25:23Z");
    }
}
