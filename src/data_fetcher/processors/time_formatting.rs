use crate::error::AppError;
use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;
use std::fmt::Display;

/// Display format of the local start time, e.g. "2024-09-08 10:00 AM PDT".
pub const DISPLAY_TIME_FORMAT: &str = "%Y-%m-%d %I:%M %p %Z";

/// Parses an upstream UTC timestamp.
///
/// ESPN usually omits seconds (`2024-09-08T17:00Z`), which RFC 3339 does not
/// allow, so the minute-precision forms are accepted as well.
pub fn parse_upstream_utc(timestamp: &str) -> Result<DateTime<Utc>, AppError> {
    let trimmed = timestamp.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(parsed.with_timezone(&Utc));
    }

    ["%Y-%m-%dT%H:%MZ", "%Y-%m-%dT%H:%M:%SZ", "%Y-%m-%dT%H:%M"]
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())
        .map(|naive| naive.and_utc())
        .ok_or_else(|| {
            AppError::datetime_parse_error(format!("Failed to parse timestamp '{timestamp}'"))
        })
}

/// Converts an upstream UTC timestamp into a display string in `tz`.
/// Falls back to the raw string when it cannot be parsed.
pub fn format_display_time_in<Z>(timestamp: &str, tz: &Z) -> String
where
    Z: TimeZone,
    Z::Offset: Display,
{
    match parse_upstream_utc(timestamp) {
        Ok(utc) => utc
            .with_timezone(tz)
            .format(DISPLAY_TIME_FORMAT)
            .to_string(),
        Err(e) => {
            tracing::debug!("{e}; keeping raw start time");
            timestamp.to_string()
        }
    }
}

/// Converts an upstream UTC timestamp into the display zone.
pub fn format_display_time(timestamp: &str, display_timezone: Tz) -> String {
    format_display_time_in(timestamp, &display_timezone)
}

/// Resolves an IANA zone name such as `America/Los_Angeles`.
pub fn parse_display_timezone(name: &str) -> Result<Tz, AppError> {
    name.trim().parse::<Tz>().map_err(|e| {
        AppError::config_error(format!("Unknown display timezone '{name}': {e}"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Timelike};

    const PACIFIC: Tz = chrono_tz::America::Los_Angeles;

    #[test]
    fn test_parse_minute_precision() {
        let parsed = parse_upstream_utc("2024-09-08T17:00Z").unwrap();
        assert_eq!(parsed.hour(), 17);
        assert_eq!(parsed.minute(), 0);
    }

    #[test]
    fn test_parse_rfc3339() {
        let parsed = parse_upstream_utc("2024-09-08T17:25:30+00:00").unwrap();
        assert_eq!(parsed.minute(), 25);
        assert_eq!(parsed.second(), 30);
    }

    #[test]
    fn test_parse_failure() {
        let result = parse_upstream_utc("next sunday");
        assert!(matches!(result, Err(AppError::DateTimeParse(_))));
    }

    #[test]
    fn test_format_display_time_in_fixed_offset() {
        let pacific_daylight = FixedOffset::west_opt(7 * 3600).unwrap();
        let formatted = format_display_time_in("2024-09-08T17:00Z", &pacific_daylight);
        assert!(
            formatted.starts_with("2024-09-08 10:00 AM"),
            "unexpected format: {formatted}"
        );
    }

    #[test]
    fn test_format_display_time_crosses_midnight() {
        let pacific_daylight = FixedOffset::west_opt(7 * 3600).unwrap();
        let formatted = format_display_time_in("2024-09-09T03:15Z", &pacific_daylight);
        assert!(formatted.starts_with("2024-09-08 08:15 PM"));
    }

    #[test]
    fn test_format_display_time_falls_back_to_raw() {
        assert_eq!(format_display_time("TBD", PACIFIC), "TBD");
        assert_eq!(format_display_time("", PACIFIC), "");
    }

    #[test]
    fn test_format_display_time_uses_named_zone() {
        assert_eq!(
            format_display_time("2024-11-17T18:00Z", PACIFIC),
            "2024-11-17 10:00 AM PST"
        );
        assert_eq!(
            format_display_time("2024-09-08T17:00Z", PACIFIC),
            "2024-09-08 10:00 AM PDT"
        );
        assert_eq!(
            format_display_time("2024-11-17T18:00Z", chrono_tz::UTC),
            "2024-11-17 06:00 PM UTC"
        );
    }

    #[test]
    fn test_parse_display_timezone() {
        assert_eq!(parse_display_timezone("America/Los_Angeles").unwrap(), PACIFIC);
        assert_eq!(parse_display_timezone(" UTC ").unwrap(), chrono_tz::UTC);
        assert!(matches!(
            parse_display_timezone("Mars/Olympus_Mons"),
            Err(AppError::Config(_))
        ));
    }
}
