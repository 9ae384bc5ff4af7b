use chrono::{DateTime, NaiveDateTime, Utc};
use chrono_tz::Tz;
use serde::Serialize;
use tracing::warn;

/// Display strings for one instant, rendered in a fixed en-US convention
/// (abbreviated month, 12-hour clock).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormattedDateTime {
    /// e.g. `Mar 1, 2025, 9:30 AM`
    pub date_time: String,
    /// e.g. `Sat, 03/01/2025`
    pub date_day: String,
    /// e.g. `Mar 1, 2025`
    pub date_only: String,
    /// e.g. `9:30 AM`
    pub time_only: String,
}

impl FormattedDateTime {
    fn invalid() -> Self {
        Self {
            date_time: "Invalid Date".to_string(),
            date_day: "Invalid".to_string(),
            date_only: "Invalid".to_string(),
            time_only: "Invalid".to_string(),
        }
    }

    /// True when this value is the unparseable-input sentinel. Callers that
    /// care must check explicitly; formatting itself never fails.
    pub fn is_invalid(&self) -> bool {
        self.date_time == "Invalid Date"
    }
}

/// Parse a schedule value into a canonical UTC instant. Accepts RFC 3339
/// (with offset or `Z`) and bare `YYYY-MM-DDTHH:MM:SS` timestamps, which are
/// taken as UTC.
pub fn parse_instant(value: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S") {
        return Some(naive.and_utc());
    }
    None
}

/// Format a raw timestamp string. Unparseable input yields the
/// "Invalid Date" sentinel rather than an error.
pub fn format_date_time(value: &str, time_zone: Option<&str>) -> FormattedDateTime {
    match parse_instant(value) {
        Some(instant) => format_instant(instant, time_zone),
        None => {
            warn!("Invalid date passed to formatter: {}", value);
            FormattedDateTime::invalid()
        }
    }
}

/// Format an already-parsed instant in the given IANA timezone. An absent or
/// unknown zone renders in UTC; this function never fails.
pub fn format_instant(instant: DateTime<Utc>, time_zone: Option<&str>) -> FormattedDateTime {
    let tz: Tz = match time_zone {
        Some(name) => name.parse().unwrap_or_else(|_| {
            warn!("Unknown timezone {}, falling back to UTC", name);
            Tz::UTC
        }),
        None => Tz::UTC,
    };

    let local = instant.with_timezone(&tz);

    FormattedDateTime {
        date_time: local.format("%b %-d, %Y, %-I:%M %p").to_string(),
        date_day: local.format("%a, %m/%d/%Y").to_string(),
        date_only: local.format("%b %-d, %Y").to_string(),
        time_only: local.format("%-I:%M %p").to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_instant_in_utc_by_default() {
        let formatted = format_date_time("2025-03-01T14:30:00.000Z", None);

        assert_eq!(formatted.date_time, "Mar 1, 2025, 2:30 PM");
        assert_eq!(formatted.date_day, "Sat, 03/01/2025");
        assert_eq!(formatted.date_only, "Mar 1, 2025");
        assert_eq!(formatted.time_only, "2:30 PM");
    }

    #[test]
    fn renders_in_requested_timezone() {
        let formatted = format_date_time("2025-03-01T14:30:00.000Z", Some("America/New_York"));

        // UTC-5 in March before DST
        assert_eq!(formatted.time_only, "9:30 AM");
        assert_eq!(formatted.date_only, "Mar 1, 2025");
    }

    #[test]
    fn timezone_can_shift_the_calendar_day() {
        let formatted = format_date_time("2025-03-01T23:30:00Z", Some("Asia/Tokyo"));

        assert_eq!(formatted.date_only, "Mar 2, 2025");
        assert_eq!(formatted.date_day, "Sun, 03/02/2025");
        assert_eq!(formatted.time_only, "8:30 AM");
    }

    #[test]
    fn formatting_is_deterministic() {
        let first = format_date_time("2025-07-04T09:00:00Z", Some("Europe/Dublin"));
        let second = format_date_time("2025-07-04T09:00:00Z", Some("Europe/Dublin"));

        assert_eq!(first, second);
    }

    #[test]
    fn invalid_input_yields_sentinel() {
        let formatted = format_date_time("not-a-date", None);

        assert!(formatted.is_invalid());
        assert_eq!(formatted.date_time, "Invalid Date");
        assert_eq!(formatted.date_day, "Invalid");
        assert_eq!(formatted.date_only, "Invalid");
        assert_eq!(formatted.time_only, "Invalid");
    }

    #[test]
    fn unknown_timezone_falls_back_to_utc() {
        let formatted = format_date_time("2025-03-01T14:30:00Z", Some("Mars/Olympus_Mons"));

        assert_eq!(formatted.time_only, "2:30 PM");
    }

    #[test]
    fn parses_offset_and_naive_forms_to_the_same_instant() {
        let with_offset = parse_instant("2025-03-01T09:30:00-05:00").unwrap();
        let zulu = parse_instant("2025-03-01T14:30:00Z").unwrap();
        let naive = parse_instant("2025-03-01T14:30:00").unwrap();

        assert_eq!(with_offset, zulu);
        assert_eq!(naive, zulu);
    }

    #[test]
    fn rejects_garbage_instants() {
        assert!(parse_instant("").is_none());
        assert!(parse_instant("tomorrow at noon").is_none());
        assert!(parse_instant("2025-13-40T99:99:99Z").is_none());
    }
}
