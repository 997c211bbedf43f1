//! Shared utility functions for DEP crates.

/// Date utility functions
pub mod dates {
    use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime};

    /// UTC offset used when none is configured (America/Chicago, standard time).
    pub const DEFAULT_UTC_OFFSET_SECS: i32 = -6 * 3600;

    /// Calendar-only formats accepted for request dates, tried in order.
    const DATE_FORMATS: [&str; 5] = ["%Y-%m-%d", "%Y%m%d", "%m/%d/%Y", "%d %b %Y", "%b %d, %Y"];

    /// Naive timestamp formats; the time of day is dropped.
    const DATETIME_FORMATS: [&str; 3] = [
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
        "%Y-%m-%dT%H:%M:%S",
    ];

    /// Parses caller-supplied date strings into calendar dates.
    ///
    /// Inputs that carry their own zone (RFC 3339) are shifted into the
    /// configured offset before the calendar date is taken, so the same
    /// instant always lands on the same day regardless of host settings.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct DateParser {
        offset: FixedOffset,
    }

    impl Default for DateParser {
        fn default() -> Self {
            Self {
                offset: FixedOffset::east_opt(DEFAULT_UTC_OFFSET_SECS)
                    .expect("default offset is within a day"),
            }
        }
    }

    impl DateParser {
        pub fn new(offset: FixedOffset) -> Self {
            Self { offset }
        }

        pub fn offset(&self) -> FixedOffset {
            self.offset
        }

        /// Parse a request date.
        pub fn parse(&self, s: &str) -> anyhow::Result<NaiveDate> {
            let s = s.trim();
            if s.is_empty() {
                anyhow::bail!("empty date string");
            }
            if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
                return Ok(dt.with_timezone(&self.offset).date_naive());
            }
            for fmt in DATETIME_FORMATS {
                if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
                    return Ok(dt.date());
                }
            }
            for fmt in DATE_FORMATS {
                if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
                    return Ok(d);
                }
            }
            anyhow::bail!("unrecognized date: {}", s)
        }
    }

    /// Parse a UTC offset written as `+HH:MM`, `-HH:MM` or `Z`.
    pub fn parse_utc_offset(s: &str) -> anyhow::Result<FixedOffset> {
        let s = s.trim();
        if s == "Z" || s == "z" {
            return Ok(FixedOffset::east_opt(0).expect("zero offset"));
        }
        let (sign, rest) = match s.chars().next() {
            Some('+') => (1, &s[1..]),
            Some('-') => (-1, &s[1..]),
            _ => anyhow::bail!("offset must start with '+' or '-': {}", s),
        };
        let (hours, minutes) = rest
            .split_once(':')
            .ok_or_else(|| anyhow::anyhow!("offset must be HH:MM: {}", s))?;
        let hours: i32 = hours.parse()?;
        let minutes: i32 = minutes.parse()?;
        if minutes >= 60 {
            anyhow::bail!("offset minutes out of range: {}", s);
        }
        FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
            .ok_or_else(|| anyhow::anyhow!("offset out of range: {}", s))
    }

    /// Format a NaiveDate as "YYYY-MM-DD"
    pub fn format_date(date: &NaiveDate) -> String {
        date.format("%Y-%m-%d").to_string()
    }

    /// Format a NaiveDate as "01 Jun 2020", used in summary headings.
    pub fn heading_date(date: &NaiveDate) -> String {
        date.format("%d %b %Y").to_string()
    }

    /// Format a NaiveDate as "Jun 1, 2020", used for event links.
    pub fn event_label(date: &NaiveDate) -> String {
        date.format("%b %-d, %Y").to_string()
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
            NaiveDate::from_ymd_opt(y, m, d).unwrap()
        }

        #[test]
        fn test_parse_calendar_formats() {
            let parser = DateParser::default();
            let expected = ymd(2020, 6, 1);
            for s in ["2020-06-01", "20200601", "06/01/2020", "01 Jun 2020", "Jun 1, 2020"] {
                assert_eq!(parser.parse(s).unwrap(), expected, "input {}", s);
            }
        }

        #[test]
        fn test_parse_trims_whitespace() {
            let parser = DateParser::default();
            assert_eq!(parser.parse("  2020-06-01\n").unwrap(), ymd(2020, 6, 1));
        }

        #[test]
        fn test_parse_naive_timestamp_drops_time() {
            let parser = DateParser::default();
            assert_eq!(parser.parse("2020-06-01 23:59").unwrap(), ymd(2020, 6, 1));
            assert_eq!(parser.parse("2020-06-01 23:59:59").unwrap(), ymd(2020, 6, 1));
        }

        #[test]
        fn test_parse_rfc3339_uses_configured_offset() {
            let chicago = DateParser::default();
            // 03:00 UTC is still the previous evening in Chicago
            assert_eq!(
                chicago.parse("2020-06-02T03:00:00Z").unwrap(),
                ymd(2020, 6, 1)
            );

            let utc = DateParser::new(FixedOffset::east_opt(0).unwrap());
            assert_eq!(utc.parse("2020-06-02T03:00:00Z").unwrap(), ymd(2020, 6, 2));
        }

        #[test]
        fn test_parse_rejects_garbage() {
            let parser = DateParser::default();
            assert!(parser.parse("").is_err());
            assert!(parser.parse("yesterday").is_err());
            assert!(parser.parse("2020-13-01").is_err());
        }

        #[test]
        fn test_parse_utc_offset() {
            assert_eq!(parse_utc_offset("-06:00").unwrap().local_minus_utc(), -21600);
            assert_eq!(parse_utc_offset("+05:30").unwrap().local_minus_utc(), 19800);
            assert_eq!(parse_utc_offset("Z").unwrap().local_minus_utc(), 0);
            assert!(parse_utc_offset("06:00").is_err());
            assert!(parse_utc_offset("+06:75").is_err());
            assert!(parse_utc_offset("+30:00").is_err());
        }

        #[test]
        fn test_display_formats() {
            let date = ymd(2020, 6, 1);
            assert_eq!(format_date(&date), "2020-06-01");
            assert_eq!(heading_date(&date), "01 Jun 2020");
            assert_eq!(event_label(&date), "Jun 1, 2020");
        }
    }
}
