//! Request parameters, raw and validated.
//!
//! Raw parameters are collected once at the entry point, from CLI flags or
//! a `key=value&...` query string, and turned into a [`ReportRequest`]
//! before any store access happens.

use crate::error::{ReportError, Result};
use crate::units::UnitSystem;
use chrono::NaiveDate;
use dep_utils::dates::DateParser;

/// Length of a HUC12 identifier; longer input is truncated.
pub const HUC12_LEN: usize = 12;

/// Unvalidated request parameters. Every field is optional here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawParams {
    pub huc12: Option<String>,
    pub date: Option<String>,
    pub date2: Option<String>,
    pub scenario: Option<String>,
    pub metric: Option<String>,
}

impl RawParams {
    /// Collect parameters from a URL-encoded `key=value&key=value` query string.
    ///
    /// Unknown keys are ignored and a repeated key keeps its last value.
    /// Both `+` and `%XX` escapes are decoded.
    pub fn from_query(query: &str) -> Self {
        let mut raw = RawParams::default();
        let query = query.strip_prefix('?').unwrap_or(query);
        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            let value = Some(value.into_owned());
            match key.as_ref() {
                "huc12" => raw.huc12 = value,
                "date" => raw.date = value,
                "date2" => raw.date2 = value,
                "scenario" => raw.scenario = value,
                "metric" => raw.metric = value,
                _ => {}
            }
        }
        raw
    }
}

/// A validated request for one HUC12 detail report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRequest {
    pub huc12: String,
    pub start: NaiveDate,
    pub end: Option<NaiveDate>,
    pub scenario: i64,
    pub units: UnitSystem,
}

impl ReportRequest {
    pub fn from_raw(raw: &RawParams, parser: &DateParser) -> Result<Self> {
        let huc12: String = raw
            .huc12
            .as_deref()
            .ok_or(ReportError::MissingParameter("huc12"))?
            .chars()
            .take(HUC12_LEN)
            .collect();
        let date = raw
            .date
            .as_deref()
            .ok_or(ReportError::MissingParameter("date"))?;
        let start = parse_date("date", date, parser)?;
        let end = match raw.date2.as_deref().map(str::trim) {
            Some(s) if !s.is_empty() => Some(parse_date("date2", s, parser)?),
            _ => None,
        };
        let scenario = raw.scenario.as_deref().map_or(0, leading_int);
        let units = UnitSystem::from_selector(raw.metric.as_deref().map_or(0, leading_int));

        Ok(Self {
            huc12,
            start,
            end,
            scenario,
            units,
        })
    }

    /// Last day of the summary window; a single day when no end was given.
    pub fn window_end(&self) -> NaiveDate {
        self.end.unwrap_or(self.start)
    }
}

fn parse_date(name: &'static str, value: &str, parser: &DateParser) -> Result<NaiveDate> {
    parser.parse(value).map_err(|e| ReportError::InvalidDate {
        name,
        value: value.to_string(),
        reason: e.to_string(),
    })
}

/// Read the leading integer of `s`, ignoring leading whitespace and any
/// trailing text. Non-numeric input is 0; out-of-range input saturates.
pub(crate) fn leading_int(s: &str) -> i64 {
    let s = s.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return 0;
    }
    let magnitude = &digits[..end];
    let signed = if negative {
        format!("-{}", magnitude)
    } else {
        magnitude.to_string()
    };
    signed
        .parse::<i64>()
        .unwrap_or(if negative { i64::MIN } else { i64::MAX })
}
