//! Report configuration.
//!
//! Defaults cover the production setup; a small TOML file can override any
//! of them:
//!
//! ```toml
//! utc_offset = "-06:00"
//! event_floor = "2007-01-01"
//! top_limit = 10
//! ```

use chrono::{FixedOffset, NaiveDate};
use dep_utils::dates::{parse_utc_offset, DateParser};
use serde::Deserialize;
use std::path::Path;

/// Largest number of top loss days a report will list.
pub const TOP_EVENT_LIMIT: usize = 10;

/// Top events are only taken from days strictly after this date by default.
pub fn default_event_floor() -> NaiveDate {
    NaiveDate::from_ymd_opt(2007, 1, 1).unwrap()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportSettings {
    date_parser: DateParser,
    event_floor: NaiveDate,
    top_limit: usize,
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            date_parser: DateParser::default(),
            event_floor: default_event_floor(),
            top_limit: TOP_EVENT_LIMIT,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct SettingsFile {
    utc_offset: Option<String>,
    event_floor: Option<NaiveDate>,
    top_limit: Option<usize>,
}

impl ReportSettings {
    pub fn with_offset(offset: FixedOffset) -> Self {
        Self {
            date_parser: DateParser::new(offset),
            ..Self::default()
        }
    }

    pub fn with_event_floor(self, event_floor: NaiveDate) -> Self {
        Self {
            event_floor,
            ..self
        }
    }

    /// Set how many top loss days to list, between 1 and [`TOP_EVENT_LIMIT`].
    pub fn with_top_limit(self, top_limit: usize) -> anyhow::Result<Self> {
        if top_limit == 0 || top_limit > TOP_EVENT_LIMIT {
            anyhow::bail!(
                "top_limit must be between 1 and {}, got {}",
                TOP_EVENT_LIMIT,
                top_limit
            );
        }
        Ok(Self { top_limit, ..self })
    }

    pub fn date_parser(&self) -> &DateParser {
        &self.date_parser
    }

    pub fn event_floor(&self) -> NaiveDate {
        self.event_floor
    }

    pub fn top_limit(&self) -> usize {
        self.top_limit
    }

    /// Parse settings from TOML text; missing keys keep their defaults.
    pub fn from_toml_str(text: &str) -> anyhow::Result<Self> {
        let file: SettingsFile = toml::from_str(text)?;
        let mut settings = match file.utc_offset {
            Some(offset) => Self::with_offset(parse_utc_offset(&offset)?),
            None => Self::default(),
        };
        if let Some(floor) = file.event_floor {
            settings = settings.with_event_floor(floor);
        }
        if let Some(limit) = file.top_limit {
            settings = settings.with_top_limit(limit)?;
        }
        log::info!(
            "[DEP Debug] settings: utc offset {}, event floor {}, top limit {}",
            settings.date_parser.offset(),
            settings.event_floor,
            settings.top_limit
        );
        Ok(settings)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            anyhow::anyhow!("Failed to read settings {}: {}", path.as_ref().display(), e)
        })?;
        Self::from_toml_str(&text)
    }
}
