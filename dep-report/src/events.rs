//! Daily and yearly event series for one HUC12.
//!
//! The series feeds the "View Daily Data" and "View Yearly Data" buttons of
//! the detail fragment. Daily records carry an event count of 1 for every
//! metric; yearly records count the days on which each metric was above
//! zero and are dated January 1.

use crate::request::{leading_int, HUC12_LEN};
use crate::units::UnitSystem;
use anyhow::anyhow;
use chrono::{DateTime, NaiveDate, Utc};
use dep_db::models::{DailyResultRow, YearlyResultRow};
use dep_db::WatershedStore;
use serde::Serialize;

/// Identifier used when the caller gives none; it matches no unit.
pub const DEFAULT_HUC12: &str = "000000000000";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EventPeriod {
    Daily,
    Yearly,
}

impl EventPeriod {
    /// `"daily"` selects the daily series; any other mode is yearly.
    pub fn from_mode(mode: &str) -> Self {
        if mode == "daily" {
            EventPeriod::Daily
        } else {
            EventPeriod::Yearly
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventsRequest {
    pub huc12: String,
    pub period: EventPeriod,
    pub scenario: i64,
    pub units: UnitSystem,
}

impl Default for EventsRequest {
    fn default() -> Self {
        Self {
            huc12: DEFAULT_HUC12.to_string(),
            period: EventPeriod::Daily,
            scenario: 0,
            units: UnitSystem::Imperial,
        }
    }
}

impl EventsRequest {
    pub fn new(huc12: &str, period: EventPeriod, scenario: i64, units: UnitSystem) -> Self {
        Self {
            huc12: huc12.chars().take(HUC12_LEN).collect(),
            period,
            scenario,
            units,
        }
    }

    /// Collect `huc12`, `mode`, `scenario` and `metric` from a URL-encoded
    /// query string. Nothing here is required; a repeated key keeps its
    /// last value.
    pub fn from_query(query: &str) -> Self {
        let mut request = Self::default();
        let query = query.strip_prefix('?').unwrap_or(query);
        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            match key.as_ref() {
                "huc12" => request.huc12 = value.chars().take(HUC12_LEN).collect(),
                "mode" => request.period = EventPeriod::from_mode(&value),
                "scenario" => request.scenario = leading_int(&value),
                "metric" => request.units = UnitSystem::from_selector(leading_int(&value)),
                _ => {}
            }
        }
        request
    }
}

/// One day or one year of converted metrics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventRecord {
    pub date: NaiveDate,
    pub avg_loss: f64,
    pub avg_loss_events: i64,
    pub avg_delivery: f64,
    pub avg_delivery_events: i64,
    pub qc_precip: f64,
    pub qc_precip_events: i64,
    pub avg_runoff: f64,
    pub avg_runoff_events: i64,
}

impl EventRecord {
    pub fn daily(row: &DailyResultRow, units: UnitSystem) -> Self {
        Self {
            date: row.valid,
            avg_loss: units.mass(row.avg_loss),
            avg_loss_events: 1,
            avg_delivery: units.mass(row.avg_delivery),
            avg_delivery_events: 1,
            qc_precip: units.depth(row.qc_precip),
            qc_precip_events: 1,
            avg_runoff: units.depth(row.avg_runoff),
            avg_runoff_events: 1,
        }
    }

    pub fn yearly(row: &YearlyResultRow, units: UnitSystem) -> anyhow::Result<Self> {
        let date = NaiveDate::from_ymd_opt(row.year, 1, 1)
            .ok_or_else(|| anyhow!("Year {} is out of range", row.year))?;
        Ok(Self {
            date,
            avg_loss: units.mass(row.avg_loss),
            avg_loss_events: row.avg_loss_events,
            avg_delivery: units.mass(row.avg_delivery),
            avg_delivery_events: row.avg_delivery_events,
            qc_precip: units.depth(row.qc_precip),
            qc_precip_events: row.qc_precip_events,
            avg_runoff: units.depth(row.avg_runoff),
            avg_runoff_events: row.avg_runoff_events,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventSeries {
    pub huc12: String,
    pub scenario: i64,
    pub period: EventPeriod,
    pub punit: &'static str,
    pub lunit: &'static str,
    /// UTC, `YYYY-MM-DDTHH:MM:SSZ`.
    pub generation_time: String,
    pub results: Vec<EventRecord>,
}

impl EventSeries {
    /// Query the store and convert every row; an unknown unit gives an
    /// empty series.
    pub fn build<S: WatershedStore + ?Sized>(
        store: &S,
        request: &EventsRequest,
        generated: DateTime<Utc>,
    ) -> anyhow::Result<Self> {
        let units = request.units;
        let results = match request.period {
            EventPeriod::Daily => store
                .daily_results(&request.huc12, request.scenario)?
                .iter()
                .map(|row| EventRecord::daily(row, units))
                .collect(),
            EventPeriod::Yearly => store
                .yearly_results(&request.huc12, request.scenario)?
                .iter()
                .map(|row| EventRecord::yearly(row, units))
                .collect::<anyhow::Result<Vec<_>>>()?,
        };
        log::info!(
            "Built {:?} event series for {} scenario {}: {} records",
            request.period,
            request.huc12,
            request.scenario,
            results.len()
        );
        Ok(Self {
            huc12: request.huc12.clone(),
            scenario: request.scenario,
            period: request.period,
            punit: units.depth_label(),
            lunit: units.mass_label(),
            generation_time: generated.format("%Y-%m-%dT%H:%M:%SZ").to_string(),
            results,
        })
    }

    pub fn to_json(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
