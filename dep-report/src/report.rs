//! Report model produced by [`crate::ReportBuilder`].
//!
//! Values are already converted to the request's unit system. The model
//! serializes to the JSON shape served alongside the HTML fragment.

use crate::units::{format_quantity, UnitSystem};
use chrono::{Datelike, NaiveDate};
use dep_db::models::{AggregateSummary, DailyResultRow};
use serde::Serialize;

/// Converted sums over the aggregate window.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub qc_precip: f64,
    pub avg_runoff: f64,
    pub avg_loss: f64,
    pub avg_delivery: f64,
    pub punit: &'static str,
    pub lunit: &'static str,
}

impl Summary {
    pub fn convert(sums: &AggregateSummary, units: UnitSystem) -> Self {
        Self {
            qc_precip: units.depth(sums.qc_precip),
            avg_runoff: units.depth(sums.avg_runoff),
            avg_loss: units.mass(sums.avg_loss),
            avg_delivery: units.mass(sums.avg_delivery),
            punit: units.depth_label(),
            lunit: units.mass_label(),
        }
    }

    /// Table rows in display order, values formatted with their labels.
    pub fn display_rows(&self) -> [(&'static str, String); 4] {
        [
            ("Precipitation", format_quantity(self.qc_precip, self.punit)),
            ("Runoff", format_quantity(self.avg_runoff, self.punit)),
            ("Detachment", format_quantity(self.avg_loss, self.lunit)),
            (
                "Hillslope Soil Delivery",
                format_quantity(self.avg_delivery, self.lunit),
            ),
        ]
    }
}

/// One of the highest-loss days, ranked from 1.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopLossEvent {
    pub rank: usize,
    pub date: NaiveDate,
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub qc_precip: f64,
    pub avg_runoff: f64,
    pub avg_loss: f64,
    pub avg_delivery: f64,
}

impl TopLossEvent {
    pub fn convert(rank: usize, row: &DailyResultRow, units: UnitSystem) -> Self {
        Self {
            rank,
            date: row.valid,
            year: row.valid.year(),
            month: row.valid.month(),
            day: row.valid.day(),
            qc_precip: units.depth(row.qc_precip),
            avg_runoff: units.depth(row.avg_runoff),
            avg_loss: units.mass(row.avg_loss),
            avg_delivery: units.mass(row.avg_delivery),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub huc12: String,
    pub name: String,
    pub start: NaiveDate,
    pub end: Option<NaiveDate>,
    pub scenario: i64,
    pub units: UnitSystem,
    #[serde(flatten)]
    pub summary: Summary,
    pub top10: Vec<TopLossEvent>,
}

impl Report {
    pub fn to_json(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
