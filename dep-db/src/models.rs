//! Query result model structs for the results store.
//!
//! All values are in the store's native units: millimeters for
//! precipitation and runoff, kg/m² for detachment and delivery.

use chrono::NaiveDate;
use serde::Serialize;

/// A watershed unit row from the `huc12` table.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct WatershedUnit {
    /// 12-digit hydrologic unit code.
    pub huc_12: String,
    pub scenario: i64,
    /// Display name.
    pub name: String,
}

/// One day of results for a unit and scenario.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DailyResultRow {
    pub valid: NaiveDate,
    /// Precipitation in mm.
    pub qc_precip: f64,
    /// Runoff in mm.
    pub avg_runoff: f64,
    /// Detachment (soil loss) in kg/m².
    pub avg_loss: f64,
    /// Hillslope soil delivery in kg/m².
    pub avg_delivery: f64,
}

/// Sums of the daily metrics over an inclusive date window.
///
/// A window without any rows sums to zero.
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq)]
pub struct AggregateSummary {
    pub qc_precip: f64,
    pub avg_runoff: f64,
    pub avg_loss: f64,
    pub avg_delivery: f64,
}

/// One calendar year of results with per-metric counts of non-zero days.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct YearlyResultRow {
    pub year: i32,
    pub qc_precip: f64,
    pub avg_runoff: f64,
    pub avg_loss: f64,
    pub avg_delivery: f64,
    /// Days in the year with precipitation above zero.
    pub qc_precip_events: i64,
    pub avg_runoff_events: i64,
    pub avg_loss_events: i64,
    pub avg_delivery_events: i64,
}
