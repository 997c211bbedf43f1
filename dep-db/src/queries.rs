//! Typed query methods for retrieving HUC12 results from the database.
//!
//! Every statement binds its inputs through `params!`; no caller text is
//! spliced into SQL.

use crate::models::{AggregateSummary, DailyResultRow, WatershedUnit, YearlyResultRow};
use crate::Database;
use chrono::NaiveDate;
use rusqlite::{params, Row};

fn daily_row(row: &Row<'_>) -> rusqlite::Result<DailyResultRow> {
    Ok(DailyResultRow {
        valid: row.get(0)?,
        qc_precip: row.get(1)?,
        avg_runoff: row.get(2)?,
        avg_loss: row.get(3)?,
        avg_delivery: row.get(4)?,
    })
}

impl Database {
    /// Find every unit row matching the identifier and scenario.
    ///
    /// Callers decide what a count other than one means.
    pub fn query_units(&self, huc_12: &str, scenario: i64) -> anyhow::Result<Vec<WatershedUnit>> {
        let mut stmt = self.conn.prepare(
            "SELECT huc_12, scenario, name FROM huc12
             WHERE huc_12 = ?1 AND scenario = ?2",
        )?;
        let rows = stmt
            .query_map(params![huc_12, scenario], |row| {
                Ok(WatershedUnit {
                    huc_12: row.get(0)?,
                    scenario: row.get(1)?,
                    name: row.get(2)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        log::info!(
            "[DEP Debug] query: query_units returned {} records",
            rows.len()
        );
        Ok(rows)
    }

    /// Sum precipitation, runoff, loss and delivery over `start..=end`.
    ///
    /// SQL `SUM` over an empty window yields NULL, which is reported as zero.
    pub fn query_aggregate(
        &self,
        huc_12: &str,
        scenario: i64,
        start: NaiveDate,
        end: NaiveDate,
    ) -> anyhow::Result<AggregateSummary> {
        let mut stmt = self.conn.prepare(
            "SELECT SUM(qc_precip), SUM(avg_runoff), SUM(avg_loss), SUM(avg_delivery)
             FROM results_by_huc12
             WHERE valid >= ?1 AND valid <= ?2 AND huc_12 = ?3 AND scenario = ?4",
        )?;
        let sums = stmt.query_row(params![start, end, huc_12, scenario], |row| {
            Ok(AggregateSummary {
                qc_precip: row.get::<_, Option<f64>>(0)?.unwrap_or(0.0),
                avg_runoff: row.get::<_, Option<f64>>(1)?.unwrap_or(0.0),
                avg_loss: row.get::<_, Option<f64>>(2)?.unwrap_or(0.0),
                avg_delivery: row.get::<_, Option<f64>>(3)?.unwrap_or(0.0),
            })
        })?;
        log::info!(
            "[DEP Debug] query: query_aggregate summed {} to {}",
            start,
            end
        );
        Ok(sums)
    }

    /// Get the days with the highest positive loss after `floor`.
    ///
    /// Ordered by loss descending, ties broken by date ascending, at most
    /// `limit` rows. Rows are pulled lazily; a row that fails to fetch or
    /// decode ends the sequence and everything before it is returned.
    pub fn query_top_loss_days(
        &self,
        huc_12: &str,
        scenario: i64,
        floor: NaiveDate,
        limit: usize,
    ) -> anyhow::Result<Vec<DailyResultRow>> {
        let mut stmt = self.conn.prepare(
            "SELECT valid, qc_precip, avg_runoff, avg_loss, avg_delivery
             FROM results_by_huc12
             WHERE huc_12 = ?1 AND scenario = ?2 AND valid > ?3 AND avg_loss > 0
             ORDER BY avg_loss DESC, valid ASC
             LIMIT ?4",
        )?;
        let limit = i64::try_from(limit)?;
        let rows: Vec<DailyResultRow> = stmt
            .query_map(params![huc_12, scenario, floor, limit], daily_row)?
            .map_while(|r| {
                r.map_err(|e| log::warn!("[DEP Debug] query: fetch stopped early: {}", e))
                    .ok()
            })
            .collect();
        log::info!(
            "[DEP Debug] query: query_top_loss_days returned {} records",
            rows.len()
        );
        Ok(rows)
    }

    /// Get every day of results for a unit, oldest first.
    pub fn query_daily_results(
        &self,
        huc_12: &str,
        scenario: i64,
    ) -> anyhow::Result<Vec<DailyResultRow>> {
        let mut stmt = self.conn.prepare(
            "SELECT valid, qc_precip, avg_runoff, avg_loss, avg_delivery
             FROM results_by_huc12
             WHERE huc_12 = ?1 AND scenario = ?2
             ORDER BY valid ASC",
        )?;
        let rows = stmt
            .query_map(params![huc_12, scenario], daily_row)?
            .collect::<Result<Vec<_>, _>>()?;
        log::info!(
            "[DEP Debug] query: query_daily_results returned {} records",
            rows.len()
        );
        Ok(rows)
    }

    /// Sum each calendar year of results for a unit, oldest year first.
    ///
    /// Alongside the sums, counts the days in each year on which a metric
    /// was above zero.
    pub fn query_yearly_results(
        &self,
        huc_12: &str,
        scenario: i64,
    ) -> anyhow::Result<Vec<YearlyResultRow>> {
        let mut stmt = self.conn.prepare(
            "SELECT CAST(strftime('%Y', valid) AS INTEGER) AS yr,
                    SUM(qc_precip), SUM(avg_runoff), SUM(avg_loss), SUM(avg_delivery),
                    SUM(CASE WHEN qc_precip > 0 THEN 1 ELSE 0 END),
                    SUM(CASE WHEN avg_runoff > 0 THEN 1 ELSE 0 END),
                    SUM(CASE WHEN avg_loss > 0 THEN 1 ELSE 0 END),
                    SUM(CASE WHEN avg_delivery > 0 THEN 1 ELSE 0 END)
             FROM results_by_huc12
             WHERE huc_12 = ?1 AND scenario = ?2
             GROUP BY yr
             ORDER BY yr ASC",
        )?;
        let rows = stmt
            .query_map(params![huc_12, scenario], |row| {
                Ok(YearlyResultRow {
                    year: row.get(0)?,
                    qc_precip: row.get(1)?,
                    avg_runoff: row.get(2)?,
                    avg_loss: row.get(3)?,
                    avg_delivery: row.get(4)?,
                    qc_precip_events: row.get(5)?,
                    avg_runoff_events: row.get(6)?,
                    avg_loss_events: row.get(7)?,
                    avg_delivery_events: row.get(8)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        log::info!(
            "[DEP Debug] query: query_yearly_results returned {} years",
            rows.len()
        );
        Ok(rows)
    }
}
