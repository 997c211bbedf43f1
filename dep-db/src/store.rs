use crate::models::{AggregateSummary, DailyResultRow, WatershedUnit, YearlyResultRow};
use crate::Database;
use chrono::NaiveDate;

/// Read-only access to HUC12 results, as needed by the detail report and
/// the event series.
pub trait WatershedStore {
    /// All unit rows for `(huc_12, scenario)`.
    fn find_units(&self, huc_12: &str, scenario: i64) -> anyhow::Result<Vec<WatershedUnit>>;

    /// Metric sums over the inclusive window; zeros when no rows match.
    fn aggregate(
        &self,
        huc_12: &str,
        scenario: i64,
        start: NaiveDate,
        end: NaiveDate,
    ) -> anyhow::Result<AggregateSummary>;

    /// Days after `floor` with positive loss, loss descending, at most `limit`.
    fn top_loss_days(
        &self,
        huc_12: &str,
        scenario: i64,
        floor: NaiveDate,
        limit: usize,
    ) -> anyhow::Result<Vec<DailyResultRow>>;

    /// Every day of results, oldest first.
    fn daily_results(&self, huc_12: &str, scenario: i64) -> anyhow::Result<Vec<DailyResultRow>>;

    /// Calendar-year sums with non-zero day counts, oldest first.
    fn yearly_results(
        &self,
        huc_12: &str,
        scenario: i64,
    ) -> anyhow::Result<Vec<YearlyResultRow>>;
}

impl WatershedStore for Database {
    fn find_units(&self, huc_12: &str, scenario: i64) -> anyhow::Result<Vec<WatershedUnit>> {
        self.query_units(huc_12, scenario)
    }

    fn aggregate(
        &self,
        huc_12: &str,
        scenario: i64,
        start: NaiveDate,
        end: NaiveDate,
    ) -> anyhow::Result<AggregateSummary> {
        self.query_aggregate(huc_12, scenario, start, end)
    }

    fn top_loss_days(
        &self,
        huc_12: &str,
        scenario: i64,
        floor: NaiveDate,
        limit: usize,
    ) -> anyhow::Result<Vec<DailyResultRow>> {
        self.query_top_loss_days(huc_12, scenario, floor, limit)
    }

    fn daily_results(&self, huc_12: &str, scenario: i64) -> anyhow::Result<Vec<DailyResultRow>> {
        self.query_daily_results(huc_12, scenario)
    }

    fn yearly_results(
        &self,
        huc_12: &str,
        scenario: i64,
    ) -> anyhow::Result<Vec<YearlyResultRow>> {
        self.query_yearly_results(huc_12, scenario)
    }
}
