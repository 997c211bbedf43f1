//! Builds a [`Report`] from a validated request and a results store.

use crate::error::{ReportError, Result};
use crate::report::{Report, Summary, TopLossEvent};
use crate::request::ReportRequest;
use crate::settings::ReportSettings;
use dep_db::WatershedStore;
use log::info;

pub struct ReportBuilder<'a, S: WatershedStore + ?Sized> {
    store: &'a S,
    settings: &'a ReportSettings,
}

impl<'a, S: WatershedStore + ?Sized> ReportBuilder<'a, S> {
    pub fn new(store: &'a S, settings: &'a ReportSettings) -> Self {
        Self { store, settings }
    }

    /// Resolve the unit, sum the window and rank the loss days.
    ///
    /// A failed unit lookup returns before the store is queried again.
    pub fn build(&self, request: &ReportRequest) -> Result<Report> {
        let name = self.resolve_unit(request)?;
        let summary = self.summarize(request)?;
        let top10 = self.top_events(request)?;
        info!(
            "Built report for {} scenario {}: {} top events",
            request.huc12,
            request.scenario,
            top10.len()
        );
        Ok(Report {
            huc12: request.huc12.clone(),
            name,
            start: request.start,
            end: request.end,
            scenario: request.scenario,
            units: request.units,
            summary,
            top10,
        })
    }

    /// Exactly one unit must match; its name is returned.
    pub fn resolve_unit(&self, request: &ReportRequest) -> Result<String> {
        let mut units = self.store.find_units(&request.huc12, request.scenario)?;
        match units.len() {
            0 => Err(ReportError::NotFound {
                huc12: request.huc12.clone(),
                scenario: request.scenario,
            }),
            1 => Ok(units.remove(0).name),
            count => Err(ReportError::Ambiguous {
                huc12: request.huc12.clone(),
                scenario: request.scenario,
                count,
            }),
        }
    }

    pub fn summarize(&self, request: &ReportRequest) -> Result<Summary> {
        let sums = self.store.aggregate(
            &request.huc12,
            request.scenario,
            request.start,
            request.window_end(),
        )?;
        Ok(Summary::convert(&sums, request.units))
    }

    pub fn top_events(&self, request: &ReportRequest) -> Result<Vec<TopLossEvent>> {
        let rows = self.store.top_loss_days(
            &request.huc12,
            request.scenario,
            self.settings.event_floor(),
            self.settings.top_limit(),
        )?;
        Ok(rows
            .iter()
            .enumerate()
            .map(|(i, row)| TopLossEvent::convert(i + 1, row, request.units))
            .collect())
    }
}
