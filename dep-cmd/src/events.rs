//! Daily and yearly event series output.

use chrono::Utc;
use dep_db::Database;
use dep_report::{EventPeriod, EventSeries, EventsRequest, UnitSystem};
use std::io::Write;
use std::path::Path;

#[derive(Debug, Default)]
pub struct EventsArgs {
    pub query: Option<String>,
    pub huc12: Option<String>,
    pub period: Option<EventPeriod>,
    pub scenario: Option<i64>,
    pub metric: Option<i64>,
}

impl EventsArgs {
    pub fn into_request(self) -> EventsRequest {
        let base = EventsRequest::from_query(self.query.as_deref().unwrap_or(""));
        EventsRequest::new(
            self.huc12.as_deref().unwrap_or(base.huc12.as_str()),
            self.period.unwrap_or(base.period),
            self.scenario.unwrap_or(base.scenario),
            self.metric.map_or(base.units, UnitSystem::from_selector),
        )
    }
}

/// Write the unit's event series as JSON to `out`.
pub fn run_events<W: Write>(
    database: &Path,
    args: EventsArgs,
    out: &mut W,
) -> anyhow::Result<()> {
    let request = args.into_request();
    let db = Database::open_read_only(database)?;
    let series = EventSeries::build(&db, &request, Utc::now())?;
    write!(out, "{}", series.to_json()?)?;
    Ok(())
}
