//! HUC12 detail report.
//!
//! Given a watershed unit, a date window, a scenario and a unit system,
//! looks the unit up, sums precipitation, runoff, detachment and delivery
//! over the window, ranks the unit's highest-loss days, and renders the
//! result as an HTML fragment or JSON. The [`events`] module serves the
//! unit's full daily or yearly series behind the fragment's event buttons.
//!
//! ```rust
//! use dep_db::Database;
//! use dep_report::{RawParams, ReportBuilder, ReportRequest, ReportSettings};
//!
//! let db = Database::new().unwrap();
//! db.load_huc12("huc_12,scenario,name\n071000030101,0,Beaver Creek\n").unwrap();
//!
//! let settings = ReportSettings::default();
//! let raw = RawParams::from_query("huc12=071000030101&date=2020-06-01");
//! let request = ReportRequest::from_raw(&raw, settings.date_parser()).unwrap();
//! let report = ReportBuilder::new(&db, &settings).build(&request).unwrap();
//! assert_eq!(report.summary.display_rows()[0].1, "0.00 inch");
//! ```

pub mod builder;
pub mod error;
pub mod events;
pub mod html;
pub mod report;
pub mod request;
pub mod settings;
pub mod units;

pub use builder::ReportBuilder;
pub use error::{ReportError, UNIT_NOT_FOUND_MESSAGE};
pub use events::{EventPeriod, EventSeries, EventsRequest};
pub use report::Report;
pub use request::{RawParams, ReportRequest};
pub use settings::ReportSettings;
pub use units::UnitSystem;

use dep_db::WatershedStore;

/// Output format for a rendered report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Html,
    Json,
}

/// Validate raw parameters, build the report and render it.
///
/// Request-caused failures come back as `Ok` with the body the caller
/// should see (possibly empty); store failures are returned as errors.
pub fn respond<S: WatershedStore + ?Sized>(
    store: &S,
    raw: &RawParams,
    settings: &ReportSettings,
    format: OutputFormat,
) -> anyhow::Result<String> {
    let built = ReportRequest::from_raw(raw, settings.date_parser())
        .and_then(|request| ReportBuilder::new(store, settings).build(&request));
    match built {
        Ok(report) => match format {
            OutputFormat::Html => Ok(html::render_report(&report).into_string()),
            OutputFormat::Json => report.to_json(),
        },
        Err(err) => {
            log::warn!("Report aborted: {}", err);
            match html::render_error(&err) {
                Some(body) => Ok(body),
                None => Err(err.into()),
            }
        }
    }
}
