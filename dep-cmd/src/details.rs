//! Detail report rendering.

use dep_db::Database;
use dep_report::{OutputFormat, RawParams, ReportSettings};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Request parameters as given on the command line, all optional.
#[derive(Debug, Default)]
pub struct DetailsArgs {
    pub query: Option<String>,
    pub huc12: Option<String>,
    pub date: Option<String>,
    pub date2: Option<String>,
    pub scenario: Option<String>,
    pub metric: Option<String>,
}

impl DetailsArgs {
    /// Start from the query string, then let explicit flags win.
    pub fn into_raw(self) -> RawParams {
        let raw = self
            .query
            .as_deref()
            .map(RawParams::from_query)
            .unwrap_or_default();
        RawParams {
            huc12: self.huc12.or(raw.huc12),
            date: self.date.or(raw.date),
            date2: self.date2.or(raw.date2),
            scenario: self.scenario.or(raw.scenario),
            metric: self.metric.or(raw.metric),
        }
    }
}

/// Render one detail report from a read-only store to `out`.
pub fn run_details<W: Write>(
    database: &Path,
    args: DetailsArgs,
    format: OutputFormat,
    config: Option<PathBuf>,
    out: &mut W,
) -> anyhow::Result<()> {
    let settings = match config {
        Some(path) => ReportSettings::from_file(path)?,
        None => ReportSettings::default(),
    };
    let raw = args.into_raw();
    let db = Database::open_read_only(database)?;
    let body = dep_report::respond(&db, &raw, &settings, format)?;
    write!(out, "{}", body)?;
    Ok(())
}
