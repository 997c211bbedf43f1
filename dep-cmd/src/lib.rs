//! Command implementations for the DEP CLI.
//!
//! Provides subcommands for rendering HUC12 detail reports, dumping a
//! unit's daily or yearly event series, and building a results store
//! from CSV fixtures.

use clap::{Subcommand, ValueEnum};
use dep_report::{EventPeriod, OutputFormat};
use std::io::Write;
use std::path::PathBuf;

pub mod details;
pub mod events;
pub mod load;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Html,
    Json,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Html => OutputFormat::Html,
            Format::Json => OutputFormat::Json,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Period {
    Daily,
    Yearly,
}

impl From<Period> for EventPeriod {
    fn from(period: Period) -> Self {
        match period {
            Period::Daily => EventPeriod::Daily,
            Period::Yearly => EventPeriod::Yearly,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render the detail report for one HUC12
    Details {
        /// SQLite results store (opened read-only)
        #[arg(short = 'd', long)]
        database: PathBuf,

        /// Raw request parameters, e.g. "huc12=071000030101&date=2020-06-01"
        #[arg(short = 'q', long)]
        query: Option<String>,

        /// HUC12 identifier; only the first 12 characters are used
        #[arg(long)]
        huc12: Option<String>,

        /// Start date of the summary window
        #[arg(long)]
        date: Option<String>,

        /// Inclusive end date of the summary window
        #[arg(long)]
        date2: Option<String>,

        /// Scenario ID (default 0)
        #[arg(long)]
        scenario: Option<String>,

        /// 0 for inch and ton/acre, anything else for mm and tonne/ha
        #[arg(long)]
        metric: Option<String>,

        #[arg(short = 'f', long, value_enum, default_value_t = Format::Html)]
        format: Format,

        /// TOML settings file
        #[arg(short = 'c', long)]
        config: Option<PathBuf>,
    },

    /// Dump every day, or every year, of results for one HUC12 as JSON
    Events {
        /// SQLite results store (opened read-only)
        #[arg(short = 'd', long)]
        database: PathBuf,

        /// Raw request parameters, e.g. "huc12=071000030101&mode=yearly"
        #[arg(short = 'q', long)]
        query: Option<String>,

        /// HUC12 identifier; only the first 12 characters are used
        #[arg(long)]
        huc12: Option<String>,

        /// Series period (default daily)
        #[arg(short = 'p', long, value_enum)]
        period: Option<Period>,

        /// Scenario ID (default 0)
        #[arg(long)]
        scenario: Option<i64>,

        /// 0 for inch and ton/acre, anything else for mm and tonne/ha
        #[arg(long)]
        metric: Option<i64>,
    },

    /// Create a results store from CSV fixtures
    Load {
        /// SQLite file to create or extend
        #[arg(short = 'd', long)]
        database: PathBuf,

        /// Units CSV: huc_12,scenario,name
        #[arg(long)]
        huc12_csv: Option<PathBuf>,

        /// Results CSV: huc_12,scenario,valid,qc_precip,avg_runoff,avg_loss,avg_delivery
        #[arg(long)]
        results_csv: Option<PathBuf>,
    },
}

pub fn run<W: Write>(command: Command, out: &mut W) -> anyhow::Result<()> {
    match command {
        Command::Details {
            database,
            query,
            huc12,
            date,
            date2,
            scenario,
            metric,
            format,
            config,
        } => {
            let args = details::DetailsArgs {
                query,
                huc12,
                date,
                date2,
                scenario,
                metric,
            };
            details::run_details(&database, args, format.into(), config, out)
        }
        Command::Events {
            database,
            query,
            huc12,
            period,
            scenario,
            metric,
        } => {
            let args = events::EventsArgs {
                query,
                huc12,
                period: period.map(EventPeriod::from),
                scenario,
                metric,
            };
            events::run_events(&database, args, out)
        }
        Command::Load {
            database,
            huc12_csv,
            results_csv,
        } => load::run_load(&database, huc12_csv, results_csv, out),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct TestCli {
        #[command(subcommand)]
        command: Command,
    }

    fn parse(args: &[&str]) -> Result<Command, clap::Error> {
        TestCli::try_parse_from(args.iter().copied()).map(|cli| cli.command)
    }

    fn fixture(name: &str) -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("fixtures")
            .join(name)
    }

    fn temp_db(tag: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "dep-cmd-test-{}-{}.sqlite",
            std::process::id(),
            tag
        ));
        let _ = std::fs::remove_file(&path);
        path
    }

    fn run_args(args: &[&str]) -> anyhow::Result<String> {
        let command = parse(args)?;
        let mut out = Vec::new();
        run(command, &mut out)?;
        Ok(String::from_utf8(out)?)
    }

    fn loaded_db(tag: &str) -> PathBuf {
        let db = temp_db(tag);
        let huc12 = fixture("huc12.csv");
        let results = fixture("results.csv");
        run_args(&[
            "dep-cli",
            "load",
            "-d",
            db.to_str().unwrap(),
            "--huc12-csv",
            huc12.to_str().unwrap(),
            "--results-csv",
            results.to_str().unwrap(),
        ])
        .unwrap();
        db
    }

    #[test]
    fn parse_details_defaults() {
        let command = parse(&["dep-cli", "details", "-d", "x.sqlite", "--huc12", "1"]).unwrap();
        match command {
            Command::Details {
                format, query, date, ..
            } => {
                assert_eq!(format, Format::Html);
                assert!(query.is_none());
                assert!(date.is_none());
            }
            _ => panic!("expected details"),
        }
    }

    #[test]
    fn parse_rejects_unknown_format() {
        assert!(parse(&["dep-cli", "details", "-d", "x", "-f", "xml"]).is_err());
    }

    #[test]
    fn details_requires_database() {
        assert!(parse(&["dep-cli", "details", "--huc12", "071000030101"]).is_err());
    }

    #[test]
    fn parse_events_period() {
        let command = parse(&["dep-cli", "events", "-d", "x", "--period", "yearly"]).unwrap();
        match command {
            Command::Events { period, .. } => assert_eq!(period, Some(Period::Yearly)),
            _ => panic!("expected events"),
        }
        assert!(parse(&["dep-cli", "events", "-d", "x", "--period", "monthly"]).is_err());
    }

    #[test]
    fn load_then_details_html() {
        let db = loaded_db("html");
        let out = run_args(&[
            "dep-cli",
            "details",
            "-d",
            db.to_str().unwrap(),
            "--huc12",
            "071000030101",
            "--date",
            "2020-06-01",
        ])
        .unwrap();
        assert!(out.contains("<h4>Headwaters Beaver Creek</h4>"));
        assert!(out.contains("<td>1.00 inch</td>"));
        assert!(out.contains("Top 10 Soil Loss Days:"));
        std::fs::remove_file(db).unwrap();
    }

    #[test]
    fn details_from_query_string_with_flag_override() {
        let db = loaded_db("query");
        let out = run_args(&[
            "dep-cli",
            "details",
            "-d",
            db.to_str().unwrap(),
            "-q",
            "huc12=071000030101&date=2020-06-01&metric=0",
            "--metric",
            "1",
            "-f",
            "json",
        ])
        .unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["punit"], "mm");
        assert!((value["qc_precip"].as_f64().unwrap() - 25.4).abs() < 1e-9);
        std::fs::remove_file(db).unwrap();
    }

    #[test]
    fn details_unknown_unit_prints_not_found() {
        let db = loaded_db("missing");
        let out = run_args(&[
            "dep-cli",
            "details",
            "-d",
            db.to_str().unwrap(),
            "-q",
            "huc12=000000000000&date=2020-06-01",
        ])
        .unwrap();
        assert_eq!(out, "ERROR: HUC12 was not found!");
        std::fs::remove_file(db).unwrap();
    }

    #[test]
    fn details_missing_store_is_an_error() {
        let db = temp_db("absent");
        assert!(run_args(&[
            "dep-cli",
            "details",
            "-d",
            db.to_str().unwrap(),
            "-q",
            "huc12=071000030101&date=2020-06-01",
        ])
        .is_err());
    }

    #[test]
    fn events_daily_json() {
        let db = loaded_db("events-daily");
        let out = run_args(&[
            "dep-cli",
            "events",
            "-d",
            db.to_str().unwrap(),
            "--huc12",
            "071000030101",
            "--period",
            "daily",
        ])
        .unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        let results = value["results"].as_array().unwrap();
        assert_eq!(results.len(), 8);
        assert_eq!(results[0]["date"], "2006-06-17");
        assert_eq!(results[7]["date"], "2020-06-02");
        assert_eq!(results[6]["avg_loss_events"], 1);
        assert!((results[6]["qc_precip"].as_f64().unwrap() - 1.0).abs() < 1e-9);
        assert_eq!(value["huc12"], "071000030101");
        assert_eq!(value["period"], "daily");
        std::fs::remove_file(db).unwrap();
    }

    #[test]
    fn events_yearly_json_from_query() {
        let db = loaded_db("events-yearly");
        let out = run_args(&[
            "dep-cli",
            "events",
            "-d",
            db.to_str().unwrap(),
            "-q",
            "huc12=071000030101&mode=yearly&metric=1",
        ])
        .unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        let results = value["results"].as_array().unwrap();
        let dates: Vec<&str> = results.iter().map(|r| r["date"].as_str().unwrap()).collect();
        assert_eq!(
            dates,
            vec!["2006-01-01", "2008-01-01", "2010-01-01", "2013-01-01", "2019-01-01", "2020-01-01"]
        );
        let y2020 = &results[5];
        assert!((y2020["qc_precip"].as_f64().unwrap() - 28.5).abs() < 1e-9);
        assert!((y2020["avg_loss"].as_f64().unwrap() - 4.0).abs() < 1e-9);
        assert_eq!(y2020["qc_precip_events"], 2);
        assert_eq!(y2020["avg_runoff_events"], 1);
        assert_eq!(y2020["avg_loss_events"], 1);
        assert_eq!(value["lunit"], "tonne/ha");
        std::fs::remove_file(db).unwrap();
    }

    #[test]
    fn events_unknown_unit_is_empty() {
        let db = loaded_db("events-missing");
        let out = run_args(&["dep-cli", "events", "-d", db.to_str().unwrap()]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["huc12"], "000000000000");
        assert!(value["results"].as_array().unwrap().is_empty());
        std::fs::remove_file(db).unwrap();
    }
}
