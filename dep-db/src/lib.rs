//! SQLite store layer for HUC12 erosion model results.
//!
//! This crate owns the connection to the results store and exposes the
//! read queries the detail report and the event series need, both as
//! inherent methods on [`Database`] and through the [`WatershedStore`]
//! trait so report code can be exercised against any store.
//!
//! # Usage
//!
//! ```rust
//! use dep_db::Database;
//! use chrono::NaiveDate;
//!
//! let db = Database::new().unwrap();
//! db.load_huc12("huc_12,scenario,name\n071000030101,0,Headwaters Beaver Creek\n").unwrap();
//! db.load_results(
//!     "huc_12,scenario,valid,qc_precip,avg_runoff,avg_loss,avg_delivery\n\
//!      071000030101,0,2020-06-01,25.4,5.0,0.5,0.25\n",
//! )
//! .unwrap();
//!
//! let units = db.query_units("071000030101", 0).unwrap();
//! assert_eq!(units[0].name, "Headwaters Beaver Creek");
//!
//! let day = NaiveDate::from_ymd_opt(2020, 6, 1).unwrap();
//! let sums = db.query_aggregate("071000030101", 0, day, day).unwrap();
//! assert!((sums.qc_precip - 25.4).abs() < 1e-9);
//! ```
//!
//! # Tables
//!
//! See [`schema::create_schema`] for the full SQL schema.
//!
//! - `huc12` - Watershed unit names per scenario
//! - `results_by_huc12` - Daily precipitation, runoff, detachment and delivery

pub mod schema;
mod loader;
mod queries;
pub mod models;
mod store;

pub use store::WatershedStore;

use rusqlite::{Connection, OpenFlags};
use std::path::Path;

/// A connection to the HUC12 results store.
///
/// The connection is owned and closed when the `Database` is dropped, so a
/// request that bails out early still releases it.
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Create a new in-memory database with the full schema applied.
    ///
    /// The database is empty after creation; use the `load_*` methods
    /// to populate it with CSV data.
    pub fn new() -> anyhow::Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch(schema::create_schema())?;
        Ok(Self { conn })
    }

    /// Create (or open) a database file for writing and apply the schema.
    pub fn create<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let conn = Connection::open(path.as_ref())?;
        conn.execute_batch(schema::create_schema())?;
        log::info!(
            "[DEP Debug] db: opened {} for writing",
            path.as_ref().display()
        );
        Ok(Self { conn })
    }

    /// Open an existing database file read-only.
    pub fn open_read_only<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let conn = Connection::open_with_flags(
            path.as_ref(),
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;
        log::info!(
            "[DEP Debug] db: opened {} read-only",
            path.as_ref().display()
        );
        Ok(Self { conn })
    }
}
