//! SQL schema definitions for the results store.
//!
//! The schema is applied as a single batch when a database is created.

/// Returns the full SQL schema as a single batch string.
///
/// This creates the following tables:
///
/// - `huc12` - Watershed unit names (huc_12, scenario, name). There is no
///   uniqueness constraint: a duplicated unit is a data problem the report
///   has to detect, not one the schema hides.
/// - `results_by_huc12` - Daily results per unit and scenario. Dates are
///   stored as `YYYY-MM-DD` text so range comparisons sort correctly;
///   precipitation and runoff in mm, loss and delivery in kg/m².
pub fn create_schema() -> &'static str {
    r#"
    CREATE TABLE IF NOT EXISTS huc12 (
        huc_12 TEXT NOT NULL,
        scenario INTEGER NOT NULL,
        name TEXT NOT NULL
    );
    CREATE INDEX IF NOT EXISTS idx_huc12_lookup ON huc12(huc_12, scenario);

    CREATE TABLE IF NOT EXISTS results_by_huc12 (
        huc_12 TEXT NOT NULL,
        scenario INTEGER NOT NULL,
        valid TEXT NOT NULL,
        qc_precip REAL NOT NULL,
        avg_runoff REAL NOT NULL,
        avg_loss REAL NOT NULL,
        avg_delivery REAL NOT NULL,
        PRIMARY KEY (huc_12, scenario, valid)
    );
    CREATE INDEX IF NOT EXISTS idx_results_loss ON results_by_huc12(huc_12, scenario, avg_loss);
    "#
}
