//! Results store creation from CSV fixtures.

use dep_db::Database;
use log::info;
use std::io::Write;
use std::path::{Path, PathBuf};

pub fn run_load<W: Write>(
    database: &Path,
    huc12_csv: Option<PathBuf>,
    results_csv: Option<PathBuf>,
    out: &mut W,
) -> anyhow::Result<()> {
    let db = Database::create(database)?;
    if let Some(path) = huc12_csv {
        db.load_huc12(&std::fs::read_to_string(&path)?)?;
        info!("Loaded units from {}", path.display());
    }
    if let Some(path) = results_csv {
        db.load_results(&std::fs::read_to_string(&path)?)?;
        info!("Loaded results from {}", path.display());
    }
    writeln!(out, "Store ready: {}", database.display())?;
    Ok(())
}
