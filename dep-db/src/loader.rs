//! CSV data loading functions for populating the results store.
//!
//! Each loader method parses CSV data from a string slice and inserts rows
//! into the corresponding table inside a single transaction.
//!
//! # CSV Formats
//!
//! - **Units** (has headers): `huc_12,scenario,name`
//! - **Results** (has headers): `huc_12,scenario,valid,qc_precip,avg_runoff,avg_loss,avg_delivery`

use crate::Database;
use chrono::NaiveDate;
use rusqlite::params;

impl Database {
    /// Load watershed unit names from CSV string.
    ///
    /// Expected format (with headers): `huc_12,scenario,name`
    ///
    /// # Example CSV
    /// ```text
    /// huc_12,scenario,name
    /// 071000030101,0,Headwaters Beaver Creek
    /// ```
    pub fn load_huc12(&self, csv_data: &str) -> anyhow::Result<()> {
        let tx = self.conn.unchecked_transaction()?;
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(csv_data.as_bytes());

        let mut count = 0u32;
        for result in rdr.records() {
            let r = result?;
            let huc_12 = r.get(0).unwrap_or("").trim();
            let scenario: i64 = r.get(1).unwrap_or("0").trim().parse()?;
            let name = r.get(2).unwrap_or("").trim();
            if huc_12.is_empty() {
                continue;
            }

            tx.execute(
                "INSERT INTO huc12 (huc_12, scenario, name) VALUES (?1, ?2, ?3)",
                params![huc_12, scenario, name],
            )?;
            count += 1;
        }
        tx.commit()?;
        log::info!("[DEP Debug] loader: Loaded {} units", count);
        Ok(())
    }

    /// Load daily results from CSV string.
    ///
    /// Expected format (with headers):
    /// `huc_12,scenario,valid,qc_precip,avg_runoff,avg_loss,avg_delivery`
    ///
    /// `valid` is `YYYY-MM-DD`. Rows with an unparseable date or any
    /// non-numeric metric are skipped.
    ///
    /// # Example CSV
    /// ```text
    /// huc_12,scenario,valid,qc_precip,avg_runoff,avg_loss,avg_delivery
    /// 071000030101,0,2020-06-01,25.4,5.0,0.5,0.25
    /// ```
    pub fn load_results(&self, csv_data: &str) -> anyhow::Result<()> {
        let tx = self.conn.unchecked_transaction()?;
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(csv_data.as_bytes());

        let mut count = 0u32;
        let mut skipped = 0u32;
        for result in rdr.records() {
            let r = result?;
            let huc_12 = r.get(0).unwrap_or("").trim();
            let scenario: i64 = match r.get(1).unwrap_or("").trim().parse() {
                Ok(v) => v,
                Err(_) => {
                    skipped += 1;
                    continue;
                }
            };
            let valid_text = r.get(2).unwrap_or("").trim();
            let valid = match NaiveDate::parse_from_str(valid_text, "%Y-%m-%d") {
                Ok(d) => d,
                Err(_) => {
                    skipped += 1;
                    continue;
                }
            };
            let metrics: Option<Vec<f64>> = (3..7)
                .map(|i| r.get(i).and_then(|s| s.trim().parse::<f64>().ok()))
                .collect();
            let metrics = match metrics {
                Some(m) if !huc_12.is_empty() => m,
                _ => {
                    skipped += 1;
                    continue;
                }
            };

            tx.execute(
                "INSERT OR REPLACE INTO results_by_huc12
                 (huc_12, scenario, valid, qc_precip, avg_runoff, avg_loss, avg_delivery)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
                params![huc_12, scenario, valid, metrics[0], metrics[1], metrics[2], metrics[3]],
            )?;
            count += 1;
        }
        tx.commit()?;
        log::info!("[DEP Debug] loader: Loaded {} results, skipped {} malformed", count, skipped);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::Database;

    fn count(db: &Database, table: &str) -> i64 {
        db.conn
            .query_row(&format!("SELECT COUNT(*) FROM {}", table), [], |row| row.get(0))
            .unwrap()
    }

    #[test]
    fn load_huc12_inserts_rows() {
        let db = Database::new().unwrap();
        db.load_huc12(
            "huc_12,scenario,name\n071000030101,0,Beaver Creek\n071000030101,1,Beaver Creek\n",
        )
        .unwrap();
        assert_eq!(count(&db, "huc12"), 2);
    }

    #[test]
    fn load_huc12_keeps_duplicates() {
        let db = Database::new().unwrap();
        db.load_huc12("huc_12,scenario,name\n071000030101,0,A\n071000030101,0,B\n")
            .unwrap();
        assert_eq!(db.query_units("071000030101", 0).unwrap().len(), 2);
    }

    #[test]
    fn load_huc12_rejects_bad_scenario() {
        let db = Database::new().unwrap();
        assert!(db.load_huc12("huc_12,scenario,name\n071000030101,x,A\n").is_err());
    }

    #[test]
    fn load_results_skips_malformed_rows() {
        let db = Database::new().unwrap();
        db.load_results(
            "huc_12,scenario,valid,qc_precip,avg_runoff,avg_loss,avg_delivery\n\
             071000030101,0,2020-06-01,10,1,0.1,0.05\n\
             071000030101,0,not-a-date,10,1,0.1,0.05\n\
             071000030101,0,2020-06-02,---,1,0.1,0.05\n\
             071000030101,0,2020-06-03,10,1,0.1\n\
             ,0,2020-06-04,10,1,0.1,0.05\n",
        )
        .unwrap();
        assert_eq!(count(&db, "results_by_huc12"), 1);
    }

    #[test]
    fn load_results_replaces_same_day() {
        let db = Database::new().unwrap();
        db.load_results(
            "huc_12,scenario,valid,qc_precip,avg_runoff,avg_loss,avg_delivery\n\
             071000030101,0,2020-06-01,10,1,0.1,0.05\n\
             071000030101,0,2020-06-01,20,2,0.2,0.10\n",
        )
        .unwrap();
        assert_eq!(count(&db, "results_by_huc12"), 1);
        let precip: f64 = db
            .conn
            .query_row("SELECT qc_precip FROM results_by_huc12", [], |row| row.get(0))
            .unwrap();
        assert!((precip - 20.0).abs() < 1e-9);
    }
}
