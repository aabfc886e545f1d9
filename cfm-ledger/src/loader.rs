//! CSV loading for seeding the ledger.
//!
//! # CSV Format
//!
//! - **Categories** (has headers): `NAME,BUDGET`

use crate::Database;
use rusqlite::params;

impl Database {
    /// Load expenditure categories from a CSV string.
    ///
    /// Expected format (with headers): `NAME,BUDGET`. A category that already
    /// exists keeps its id and any recorded spending; only its budget is
    /// updated. Rows with an empty name are skipped.
    ///
    /// # Example CSV
    /// ```text
    /// NAME,BUDGET
    /// Professor,72000000
    /// Library,5000000
    /// ```
    pub fn load_categories(&self, csv_data: &str) -> anyhow::Result<()> {
        let conn = self.conn.borrow();
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(csv_data.as_bytes());

        let mut count = 0u32;
        let mut skipped = 0u32;
        for result in rdr.records() {
            let r = result?;
            let name = r.get(0).unwrap_or("").trim();
            if name.is_empty() {
                skipped += 1;
                continue;
            }
            let budget: f64 = r.get(1).unwrap_or("0").trim().parse()?;

            conn.execute(
                "INSERT INTO expenditure_categories (name, budget) VALUES (?1, ?2)
                 ON CONFLICT(name) DO UPDATE SET budget = excluded.budget",
                params![name, budget],
            )?;
            count += 1;
        }
        log::info!(
            "loader: Loaded {} expenditure categories, skipped {}",
            count,
            skipped
        );
        Ok(())
    }
}
