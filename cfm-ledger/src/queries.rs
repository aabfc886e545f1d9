//! Typed queries and the spending write path.
//!
//! All queries return structs from [`crate::models`]. Spent totals are always
//! recomputed from the `expenditures` table, never cached.

use crate::models::{BudgetSummary, CategoryInfo, ExpenditureEntry, SpendOutcome};
use crate::Database;
use chrono::NaiveDate;
use rusqlite::{params, OptionalExtension};

impl Database {
    /// All categories, ordered by id.
    pub fn query_categories(&self) -> anyhow::Result<Vec<CategoryInfo>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT id, name, budget FROM expenditure_categories ORDER BY id",
        )?;
        let rows = stmt
            .query_map([], |row| {
                Ok(CategoryInfo {
                    id: row.get(0)?,
                    name: row.get(1)?,
                    budget: row.get(2)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        log::info!("query: query_categories returned {} records", rows.len());
        Ok(rows)
    }

    /// Budget, spent and remaining for every category, ordered by id.
    pub fn query_budget_summaries(&self) -> anyhow::Result<Vec<BudgetSummary>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT c.id, c.name, c.budget, COALESCE(SUM(e.amount), 0.0) AS spent
             FROM expenditure_categories c
             LEFT JOIN expenditures e ON e.category_id = c.id
             GROUP BY c.id
             ORDER BY c.id",
        )?;
        let rows = stmt
            .query_map([], |row| {
                Ok(BudgetSummary::new(
                    row.get(0)?,
                    row.get(1)?,
                    row.get(2)?,
                    row.get(3)?,
                ))
            })?
            .collect::<Result<Vec<_>, _>>()?;
        log::info!("query: query_budget_summaries returned {} records", rows.len());
        Ok(rows)
    }

    /// Recorded expenditures for one category, newest first.
    pub fn query_expenditures(&self, category_id: i64) -> anyhow::Result<Vec<ExpenditureEntry>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT id, category_id, amount, description, recorded_on
             FROM expenditures
             WHERE category_id = ?1
             ORDER BY recorded_on DESC, id DESC",
        )?;
        let rows = stmt
            .query_map(params![category_id], |row| {
                Ok(ExpenditureEntry {
                    id: row.get(0)?,
                    category_id: row.get(1)?,
                    amount: row.get(2)?,
                    description: row.get(3)?,
                    recorded_on: row.get(4)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        log::info!(
            "query: query_expenditures({}) returned {} records",
            category_id,
            rows.len()
        );
        Ok(rows)
    }

    /// Names of categories whose spending exceeds their budget, ordered by id.
    pub fn over_budget_categories(&self) -> anyhow::Result<Vec<String>> {
        Ok(self
            .query_budget_summaries()?
            .into_iter()
            .filter(|s| s.spent > s.budget)
            .map(|s| s.name)
            .collect())
    }

    /// Record `amount` against a category unless it would exceed the budget.
    ///
    /// The check is `spent + amount > budget`; landing exactly on the budget
    /// is allowed. A refused amount leaves the ledger untouched.
    pub fn add_expenditure(
        &self,
        category_id: i64,
        amount: f64,
        recorded_on: NaiveDate,
    ) -> anyhow::Result<SpendOutcome> {
        let conn = self.conn.borrow();
        let category: Option<(String, f64)> = conn
            .query_row(
                "SELECT name, budget FROM expenditure_categories WHERE id = ?1",
                params![category_id],
                |row| Ok((row.get(0)?, row.get(1)?)),
            )
            .optional()?;
        let Some((name, budget)) = category else {
            log::warn!("query: add_expenditure for unknown category {}", category_id);
            return Ok(SpendOutcome::UnknownCategory { id: category_id });
        };

        let spent: f64 = conn.query_row(
            "SELECT COALESCE(SUM(amount), 0.0) FROM expenditures WHERE category_id = ?1",
            params![category_id],
            |row| row.get(0),
        )?;

        if spent + amount > budget {
            log::warn!(
                "query: refused {} for {} (budget {}, spent {})",
                amount,
                name,
                budget,
                spent
            );
            return Ok(SpendOutcome::BudgetExceeded {
                name,
                budget,
                spent,
            });
        }

        conn.execute(
            "INSERT INTO expenditures (category_id, amount, description, recorded_on)
             VALUES (?1, ?2, ?3, ?4)",
            params![
                category_id,
                amount,
                format!("Added {}", amount),
                recorded_on.format("%Y-%m-%d").to_string()
            ],
        )?;
        log::info!("query: recorded {} for {}", amount, name);
        Ok(SpendOutcome::Recorded { name, amount })
    }
}

#[cfg(test)]
mod tests {
    use crate::models::SpendStatus;
    use crate::{Database, SpendOutcome};
    use chrono::NaiveDate;

    /// Helper to create a ledger with a few seeded categories.
    fn sample_ledger() -> Database {
        let db = Database::new().unwrap();
        let csv = "\
NAME,BUDGET
Professor,72000000
Electricity,1500000
Library,5000
";
        db.load_categories(csv).unwrap();
        db
    }

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 7, d).unwrap()
    }

    fn id_of(db: &Database, name: &str) -> i64 {
        db.query_categories()
            .unwrap()
            .into_iter()
            .find(|c| c.name == name)
            .unwrap()
            .id
    }

    #[test]
    fn categories_keep_load_order() {
        let db = sample_ledger();
        let names: Vec<String> = db
            .query_categories()
            .unwrap()
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(names, vec!["Professor", "Electricity", "Library"]);
    }

    #[test]
    fn summaries_start_at_zero_spent() {
        let db = sample_ledger();
        let summaries = db.query_budget_summaries().unwrap();
        assert_eq!(summaries.len(), 3);
        for s in &summaries {
            assert_eq!(s.spent, 0.0);
            assert_eq!(s.remaining, s.budget);
            assert_eq!(s.status, SpendStatus::Ok);
        }
    }

    #[test]
    fn recorded_spending_shows_in_summary() {
        let db = sample_ledger();
        let library = id_of(&db, "Library");

        let first = db.add_expenditure(library, 1200.0, day(1)).unwrap();
        assert_eq!(
            first,
            SpendOutcome::Recorded {
                name: "Library".to_string(),
                amount: 1200.0,
            }
        );
        db.add_expenditure(library, 800.0, day(2)).unwrap();

        let summary = db
            .query_budget_summaries()
            .unwrap()
            .into_iter()
            .find(|s| s.id == library)
            .unwrap();
        assert_eq!(summary.spent, 2000.0);
        assert_eq!(summary.remaining, 3000.0);
        assert_eq!(summary.status, SpendStatus::Ok);
    }

    #[test]
    fn spending_up_to_budget_is_allowed() {
        let db = sample_ledger();
        let library = id_of(&db, "Library");
        assert!(db.add_expenditure(library, 5000.0, day(1)).unwrap().is_recorded());
    }

    #[test]
    fn spending_past_budget_is_refused() {
        let db = sample_ledger();
        let library = id_of(&db, "Library");
        db.add_expenditure(library, 4000.0, day(1)).unwrap();

        let outcome = db.add_expenditure(library, 1000.5, day(2)).unwrap();
        assert_eq!(
            outcome,
            SpendOutcome::BudgetExceeded {
                name: "Library".to_string(),
                budget: 5000.0,
                spent: 4000.0,
            }
        );
        assert_eq!(db.query_expenditures(library).unwrap().len(), 1);
        assert!(db.over_budget_categories().unwrap().is_empty());
    }

    #[test]
    fn unknown_category_records_nothing() {
        let db = sample_ledger();
        let outcome = db.add_expenditure(999, 10.0, day(1)).unwrap();
        assert_eq!(outcome, SpendOutcome::UnknownCategory { id: 999 });
    }

    #[test]
    fn expenditures_newest_first_with_description() {
        let db = sample_ledger();
        let power = id_of(&db, "Electricity");
        db.add_expenditure(power, 100.0, day(3)).unwrap();
        db.add_expenditure(power, 250.5, day(9)).unwrap();

        let entries = db.query_expenditures(power).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].recorded_on, "2024-07-09");
        assert_eq!(entries[0].description.as_deref(), Some("Added 250.5"));
        assert_eq!(entries[1].amount, 100.0);
    }

    #[test]
    fn shrinking_budget_marks_category_over_spent() {
        let db = sample_ledger();
        let library = id_of(&db, "Library");
        db.add_expenditure(library, 4500.0, day(1)).unwrap();

        // Reloading seeds with a smaller budget keeps the recorded spending
        db.load_categories("NAME,BUDGET\nLibrary,4000\n").unwrap();

        assert_eq!(db.over_budget_categories().unwrap(), vec!["Library"]);
        let summary = db
            .query_budget_summaries()
            .unwrap()
            .into_iter()
            .find(|s| s.id == library)
            .unwrap();
        assert_eq!(summary.remaining, -500.0);
        assert_eq!(summary.status, SpendStatus::OverSpent);
    }
}
