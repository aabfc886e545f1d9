//! SQL schema for the in-memory ledger.
//!
//! Applied as a single batch when the database is initialized.

/// Returns the full SQL schema as a single batch string.
///
/// - `expenditure_categories` - id, unique name, budget
/// - `expenditures` - id, category_id, amount, description, recorded_on (YYYY-MM-DD)
pub fn create_schema() -> &'static str {
    r#"
    CREATE TABLE IF NOT EXISTS expenditure_categories (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL UNIQUE,
        budget REAL NOT NULL
    );

    CREATE TABLE IF NOT EXISTS expenditures (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        category_id INTEGER NOT NULL REFERENCES expenditure_categories(id),
        amount REAL NOT NULL,
        description TEXT,
        recorded_on TEXT NOT NULL
    );
    CREATE INDEX IF NOT EXISTS idx_expenditures_category ON expenditures(category_id);
    "#
}
