//! In-memory SQLite ledger for the college finance dashboard.
//!
//! Holds the expenditure categories with their budgets and every recorded
//! expenditure, and answers the budget-versus-spent questions the dashboard
//! table and chart are built from.
//!
//! # Architecture
//!
//! - `Rc<RefCell<Connection>>` wrapper for interior mutability in single-threaded WASM
//! - In-memory SQLite via `rusqlite`; nothing survives a page reload
//! - Seed categories loaded from CSV, typically embedded with `include_str!`
//! - Typed query methods returning serializable structs
//!
//! # Usage
//!
//! ```rust
//! use cfm_ledger::{Database, SpendOutcome};
//! use chrono::NaiveDate;
//!
//! let db = Database::new().unwrap();
//! db.load_categories("NAME,BUDGET\nLibrary,5000000\n").unwrap();
//!
//! let library = db.query_categories().unwrap()[0].id;
//! let day = NaiveDate::from_ymd_opt(2024, 7, 1).unwrap();
//! let outcome = db.add_expenditure(library, 1200.0, day).unwrap();
//! assert!(matches!(outcome, SpendOutcome::Recorded { .. }));
//!
//! let summaries = db.query_budget_summaries().unwrap();
//! assert_eq!(summaries[0].spent, 1200.0);
//! ```
//!
//! # Tables
//!
//! See [`schema::create_schema`] for the full SQL schema.
//!
//! - `expenditure_categories` - Category name and budget
//! - `expenditures` - Individual spending entries per category
//!
//! Spent totals are derived on the fly with `SUM(amount)` per category.

pub mod schema;
mod loader;
mod queries;
pub mod models;

pub use models::{BudgetSummary, CategoryInfo, ExpenditureEntry, SpendOutcome, SpendStatus};

use rusqlite::Connection;
use std::cell::RefCell;
use std::rc::Rc;

/// In-memory SQLite ledger.
///
/// Cheaply cloneable (via `Rc`); clones share one connection, so every
/// component holding a handle sees the same spending.
#[derive(Clone)]
pub struct Database {
    conn: Rc<RefCell<Connection>>,
}

impl PartialEq for Database {
    /// Handles are equal when they share a connection.
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.conn, &other.conn)
    }
}

impl Database {
    /// Create a new in-memory database with the full schema applied.
    ///
    /// The database is empty after creation; use [`load_categories`](Self::load_categories)
    /// to seed it.
    pub fn new() -> anyhow::Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch(schema::create_schema())?;
        Ok(Self {
            conn: Rc::new(RefCell::new(conn)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn database_creates_successfully() {
        let db = Database::new();
        assert!(db.is_ok(), "Database should create without errors");
    }

    #[test]
    fn database_is_cloneable() {
        let db = Database::new().unwrap();
        let db2 = db.clone();
        db.load_categories("NAME,BUDGET\nLibrary,5000000\n").unwrap();
        let categories = db2.query_categories().unwrap();
        assert_eq!(categories.len(), 1, "Clone should see same data via shared Rc");
        assert!(db == db2);
    }

    #[test]
    fn separate_databases_are_not_equal() {
        let a = Database::new().unwrap();
        let b = Database::new().unwrap();
        assert!(a != b);
    }

    #[test]
    fn database_starts_empty() {
        let db = Database::new().unwrap();
        assert!(db.query_categories().unwrap().is_empty());
    }
}
