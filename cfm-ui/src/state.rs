//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`
//! instead of looking elements up by id.

use cfm_ledger::{BudgetSummary, Database};
use cfm_widgets::chat::ChatLog;
use dioxus::prelude::*;

/// Outcome message shown under the expenditure form.
#[derive(Debug, Clone, PartialEq)]
pub struct Flash {
    pub message: String,
    pub is_error: bool,
}

/// Shared application state for the dashboard.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Ledger instance (None until loaded)
    pub db: Signal<Option<Database>>,
    /// Whether the app is still loading
    pub loading: Signal<bool>,
    /// Error message if something went wrong
    pub error_msg: Signal<Option<String>>,
    /// Budget vs spent per category, refreshed after every write
    pub summaries: Signal<Vec<BudgetSummary>>,
    /// Current text of the table search box
    pub search_query: Signal<String>,
    /// Chat transcript
    pub chat_log: Signal<ChatLog>,
    /// Current text of the chat input
    pub chat_draft: Signal<String>,
    /// Last expenditure form outcome
    pub flash: Signal<Option<Flash>>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            db: Signal::new(None),
            loading: Signal::new(true),
            error_msg: Signal::new(None),
            summaries: Signal::new(Vec::new()),
            search_query: Signal::new(String::new()),
            chat_log: Signal::new(ChatLog::new()),
            chat_draft: Signal::new(String::new()),
            flash: Signal::new(None),
        }
    }

    /// Re-read the budget summaries from the ledger.
    ///
    /// Uses `peek` so calling this from an effect does not subscribe it to `db`.
    pub fn refresh_summaries(&mut self) {
        let db = (*self.db.peek()).clone();
        let Some(db) = db else {
            log::warn!("refresh_summaries called before the ledger was loaded");
            return;
        };
        match db.query_budget_summaries() {
            Ok(rows) => self.summaries.set(rows),
            Err(e) => {
                log::error!("Failed to query budget summaries: {}", e);
                self.error_msg
                    .set(Some(format!("Failed to read the ledger: {}", e)));
            }
        }
    }
}
