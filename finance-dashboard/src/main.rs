//! College Finance Dashboard
//!
//! One page with the three helpers the finance office uses:
//! - a budget table per expenditure category, filtered live by a search box
//! - a bar chart of the amount spent per category (Chart.js)
//! - a help chat answering from a fixed set of keyword replies
//!
//! plus a form for recording spending, which refuses amounts that would push
//! a category past its budget.
//!
//! Data flow:
//! 1. `build.rs` copies `categories.csv` into `OUT_DIR`.
//! 2. `include_str!` embeds the CSV into the WASM binary.
//! 3. On mount, the CSV is loaded into an in-memory SQLite ledger and the
//!    budget summaries are read into `AppState`.
//! 4. Whenever the summaries change, the table re-renders and the chart is
//!    rebuilt via `renderBarChart()`.

use cfm_ledger::Database;
use cfm_ui::budget_table::{spent_chart, summary_table};
use cfm_ui::components::{
    ChartCanvas, ChatBox, ExpenditureForm, LoadingSpinner, Notice, SearchTable, SectionHeader,
};
use cfm_ui::js_bridge;
use cfm_ui::state::AppState;
use dioxus::prelude::*;

/// Expenditure categories and their budgets.
const CATEGORIES_CSV: &str = include_str!(concat!(env!("OUT_DIR"), "/categories.csv"));

/// Canvas DOM element ID used by Chart.js to render into.
const CHART_ID: &str = "spent-chart";
/// Budget table DOM element ID.
const TABLE_ID: &str = "budget-table";
/// Scrolling chat log DOM element ID.
const CHAT_LOG_ID: &str = "chat-messages";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("finance-dashboard-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    // Initialize charts and the ledger on mount
    use_effect(move || {
        js_bridge::init_charts();

        let db = match Database::new() {
            Ok(db) => db,
            Err(e) => {
                log::error!("Failed to create ledger: {}", e);
                state
                    .error_msg
                    .set(Some(format!("Failed to create ledger: {}", e)));
                state.loading.set(false);
                return;
            }
        };
        if let Err(e) = db.load_categories(CATEGORIES_CSV) {
            log::error!("Failed to load categories: {}", e);
            state
                .error_msg
                .set(Some(format!("Failed to load expenditure categories: {}", e)));
            state.loading.set(false);
            return;
        }

        state.db.set(Some(db));
        state.refresh_summaries();
        state.loading.set(false);
    });

    // Rebuild the chart whenever the summaries change
    use_effect(move || {
        let summaries = state.summaries.read().clone();
        if (state.loading)() || summaries.is_empty() {
            return;
        }
        js_bridge::render_bar_chart(CHART_ID, &spent_chart(&summaries));
    });

    let table = summary_table(&state.summaries.read());

    rsx! {
        div {
            style: "padding: 16px; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;",

            h2 { style: "margin: 0 0 8px 0;", "College Finance Dashboard" }

            if let Some(err) = (state.error_msg)() {
                Notice { message: err }
            } else if (state.loading)() {
                LoadingSpinner {}
            } else {
                SectionHeader {
                    title: "Budget vs Spent".to_string(),
                    caption: "Type to filter categories by any column".to_string(),
                }
                SearchTable {
                    id: TABLE_ID.to_string(),
                    table: table,
                    placeholder: "Search categories...".to_string(),
                }

                SectionHeader {
                    title: "Add Expenditure".to_string(),
                }
                ExpenditureForm {}
                if let Some(flash) = (state.flash)() {
                    Notice { message: flash.message, is_error: flash.is_error }
                }

                SectionHeader {
                    title: "Spent Amount by Category".to_string(),
                }
                ChartCanvas {
                    id: CHART_ID.to_string(),
                    loading: false,
                }

                SectionHeader {
                    title: "Ask the Finance Bot".to_string(),
                    caption: "Answers questions about funds and expenditures".to_string(),
                }
                ChatBox {
                    log_id: CHAT_LOG_ID.to_string(),
                }
            }
        }
    }
}
