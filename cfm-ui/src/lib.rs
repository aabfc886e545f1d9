//! Shared Dioxus components and Chart.js bridge for the finance dashboard.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers around the Chart.js bar chart and DOM scrolling
//! - `state`: Reactive AppState with Dioxus Signals
//! - `components`: Reusable RSX components (search table, chat box, chart canvas, etc.)
//! - `budget_table`: turns ledger summaries into table rows and chart series

pub mod budget_table;
pub mod components;
pub mod js_bridge;
pub mod state;
