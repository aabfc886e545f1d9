//! Page-independent logic behind the finance dashboard widgets.
//!
//! This crate provides:
//! - `table_filter`: case-insensitive row visibility for the searchable table
//! - `chat`: the fixed keyword responder and its typed message log
//! - `chart`: the Chart.js bar chart configuration for spent amounts
//! - `format`: amount formatting for table cells
//!
//! Nothing here touches the DOM, so everything is testable natively.
//!
//! ```rust
//! use cfm_widgets::{chart, chat, table_filter};
//!
//! assert!(table_filter::row_matches(&["Library", "5,000,000.00"], "lib"));
//! assert_eq!(chat::reply_for("What is the fund?"), chat::FUND_REPLY);
//! assert_eq!(chart::create_chart(vec!["A".into()], vec![1.0]).data.datasets.len(), 1);
//! ```

pub mod chart;
pub mod chat;
pub mod format;
pub mod table_filter;
