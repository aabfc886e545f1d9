//! Reusable Dioxus RSX components for the finance dashboard.

mod chart_canvas;
mod chat_box;
mod expenditure_form;
mod loading_spinner;
mod notice;
mod search_table;
mod section_header;

pub use chart_canvas::ChartCanvas;
pub use chat_box::ChatBox;
pub use expenditure_form::{parse_amount, ExpenditureForm};
pub use loading_spinner::LoadingSpinner;
pub use notice::Notice;
pub use search_table::SearchTable;
pub use section_header::SectionHeader;
