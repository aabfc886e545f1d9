//! Table with a search box that hides non-matching rows.

use crate::state::AppState;
use cfm_widgets::table_filter::{display_style, Table};
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct SearchTableProps {
    /// DOM id of the table element
    pub id: String,
    pub table: Table,
    #[props(default = "Search...".to_string())]
    pub placeholder: String,
}

/// Search box plus table. Every keystroke re-derives visibility for all data
/// rows from `AppState::search_query`; the header row is always shown.
#[component]
pub fn SearchTable(props: SearchTableProps) -> Element {
    let mut state = use_context::<AppState>();
    let query = (state.search_query)();
    let visibility = props.table.visibility(&query);

    let on_input = move |evt: Event<FormData>| {
        state.search_query.set(evt.value());
    };

    rsx! {
        div {
            style: "margin: 8px 0;",
            input {
                r#type: "text",
                value: "{query}",
                placeholder: "{props.placeholder}",
                style: "width: 100%; max-width: 320px; padding: 6px 8px; margin-bottom: 8px;",
                oninput: on_input,
            }
            div {
                style: "overflow-x: auto;",
                table {
                    id: "{props.id}",
                    style: "width: 100%; border-collapse: collapse;",
                    thead {
                        tr {
                            style: "background: #4b7bec; color: white;",
                            for header in props.table.headers.iter() {
                                th { style: "padding: 8px; text-align: left;", "{header}" }
                            }
                        }
                    }
                    tbody {
                        for (idx, (row, visible)) in props.table.rows.iter().zip(visibility).enumerate() {
                            tr {
                                key: "{idx}",
                                display: display_style(visible),
                                for cell in row.iter() {
                                    td { style: "padding: 8px; border-top: 1px solid #dee2e6;", "{cell}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
