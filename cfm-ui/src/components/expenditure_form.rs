//! Form for recording spending against a category.

use crate::js_bridge;
use crate::state::{AppState, Flash};
use dioxus::prelude::*;

/// Parse a user-entered amount. Only finite, positive numbers are accepted.
pub fn parse_amount(input: &str) -> Option<f64> {
    input
        .trim()
        .replace(',', "")
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v > 0.0)
}

/// Category dropdown, amount input and "Add" button.
///
/// The ledger refuses amounts that would push a category past its budget;
/// either way the outcome message lands in `AppState::flash` and the table
/// and chart are refreshed from the ledger.
#[component]
pub fn ExpenditureForm() -> Element {
    let mut state = use_context::<AppState>();
    let summaries = state.summaries.read().clone();
    let mut selected = use_signal(|| None::<i64>);
    let mut amount = use_signal(String::new);

    let current = selected().or_else(|| summaries.first().map(|s| s.id));

    let on_category_change = move |evt: Event<FormData>| {
        if let Ok(id) = evt.value().parse::<i64>() {
            selected.set(Some(id));
        }
    };

    let on_amount_input = move |evt: Event<FormData>| {
        amount.set(evt.value());
    };

    let on_submit = move |evt: Event<FormData>| {
        evt.prevent_default();
        let Some(category_id) = current else {
            return;
        };
        let Some(value) = parse_amount(&amount.peek()) else {
            state.flash.set(Some(Flash {
                message: "Enter a positive amount".to_string(),
                is_error: true,
            }));
            return;
        };
        let db = (*state.db.peek()).clone();
        let Some(db) = db else {
            return;
        };

        match db.add_expenditure(category_id, value, js_bridge::today()) {
            Ok(outcome) => {
                let is_error = !outcome.is_recorded();
                state.flash.set(Some(Flash {
                    message: outcome.message(),
                    is_error,
                }));
                if !is_error {
                    amount.set(String::new());
                }
            }
            Err(e) => {
                log::error!("Failed to record expenditure: {}", e);
                state.flash.set(Some(Flash {
                    message: format!("Failed to record expenditure: {}", e),
                    is_error: true,
                }));
            }
        }
        state.refresh_summaries();
    };

    rsx! {
        form {
            style: "margin: 8px 0; display: flex; gap: 12px; align-items: center; flex-wrap: wrap;",
            onsubmit: on_submit,
            label {
                style: "font-weight: bold;",
                "Category: "
                select {
                    onchange: on_category_change,
                    for summary in summaries.iter() {
                        option {
                            value: "{summary.id}",
                            selected: Some(summary.id) == current,
                            "{summary.name}"
                        }
                    }
                }
            }
            label {
                style: "font-weight: bold;",
                "Amount: "
                input {
                    r#type: "number",
                    min: "0",
                    step: "0.01",
                    value: "{amount}",
                    style: "width: 140px;",
                    oninput: on_amount_input,
                }
            }
            button {
                r#type: "submit",
                "Add"
            }
        }
    }
}
