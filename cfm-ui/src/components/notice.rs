//! Error and success notices.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct NoticeProps {
    pub message: String,
    #[props(default = true)]
    pub is_error: bool,
}

/// A colored message box: red with an "Error:" prefix, or green for success.
#[component]
pub fn Notice(props: NoticeProps) -> Element {
    let style = if props.is_error {
        "padding: 12px 16px; margin: 8px 0; background: #FFEBEE; color: #C62828; border-radius: 4px; border: 1px solid #EF9A9A;"
    } else {
        "padding: 12px 16px; margin: 8px 0; background: #E8F5E9; color: #2E7D32; border-radius: 4px; border: 1px solid #A5D6A7;"
    };

    rsx! {
        div {
            style: "{style}",
            if props.is_error {
                strong { "Error: " }
            }
            "{props.message}"
        }
    }
}
