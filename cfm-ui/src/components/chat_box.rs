//! Help chat: message log plus an input that sends on Enter.

use crate::js_bridge;
use crate::state::AppState;
use cfm_widgets::chat::{self, Speaker};
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ChatBoxProps {
    /// DOM id of the scrolling message log
    pub log_id: String,
    #[props(default = 240)]
    pub height: u32,
}

/// Chat widget backed by `AppState::chat_log`.
///
/// Entries are rendered as text nodes, so whatever the user types is shown
/// literally and never parsed as markup.
#[component]
pub fn ChatBox(props: ChatBoxProps) -> Element {
    let mut state = use_context::<AppState>();
    let draft = (state.chat_draft)();
    let entries = state.chat_log.read().entries().to_vec();

    // Keep the newest message in view after each append
    let log_id = props.log_id.clone();
    use_effect(move || {
        if !state.chat_log.read().is_empty() {
            js_bridge::scroll_to_bottom(&log_id);
        }
    });

    let on_input = move |evt: Event<FormData>| {
        state.chat_draft.set(evt.value());
    };

    let on_keydown = move |evt: Event<KeyboardData>| {
        if !chat::is_submit_key(&evt.key().to_string()) {
            return;
        }
        let message = state.chat_draft.peek().clone();
        let sent = state.chat_log.write().submit(&message).is_some();
        if sent {
            state.chat_draft.set(String::new());
        }
    };

    let log_style = format!(
        "height: {}px; overflow-y: auto; padding: 8px; border: 1px solid #E0E0E0; border-radius: 4px; background: #FAFAFA;",
        props.height
    );

    rsx! {
        div {
            style: "margin: 8px 0; max-width: 480px;",
            div {
                id: "{props.log_id}",
                style: "{log_style}",
                for (idx, entry) in entries.iter().enumerate() {
                    div {
                        key: "{idx}",
                        style: if entry.speaker == Speaker::Bot { "margin: 4px 0; color: #2c3e50;" } else { "margin: 4px 0;" },
                        b { {entry.speaker.label()} }
                        " {entry.text}"
                    }
                }
            }
            input {
                r#type: "text",
                value: "{draft}",
                placeholder: "Ask about funds or expenditures and press Enter",
                style: "width: 100%; padding: 6px 8px; margin-top: 8px; box-sizing: border-box;",
                oninput: on_input,
                onkeydown: on_keydown,
            }
        }
    }
}
