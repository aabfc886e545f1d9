//! Scripted keyword responder for the help chat widget.
//!
//! Replies come from a fixed table of substring triggers checked in order
//! against the lower-cased message. Every trigger that matches overwrites the
//! reply, so a later entry wins over an earlier one: a message mentioning both
//! "fund" and "expenditure" gets the expenditure answer.
//!
//! The log is append-only and holds typed entries; rendering is left to the
//! UI layer so user text is never spliced into markup.

use serde::Serialize;

/// Reply when no trigger matches.
pub const DEFAULT_REPLY: &str = "I am here to assist you!";
/// Reply for messages mentioning "fund".
pub const FUND_REPLY: &str = "The principal sets the total government fund.";
/// Reply for messages mentioning "expenditure".
pub const EXPENDITURE_REPLY: &str = "Financer can add expenditures in the categories.";

/// Trigger table in evaluation order. Later matches take precedence.
const KEYWORD_REPLIES: [(&str, &str); 2] = [
    ("fund", FUND_REPLY),
    ("expenditure", EXPENDITURE_REPLY),
];

/// Key name that submits a message.
pub const SUBMIT_KEY: &str = "Enter";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Speaker {
    User,
    Bot,
}

impl Speaker {
    /// Prefix shown before the message text.
    pub fn label(self) -> &'static str {
        match self {
            Speaker::User => "You:",
            Speaker::Bot => "Bot:",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatEntry {
    pub speaker: Speaker,
    pub text: String,
}

/// Whether a keydown with this key name submits the draft.
pub fn is_submit_key(key: &str) -> bool {
    key == SUBMIT_KEY
}

/// Canned reply for `message`.
pub fn reply_for(message: &str) -> &'static str {
    let lowered = message.to_lowercase();
    let mut reply = DEFAULT_REPLY;
    for (keyword, answer) in KEYWORD_REPLIES {
        if lowered.contains(keyword) {
            reply = answer;
        }
    }
    reply
}

/// Append-only chat transcript.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ChatLog {
    entries: Vec<ChatEntry>,
}

impl ChatLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[ChatEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Record `message` and the bot's answer.
    ///
    /// Returns `None` without touching the log when `message` is empty, so the
    /// caller knows to leave the input alone.
    pub fn submit(&mut self, message: &str) -> Option<&'static str> {
        if message.is_empty() {
            return None;
        }
        let reply = reply_for(message);
        self.entries.push(ChatEntry {
            speaker: Speaker::User,
            text: message.to_string(),
        });
        self.entries.push(ChatEntry {
            speaker: Speaker::Bot,
            text: reply.to_string(),
        });
        log::info!("chat: replied to message #{}", self.entries.len() / 2);
        Some(reply)
    }
}
