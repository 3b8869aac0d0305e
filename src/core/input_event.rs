//! Structured input events produced by the runtime.

use crate::core::input::{parse_key, parse_text};

/// Input event delivered to the application.
///
/// Notes:
/// - `raw` is the exact sequence received from the terminal (UTF-8 decoded).
/// - `key_id` is a normalized identifier for matching keybindings.
/// - Text and paste events carry decoded text so consumers never parse escape sequences.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    Key { raw: String, key_id: String },
    Text { raw: String, text: String },
    Paste { raw: String, text: String },
    Resize { columns: u16, rows: u16 },
    Interrupt,
    UnknownRaw { raw: String },
}

impl InputEvent {
    /// Convenience constructor used by tests and scripted input.
    pub fn key(key_id: impl Into<String>) -> Self {
        Self::Key {
            raw: String::new(),
            key_id: key_id.into(),
        }
    }

    pub fn text(text: impl Into<String>) -> Self {
        let text = text.into();
        Self::Text {
            raw: text.clone(),
            text,
        }
    }
}

pub fn parse_input_events(data: &str) -> Vec<InputEvent> {
    if data.is_empty() {
        return Vec::new();
    }

    const PASTE_START: &str = "\x1b[200~";
    const PASTE_END: &str = "\x1b[201~";

    fn parse_non_paste(data: &str) -> Vec<InputEvent> {
        if data.is_empty() {
            return Vec::new();
        }

        if let Some(text) = parse_text(data) {
            return vec![InputEvent::Text {
                raw: data.to_string(),
                text,
            }];
        }

        if let Some(key_id) = parse_key(data) {
            return vec![InputEvent::Key {
                raw: data.to_string(),
                key_id,
            }];
        }

        vec![InputEvent::UnknownRaw {
            raw: data.to_string(),
        }]
    }

    let mut events = Vec::new();
    let mut remaining = data;
    loop {
        let Some(start) = remaining.find(PASTE_START) else {
            events.extend(parse_non_paste(remaining));
            break;
        };

        events.extend(parse_non_paste(&remaining[..start]));

        let after_start = &remaining[start + PASTE_START.len()..];
        let Some(end_rel) = after_start.find(PASTE_END) else {
            events.push(InputEvent::UnknownRaw {
                raw: remaining.to_string(),
            });
            break;
        };

        let raw_end = start + PASTE_START.len() + end_rel + PASTE_END.len();
        events.push(InputEvent::Paste {
            raw: remaining[start..raw_end].to_string(),
            text: after_start[..end_rel].to_string(),
        });

        remaining = &after_start[end_rel + PASTE_END.len()..];
        if remaining.is_empty() {
            break;
        }
    }

    events
}
