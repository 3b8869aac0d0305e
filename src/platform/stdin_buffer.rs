//! Stdin escape-sequence buffering.
//!
//! Raw reads can split an escape sequence across chunks or batch several keys into one chunk.
//! [`StdinBuffer`] reassembles complete sequences, emitting one event per key or character and
//! one event per bracketed paste. An incomplete escape tail is held until the flush timeout so
//! a lone `ESC` still arrives as the escape key.

use std::time::{Duration, Instant};

const ESC: char = '\x1b';
pub const BRACKETED_PASTE_START: &str = "\x1b[200~";
pub const BRACKETED_PASTE_END: &str = "\x1b[201~";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StdinEvent {
    Data(String),
    Paste(String),
}

impl StdinEvent {
    /// Wire form, with pastes re-wrapped in their bracket markers.
    pub fn into_wire(self) -> String {
        match self {
            StdinEvent::Data(data) => data,
            StdinEvent::Paste(text) => {
                format!("{BRACKETED_PASTE_START}{text}{BRACKETED_PASTE_END}")
            }
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
enum SequenceStatus {
    Complete,
    Incomplete,
}

/// Buffers stdin input and emits complete sequences.
#[derive(Debug)]
pub struct StdinBuffer {
    buffer: String,
    timeout_ms: u64,
    paste: Option<String>,
    flush_deadline: Option<Instant>,
}

impl StdinBuffer {
    pub fn new(timeout_ms: u64) -> Self {
        Self {
            buffer: String::new(),
            timeout_ms,
            paste: None,
            flush_deadline: None,
        }
    }

    pub fn process(&mut self, data: &[u8]) -> Vec<StdinEvent> {
        self.flush_deadline = None;

        // Some terminals send alt+key as a single byte with the high bit set.
        let str_data = if data.len() == 1 && data[0] > 127 {
            let mut converted = String::from(ESC);
            converted.push((data[0] - 128) as char);
            converted
        } else {
            String::from_utf8_lossy(data).into_owned()
        };

        if str_data.is_empty() {
            return Vec::new();
        }

        self.process_str(&str_data)
    }

    pub fn flush_due(&mut self, now: Instant) -> Vec<StdinEvent> {
        if self.buffer.is_empty() {
            self.flush_deadline = None;
            return Vec::new();
        }

        match self.flush_deadline {
            Some(deadline) if now >= deadline => self.flush(),
            _ => Vec::new(),
        }
    }

    pub fn next_timeout_ms(&self, now: Instant, default_ms: i32) -> i32 {
        if let Some(deadline) = self.flush_deadline {
            let remaining = deadline.saturating_duration_since(now);
            let ms = remaining.as_millis().min(i32::MAX as u128) as i32;
            return ms.min(default_ms).max(0);
        }
        default_ms
    }

    /// Emit whatever is buffered verbatim.
    pub fn flush(&mut self) -> Vec<StdinEvent> {
        self.flush_deadline = None;
        if self.buffer.is_empty() {
            return Vec::new();
        }
        vec![StdinEvent::Data(std::mem::take(&mut self.buffer))]
    }

    pub fn clear(&mut self) {
        self.flush_deadline = None;
        self.buffer.clear();
        self.paste = None;
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    fn process_str(&mut self, data: &str) -> Vec<StdinEvent> {
        let mut events = Vec::new();

        if let Some(mut pasted) = self.paste.take() {
            pasted.push_str(data);
            match pasted.find(BRACKETED_PASTE_END) {
                Some(end) => {
                    let remaining = pasted[end + BRACKETED_PASTE_END.len()..].to_string();
                    pasted.truncate(end);
                    events.push(StdinEvent::Paste(pasted));
                    if !remaining.is_empty() {
                        events.extend(self.process_str(&remaining));
                    }
                }
                None => self.paste = Some(pasted),
            }
            return events;
        }

        self.buffer.push_str(data);

        if let Some(start) = self.buffer.find(BRACKETED_PASTE_START) {
            let (sequences, _) = split_sequences(&self.buffer[..start]);
            events.extend(sequences.into_iter().map(StdinEvent::Data));

            let after = self.buffer[start + BRACKETED_PASTE_START.len()..].to_string();
            self.buffer.clear();
            self.paste = Some(String::new());
            events.extend(self.process_str(&after));
            return events;
        }

        let (sequences, remainder) = split_sequences(&self.buffer);
        events.extend(sequences.into_iter().map(StdinEvent::Data));
        self.buffer = remainder;

        if !self.buffer.is_empty() {
            self.flush_deadline = Some(Instant::now() + Duration::from_millis(self.timeout_ms));
        }

        events
    }
}

/// Split `buffer` into complete sequences and an incomplete escape tail.
fn split_sequences(buffer: &str) -> (Vec<String>, String) {
    let mut sequences = Vec::new();
    let mut pos = 0;

    while pos < buffer.len() {
        let rest = &buffer[pos..];
        if !rest.starts_with(ESC) {
            let Some(ch) = rest.chars().next() else {
                break;
            };
            sequences.push(ch.to_string());
            pos += ch.len_utf8();
            continue;
        }

        let mut end = None;
        for (offset, ch) in rest.char_indices().skip(1) {
            let candidate = &rest[..offset + ch.len_utf8()];
            if sequence_status(candidate) == SequenceStatus::Complete {
                end = Some(candidate.len());
                break;
            }
        }

        match end {
            Some(len) => {
                sequences.push(rest[..len].to_string());
                pos += len;
            }
            None => return (sequences, rest.to_string()),
        }
    }

    (sequences, String::new())
}

fn sequence_status(data: &str) -> SequenceStatus {
    let after = &data[ESC.len_utf8()..];

    if let Some(payload) = after.strip_prefix('[') {
        // `ESC [ [ 5 ~` (linux console function keys) carries a second bracket.
        let payload = payload.strip_prefix('[').unwrap_or(payload);
        return match payload.as_bytes().last() {
            Some(last) if (0x40..=0x7e).contains(last) => SequenceStatus::Complete,
            _ => SequenceStatus::Incomplete,
        };
    }

    if let Some(payload) = after.strip_prefix(']') {
        return if payload.ends_with('\x07') || payload.ends_with("\x1b\\") {
            SequenceStatus::Complete
        } else {
            SequenceStatus::Incomplete
        };
    }

    if after == "O" {
        return SequenceStatus::Incomplete;
    }

    // `ESC O x`, or ESC followed by one character (alt+key).
    SequenceStatus::Complete
}
