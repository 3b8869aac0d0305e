//! Key parsing for legacy terminal input.
//!
//! Input arrives as already-split sequences (see `platform::stdin_buffer`). Each sequence is
//! either printable text or a key which is normalized to a key id such as `enter`,
//! `ctrl+c`, `alt+left` or `pageUp`.

const MOD_SHIFT: u8 = 1;
const MOD_ALT: u8 = 2;
const MOD_CTRL: u8 = 4;

const LEGACY_UP: [&str; 2] = ["\x1b[A", "\x1bOA"];
const LEGACY_DOWN: [&str; 2] = ["\x1b[B", "\x1bOB"];
const LEGACY_RIGHT: [&str; 2] = ["\x1b[C", "\x1bOC"];
const LEGACY_LEFT: [&str; 2] = ["\x1b[D", "\x1bOD"];
const LEGACY_HOME: [&str; 4] = ["\x1b[H", "\x1bOH", "\x1b[1~", "\x1b[7~"];
const LEGACY_END: [&str; 4] = ["\x1b[F", "\x1bOF", "\x1b[4~", "\x1b[8~"];
const LEGACY_INSERT: [&str; 1] = ["\x1b[2~"];
const LEGACY_DELETE: [&str; 1] = ["\x1b[3~"];
const LEGACY_PAGE_UP: [&str; 2] = ["\x1b[5~", "\x1b[[5~"];
const LEGACY_PAGE_DOWN: [&str; 2] = ["\x1b[6~", "\x1b[[6~"];

fn legacy_sequence_key_id(data: &str) -> Option<&'static str> {
    let tables: [(&[&str], &'static str); 10] = [
        (&LEGACY_UP, "up"),
        (&LEGACY_DOWN, "down"),
        (&LEGACY_RIGHT, "right"),
        (&LEGACY_LEFT, "left"),
        (&LEGACY_HOME, "home"),
        (&LEGACY_END, "end"),
        (&LEGACY_INSERT, "insert"),
        (&LEGACY_DELETE, "delete"),
        (&LEGACY_PAGE_UP, "pageUp"),
        (&LEGACY_PAGE_DOWN, "pageDown"),
    ];
    tables
        .iter()
        .find(|(sequences, _)| sequences.contains(&data))
        .map(|(_, key)| *key)
}

fn with_modifiers(modifier: u8, key: &str) -> String {
    let mut id = String::new();
    if modifier & MOD_CTRL != 0 {
        id.push_str("ctrl+");
    }
    if modifier & MOD_ALT != 0 {
        id.push_str("alt+");
    }
    if modifier & MOD_SHIFT != 0 {
        id.push_str("shift+");
    }
    id.push_str(key);
    id
}

/// `CSI 1 ; m X` (arrows/home/end) and `CSI n ; m ~` (editing keys) with xterm modifiers.
fn parse_modified_csi(data: &str) -> Option<String> {
    let body = data.strip_prefix("\x1b[")?;
    let final_char = body.chars().last()?;
    let params = &body[..body.len() - final_char.len_utf8()];
    let (code, modifier) = params.split_once(';')?;
    let modifier = modifier.parse::<u8>().ok()?.checked_sub(1)?;

    let key = match (code, final_char) {
        ("1", 'A') => "up",
        ("1", 'B') => "down",
        ("1", 'C') => "right",
        ("1", 'D') => "left",
        ("1", 'H') => "home",
        ("1", 'F') => "end",
        ("2", '~') => "insert",
        ("3", '~') => "delete",
        ("5", '~') => "pageUp",
        ("6", '~') => "pageDown",
        _ => return None,
    };
    Some(with_modifiers(modifier, key))
}

fn ctrl_key_id(byte: u8) -> Option<String> {
    match byte {
        0x00 => Some("ctrl+space".to_string()),
        0x01..=0x1a => {
            let letter = (b'a' + byte - 1) as char;
            Some(format!("ctrl+{letter}"))
        }
        0x1c => Some("ctrl+\\".to_string()),
        0x1d => Some("ctrl+]".to_string()),
        0x1f => Some("ctrl+-".to_string()),
        _ => None,
    }
}

/// Parse a raw input sequence into a key id. Printable text yields `None`.
pub fn parse_key(data: &str) -> Option<String> {
    match data {
        "\r" | "\n" | "\x1bOM" => return Some("enter".to_string()),
        "\x1b\r" => return Some("alt+enter".to_string()),
        "\x1b" => return Some("escape".to_string()),
        "\t" => return Some("tab".to_string()),
        "\x1b[Z" => return Some("shift+tab".to_string()),
        "\x7f" | "\x08" => return Some("backspace".to_string()),
        "\x1b\x7f" | "\x1b\x08" => return Some("alt+backspace".to_string()),
        _ => {}
    }

    if let Some(key) = legacy_sequence_key_id(data) {
        return Some(key.to_string());
    }
    if let Some(key) = parse_modified_csi(data) {
        return Some(key);
    }

    let bytes = data.as_bytes();
    if bytes.len() == 1 {
        return ctrl_key_id(bytes[0]);
    }

    if let Some(rest) = data.strip_prefix('\x1b') {
        let mut chars = rest.chars();
        if let (Some(ch), None) = (chars.next(), chars.next()) {
            if !ch.is_control() {
                return Some(format!("alt+{}", ch.to_ascii_lowercase()));
            }
        }
    }

    None
}

/// Printable text carried by `data`, if it contains no control characters.
pub fn parse_text(data: &str) -> Option<String> {
    if data.is_empty() || data.chars().any(char::is_control) {
        return None;
    }
    Some(data.to_string())
}

/// Normalize a configured key id (`Ctrl+C`, `esc`, `return`) to parser output form.
pub fn normalize_key_id(key_id: &str) -> String {
    let lower = key_id.trim().to_ascii_lowercase();
    let mut parts: Vec<&str> = lower.split('+').collect();
    let Some(key) = parts.pop() else {
        return lower;
    };
    let key = match key {
        "esc" => "escape",
        "return" => "enter",
        "pageup" | "pgup" => "pageUp",
        "pagedown" | "pgdown" => "pageDown",
        other => other,
    };

    let mut modifier = 0;
    for part in parts {
        match part {
            "ctrl" => modifier |= MOD_CTRL,
            "alt" | "meta" => modifier |= MOD_ALT,
            "shift" => modifier |= MOD_SHIFT,
            _ => {}
        }
    }
    with_modifiers(modifier, key)
}

/// Whether the raw sequence `data` is the key named by `key_id`.
pub fn matches_key(data: &str, key_id: &str) -> bool {
    parse_key(data).is_some_and(|parsed| parsed == normalize_key_id(key_id))
}

#[cfg(test)]
mod tests {
    use super::{matches_key, normalize_key_id, parse_key, parse_text};

    #[test]
    fn control_bytes_map_to_named_keys() {
        assert_eq!(parse_key("\r").as_deref(), Some("enter"));
        assert_eq!(parse_key("\x03").as_deref(), Some("ctrl+c"));
        assert_eq!(parse_key("\x17").as_deref(), Some("ctrl+w"));
        assert_eq!(parse_key("\x7f").as_deref(), Some("backspace"));
        assert_eq!(parse_key("\x1b").as_deref(), Some("escape"));
    }

    #[test]
    fn legacy_navigation_sequences() {
        assert_eq!(parse_key("\x1b[A").as_deref(), Some("up"));
        assert_eq!(parse_key("\x1bOB").as_deref(), Some("down"));
        assert_eq!(parse_key("\x1b[5~").as_deref(), Some("pageUp"));
        assert_eq!(parse_key("\x1b[3~").as_deref(), Some("delete"));
        assert_eq!(parse_key("\x1b[H").as_deref(), Some("home"));
    }

    #[test]
    fn modified_csi_sequences() {
        assert_eq!(parse_key("\x1b[1;5D").as_deref(), Some("ctrl+left"));
        assert_eq!(parse_key("\x1b[1;3C").as_deref(), Some("alt+right"));
        assert_eq!(parse_key("\x1b[1;2A").as_deref(), Some("shift+up"));
        assert_eq!(parse_key("\x1b[3;5~").as_deref(), Some("ctrl+delete"));
    }

    #[test]
    fn alt_prefixed_characters() {
        assert_eq!(parse_key("\x1bb").as_deref(), Some("alt+b"));
        assert_eq!(parse_key("\x1b\x7f").as_deref(), Some("alt+backspace"));
    }

    #[test]
    fn printable_text_is_not_a_key() {
        assert_eq!(parse_key("a"), None);
        assert_eq!(parse_text("héllo").as_deref(), Some("héllo"));
        assert_eq!(parse_text(" ").as_deref(), Some(" "));
        assert_eq!(parse_text("\x1b[A"), None);
    }

    #[test]
    fn configured_ids_are_normalized() {
        assert_eq!(normalize_key_id("Ctrl+C"), "ctrl+c");
        assert_eq!(normalize_key_id("esc"), "escape");
        assert_eq!(normalize_key_id("PgDown"), "pageDown");
        assert_eq!(normalize_key_id("shift+alt+left"), "alt+shift+left");
        assert!(matches_key("\x1b[6~", "pagedown"));
        assert!(!matches_key("\x1b[6~", "pageUp"));
    }
}
