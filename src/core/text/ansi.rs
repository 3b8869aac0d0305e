//! ANSI escape sequence recognition.

pub const RESET: &str = "\x1b[0m";

/// Length in bytes of the escape sequence starting at `pos`, if one starts there.
///
/// Recognizes CSI (`ESC [ ... final`), OSC (`ESC ] ... BEL|ST`) and SS3 (`ESC O x`).
pub fn ansi_sequence_len(input: &str, pos: usize) -> Option<usize> {
    let bytes = input.as_bytes();
    if bytes.get(pos) != Some(&0x1b) {
        return None;
    }

    match bytes.get(pos + 1)? {
        b'[' => bytes[pos + 2..]
            .iter()
            .position(|b| (0x40..=0x7e).contains(b))
            .map(|idx| idx + 3),
        b']' => {
            let mut idx = pos + 2;
            while idx < bytes.len() {
                if bytes[idx] == 0x07 {
                    return Some(idx + 1 - pos);
                }
                if bytes[idx] == 0x1b && bytes.get(idx + 1) == Some(&b'\\') {
                    return Some(idx + 2 - pos);
                }
                idx += 1;
            }
            None
        }
        b'O' => (pos + 2 < bytes.len()).then_some(3),
        _ => None,
    }
}

/// `input` with every recognized escape sequence removed.
pub fn strip_ansi(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut idx = 0;
    while idx < input.len() {
        if let Some(len) = ansi_sequence_len(input, idx) {
            idx += len;
            continue;
        }
        let Some(ch) = input[idx..].chars().next() else {
            break;
        };
        out.push(ch);
        idx += ch.len_utf8();
    }
    out
}

/// Wrap `text` in an SGR sequence and reset afterwards. Empty `sgr` leaves text untouched.
pub fn styled(sgr: &str, text: &str) -> String {
    if sgr.is_empty() || text.is_empty() {
        return text.to_string();
    }
    format!("\x1b[{sgr}m{text}{RESET}")
}
