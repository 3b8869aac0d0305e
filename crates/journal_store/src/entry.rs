/// Separates the timestamp from the entry text on disk.
pub const DELIMITER: char = '-';

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JournalEntry {
    pub timestamp: String,
    pub text: String,
}

impl JournalEntry {
    #[must_use]
    pub fn new(timestamp: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            timestamp: timestamp.into(),
            text: text.into(),
        }
    }

    /// On-disk form, newline included.
    #[must_use]
    pub fn to_line(&self) -> String {
        format!("{}{DELIMITER}{}\n", self.timestamp, self.text)
    }
}

/// Folds line breaks into spaces so one entry always occupies one line.
#[must_use]
pub fn single_line(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut last_was_break = false;
    for ch in text.chars() {
        if ch == '\n' || ch == '\r' {
            if !last_was_break {
                out.push(' ');
            }
            last_was_break = true;
        } else {
            out.push(ch);
            last_was_break = false;
        }
    }
    out
}

/// Parses a single journal line. Lines without a delimiter yield `None`.
#[must_use]
pub fn parse_line(line: &str) -> Option<JournalEntry> {
    let line = line.strip_suffix('\r').unwrap_or(line);
    let (timestamp, text) = line.split_once(DELIMITER)?;
    Some(JournalEntry::new(timestamp, text))
}

/// Lenient parse of a whole journal. Stray lines are skipped, never reported.
#[must_use]
pub fn parse(raw: &str) -> Vec<JournalEntry> {
    raw.lines()
        .filter(|line| !line.is_empty())
        .filter_map(parse_line)
        .collect()
}

/// Concatenated on-disk form of `entries`, as shown by the scrolling view.
#[must_use]
pub fn render_content(entries: &[JournalEntry]) -> String {
    let mut content = String::new();
    for entry in entries {
        content.push_str(&entry.to_line());
    }
    content
}

#[cfg(test)]
mod tests {
    use super::{parse, parse_line, render_content, single_line, JournalEntry};

    #[test]
    fn splits_at_first_delimiter_only() {
        let entry = parse_line("2023/01/01 10:00-well-being check").expect("line has delimiter");
        assert_eq!(entry.timestamp, "2023/01/01 10:00");
        assert_eq!(entry.text, "well-being check");
    }

    #[test]
    fn line_without_delimiter_is_dropped() {
        let entries = parse("2023/01/01 10:00-first\nnot a journal line\n2023/01/02 11:00-second\n");
        assert_eq!(
            entries,
            vec![
                JournalEntry::new("2023/01/01 10:00", "first"),
                JournalEntry::new("2023/01/02 11:00", "second"),
            ]
        );
    }

    #[test]
    fn timestamp_is_not_validated() {
        let entries = parse("whenever-text\n");
        assert_eq!(entries, vec![JournalEntry::new("whenever", "text")]);
    }

    #[test]
    fn crlf_and_blank_lines_are_tolerated() {
        let entries = parse("\r\n2023/01/01 10:00-a\r\n\n2023/01/01 10:01-b");
        assert_eq!(
            entries,
            vec![
                JournalEntry::new("2023/01/01 10:00", "a"),
                JournalEntry::new("2023/01/01 10:01", "b"),
            ]
        );
    }

    #[test]
    fn empty_text_after_delimiter_is_kept() {
        assert_eq!(
            parse_line("2023/01/01 10:00-"),
            Some(JournalEntry::new("2023/01/01 10:00", ""))
        );
    }

    #[test]
    fn render_content_matches_file_layout() {
        let entries = vec![
            JournalEntry::new("2023/01/01 10:00", "first"),
            JournalEntry::new("2023/01/02 11:00", "second"),
        ];
        assert_eq!(
            render_content(&entries),
            "2023/01/01 10:00-first\n2023/01/02 11:00-second\n"
        );
    }

    #[test]
    fn single_line_folds_breaks() {
        assert_eq!(single_line("one\r\ntwo\nthree"), "one two three");
        assert_eq!(single_line("plain"), "plain");
    }
}
