//! Rendered frame model.

/// One full screen of rendered rows, top to bottom.
///
/// Rows are UTF-8 strings that may carry SGR styling. They should not contain newlines; the
/// screen renderer positions every row explicitly.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Frame {
    lines: Vec<String>,
}

impl Frame {
    pub fn new(lines: Vec<String>) -> Self {
        Self { lines }
    }

    pub fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    pub fn extend<I>(&mut self, lines: I)
    where
        I: IntoIterator<Item = String>,
    {
        self.lines.extend(lines);
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }
}

impl From<Vec<String>> for Frame {
    fn from(lines: Vec<String>) -> Self {
        Self::new(lines)
    }
}

#[cfg(test)]
mod tests {
    use super::Frame;

    #[test]
    fn lines_round_trip_preserves_bytes_exactly() {
        let input: Vec<String> = vec![
            String::new(),
            " leading and trailing ".to_string(),
            "\u{1b}[31mred\u{1b}[0m".to_string(),
            "unicode: π你好".to_string(),
        ];

        let frame: Frame = input.clone().into();
        assert_eq!(frame.len(), 4);
        assert_eq!(frame.into_lines(), input);
    }

    #[test]
    fn push_and_extend_append_in_order() {
        let mut frame = Frame::default();
        assert!(frame.is_empty());
        frame.push("a");
        frame.extend(vec!["b".to_string(), "c".to_string()]);
        assert_eq!(frame.lines(), ["a", "b", "c"]);
    }
}
