//! Word wrapping for plain text.
//!
//! Lines break at spaces and after hyphens. Words wider than the limit are never split; they
//! overflow on a line of their own. Spaces at a break are dropped.

use unicode_segmentation::UnicodeSegmentation;

use super::width::{grapheme_width, visible_width};

struct LineWrapper {
    limit: usize,
    lines: Vec<String>,
    line: String,
    line_width: usize,
    space: String,
    word: String,
    word_width: usize,
}

impl LineWrapper {
    fn new(limit: usize) -> Self {
        Self {
            limit,
            lines: Vec::new(),
            line: String::new(),
            line_width: 0,
            space: String::new(),
            word: String::new(),
            word_width: 0,
        }
    }

    fn push(&mut self, grapheme: &str) {
        if grapheme.chars().all(char::is_whitespace) {
            self.flush_word();
            self.space.push_str(grapheme);
            return;
        }

        self.word.push_str(grapheme);
        self.word_width += grapheme_width(grapheme);
        if self.line_width > 0
            && self.line_width + visible_width(&self.space) + self.word_width > self.limit
        {
            self.break_line();
        }
        if grapheme == "-" {
            self.flush_word();
        }
    }

    fn flush_word(&mut self) {
        if self.word.is_empty() {
            return;
        }
        self.line_width += visible_width(&self.space);
        self.line.push_str(&self.space);
        self.space.clear();
        self.line_width += self.word_width;
        self.line.push_str(&self.word);
        self.word.clear();
        self.word_width = 0;
    }

    fn break_line(&mut self) {
        self.lines.push(std::mem::take(&mut self.line));
        self.line_width = 0;
        self.space.clear();
    }

    fn finish(mut self) -> Vec<String> {
        self.flush_word();
        self.lines.push(self.line);
        self.lines
    }
}

/// Wrap one line (no newlines) to `width` columns. Always returns at least one line.
pub fn wrap_line(line: &str, width: usize) -> Vec<String> {
    if width == 0 || visible_width(line) <= width {
        return vec![line.to_string()];
    }
    let mut wrapper = LineWrapper::new(width);
    for grapheme in line.graphemes(true) {
        wrapper.push(grapheme);
    }
    wrapper.finish()
}

/// Wrap every newline-separated line of `text` to `width` columns.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    text.split('\n')
        .flat_map(|line| wrap_line(line, width))
        .collect()
}
