//! Single-line text entry.

use unicode_segmentation::UnicodeSegmentation;

use crate::core::keybindings::Action;
use crate::core::text::width::{grapheme_width, pad_to_width, visible_width};

const CURSOR_ON: &str = "\x1b[7m";
const CURSOR_OFF: &str = "\x1b[27m";

fn is_punctuation_char(ch: char) -> bool {
    ch.is_ascii_punctuation() && ch != '_'
}

fn is_whitespace_segment(segment: &str) -> bool {
    segment.chars().any(char::is_whitespace)
}

fn is_punctuation_segment(segment: &str) -> bool {
    segment.chars().any(is_punctuation_char)
}

/// Draft line with a byte-offset cursor that always sits on a grapheme boundary.
#[derive(Debug, Clone)]
pub struct LineInput {
    value: String,
    cursor: usize,
}

impl Default for LineInput {
    fn default() -> Self {
        Self::new()
    }
}

impl LineInput {
    pub fn new() -> Self {
        Self {
            value: String::new(),
            cursor: 0,
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.cursor = self.value.len();
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    /// Insert typed text at the cursor. Control characters are dropped.
    pub fn insert_text(&mut self, text: &str) {
        let cleaned: String = text.chars().filter(|ch| !ch.is_control()).collect();
        if cleaned.is_empty() {
            return;
        }
        self.value.insert_str(self.cursor, &cleaned);
        self.cursor += cleaned.len();
    }

    /// Apply an editing action. Returns `false` for actions this widget does not handle.
    pub fn apply(&mut self, action: Action) -> bool {
        match action {
            Action::CursorLeft => self.cursor = self.prev_boundary(),
            Action::CursorRight => self.cursor = self.next_boundary(),
            Action::CursorWordLeft => self.cursor = self.word_start_before(),
            Action::CursorWordRight => self.cursor = self.word_end_after(),
            Action::CursorLineStart => self.cursor = 0,
            Action::CursorLineEnd => self.cursor = self.value.len(),
            Action::DeleteCharBackward => {
                let start = self.prev_boundary();
                self.value.replace_range(start..self.cursor, "");
                self.cursor = start;
            }
            Action::DeleteCharForward => {
                let end = self.next_boundary();
                self.value.replace_range(self.cursor..end, "");
            }
            Action::DeleteWordBackward => {
                let start = self.word_start_before();
                self.value.replace_range(start..self.cursor, "");
                self.cursor = start;
            }
            Action::DeleteToLineStart => {
                self.value.replace_range(..self.cursor, "");
                self.cursor = 0;
            }
            Action::DeleteToLineEnd => self.value.truncate(self.cursor),
            _ => return false,
        }
        true
    }

    fn prev_boundary(&self) -> usize {
        self.value[..self.cursor]
            .grapheme_indices(true)
            .next_back()
            .map_or(0, |(idx, _)| idx)
    }

    fn next_boundary(&self) -> usize {
        self.value[self.cursor..]
            .graphemes(true)
            .next()
            .map_or(self.cursor, |g| self.cursor + g.len())
    }

    fn word_start_before(&self) -> usize {
        let mut graphemes: Vec<(usize, &str)> =
            self.value[..self.cursor].grapheme_indices(true).collect();
        let mut pos = self.cursor;

        while let Some((idx, g)) = graphemes.last().copied() {
            if !is_whitespace_segment(g) {
                break;
            }
            pos = idx;
            graphemes.pop();
        }

        let punctuation_run = graphemes
            .last()
            .is_some_and(|(_, g)| is_punctuation_segment(g));
        while let Some((idx, g)) = graphemes.last().copied() {
            let same_class = if punctuation_run {
                is_punctuation_segment(g)
            } else {
                !is_whitespace_segment(g) && !is_punctuation_segment(g)
            };
            if !same_class {
                break;
            }
            pos = idx;
            graphemes.pop();
        }
        pos
    }

    fn word_end_after(&self) -> usize {
        let mut pos = self.cursor;
        let mut iter = self.value[self.cursor..].graphemes(true).peekable();

        while let Some(g) = iter.peek() {
            if !is_whitespace_segment(g) {
                break;
            }
            pos += g.len();
            iter.next();
        }

        let punctuation_run = iter.peek().is_some_and(|g| is_punctuation_segment(g));
        for g in iter {
            let same_class = if punctuation_run {
                is_punctuation_segment(g)
            } else {
                !is_whitespace_segment(g) && !is_punctuation_segment(g)
            };
            if !same_class {
                break;
            }
            pos += g.len();
        }
        pos
    }

    /// Prompt, text and a reverse-video cursor cell, exactly `width` columns wide.
    ///
    /// Text wider than the space after the prompt scrolls horizontally to keep the cursor
    /// visible.
    pub fn render(&self, prompt: &str, width: usize) -> String {
        let prompt_width = visible_width(prompt);
        if width <= prompt_width {
            return pad_to_width(prompt, width);
        }
        let available = width - prompt_width;

        let graphemes: Vec<(usize, &str)> = self.value.grapheme_indices(true).collect();
        let cursor_idx = graphemes
            .iter()
            .position(|(idx, _)| *idx >= self.cursor)
            .unwrap_or(graphemes.len());
        let cell_width = |i: usize| graphemes.get(i).map_or(1, |(_, g)| grapheme_width(g).max(1));

        // First visible grapheme: scroll right until the cursor cell fits.
        let mut start = 0;
        let mut used: usize = (0..cursor_idx).map(|i| cell_width(i)).sum::<usize>()
            + cell_width(cursor_idx);
        while used > available && start < cursor_idx {
            used -= cell_width(start);
            start += 1;
        }

        let mut line = prompt.to_string();
        let mut drawn = 0;
        for i in start..=graphemes.len() {
            let w = cell_width(i);
            if drawn + w > available {
                break;
            }
            let text = graphemes.get(i).map_or(" ", |(_, g)| *g);
            if i == cursor_idx {
                line.push_str(CURSOR_ON);
                line.push_str(text);
                line.push_str(CURSOR_OFF);
            } else if i < graphemes.len() {
                line.push_str(text);
            } else {
                break;
            }
            drawn += w;
        }
        line.push_str(&" ".repeat(available.saturating_sub(drawn)));
        line
    }
}

#[cfg(test)]
mod tests {
    use super::LineInput;
    use crate::core::keybindings::Action;
    use crate::core::text::ansi::strip_ansi;
    use crate::core::text::width::visible_width;

    fn typed(text: &str) -> LineInput {
        let mut input = LineInput::new();
        input.insert_text(text);
        input
    }

    #[test]
    fn input_edits_and_moves_cursor() {
        let mut input = typed("hello");
        assert_eq!(input.value(), "hello");
        assert_eq!(input.cursor(), 5);

        input.apply(Action::CursorLeft);
        input.apply(Action::CursorLeft);
        assert_eq!(input.cursor(), 3);

        input.insert_text("p");
        assert_eq!(input.value(), "helplo");
        assert_eq!(input.cursor(), 4);

        input.apply(Action::DeleteCharBackward);
        assert_eq!(input.value(), "hello");
        assert_eq!(input.cursor(), 3);

        input.apply(Action::DeleteCharForward);
        assert_eq!(input.value(), "helo");

        input.apply(Action::CursorLineEnd);
        assert_eq!(input.cursor(), 4);
        input.apply(Action::CursorLineStart);
        assert_eq!(input.cursor(), 0);
    }

    #[test]
    fn cursor_moves_by_grapheme() {
        let mut input = typed("aé🇺🇸");
        input.apply(Action::CursorLeft);
        assert_eq!(input.cursor(), "aé".len());
        input.apply(Action::DeleteCharBackward);
        assert_eq!(input.value(), "a🇺🇸");
    }

    #[test]
    fn delete_word_backward_keeps_trailing_space() {
        let mut input = typed("helloworld there");
        input.apply(Action::DeleteWordBackward);
        assert_eq!(input.value(), "helloworld ");
        assert_eq!(input.cursor(), "helloworld ".len());
    }

    #[test]
    fn word_motion_skips_punctuation_runs() {
        let mut input = typed("foo--bar baz");
        input.apply(Action::CursorWordLeft);
        assert_eq!(input.cursor(), "foo--bar ".len());
        input.apply(Action::CursorWordLeft);
        assert_eq!(input.cursor(), "foo--".len());
        input.apply(Action::CursorWordLeft);
        assert_eq!(input.cursor(), "foo".len());

        input.apply(Action::CursorWordRight);
        assert_eq!(input.cursor(), "foo--".len());
        input.apply(Action::CursorWordRight);
        assert_eq!(input.cursor(), "foo--bar".len());
    }

    #[test]
    fn kill_to_line_start_and_end() {
        let mut input = typed("one two");
        input.apply(Action::CursorWordLeft);
        input.apply(Action::DeleteToLineEnd);
        assert_eq!(input.value(), "one ");
        input.apply(Action::DeleteToLineStart);
        assert_eq!(input.value(), "");
        assert_eq!(input.cursor(), 0);
    }

    #[test]
    fn scroll_actions_are_not_handled() {
        let mut input = typed("abc");
        assert!(!input.apply(Action::ScrollUp));
        assert!(!input.apply(Action::PageDown));
        assert_eq!(input.cursor(), 3);
    }

    #[test]
    fn control_characters_are_not_inserted() {
        let input = typed("a\x1bb\tc");
        assert_eq!(input.value(), "abc");
    }

    #[test]
    fn render_has_prompt_and_cursor_cell() {
        let input = typed("hi");
        let line = input.render("> ", 10);
        assert_eq!(line, "> hi\x1b[7m \x1b[27m     ");
        assert_eq!(visible_width(&line), 10);
    }

    #[test]
    fn render_scrolls_to_keep_cursor_visible() {
        let input = typed("abcdefghij");
        let line = input.render("> ", 8);
        assert_eq!(visible_width(&line), 8);
        assert_eq!(strip_ansi(&line), "> fghij ");

        let mut input = input;
        input.apply(Action::CursorLineStart);
        assert_eq!(strip_ansi(&input.render("> ", 8)), "> abcdef");
    }
}
