//! Vertical window over a larger set of lines.

use crate::core::text::width::pad_to_width;

/// Scrollable view of `lines`, `height` rows tall.
///
/// `y_offset` is the index of the first visible line and is always within
/// `0..=max_y_offset()`. `y_position` is the screen row the viewport is drawn at; it is layout
/// information only and does not affect scrolling.
#[derive(Debug, Clone, Default)]
pub struct Viewport {
    width: usize,
    height: usize,
    y_offset: usize,
    y_position: usize,
    lines: Vec<String>,
}

impl Viewport {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn y_offset(&self) -> usize {
        self.y_offset
    }

    pub fn y_position(&self) -> usize {
        self.y_position
    }

    pub fn set_y_position(&mut self, row: usize) {
        self.y_position = row;
    }

    pub fn set_size(&mut self, width: usize, height: usize) {
        self.width = width;
        self.height = height;
        self.clamp_offset();
    }

    /// Replace the content with the lines of `content`. One trailing newline is ignored.
    pub fn set_content(&mut self, content: &str) {
        let content = content.strip_suffix('\n').unwrap_or(content);
        let lines = if content.is_empty() {
            Vec::new()
        } else {
            content.split('\n').map(str::to_string).collect()
        };
        self.set_lines(lines);
    }

    pub fn set_lines(&mut self, lines: Vec<String>) {
        self.lines = lines;
        self.clamp_offset();
    }

    pub fn total_lines(&self) -> usize {
        self.lines.len()
    }

    pub fn max_y_offset(&self) -> usize {
        self.lines.len().saturating_sub(self.height)
    }

    fn clamp_offset(&mut self) {
        self.y_offset = self.y_offset.min(self.max_y_offset());
    }

    pub fn set_y_offset(&mut self, offset: usize) {
        self.y_offset = offset.min(self.max_y_offset());
    }

    pub fn at_top(&self) -> bool {
        self.y_offset == 0
    }

    pub fn at_bottom(&self) -> bool {
        self.y_offset >= self.max_y_offset()
    }

    pub fn line_up(&mut self, n: usize) {
        self.set_y_offset(self.y_offset.saturating_sub(n));
    }

    pub fn line_down(&mut self, n: usize) {
        self.set_y_offset(self.y_offset.saturating_add(n));
    }

    pub fn half_view_up(&mut self) {
        self.line_up((self.height / 2).max(1));
    }

    pub fn half_view_down(&mut self) {
        self.line_down((self.height / 2).max(1));
    }

    pub fn view_up(&mut self) {
        self.line_up(self.height.max(1));
    }

    pub fn view_down(&mut self) {
        self.line_down(self.height.max(1));
    }

    pub fn goto_top(&mut self) {
        self.y_offset = 0;
    }

    pub fn goto_bottom(&mut self) {
        self.y_offset = self.max_y_offset();
    }

    /// Position of the window as a fraction in `0.0..=1.0`; `1.0` when everything fits.
    pub fn scroll_percent(&self) -> f64 {
        if self.height >= self.lines.len() {
            return 1.0;
        }
        let max = self.max_y_offset() as f64;
        (self.y_offset as f64 / max).clamp(0.0, 1.0)
    }

    pub fn visible_lines(&self) -> &[String] {
        let end = (self.y_offset + self.height).min(self.lines.len());
        &self.lines[self.y_offset.min(end)..end]
    }

    /// Exactly `height` rows, each padded or clipped to `width`.
    pub fn view(&self) -> Vec<String> {
        let mut rows: Vec<String> = self
            .visible_lines()
            .iter()
            .map(|line| pad_to_width(line, self.width))
            .collect();
        rows.resize(self.height, " ".repeat(self.width));
        rows
    }
}
