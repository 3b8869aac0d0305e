//! Content views the session can show between header and footer.

use journal_store::JournalEntry;
use journey_tui::{wrap_text, Action, ItemList, ListItem, Viewport};

/// Body area of the session screen.
pub trait ContentView {
    /// Full terminal width and the rows left for the body.
    fn set_size(&mut self, width: usize, height: usize);

    /// Screen row the body starts at.
    fn set_y_position(&mut self, _row: usize) {}

    /// Replace the shown content. `rendered` is `entries` in on-disk form.
    fn reload(&mut self, entries: &[JournalEntry], rendered: &str);

    /// Apply a scroll action. Returns `false` for actions the view ignores.
    fn scroll(&mut self, action: Action) -> bool;

    fn goto_bottom(&mut self);

    /// Exactly `height` rows.
    fn view(&self) -> Vec<String>;

    fn scroll_percent(&self) -> f64;

    fn height(&self) -> usize;
}

/// Journal text, word-wrapped `margin` columns narrower than the screen.
#[derive(Debug, Clone)]
pub struct ScrollView {
    viewport: Viewport,
    content: String,
    margin: usize,
}

impl ScrollView {
    pub fn new(margin: usize) -> Self {
        Self {
            viewport: Viewport::new(0, 0),
            content: String::new(),
            margin,
        }
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    fn rewrap(&mut self) {
        let wrap_width = self.viewport.width().saturating_sub(self.margin).max(1);
        let content = self.content.strip_suffix('\n').unwrap_or(&self.content);
        let lines = if content.is_empty() {
            Vec::new()
        } else {
            wrap_text(content, wrap_width)
        };
        self.viewport.set_lines(lines);
    }
}

impl ContentView for ScrollView {
    fn set_size(&mut self, width: usize, height: usize) {
        let followed = self.viewport.at_bottom();
        let rewrap = width != self.viewport.width();
        self.viewport.set_size(width, height);
        if rewrap {
            self.rewrap();
        }
        if followed {
            self.viewport.goto_bottom();
        }
    }

    fn set_y_position(&mut self, row: usize) {
        self.viewport.set_y_position(row);
    }

    fn reload(&mut self, _entries: &[JournalEntry], rendered: &str) {
        self.content = rendered.to_string();
        self.rewrap();
    }

    fn scroll(&mut self, action: Action) -> bool {
        match action {
            Action::ScrollUp => self.viewport.line_up(1),
            Action::ScrollDown => self.viewport.line_down(1),
            Action::HalfPageUp => self.viewport.half_view_up(),
            Action::HalfPageDown => self.viewport.half_view_down(),
            Action::PageUp => self.viewport.view_up(),
            Action::PageDown => self.viewport.view_down(),
            _ => return false,
        }
        true
    }

    fn goto_bottom(&mut self) {
        self.viewport.goto_bottom();
    }

    fn view(&self) -> Vec<String> {
        self.viewport.view()
    }

    fn scroll_percent(&self) -> f64 {
        self.viewport.scroll_percent()
    }

    fn height(&self) -> usize {
        self.viewport.height()
    }
}

/// One item per entry: the text as title, the timestamp as description.
#[derive(Debug, Clone, Default)]
pub struct ListView {
    list: ItemList,
}

impl ListView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn list(&self) -> &ItemList {
        &self.list
    }
}

impl ContentView for ListView {
    fn set_size(&mut self, width: usize, height: usize) {
        self.list.set_size(width, height);
    }

    fn reload(&mut self, entries: &[JournalEntry], _rendered: &str) {
        let items = entries
            .iter()
            .map(|entry| ListItem::new(entry.text.clone(), entry.timestamp.clone()))
            .collect();
        self.list.set_items(items);
    }

    fn scroll(&mut self, action: Action) -> bool {
        match action {
            Action::ScrollUp => self.list.cursor_up(),
            Action::ScrollDown => self.list.cursor_down(),
            Action::HalfPageUp | Action::PageUp => self.list.page_up(),
            Action::HalfPageDown | Action::PageDown => self.list.page_down(),
            _ => return false,
        }
        true
    }

    fn goto_bottom(&mut self) {
        self.list.goto_bottom();
    }

    fn view(&self) -> Vec<String> {
        self.list.view()
    }

    fn scroll_percent(&self) -> f64 {
        self.list.scroll_percent()
    }

    fn height(&self) -> usize {
        self.list.height()
    }
}
