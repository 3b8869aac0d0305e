//! Selectable list of two-line items.

use crate::core::text::ansi::styled;
use crate::core::text::width::pad_to_width;

const SELECTED_MARKER: &str = "│ ";
const UNSELECTED_MARKER: &str = "  ";
const DIM: &str = "2";
const BOLD: &str = "1";

/// Rows one item occupies: title, description, spacer.
pub const ITEM_HEIGHT: usize = 3;

/// One list entry. Title and description are drawn as one row each, so both are expected
/// to be single-line text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListItem {
    pub title: String,
    pub description: String,
}

impl ListItem {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}

/// List with a single selection. The visible page follows the selection.
#[derive(Debug, Clone, Default)]
pub struct ItemList {
    items: Vec<ListItem>,
    selected: usize,
    offset: usize,
    width: usize,
    height: usize,
}

impl ItemList {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    pub fn set_size(&mut self, width: usize, height: usize) {
        self.width = width;
        self.height = height;
        self.follow_selection();
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn set_items(&mut self, items: Vec<ListItem>) {
        self.items = items;
        self.select(self.selected);
    }

    pub fn items(&self) -> &[ListItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn selected_item(&self) -> Option<&ListItem> {
        self.items.get(self.selected)
    }

    pub fn select(&mut self, index: usize) {
        self.selected = index.min(self.items.len().saturating_sub(1));
        self.follow_selection();
    }

    pub fn items_per_page(&self) -> usize {
        (self.height / ITEM_HEIGHT).max(1)
    }

    /// Index of the first item on the visible page.
    pub fn offset(&self) -> usize {
        self.offset
    }

    fn follow_selection(&mut self) {
        let per_page = self.items_per_page();
        if self.selected < self.offset {
            self.offset = self.selected;
        } else if self.selected >= self.offset + per_page {
            self.offset = self.selected + 1 - per_page;
        }
        let max_offset = self.items.len().saturating_sub(per_page);
        self.offset = self.offset.min(max_offset);
    }

    pub fn cursor_up(&mut self) {
        self.select(self.selected.saturating_sub(1));
    }

    pub fn cursor_down(&mut self) {
        self.select(self.selected.saturating_add(1));
    }

    pub fn page_up(&mut self) {
        self.select(self.selected.saturating_sub(self.items_per_page()));
    }

    pub fn page_down(&mut self) {
        self.select(self.selected.saturating_add(self.items_per_page()));
    }

    pub fn goto_top(&mut self) {
        self.select(0);
    }

    pub fn goto_bottom(&mut self) {
        self.select(self.items.len().saturating_sub(1));
    }

    /// Selection position as a fraction in `0.0..=1.0`; `1.0` with fewer than two items.
    pub fn scroll_percent(&self) -> f64 {
        if self.items.len() < 2 {
            return 1.0;
        }
        self.selected as f64 / (self.items.len() - 1) as f64
    }

    /// Exactly `height` rows of `width` columns.
    pub fn view(&self) -> Vec<String> {
        let mut rows = Vec::with_capacity(self.height);
        let end = (self.offset + self.items_per_page()).min(self.items.len());
        for (index, item) in self.items[self.offset.min(end)..end].iter().enumerate() {
            let index = self.offset + index;
            let marker = if index == self.selected {
                SELECTED_MARKER
            } else {
                UNSELECTED_MARKER
            };
            let title = if index == self.selected {
                styled(BOLD, &item.title)
            } else {
                item.title.clone()
            };

            rows.push(pad_to_width(&format!("{marker}{title}"), self.width));
            rows.push(pad_to_width(
                &format!("{marker}{}", styled(DIM, &item.description)),
                self.width,
            ));
            rows.push(" ".repeat(self.width));
        }
        rows.truncate(self.height);
        rows.resize(self.height, " ".repeat(self.width));
        rows
    }
}
