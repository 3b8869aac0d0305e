//! Session controller: turns input events into journal appends and view updates.

use std::fs::File;
use std::io::Write;

use journal_store::{render_content, single_line, Clock, Journal, JournalError};
use journey_tui::{Action, InputEvent, Keybindings, LineInput};
use tracing::{debug, info};

use crate::view::ContentView;

/// Rows taken by the title box above the body.
pub const HEADER_HEIGHT: usize = 3;
/// Rows taken by the info box and input line below the body.
pub const FOOTER_HEIGHT: usize = 4;

/// Actions dropped once the first size is known; only line-wise scrolling stays.
const PAGED_SCROLL: [Action; 4] = [
    Action::HalfPageUp,
    Action::HalfPageDown,
    Action::PageUp,
    Action::PageDown,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// No size reported yet.
    Uninitialized,
    Ready,
    /// Quit requested. Terminal state; later events are ignored.
    Terminated,
}

pub struct SessionController<V: ContentView, W: Write = File> {
    journal: Journal<W>,
    clock: Box<dyn Clock>,
    keybindings: Keybindings,
    input: LineInput,
    view: V,
    state: SessionState,
    rendered_content: String,
    width: usize,
    height: usize,
}

impl<V: ContentView, W: Write> SessionController<V, W> {
    pub fn new(journal: Journal<W>, view: V, clock: Box<dyn Clock>) -> Self {
        let rendered_content = render_content(journal.entries());
        Self {
            journal,
            clock,
            keybindings: Keybindings::default(),
            input: LineInput::new(),
            view,
            state: SessionState::Uninitialized,
            rendered_content,
            width: 0,
            height: 0,
        }
    }

    pub fn with_keybindings(mut self, keybindings: Keybindings) -> Self {
        self.keybindings = keybindings;
        self
    }

    /// Apply one event. A journal write failure is returned and is fatal for the session.
    pub fn handle_event(&mut self, event: &InputEvent) -> Result<(), JournalError> {
        if self.state == SessionState::Terminated {
            return Ok(());
        }

        match event {
            InputEvent::Interrupt => self.terminate("interrupt"),
            InputEvent::Key { key_id, .. } => match self.keybindings.action_for(key_id) {
                Some(Action::Quit) => self.terminate("quit key"),
                Some(Action::Submit) => self.submit()?,
                Some(action) if action.is_scroll() => {
                    if self.state == SessionState::Ready {
                        self.view.scroll(action);
                    }
                }
                Some(action) => {
                    self.input.apply(action);
                }
                None => {}
            },
            InputEvent::Text { text, .. } => self.input.insert_text(text),
            InputEvent::Paste { text, .. } => self.input.insert_text(&single_line(text)),
            InputEvent::Resize { columns, rows } => {
                self.resize(usize::from(*columns), usize::from(*rows));
            }
            InputEvent::UnknownRaw { .. } => {}
        }
        Ok(())
    }

    fn terminate(&mut self, reason: &str) {
        info!(reason, "session terminated");
        self.state = SessionState::Terminated;
    }

    fn submit(&mut self) -> Result<(), JournalError> {
        if self.input.is_empty() {
            return Ok(());
        }

        let entry = self.journal.record(self.input.value(), self.clock.as_ref())?;
        debug!(timestamp = %entry.timestamp, entries = self.journal.len(), "entry submitted");
        self.input.clear();
        self.rendered_content.push_str(&entry.to_line());
        self.view.reload(self.journal.entries(), &self.rendered_content);
        self.view.goto_bottom();
        Ok(())
    }

    fn resize(&mut self, width: usize, height: usize) {
        debug!(width, height, "resize");
        self.width = width;
        self.height = height;
        let body_height = height.saturating_sub(HEADER_HEIGHT + FOOTER_HEIGHT);

        match self.state {
            SessionState::Uninitialized => {
                self.view.set_size(width, body_height);
                self.view.set_y_position(HEADER_HEIGHT);
                self.view.reload(self.journal.entries(), &self.rendered_content);
                for action in PAGED_SCROLL {
                    self.keybindings.set_enabled(action, false);
                }
                self.view.goto_bottom();
                self.state = SessionState::Ready;
            }
            SessionState::Ready => self.view.set_size(width, body_height),
            SessionState::Terminated => {}
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_ready(&self) -> bool {
        self.state == SessionState::Ready
    }

    pub fn is_terminated(&self) -> bool {
        self.state == SessionState::Terminated
    }

    pub fn draft(&self) -> &str {
        self.input.value()
    }

    pub fn input(&self) -> &LineInput {
        &self.input
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn journal(&self) -> &Journal<W> {
        &self.journal
    }

    pub fn keybindings(&self) -> &Keybindings {
        &self.keybindings
    }

    /// All entries in on-disk form, as loaded plus every append since.
    pub fn rendered_content(&self) -> &str {
        &self.rendered_content
    }

    /// Last reported terminal size as `(width, height)`.
    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Name shown in the header.
    pub fn title(&self) -> String {
        self.journal.path().display().to_string()
    }
}
