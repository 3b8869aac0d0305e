//! Terminal trait and the event channel terminals feed.

use std::io;
use std::sync::Arc;

/// Raw notification from a terminal backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TerminalEvent {
    /// One complete input sequence (a key, a character, or a bracketed paste).
    Input(String),
    /// The window size changed; query `columns()`/`rows()` for the new size.
    Resize,
    /// SIGINT/SIGTERM or an equivalent request to stop.
    Interrupt,
}

/// Receiver for terminal events. Implementations must be callable from helper threads.
pub trait EventSink: Send + Sync {
    fn push(&self, event: TerminalEvent);
}

/// Minimal terminal interface used by the runtime.
pub trait Terminal {
    /// Enter raw mode and begin delivering events to `events`.
    ///
    /// Backends should deliver an initial [`TerminalEvent::Resize`] once started so callers
    /// learn the starting dimensions through the same channel as later changes.
    fn start(&mut self, events: Arc<dyn EventSink>) -> io::Result<()>;

    /// Stop delivering events and restore the terminal mode.
    fn stop(&mut self) -> io::Result<()>;

    /// Swallow pending input for up to `max_ms`, returning early after `idle_ms` of quiet.
    fn drain_input(&mut self, max_ms: u64, idle_ms: u64);

    /// Write output to the terminal.
    fn write(&mut self, data: &str) -> io::Result<()>;

    /// Terminal dimensions.
    fn columns(&self) -> u16;
    fn rows(&self) -> u16;
}
