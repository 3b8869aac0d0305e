use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};

use journey_tui::{EventSink, Terminal, TerminalEvent};

/// Start of a synchronized update; every painted frame begins with it.
const FRAME_START: &str = "\x1b[?2026h";

#[derive(Default)]
pub struct TerminalTrace {
    pub writes: Vec<String>,
    pub start_calls: usize,
    pub stop_calls: usize,
    pub drain_calls: Vec<(u64, u64)>,
    pub sink: Option<Arc<dyn EventSink>>,
}

/// In-memory terminal that replays a script one event per painted frame, so every event's
/// effect reaches the screen before the next event arrives.
///
/// The script always opens with a resize. A step that leaves the screen unchanged paints
/// nothing and stalls the script, so end every script with a quit.
pub struct SharedTerminal {
    state: Arc<Mutex<TerminalTrace>>,
    script: VecDeque<TerminalEvent>,
    columns: u16,
    rows: u16,
}

impl SharedTerminal {
    pub fn new(columns: u16, rows: u16) -> (Self, Arc<Mutex<TerminalTrace>>) {
        let state = Arc::new(Mutex::new(TerminalTrace::default()));
        (
            Self {
                state: Arc::clone(&state),
                script: VecDeque::from([TerminalEvent::Resize]),
                columns,
                rows,
            },
            state,
        )
    }

    /// Raw input sequences, each delivered as its own event.
    pub fn scripted(mut self, inputs: &[&str]) -> Self {
        self.script.extend(
            inputs
                .iter()
                .map(|data| TerminalEvent::Input((*data).to_string())),
        );
        self
    }

    pub fn then(mut self, event: TerminalEvent) -> Self {
        self.script.push_back(event);
        self
    }
}

impl Terminal for SharedTerminal {
    fn start(&mut self, events: Arc<dyn EventSink>) -> std::io::Result<()> {
        let mut state = lock_unpoisoned(&self.state);
        state.start_calls += 1;
        state.sink = Some(events);
        Ok(())
    }

    fn stop(&mut self) -> std::io::Result<()> {
        let mut state = lock_unpoisoned(&self.state);
        state.stop_calls += 1;
        state.sink = None;
        Ok(())
    }

    fn drain_input(&mut self, max_ms: u64, idle_ms: u64) {
        let mut state = lock_unpoisoned(&self.state);
        state.drain_calls.push((max_ms, idle_ms));
    }

    fn write(&mut self, data: &str) -> std::io::Result<()> {
        let mut state = lock_unpoisoned(&self.state);
        state.writes.push(data.to_string());
        if data.starts_with(FRAME_START) {
            if let (Some(sink), Some(event)) = (state.sink.as_ref(), self.script.pop_front()) {
                sink.push(event);
            }
        }
        Ok(())
    }

    fn columns(&self) -> u16 {
        self.columns
    }

    fn rows(&self) -> u16 {
        self.rows
    }
}

pub fn rendered_output(state: &Arc<Mutex<TerminalTrace>>) -> String {
    lock_unpoisoned(state).writes.join("")
}

pub fn lock_unpoisoned<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    match mutex.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}
