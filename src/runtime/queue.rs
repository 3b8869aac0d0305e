//! FIFO of terminal events shared between helper threads and the main loop.

use std::collections::VecDeque;
use std::sync::{Condvar, Mutex, MutexGuard};

use crate::core::terminal::{EventSink, TerminalEvent};

#[derive(Default)]
struct QueueState {
    events: VecDeque<TerminalEvent>,
    stop_requested: bool,
}

/// Ordered event queue. Producers push from any thread; one consumer waits on it.
#[derive(Default)]
pub struct EventQueue {
    state: Mutex<QueueState>,
    cvar: Condvar,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, QueueState> {
        match self.state.lock() {
            Ok(state) => state,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    /// Block until at least one event is queued, then take every queued event in order.
    ///
    /// Returns an empty batch once a stop has been requested.
    pub fn wait(&self) -> Vec<TerminalEvent> {
        let mut state = self.lock();
        while !state.stop_requested && state.events.is_empty() {
            state = self
                .cvar
                .wait(state)
                .unwrap_or_else(|poisoned| poisoned.into_inner());
        }
        if state.stop_requested {
            return Vec::new();
        }
        state.events.drain(..).collect()
    }

    pub fn request_stop(&self) {
        let mut state = self.lock();
        state.stop_requested = true;
        self.cvar.notify_all();
    }

    pub fn is_stop_requested(&self) -> bool {
        self.lock().stop_requested
    }

    pub fn reset(&self) {
        let mut state = self.lock();
        state.stop_requested = false;
        state.events.clear();
    }
}

impl EventSink for EventQueue {
    fn push(&self, event: TerminalEvent) {
        let mut state = self.lock();
        state.events.push_back(event);
        self.cvar.notify_one();
    }
}
