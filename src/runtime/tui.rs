//! TUI runtime: owns the terminal, turns terminal notifications into [`InputEvent`]s and paints
//! frames through the output gate.

use std::io;
use std::sync::Arc;

use crate::core::input_event::{parse_input_events, InputEvent};
use crate::core::output::{OutputGate, TerminalCmd};
use crate::core::terminal::{EventSink, Terminal, TerminalEvent};
use crate::render::{Frame, ScreenRenderer};
use crate::runtime::queue::EventQueue;

const STOP_DRAIN_MAX_MS: u64 = 1000;
const STOP_DRAIN_IDLE_MS: u64 = 50;

pub struct TuiRuntime<T: Terminal> {
    terminal: T,
    queue: Arc<EventQueue>,
    output: OutputGate,
    renderer: ScreenRenderer,
    stopped: bool,
}

impl<T: Terminal> TuiRuntime<T> {
    pub fn new(terminal: T) -> Self {
        Self {
            terminal,
            queue: Arc::new(EventQueue::new()),
            output: OutputGate::new(),
            renderer: ScreenRenderer::new(),
            stopped: true,
        }
    }

    /// Put the terminal into raw mode on the alternate screen and begin receiving events.
    pub fn start(&mut self) -> io::Result<()> {
        self.output.clear();
        self.queue.reset();
        self.renderer.reset();

        let sink: Arc<dyn EventSink> = Arc::clone(&self.queue) as Arc<dyn EventSink>;
        self.terminal.start(sink)?;
        self.stopped = false;

        self.output.push(TerminalCmd::EnterAltScreen);
        self.output.push(TerminalCmd::HideCursor);
        self.output.push(TerminalCmd::BracketedPasteEnable);
        self.output.flush(&mut self.terminal)
    }

    /// Restore the terminal. Safe to call more than once.
    pub fn stop(&mut self) -> io::Result<()> {
        if self.stopped {
            return Ok(());
        }
        self.stopped = true;
        self.queue.request_stop();

        self.output.push(TerminalCmd::BracketedPasteDisable);
        self.output.push(TerminalCmd::ShowCursor);
        self.output.push(TerminalCmd::LeaveAltScreen);
        let flushed = self.output.flush(&mut self.terminal);

        self.terminal
            .drain_input(STOP_DRAIN_MAX_MS, STOP_DRAIN_IDLE_MS);
        let stopped = self.terminal.stop();
        self.renderer.reset();
        flushed.and(stopped)
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    /// Block until the terminal reports something, then return it as input events in arrival
    /// order. Returns an empty batch once stopped.
    pub fn next_events(&mut self) -> Vec<InputEvent> {
        if self.stopped {
            return Vec::new();
        }
        let batch = self.queue.wait();
        self.translate(batch)
    }

    fn translate(&self, batch: Vec<TerminalEvent>) -> Vec<InputEvent> {
        let mut events = Vec::new();
        for event in batch {
            match event {
                TerminalEvent::Input(data) => events.extend(parse_input_events(&data)),
                TerminalEvent::Resize => events.push(InputEvent::Resize {
                    columns: self.terminal.columns(),
                    rows: self.terminal.rows(),
                }),
                TerminalEvent::Interrupt => events.push(InputEvent::Interrupt),
            }
        }
        events
    }

    /// Paint `frame`, rewriting only rows that changed since the previous paint.
    pub fn draw(&mut self, frame: Frame) -> io::Result<()> {
        let width = self.terminal.columns() as usize;
        let height = self.terminal.rows() as usize;
        let cmds = self.renderer.render(frame, width, height);
        self.output.extend(cmds);
        self.output.flush(&mut self.terminal)
    }

    /// Sink that feeds this runtime's queue, for injecting events.
    pub fn event_sink(&self) -> Arc<dyn EventSink> {
        Arc::clone(&self.queue) as Arc<dyn EventSink>
    }

    pub fn columns(&self) -> u16 {
        self.terminal.columns()
    }

    pub fn rows(&self) -> u16 {
        self.terminal.rows()
    }
}

impl<T: Terminal> Drop for TuiRuntime<T> {
    fn drop(&mut self) {
        if self.stopped {
            return;
        }

        // Best-effort cleanup: never panic in Drop (especially during unwind).
        let _ = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _ = self.stop();
        }));
    }
}
