//! Interactive loop: terminal events in, frames out.

use std::io::Write;

use anyhow::{Context, Result};
use journey_tui::{Terminal, TUI};
use tracing::debug;

use crate::render::render;
use crate::session::SessionController;
use crate::style::RenderStyle;
use crate::view::ContentView;

/// Run the session until it terminates. The terminal is restored on every exit path,
/// including a failed journal write.
pub fn run_interactive<T: Terminal, V: ContentView, W: Write>(
    tui: &mut TUI<T>,
    session: &mut SessionController<V, W>,
    style: &RenderStyle,
) -> Result<()> {
    tui.start().context("starting terminal session")?;
    let outcome = drive(tui, session, style);
    let restored = tui.stop().context("restoring terminal");
    outcome.and(restored)
}

fn drive<T: Terminal, V: ContentView, W: Write>(
    tui: &mut TUI<T>,
    session: &mut SessionController<V, W>,
    style: &RenderStyle,
) -> Result<()> {
    tui.draw(render(session, style)).context("painting frame")?;

    while !session.is_terminated() {
        let events = tui.next_events();
        if events.is_empty() && tui.is_stopped() {
            break;
        }
        debug!(count = events.len(), "input batch");

        for event in &events {
            session
                .handle_event(event)
                .context("writing journal entry")?;
            if session.is_terminated() {
                break;
            }
        }
        if session.is_terminated() {
            break;
        }
        tui.draw(render(session, style)).context("painting frame")?;
    }
    Ok(())
}
