mod support;

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use journal_store::{FixedClock, Journal};
use journey::app::run_interactive;
use journey::session::SessionController;
use journey::style::RenderStyle;
use journey::view::{ContentView, ListView, ScrollView};
use journey_tui::{TerminalEvent, TUI};
use support::{lock_unpoisoned, rendered_output, SharedTerminal};
use tempfile::tempdir;
use time::macros::datetime;

const CLOCK: FixedClock = FixedClock(datetime!(2024-05-06 07:08 UTC));

fn run_session<V: ContentView, W: Write>(
    terminal: SharedTerminal,
    session: &mut SessionController<V, W>,
) -> anyhow::Result<()> {
    let mut tui = TUI::new(terminal);
    run_interactive(&mut tui, session, &RenderStyle::default())
}

fn scroll_session(path: &Path) -> SessionController<ScrollView> {
    let journal = Journal::open(path).expect("open journal");
    SessionController::new(journal, ScrollView::new(4), Box::new(CLOCK))
}

#[test]
fn fresh_file_gets_created_and_appended() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("nested").join("days").join("j.jrnl");
    let mut session = scroll_session(&path);

    let (terminal, trace) = SharedTerminal::new(80, 20);
    let terminal = terminal.scripted(&["first note", "\r", "\x03"]);
    run_session(terminal, &mut session).expect("session runs");

    assert_eq!(
        fs::read_to_string(&path).expect("journal written"),
        "2024/05/06 07:08-first note\n"
    );
    assert!(session.is_terminated());

    let output = rendered_output(&trace);
    assert!(output.starts_with("\x1b[?1049h"));
    assert!(output.contains("2024/05/06 07:08-first note"));
    assert!(output.contains("100%"));
    assert!(output.ends_with("\x1b[?1049l"));

    let trace = lock_unpoisoned(&trace);
    assert_eq!(trace.start_calls, 1);
    assert_eq!(trace.stop_calls, 1);
    assert_eq!(trace.drain_calls, vec![(1000, 50)]);
}

#[test]
fn existing_entries_are_shown_and_kept() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("j.jrnl");
    let original = "2023/01/01 10:00-old entry\nstray line\n2023/01/02 11:00-well-known\n";
    fs::write(&path, original).expect("seed journal");

    let mut session = scroll_session(&path);
    assert_eq!(session.journal().len(), 2);

    let (terminal, trace) = SharedTerminal::new(80, 20);
    run_session(terminal.scripted(&["\x03"]), &mut session).expect("session runs");

    assert_eq!(fs::read_to_string(&path).expect("read"), original);
    let output = rendered_output(&trace);
    assert!(output.contains("2023/01/01 10:00-old entry"));
    assert!(output.contains("2023/01/02 11:00-well-known"));
    assert!(!output.contains("stray line"));
}

#[test]
fn quitting_with_a_draft_writes_nothing() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("j.jrnl");
    let mut session = scroll_session(&path);

    let (terminal, _trace) = SharedTerminal::new(80, 20);
    run_session(terminal.scripted(&["never saved", "\x03", "\r"]), &mut session)
        .expect("session runs");

    assert_eq!(fs::read_to_string(&path).expect("read"), "");
    assert_eq!(session.draft(), "never saved");
}

#[test]
fn interrupt_signal_ends_the_session() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("j.jrnl");
    let mut session = scroll_session(&path);

    let (terminal, trace) = SharedTerminal::new(80, 20);
    let terminal = terminal
        .scripted(&["typed"])
        .then(TerminalEvent::Interrupt)
        .then(TerminalEvent::Input("\r".to_string()));
    run_session(terminal, &mut session).expect("session runs");

    assert!(session.is_terminated());
    assert_eq!(fs::read_to_string(&path).expect("read"), "");
    assert_eq!(lock_unpoisoned(&trace).stop_calls, 1);
}

#[test]
fn pasted_text_becomes_one_entry() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("j.jrnl");
    let mut session = scroll_session(&path);

    let (terminal, _trace) = SharedTerminal::new(80, 20);
    let terminal = terminal.scripted(&["\x1b[200~two\nlines\x1b[201~", "\r", "\x03"]);
    run_session(terminal, &mut session).expect("session runs");

    assert_eq!(
        fs::read_to_string(&path).expect("read"),
        "2024/05/06 07:08-two lines\n"
    );
}

#[test]
fn list_view_selects_each_new_entry() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("j.jrnl");
    fs::write(&path, "2023/01/01 10:00-old\n").expect("seed journal");
    let journal = Journal::open(&path).expect("open journal");
    let mut session = SessionController::new(journal, ListView::new(), Box::new(CLOCK));

    let (terminal, trace) = SharedTerminal::new(60, 20);
    let terminal = terminal.scripted(&["one", "\r", "two", "\r", "\x03"]);
    run_session(terminal, &mut session).expect("session runs");

    let list = session.view().list();
    assert_eq!(list.len(), 3);
    assert_eq!(list.selected_index(), 2);
    assert_eq!(list.selected_item().map(|item| item.title.as_str()), Some("two"));
    assert!(rendered_output(&trace).contains("2024/05/06 07:08"));
}

struct BrokenDisk;

impl Write for BrokenDisk {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::other("disk full"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn write_failure_is_fatal_and_restores_the_terminal() {
    let journal = Journal::from_parts("broken.jrnl", BrokenDisk, Vec::new());
    let mut session = SessionController::new(journal, ScrollView::new(4), Box::new(CLOCK));

    let (terminal, trace) = SharedTerminal::new(80, 20);
    let terminal = terminal.scripted(&["lost", "\r", "\x03"]);
    let err = run_session(terminal, &mut session).expect_err("write fails");

    assert!(format!("{err:#}").contains("disk full"));
    assert!(session.journal().is_empty());
    assert_eq!(lock_unpoisoned(&trace).stop_calls, 1);
    assert!(rendered_output(&trace).ends_with("\x1b[?1049l"));
}
