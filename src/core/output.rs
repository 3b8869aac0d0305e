//! Typed terminal output commands and a single output gate.
//!
//! Invariant: all terminal writes must flow through `OutputGate::flush(..)`.

use std::io;

use crate::core::terminal::Terminal;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TerminalCmd {
    /// Raw bytes/control sequences (UTF-8 string) to be written to the terminal.
    Bytes(String),
    /// Static raw bytes/control sequences (UTF-8 string) to be written to the terminal.
    BytesStatic(&'static str),

    /// Cursor visibility.
    HideCursor,
    ShowCursor,

    /// Protocol toggles.
    BracketedPasteEnable,
    BracketedPasteDisable,
    EnterAltScreen,
    LeaveAltScreen,

    /// Clear the whole screen and home the cursor.
    ClearScreen,
    /// Move the cursor to a zero-based cell.
    MoveTo { row: u16, col: u16 },
    /// Clear from the cursor to the end of the line.
    ClearLine,
}

impl TerminalCmd {
    pub fn bytes(data: impl Into<String>) -> Self {
        Self::Bytes(data.into())
    }

    fn encode_into(&self, out: &mut String) {
        match self {
            TerminalCmd::Bytes(data) => out.push_str(data),
            TerminalCmd::BytesStatic(data) => out.push_str(data),
            TerminalCmd::HideCursor => out.push_str("\x1b[?25l"),
            TerminalCmd::ShowCursor => out.push_str("\x1b[?25h"),
            TerminalCmd::BracketedPasteEnable => out.push_str("\x1b[?2004h"),
            TerminalCmd::BracketedPasteDisable => out.push_str("\x1b[?2004l"),
            TerminalCmd::EnterAltScreen => out.push_str("\x1b[?1049h"),
            TerminalCmd::LeaveAltScreen => out.push_str("\x1b[?1049l"),
            TerminalCmd::ClearScreen => out.push_str("\x1b[2J\x1b[H"),
            TerminalCmd::MoveTo { row, col } => {
                out.push_str(&format!("\x1b[{};{}H", row + 1, col + 1));
            }
            TerminalCmd::ClearLine => out.push_str("\x1b[K"),
        }
    }
}

#[derive(Debug, Default)]
pub struct OutputGate {
    cmds: Vec<TerminalCmd>,
}

impl OutputGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, cmd: TerminalCmd) {
        self.cmds.push(cmd);
    }

    pub fn extend<I>(&mut self, cmds: I)
    where
        I: IntoIterator<Item = TerminalCmd>,
    {
        self.cmds.extend(cmds);
    }

    pub fn is_empty(&self) -> bool {
        self.cmds.is_empty()
    }

    pub fn clear(&mut self) {
        self.cmds.clear();
    }

    /// Encode buffered commands without writing them.
    pub fn encode(&self) -> String {
        let mut out = String::new();
        for cmd in &self.cmds {
            cmd.encode_into(&mut out);
        }
        out
    }

    /// Flush buffered commands to the terminal as a single write.
    ///
    /// This is the single write gate: `Terminal::write(..)` must not be called
    /// from anywhere else. Commands are dropped even when the write fails.
    pub fn flush<T: Terminal + ?Sized>(&mut self, term: &mut T) -> io::Result<()> {
        if self.cmds.is_empty() {
            return Ok(());
        }
        let data = self.encode();
        self.cmds.clear();
        term.write(&data)
    }
}
