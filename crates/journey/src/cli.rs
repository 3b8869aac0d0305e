//! Command-line surface and the two non-interactive modes.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};
use journal_store::{Clock, Journal, JournalEntry, JournalError, DEFAULT_JOURNAL_FILE};
use tracing::{debug, info};

pub const DEFAULT_LOG_FILE: &str = "journey.log";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ViewKind {
    /// Word-wrapped journal text in a scrolling viewport.
    Scroll,
    /// One selectable item per entry.
    List,
}

#[derive(Debug, Parser)]
#[command(name = "journey", version, about = "Append-only journal for the terminal")]
pub struct Args {
    /// Journal file, created with its directories when missing.
    #[arg(value_name = "PATH", default_value = DEFAULT_JOURNAL_FILE)]
    pub path: PathBuf,

    /// Print the journal and exit.
    #[arg(short = 'l', conflicts_with = "append")]
    pub list: bool,

    /// Append one entry stamped now and exit.
    #[arg(short = 'a', value_name = "TEXT", allow_hyphen_values = true)]
    pub append: Option<String>,

    /// Content view for the interactive session.
    #[arg(long, value_enum, default_value_t = ViewKind::Scroll)]
    pub view: ViewKind,

    /// Diagnostic log location.
    #[arg(long, value_name = "PATH", default_value = DEFAULT_LOG_FILE)]
    pub log_file: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Print,
    Append(String),
    Interactive(ViewKind),
}

impl Args {
    pub fn mode(&self) -> Mode {
        if self.list {
            Mode::Print
        } else if let Some(text) = &self.append {
            Mode::Append(text.clone())
        } else {
            Mode::Interactive(self.view)
        }
    }
}

/// Copies the journal file to `out` byte for byte, lines that do not parse included.
pub fn print_journal(path: &Path, out: &mut impl Write) -> io::Result<()> {
    let content = fs::read(path)?;
    out.write_all(&content)?;
    out.flush()
}

/// Records `text` as one entry. Empty text appends nothing.
pub fn append_once<W: Write>(
    journal: &mut Journal<W>,
    text: &str,
    clock: &dyn Clock,
) -> Result<Option<JournalEntry>, JournalError> {
    if text.is_empty() {
        debug!("empty append text, nothing recorded");
        return Ok(None);
    }
    let entry = journal.record(text, clock)?;
    info!(timestamp = %entry.timestamp, "entry appended");
    Ok(Some(entry))
}
