use std::fs::{File, OpenOptions};
use std::io::{ErrorKind, Read, Write};
use std::path::{Path, PathBuf};

use crate::clock::{timestamp_now, Clock};
use crate::entry::{parse, single_line, JournalEntry};
use crate::error::JournalError;
use crate::paths::ensure_parent_dir;

/// Append-only journal file plus its parsed entries.
///
/// The writer is held open for the lifetime of the journal; every append goes through it.
/// `entries` is only ever extended after a complete write, so it never runs ahead of the file.
pub struct Journal<W = File> {
    path: PathBuf,
    writer: W,
    entries: Vec<JournalEntry>,
}

impl Journal<File> {
    /// Opens `path` for read+append, creating it (and its directories) when missing.
    pub fn open(path: &Path) -> Result<Self, JournalError> {
        let path = path.to_path_buf();
        match OpenOptions::new().read(true).append(true).open(&path) {
            Ok(mut file) => {
                let mut raw = Vec::new();
                file.read_to_end(&mut raw)
                    .map_err(|source| JournalError::io("reading journal file", &path, source))?;
                let entries = parse(&String::from_utf8_lossy(&raw));
                Ok(Self::from_parts(path, file, entries))
            }
            Err(source) if source.kind() == ErrorKind::NotFound => {
                ensure_parent_dir(&path)?;
                let file = OpenOptions::new()
                    .read(true)
                    .append(true)
                    .create(true)
                    .open(&path)
                    .map_err(|source| JournalError::io("creating journal file", &path, source))?;
                Ok(Self::from_parts(path, file, Vec::new()))
            }
            Err(source) => Err(JournalError::io("opening journal file", &path, source)),
        }
    }
}

impl<W: Write> Journal<W> {
    /// Assembles a journal from an already-open writer and its parsed entries.
    pub fn from_parts(path: impl Into<PathBuf>, writer: W, entries: Vec<JournalEntry>) -> Self {
        Self {
            path: path.into(),
            writer,
            entries,
        }
    }

    /// Writes `entry` with a single write call. A short write is an error and the entry is
    /// not added to memory.
    pub fn append(&mut self, entry: JournalEntry) -> Result<(), JournalError> {
        let line = entry.to_line();
        let expected = line.len();
        let written = loop {
            match self.writer.write(line.as_bytes()) {
                Ok(count) => break count,
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(source) => {
                    return Err(JournalError::io("appending journal entry", &self.path, source));
                }
            }
        };
        if written < expected {
            return Err(JournalError::short_write(&self.path, written, expected));
        }

        self.entries.push(entry);
        Ok(())
    }

    /// Stamps `text` with the current time from `clock` and appends it.
    pub fn record(&mut self, text: &str, clock: &dyn Clock) -> Result<JournalEntry, JournalError> {
        let entry = JournalEntry::new(timestamp_now(clock)?, single_line(text));
        self.append(entry.clone())?;
        Ok(entry)
    }

    #[must_use]
    pub fn entries(&self) -> &[JournalEntry] {
        &self.entries
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn writer(&self) -> &W {
        &self.writer
    }
}
