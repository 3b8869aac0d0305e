use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum JournalError {
    #[error("I/O error while {operation} at {path}: {source}")]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("short write to {path}: wrote {written} of {expected} bytes")]
    ShortWrite {
        path: PathBuf,
        written: usize,
        expected: usize,
    },

    #[error("failed to format entry timestamp: {0}")]
    ClockFormat(#[source] time::error::Format),
}

impl JournalError {
    #[must_use]
    pub fn io(operation: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            operation,
            path: path.into(),
            source,
        }
    }

    #[must_use]
    pub fn short_write(path: impl Into<PathBuf>, written: usize, expected: usize) -> Self {
        Self::ShortWrite {
            path: path.into(),
            written,
            expected,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::JournalError;

    #[test]
    fn io_error_message_names_operation_and_path() {
        let error = JournalError::io(
            "creating journal file",
            "/tmp/journal.jrnl",
            std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        );
        let message = error.to_string();
        assert!(message.contains("creating journal file"));
        assert!(message.contains("/tmp/journal.jrnl"));
    }

    #[test]
    fn short_write_reports_byte_counts() {
        let error = JournalError::short_write("j.jrnl", 3, 24);
        assert_eq!(error.to_string(), "short write to j.jrnl: wrote 3 of 24 bytes");
    }
}
