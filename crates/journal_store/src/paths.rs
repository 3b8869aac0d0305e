use std::path::{Path, PathBuf};

use crate::error::JournalError;

pub const DEFAULT_JOURNAL_FILE: &str = "journal.jrnl";

/// Creates every missing directory above `path`. A bare file name needs none.
pub fn ensure_parent_dir(path: &Path) -> Result<(), JournalError> {
    let Some(parent) = path.parent() else {
        return Ok(());
    };
    if parent.as_os_str().is_empty() {
        return Ok(());
    }
    std::fs::create_dir_all(parent)
        .map_err(|source| JournalError::io("creating journal directory", parent, source))
}

#[must_use]
pub fn default_journal_path() -> PathBuf {
    PathBuf::from(DEFAULT_JOURNAL_FILE)
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::ensure_parent_dir;

    #[test]
    fn bare_file_name_needs_no_directory() {
        ensure_parent_dir(Path::new("journal.jrnl")).expect("no-op");
    }

    #[test]
    fn creates_nested_directories() {
        let temp = tempfile::tempdir().expect("tempdir should be created");
        let path = temp.path().join("a").join("b").join("new.jrnl");
        ensure_parent_dir(&path).expect("directories should be created");
        assert!(temp.path().join("a").join("b").is_dir());
        assert!(!path.exists());
    }
}
