mod clock;
mod entry;
mod error;
mod paths;
mod store;

pub use clock::{format_timestamp, timestamp_now, Clock, FixedClock, SystemClock, TIMESTAMP_FORMAT};
pub use entry::{parse, parse_line, render_content, single_line, JournalEntry, DELIMITER};
pub use error::JournalError;
pub use paths::{default_journal_path, ensure_parent_dir, DEFAULT_JOURNAL_FILE};
pub use store::Journal;
