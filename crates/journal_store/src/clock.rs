use time::format_description::FormatItem;
use time::macros::format_description;
use time::{OffsetDateTime, UtcOffset};

use crate::error::JournalError;

/// `YYYY/MM/DD HH:MM`, 24-hour clock.
pub const TIMESTAMP_FORMAT: &[FormatItem<'static>] =
    format_description!("[year]/[month]/[day] [hour]:[minute]");

/// Source of wall-clock time for new entries.
pub trait Clock {
    fn now(&self) -> OffsetDateTime;
}

/// Wall clock in a fixed local offset.
///
/// The offset is resolved once by [`SystemClock::detect`]. Resolve it before any threads are
/// spawned: on Unix the local offset cannot be queried soundly from a multi-threaded process,
/// and detection then falls back to UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SystemClock {
    offset: UtcOffset,
}

impl SystemClock {
    #[must_use]
    pub fn detect() -> Self {
        Self {
            offset: UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC),
        }
    }

    #[must_use]
    pub fn with_offset(offset: UtcOffset) -> Self {
        Self { offset }
    }

    #[must_use]
    pub fn offset(&self) -> UtcOffset {
        self.offset
    }
}

impl Clock for SystemClock {
    fn now(&self) -> OffsetDateTime {
        OffsetDateTime::now_utc().to_offset(self.offset)
    }
}

/// Clock pinned to one instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub OffsetDateTime);

impl Clock for FixedClock {
    fn now(&self) -> OffsetDateTime {
        self.0
    }
}

pub fn format_timestamp(at: OffsetDateTime) -> Result<String, JournalError> {
    at.format(TIMESTAMP_FORMAT).map_err(JournalError::ClockFormat)
}

pub fn timestamp_now(clock: &dyn Clock) -> Result<String, JournalError> {
    format_timestamp(clock.now())
}
