//! Diagnostic log setup.
//!
//! Everything goes to a side file; the terminal itself is owned by the session.

use std::fs::{File, OpenOptions};
use std::path::Path;
use std::sync::Arc;

use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

/// `RUST_LOG` when set, otherwise `info` (or `debug` with `JOURNEY_DEBUG=1`).
pub fn env_filter(debug: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive(debug)))
}

pub fn default_directive(debug: bool) -> &'static str {
    if debug {
        "debug"
    } else {
        "info"
    }
}

pub fn build_subscriber(
    log_file: File,
    filter: EnvFilter,
) -> impl tracing::Subscriber + Send + Sync {
    let fmt_layer = fmt::layer()
        .with_writer(Arc::new(log_file))
        .with_ansi(false);

    tracing_subscriber::registry().with(fmt_layer).with(filter)
}

/// Install the global subscriber writing to `log_path`.
///
/// Returns `false` when the file cannot be opened or a subscriber is already installed; the
/// program keeps running without diagnostics in that case.
pub fn init_global(log_path: &Path, debug: bool) -> bool {
    let Ok(log_file) = OpenOptions::new().create(true).append(true).open(log_path) else {
        return false;
    };
    build_subscriber(log_file, env_filter(debug))
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::NamedTempFile;
    use tracing_subscriber::EnvFilter;

    use super::{build_subscriber, default_directive};

    #[test]
    fn writes_plain_lines_to_the_file() {
        let log_file = NamedTempFile::new().expect("temp log");
        let subscriber = build_subscriber(
            log_file.reopen().expect("reopen"),
            EnvFilter::new("info"),
        );

        tracing::subscriber::with_default(subscriber, || {
            tracing::info!("Starting");
            tracing::debug!("hidden at info");
        });

        let written = fs::read_to_string(log_file.path()).expect("read log");
        assert!(written.contains("Starting"));
        assert!(!written.contains("hidden at info"));
        assert!(!written.contains('\x1b'));
    }

    #[test]
    fn debug_flag_lowers_the_default_level() {
        assert_eq!(default_directive(false), "info");
        assert_eq!(default_directive(true), "debug");
    }
}
