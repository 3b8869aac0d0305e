//! Environment configuration.

use std::env;

#[derive(Debug, Clone, Default)]
pub struct EnvConfig {
    /// Copy of every byte written to the terminal, appended to this path.
    pub write_log: Option<String>,
    /// Verbose diagnostics.
    pub debug: bool,
}

pub const WRITE_LOG_VAR: &str = "JOURNEY_WRITE_LOG";
pub const DEBUG_VAR: &str = "JOURNEY_DEBUG";

impl EnvConfig {
    pub fn from_env() -> Self {
        Self {
            write_log: env_string_opt(WRITE_LOG_VAR),
            debug: env_flag(DEBUG_VAR),
        }
    }
}

fn env_flag(key: &str) -> bool {
    env::var(key).map(|value| value == "1").unwrap_or(false)
}

fn env_string_opt(key: &str) -> Option<String> {
    env::var(key).ok().and_then(|value| {
        if value.trim().is_empty() {
            None
        } else {
            Some(value)
        }
    })
}
