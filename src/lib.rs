//! Terminal toolkit behind the `journey` journal.
//!
//! Invariant: single output gate: only `core::output::OutputGate::flush(..)` writes to the
//! terminal.
//!
//! # Public API Overview
//! - Drive a raw-mode, alternate-screen session with [`TUI`] over a [`Terminal`]
//!   ([`ProcessTerminal`] for the real TTY).
//! - Receive one ordered stream of [`InputEvent`]s and resolve keys through [`Keybindings`].
//! - Compose screens from [`LineInput`], [`Viewport`] and [`ItemList`] into a [`Frame`].
//! - Use text and width helpers for ANSI-safe formatting.
//!
//! # Runtime Alias
//! [`TUI`] is a type alias for `runtime::tui::TuiRuntime<T>`.

pub mod config;

pub mod core;
pub mod platform;
pub mod render;
pub mod runtime;
pub mod widgets;

/// Built-in UI components.
pub use crate::widgets::{ItemList, LineInput, ListItem, Viewport};

/// Keybinding configuration and default mappings.
pub use crate::core::keybindings::{Action, KeyBinding, KeyId, Keybindings};

/// Keyboard input parsing and matching helpers.
pub use crate::core::input::{matches_key, normalize_key_id, parse_key};
pub use crate::core::input_event::{parse_input_events, InputEvent};

/// Input buffering for chunked terminal streams.
pub use crate::platform::stdin_buffer::{StdinBuffer, StdinEvent};

/// Terminal interfaces and process-backed implementation.
pub use crate::core::terminal::{EventSink, Terminal, TerminalEvent};
pub use crate::platform::process_terminal::ProcessTerminal;

/// Environment configuration.
pub use crate::config::EnvConfig;

/// Render-layer frame types.
pub use crate::render::{Frame, ScreenRenderer};
pub use crate::runtime::EventQueue;

/// Alias for the main runtime type.
pub type TUI<T> = crate::runtime::tui::TuiRuntime<T>;

/// Word wrapping helpers.
pub use crate::core::text::wrap::{wrap_line, wrap_text};
/// ANSI-aware truncation and padding helpers.
pub use crate::core::text::width::{pad_to_width, truncate_to_width};
/// Visible width helper that ignores ANSI control sequences.
pub use crate::core::text::width::visible_width;
/// SGR styling helpers.
pub use crate::core::text::ansi::{strip_ansi, styled};
