#![allow(unused_imports)]

use journey_tui::{
    matches_key, normalize_key_id, pad_to_width, parse_input_events, parse_key, strip_ansi, styled,
    truncate_to_width, visible_width, wrap_line, wrap_text, Action, EnvConfig, EventQueue,
    EventSink, Frame, InputEvent, ItemList, KeyBinding, KeyId, Keybindings, LineInput, ListItem,
    ProcessTerminal, ScreenRenderer, StdinBuffer, StdinEvent, Terminal, TerminalEvent, Viewport,
    TUI,
};

#[test]
fn public_api_exports_compile() {}
