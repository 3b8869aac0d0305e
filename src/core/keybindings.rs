//! Key-to-action bindings.
//!
//! Each key resolves to at most one [`Action`]. Resolution walks [`Action::ALL`] in order and
//! skips disabled actions, so a key bound to both a scroll action and an edit action is owned
//! by whichever appears first.

use std::collections::HashMap;

use crate::core::input::normalize_key_id;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Quit,
    Submit,
    ScrollUp,
    ScrollDown,
    HalfPageUp,
    HalfPageDown,
    PageUp,
    PageDown,
    CursorLeft,
    CursorRight,
    CursorWordLeft,
    CursorWordRight,
    CursorLineStart,
    CursorLineEnd,
    DeleteCharBackward,
    DeleteCharForward,
    DeleteWordBackward,
    DeleteToLineStart,
    DeleteToLineEnd,
}

impl Action {
    /// Resolution order.
    pub const ALL: [Action; 19] = [
        Action::Quit,
        Action::Submit,
        Action::ScrollUp,
        Action::ScrollDown,
        Action::HalfPageUp,
        Action::HalfPageDown,
        Action::PageUp,
        Action::PageDown,
        Action::CursorLeft,
        Action::CursorRight,
        Action::CursorWordLeft,
        Action::CursorWordRight,
        Action::CursorLineStart,
        Action::CursorLineEnd,
        Action::DeleteCharBackward,
        Action::DeleteCharForward,
        Action::DeleteWordBackward,
        Action::DeleteToLineStart,
        Action::DeleteToLineEnd,
    ];

    /// Actions that move the content view rather than edit the input line.
    pub fn is_scroll(self) -> bool {
        matches!(
            self,
            Action::ScrollUp
                | Action::ScrollDown
                | Action::HalfPageUp
                | Action::HalfPageDown
                | Action::PageUp
                | Action::PageDown
        )
    }
}

pub type KeyId = String;

#[derive(Debug, Clone)]
pub enum KeyBinding {
    Single(KeyId),
    Multiple(Vec<KeyId>),
}

impl KeyBinding {
    fn into_keys(self) -> Vec<KeyId> {
        match self {
            KeyBinding::Single(key) => vec![normalize_key_id(&key)],
            KeyBinding::Multiple(keys) => keys.iter().map(|key| normalize_key_id(key)).collect(),
        }
    }
}

impl From<&str> for KeyBinding {
    fn from(value: &str) -> Self {
        KeyBinding::Single(value.to_string())
    }
}

impl From<String> for KeyBinding {
    fn from(value: String) -> Self {
        KeyBinding::Single(value)
    }
}

impl From<Vec<&str>> for KeyBinding {
    fn from(value: Vec<&str>) -> Self {
        KeyBinding::Multiple(value.into_iter().map(|item| item.to_string()).collect())
    }
}

impl From<Vec<String>> for KeyBinding {
    fn from(value: Vec<String>) -> Self {
        KeyBinding::Multiple(value)
    }
}

#[derive(Debug, Clone)]
struct Binding {
    keys: Vec<KeyId>,
    enabled: bool,
}

fn default_keys(action: Action) -> &'static [&'static str] {
    use Action::*;

    match action {
        Quit => &["ctrl+c"],
        Submit => &["enter"],
        ScrollUp => &["up"],
        ScrollDown => &["down"],
        HalfPageUp => &["alt+up"],
        HalfPageDown => &["alt+down"],
        PageUp => &["pageUp"],
        PageDown => &["pageDown"],
        CursorLeft => &["left", "ctrl+b"],
        CursorRight => &["right", "ctrl+f"],
        CursorWordLeft => &["alt+left", "ctrl+left", "alt+b"],
        CursorWordRight => &["alt+right", "ctrl+right", "alt+f"],
        CursorLineStart => &["home", "ctrl+a"],
        CursorLineEnd => &["end", "ctrl+e"],
        DeleteCharBackward => &["backspace"],
        DeleteCharForward => &["delete", "ctrl+d"],
        DeleteWordBackward => &["ctrl+w", "alt+backspace"],
        DeleteToLineStart => &["ctrl+u"],
        DeleteToLineEnd => &["ctrl+k"],
    }
}

/// Per-session binding table. Every action starts enabled with its default keys.
#[derive(Debug, Clone)]
pub struct Keybindings {
    bindings: HashMap<Action, Binding>,
}

impl Default for Keybindings {
    fn default() -> Self {
        let bindings = Action::ALL
            .iter()
            .map(|action| {
                let keys = default_keys(*action)
                    .iter()
                    .map(|key| key.to_string())
                    .collect();
                (*action, Binding { keys, enabled: true })
            })
            .collect();
        Self { bindings }
    }
}

impl Keybindings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_keys<K: Into<KeyBinding>>(&mut self, action: Action, keys: K) {
        let keys = keys.into().into_keys();
        self.bindings
            .entry(action)
            .and_modify(|binding| binding.keys = keys.clone())
            .or_insert(Binding {
                keys,
                enabled: true,
            });
    }

    pub fn set_enabled(&mut self, action: Action, enabled: bool) {
        if let Some(binding) = self.bindings.get_mut(&action) {
            binding.enabled = enabled;
        }
    }

    pub fn is_enabled(&self, action: Action) -> bool {
        self.bindings
            .get(&action)
            .is_some_and(|binding| binding.enabled)
    }

    /// Whether `key_id` triggers `action`. Disabled actions never match.
    pub fn matches(&self, key_id: &str, action: Action) -> bool {
        let Some(binding) = self.bindings.get(&action) else {
            return false;
        };
        binding.enabled && binding.keys.iter().any(|key| key == key_id)
    }

    /// The single action a key triggers, if any.
    pub fn action_for(&self, key_id: &str) -> Option<Action> {
        Action::ALL
            .iter()
            .copied()
            .find(|action| self.matches(key_id, *action))
    }

    pub fn keys(&self, action: Action) -> Vec<KeyId> {
        self.bindings
            .get(&action)
            .map(|binding| binding.keys.clone())
            .unwrap_or_default()
    }
}
