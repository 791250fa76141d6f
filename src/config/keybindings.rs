//! Keyboard bindings configuration.

use crate::model::{InputMode, LogicalKey};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::collections::HashMap;

/// Maps keyboard events to logical keys.
///
/// Mode-independent keys (arrows, Enter, Esc, Backspace, Ctrl+C) live in a
/// lookup table. Character keys are context-sensitive: digits always map to
/// `Digit`, `q` only quits outside editing, `y`/`n` only answer the
/// confirmation dialog.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    bindings: HashMap<KeyEvent, LogicalKey>,
}

impl KeyBindings {
    /// Resolve a key event in the given input mode.
    ///
    /// Total: anything unbound becomes [`LogicalKey::Other`]. Only key
    /// presses count; release events (reported on some platforms) are
    /// `Other`.
    pub fn resolve(&self, key: KeyEvent, mode: InputMode) -> LogicalKey {
        if key.kind != KeyEventKind::Press {
            return LogicalKey::Other;
        }

        if let Some(action) = self.bindings.get(&normalize(key)) {
            return *action;
        }

        match key.code {
            KeyCode::Char(ch) if !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
                resolve_char(ch, mode)
            }
            _ => LogicalKey::Other,
        }
    }
}

fn resolve_char(ch: char, mode: InputMode) -> LogicalKey {
    if let Some(digit) = LogicalKey::digit(ch) {
        return digit;
    }

    match (mode, ch) {
        (InputMode::Navigating, 'q' | 'Q') => LogicalKey::Quit,
        (InputMode::Confirming, 'y' | 'Y') => LogicalKey::Yes,
        (InputMode::Confirming, 'n' | 'N') => LogicalKey::No,
        _ => LogicalKey::Other,
    }
}

/// Strip the key state so lookups match regardless of kind/state bits.
fn normalize(key: KeyEvent) -> KeyEvent {
    KeyEvent::new(key.code, key.modifiers)
}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut bindings = HashMap::new();

        // Arrow navigation
        bindings.insert(
            KeyEvent::new(KeyCode::Left, KeyModifiers::NONE),
            LogicalKey::Left,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Right, KeyModifiers::NONE),
            LogicalKey::Right,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Up, KeyModifiers::NONE),
            LogicalKey::Up,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Down, KeyModifiers::NONE),
            LogicalKey::Down,
        );

        // Entry control
        bindings.insert(
            KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE),
            LogicalKey::Confirm,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE),
            LogicalKey::Cancel,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Backspace, KeyModifiers::NONE),
            LogicalKey::Backspace,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Delete, KeyModifiers::NONE),
            LogicalKey::Backspace,
        );

        // Interrupt
        bindings.insert(
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
            LogicalKey::Interrupt,
        );

        Self { bindings }
    }
}
