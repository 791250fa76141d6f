//! Logical input events, decoupled from raw device codes.

/// A logical key event consumed by the selection state machine.
///
/// These represent user intent, not specific keys. The mapping from
/// `crossterm::event::KeyEvent` to `LogicalKey` is handled by
/// [`KeyBindings`](crate::config::KeyBindings), which is context-sensitive
/// (see [`InputMode`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogicalKey {
    /// Move highlight left, or leave the custom row towards the first preset. Default: ←
    Left,
    /// Move highlight right, or leave the custom row towards the last preset. Default: →
    Right,
    /// Toggle between the preset row and the custom row. Default: ↑
    Up,
    /// Toggle between the preset row and the custom row. Default: ↓
    Down,
    /// Select the focused option or submit the custom entry. Default: Enter
    Confirm,
    /// Abandon custom entry. Default: Esc
    Cancel,
    /// Delete the last typed digit. Default: Backspace/Delete
    Backspace,
    /// A decimal digit, always in `0..=9`. Default: 0-9
    Digit(u8),
    /// Leave the prompt without a selection. Default: q/Q outside editing
    Quit,
    /// Answer the low-tip confirmation. Default: y/Y while confirming
    Yes,
    /// Answer the low-tip confirmation. Default: n/N while confirming
    No,
    /// Process interrupt, honoured in every mode. Default: Ctrl+C
    Interrupt,
    /// Anything else (unbound keys, resize, focus and mouse events).
    Other,
}

impl LogicalKey {
    /// Build a digit event from an ASCII character.
    ///
    /// Returns `None` for anything outside `'0'..='9'`.
    pub fn digit(ch: char) -> Option<Self> {
        ch.to_digit(10).map(|d| Self::Digit(d as u8))
    }
}

/// Keyboard context derived from the current selection state.
///
/// Some physical keys only have meaning in one context: `q` quits only
/// while navigating, `y`/`n` only answer the confirmation dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputMode {
    /// Browsing presets or focused on the custom row.
    Navigating,
    /// Typing a custom percentage.
    Editing,
    /// The low-tip confirmation dialog is open.
    Confirming,
}
