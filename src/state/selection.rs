//! Interaction state for one prompt invocation.

use super::{CustomDigits, Presets};
use crate::model::InputMode;

/// Custom values strictly below this trigger the low-tip confirmation.
pub const DEFAULT_LOW_TIP_THRESHOLD: f64 = 8.0;

/// Which part of the prompt currently owns the keyboard.
///
/// Sum type enforces the nesting rules: editing and confirming only exist
/// while the custom row is focused, and a preset is highlighted only in
/// `BrowsingPresets`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionMode {
    /// Navigating the preset row.
    #[default]
    BrowsingPresets,
    /// Custom row focused, not typing.
    CustomFocused,
    /// Typing a custom percentage.
    CustomEditing,
    /// Low-tip confirmation overlay is open.
    ConfirmingLowTip,
}

/// All mutable state of the prompt.
///
/// Created fresh per invocation and changed only by
/// [`transition`](super::transition).
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionState {
    pub(super) presets: Presets,
    pub(super) low_tip_threshold: f64,
    pub(super) highlighted: usize,
    pub(super) mode: SelectionMode,
    pub(super) digits: CustomDigits,
}

impl SelectionState {
    /// Fresh state: first preset highlighted, nothing typed.
    pub fn new(presets: Presets, low_tip_threshold: f64) -> Self {
        Self {
            presets,
            low_tip_threshold,
            highlighted: 0,
            mode: SelectionMode::BrowsingPresets,
            digits: CustomDigits::new(),
        }
    }

    /// Preset percentages, in display order.
    pub fn presets(&self) -> &Presets {
        &self.presets
    }

    /// Custom values below this need confirmation.
    pub fn low_tip_threshold(&self) -> f64 {
        self.low_tip_threshold
    }

    /// Index of the highlighted preset.
    ///
    /// Only meaningful while browsing presets; the last highlight is kept
    /// while the custom row is focused.
    pub fn highlighted_preset(&self) -> usize {
        self.highlighted
    }

    /// The preset that has navigation focus, if focus is on the preset row.
    pub fn focused_preset(&self) -> Option<usize> {
        (self.mode == SelectionMode::BrowsingPresets).then_some(self.highlighted)
    }

    /// Current interaction mode.
    pub fn mode(&self) -> SelectionMode {
        self.mode
    }

    /// True whenever focus is on the custom row, including while editing.
    pub fn custom_focused(&self) -> bool {
        self.mode != SelectionMode::BrowsingPresets
    }

    /// True while a custom percentage is being typed.
    pub fn custom_editing(&self) -> bool {
        self.mode == SelectionMode::CustomEditing
    }

    /// True while the low-tip dialog is open.
    pub fn pending_low_tip_confirmation(&self) -> bool {
        self.mode == SelectionMode::ConfirmingLowTip
    }

    /// Digits typed so far.
    pub fn custom_digits(&self) -> &CustomDigits {
        &self.digits
    }

    /// Keyboard context for the input adapter.
    pub fn input_mode(&self) -> InputMode {
        match self.mode {
            SelectionMode::BrowsingPresets | SelectionMode::CustomFocused => InputMode::Navigating,
            SelectionMode::CustomEditing => InputMode::Editing,
            SelectionMode::ConfirmingLowTip => InputMode::Confirming,
        }
    }
}

impl Default for SelectionState {
    fn default() -> Self {
        Self::new(Presets::default(), DEFAULT_LOW_TIP_THRESHOLD)
    }
}
