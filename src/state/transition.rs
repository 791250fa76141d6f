//! Selection state transitions (pure).
//!
//! One function per mode; every (mode, key) pair is handled, most of them
//! as no-ops. No I/O happens here beyond tracing.

use super::{SelectionMode, SelectionState};
use crate::model::{LogicalKey, Outcome};
use tracing::debug;

/// Apply one logical key to the state.
///
/// Returns the next state and, when the prompt is finished, its outcome.
/// `Interrupt` ends the prompt from any mode.
pub fn transition(mut state: SelectionState, key: LogicalKey) -> (SelectionState, Option<Outcome>) {
    if key == LogicalKey::Interrupt {
        return (state, Some(Outcome::Quit));
    }

    let outcome = match state.mode {
        SelectionMode::BrowsingPresets => browse_presets(&mut state, key),
        SelectionMode::CustomFocused => focus_custom(&mut state, key),
        SelectionMode::CustomEditing => edit_custom(&mut state, key),
        SelectionMode::ConfirmingLowTip => confirm_low_tip(&mut state, key),
    };

    (state, outcome)
}

fn browse_presets(state: &mut SelectionState, key: LogicalKey) -> Option<Outcome> {
    let count = state.presets.len();
    match key {
        LogicalKey::Left => {
            state.highlighted = (state.highlighted + count - 1) % count;
            None
        }
        LogicalKey::Right => {
            state.highlighted = (state.highlighted + 1) % count;
            None
        }
        LogicalKey::Up | LogicalKey::Down => {
            state.mode = SelectionMode::CustomFocused;
            None
        }
        LogicalKey::Confirm => state
            .presets
            .get(state.highlighted)
            .map(|percent| Outcome::Selected(f64::from(percent))),
        LogicalKey::Quit => Some(Outcome::Quit),
        _ => None,
    }
}

fn focus_custom(state: &mut SelectionState, key: LogicalKey) -> Option<Outcome> {
    let target = match key {
        LogicalKey::Left => Some(0),
        LogicalKey::Right => Some(state.presets.last_index()),
        LogicalKey::Up | LogicalKey::Down => Some(state.presets.middle_index()),
        LogicalKey::Confirm => {
            state.digits.clear();
            state.mode = SelectionMode::CustomEditing;
            None
        }
        LogicalKey::Quit => return Some(Outcome::Quit),
        _ => None,
    };

    if let Some(index) = target {
        state.highlighted = index;
        state.mode = SelectionMode::BrowsingPresets;
    }
    None
}

fn edit_custom(state: &mut SelectionState, key: LogicalKey) -> Option<Outcome> {
    match key {
        LogicalKey::Cancel => {
            state.digits.clear();
            state.mode = SelectionMode::CustomFocused;
            None
        }
        LogicalKey::Digit(digit) => {
            if !state.digits.push(digit) {
                debug!(digit, current = state.digits.as_str(), "digit rejected");
            }
            None
        }
        LogicalKey::Backspace => {
            state.digits.pop();
            None
        }
        LogicalKey::Confirm => submit_custom(state),
        _ => None,
    }
}

fn submit_custom(state: &mut SelectionState) -> Option<Outcome> {
    if state.digits.is_empty() {
        return None;
    }

    match state.digits.parse() {
        Err(err) => {
            debug!(%err, entry = state.digits.as_str(), "discarding unparsable custom tip");
            state.digits.clear();
            None
        }
        Ok(value) if value < state.low_tip_threshold => {
            debug!(value, threshold = state.low_tip_threshold, "asking to confirm low tip");
            state.mode = SelectionMode::ConfirmingLowTip;
            None
        }
        Ok(value) => {
            state.mode = SelectionMode::CustomFocused;
            Some(Outcome::Selected(value))
        }
    }
}

fn confirm_low_tip(state: &mut SelectionState, key: LogicalKey) -> Option<Outcome> {
    match key {
        // Both answers discard the entry; neither commits the low value.
        LogicalKey::Yes | LogicalKey::No => {
            state.digits.clear();
            state.mode = SelectionMode::CustomFocused;
            None
        }
        _ => None,
    }
}

#[cfg(test)]
#[path = "transition_tests.rs"]
mod tests;
