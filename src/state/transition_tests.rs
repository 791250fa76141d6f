//! Tests for selection state transitions.

use super::*;
use crate::state::{Presets, DEFAULT_LOW_TIP_THRESHOLD};
use crate::model::LogicalKey::*;

/// Feed keys in order, stopping at the first outcome.
fn run(state: SelectionState, keys: &[LogicalKey]) -> (SelectionState, Option<Outcome>) {
    let mut state = state;
    for &key in keys {
        let (next, outcome) = transition(state, key);
        state = next;
        if outcome.is_some() {
            return (state, outcome);
        }
    }
    (state, None)
}

fn fresh() -> SelectionState {
    SelectionState::default()
}

/// State with the custom row focused and editing started.
fn editing() -> SelectionState {
    let (state, outcome) = run(fresh(), &[Down, Confirm]);
    assert_eq!(outcome, None);
    assert_eq!(state.mode(), SelectionMode::CustomEditing);
    state
}

mod browsing_presets {
    use super::*;

    #[test]
    fn right_moves_highlight_and_wraps_to_first() {
        let (state, _) = run(fresh(), &[Right]);
        assert_eq!(state.highlighted_preset(), 1);

        let (state, _) = run(fresh(), &[Right, Right, Right]);
        assert_eq!(state.highlighted_preset(), 0);
    }

    #[test]
    fn left_from_first_wraps_to_last() {
        let (state, outcome) = run(fresh(), &[Left]);
        assert_eq!(state.highlighted_preset(), 2);
        assert_eq!(outcome, None);
    }

    #[test]
    fn up_and_down_focus_custom() {
        for key in [Up, Down] {
            let (state, _) = run(fresh(), &[key]);
            assert_eq!(state.mode(), SelectionMode::CustomFocused);
            assert!(state.custom_focused());
            assert!(!state.custom_editing());
        }
    }

    #[test]
    fn confirm_on_initial_state_selects_first_preset() {
        let (_, outcome) = run(fresh(), &[Confirm]);
        assert_eq!(outcome, Some(Outcome::Selected(15.0)));
    }

    #[test]
    fn confirm_selects_highlighted_preset() {
        let (_, outcome) = run(fresh(), &[Right, Confirm]);
        assert_eq!(outcome, Some(Outcome::Selected(20.0)));

        let (_, outcome) = run(fresh(), &[Left, Confirm]);
        assert_eq!(outcome, Some(Outcome::Selected(25.0)));
    }

    #[test]
    fn quit_produces_quit_without_mutation() {
        let before = fresh();
        let (after, outcome) = transition(before.clone(), Quit);
        assert_eq!(outcome, Some(Outcome::Quit));
        assert_eq!(after, before);
    }

    #[test]
    fn editing_keys_are_ignored() {
        for key in [Digit(5), Backspace, Cancel, Yes, No, Other] {
            let (state, outcome) = transition(fresh(), key);
            assert_eq!(state, fresh(), "{key:?} should be a no-op");
            assert_eq!(outcome, None);
        }
    }

    #[test]
    fn single_preset_wraps_onto_itself() {
        let presets = Presets::new(vec![18]).unwrap();
        let state = SelectionState::new(presets, DEFAULT_LOW_TIP_THRESHOLD);
        let (state, _) = run(state, &[Left, Right, Left]);
        assert_eq!(state.highlighted_preset(), 0);
        let (_, outcome) = run(state, &[Confirm]);
        assert_eq!(outcome, Some(Outcome::Selected(18.0)));
    }
}

mod custom_focused {
    use super::*;

    fn focused() -> SelectionState {
        let (state, _) = run(fresh(), &[Right, Down]);
        assert_eq!(state.mode(), SelectionMode::CustomFocused);
        state
    }

    #[test]
    fn left_returns_to_first_preset() {
        let (state, _) = run(focused(), &[Left]);
        assert_eq!(state.mode(), SelectionMode::BrowsingPresets);
        assert_eq!(state.highlighted_preset(), 0);
    }

    #[test]
    fn right_returns_to_last_preset() {
        let (state, _) = run(focused(), &[Right]);
        assert_eq!(state.mode(), SelectionMode::BrowsingPresets);
        assert_eq!(state.highlighted_preset(), 2);
    }

    #[test]
    fn up_and_down_return_to_middle_preset() {
        for key in [Up, Down] {
            let (state, _) = run(focused(), &[key]);
            assert_eq!(state.mode(), SelectionMode::BrowsingPresets);
            assert_eq!(state.highlighted_preset(), 1);
        }
    }

    #[test]
    fn confirm_starts_editing_with_empty_digits() {
        let (state, outcome) = run(focused(), &[Confirm]);
        assert_eq!(outcome, None);
        assert!(state.custom_editing());
        assert!(state.custom_digits().is_empty());
    }

    #[test]
    fn quit_produces_quit() {
        let (_, outcome) = run(focused(), &[Quit]);
        assert_eq!(outcome, Some(Outcome::Quit));
    }

    #[test]
    fn digits_are_ignored_until_editing() {
        let (state, outcome) = run(focused(), &[Digit(4), Backspace, Cancel]);
        assert_eq!(outcome, None);
        assert_eq!(state.mode(), SelectionMode::CustomFocused);
        assert!(state.custom_digits().is_empty());
    }
}

mod custom_editing {
    use super::*;

    #[test]
    fn digits_accumulate() {
        let (state, _) = run(editing(), &[Digit(4), Digit(2)]);
        assert_eq!(state.custom_digits().as_str(), "42");
    }

    #[test]
    fn entering_fifty_and_confirming_selects_fifty() {
        let (_, outcome) = run(editing(), &[Digit(5), Digit(0), Confirm]);
        assert_eq!(outcome, Some(Outcome::Selected(50.0)));
    }

    #[test]
    fn digit_past_100_is_rejected() {
        let (state, _) = run(editing(), &[Digit(1), Digit(0), Digit(0), Digit(0)]);
        assert_eq!(state.custom_digits().as_str(), "100");
    }

    #[test]
    fn exactly_100_selects_without_confirmation() {
        let (state, outcome) = run(editing(), &[Digit(1), Digit(0), Digit(0), Confirm]);
        assert_eq!(outcome, Some(Outcome::Selected(100.0)));
        assert!(!state.pending_low_tip_confirmation());
    }

    #[test]
    fn threshold_value_itself_is_not_low() {
        let (_, outcome) = run(editing(), &[Digit(8), Confirm]);
        assert_eq!(outcome, Some(Outcome::Selected(8.0)));
    }

    #[test]
    fn confirm_with_no_digits_stays_editing() {
        let before = editing();
        let (after, outcome) = transition(before.clone(), Confirm);
        assert_eq!(outcome, None);
        assert_eq!(after, before);
    }

    #[test]
    fn backspace_removes_last_digit() {
        let (state, _) = run(editing(), &[Digit(2), Digit(5), Backspace]);
        assert_eq!(state.custom_digits().as_str(), "2");
    }

    #[test]
    fn backspace_on_empty_is_idempotent() {
        let before = editing();
        let (after, outcome) = transition(before.clone(), Backspace);
        assert_eq!(outcome, None);
        assert_eq!(after, before);
    }

    #[test]
    fn cancel_clears_digits_and_returns_to_custom_focus() {
        let (state, outcome) = run(editing(), &[Digit(3), Cancel]);
        assert_eq!(outcome, None);
        assert_eq!(state.mode(), SelectionMode::CustomFocused);
        assert!(state.custom_digits().is_empty());
    }

    #[test]
    fn quit_and_navigation_are_ignored_while_typing() {
        let (state, outcome) = run(editing(), &[Digit(1), Quit, Left, Right, Up, Down, Yes, No]);
        assert_eq!(outcome, None);
        assert!(state.custom_editing());
        assert_eq!(state.custom_digits().as_str(), "1");
    }

    #[test]
    fn reentering_editing_starts_from_empty() {
        let (state, _) = run(editing(), &[Digit(9), Cancel, Confirm]);
        assert!(state.custom_editing());
        assert!(state.custom_digits().is_empty());
    }
}

mod confirming_low_tip {
    use super::*;

    fn confirming() -> SelectionState {
        let (state, outcome) = run(editing(), &[Digit(5), Confirm]);
        assert_eq!(outcome, None);
        state
    }

    #[test]
    fn low_value_opens_confirmation() {
        let state = confirming();
        assert!(state.pending_low_tip_confirmation());
        assert!(!state.custom_editing());
        assert!(state.custom_focused());
    }

    #[test]
    fn zero_is_a_low_tip() {
        let (state, outcome) = run(editing(), &[Digit(0), Confirm]);
        assert_eq!(outcome, None);
        assert!(state.pending_low_tip_confirmation());
    }

    #[test]
    fn yes_and_no_both_discard_entry_without_outcome() {
        for answer in [Yes, No] {
            let (state, outcome) = transition(confirming(), answer);
            assert_eq!(outcome, None, "{answer:?} must not select");
            assert_eq!(state.mode(), SelectionMode::CustomFocused);
            assert!(state.custom_digits().is_empty());
        }
    }

    #[test]
    fn other_keys_keep_dialog_open() {
        for key in [Confirm, Cancel, Quit, Digit(9), Backspace, Left, Down, Other] {
            let before = confirming();
            let (after, outcome) = transition(before.clone(), key);
            assert_eq!(outcome, None);
            assert_eq!(after, before, "{key:?} should not dismiss the dialog");
        }
    }

    #[test]
    fn custom_threshold_is_respected() {
        let state = SelectionState::new(Presets::default(), 20.0);
        let (state, outcome) = run(state, &[Down, Confirm, Digit(1), Digit(9), Confirm]);
        assert_eq!(outcome, None);
        assert!(state.pending_low_tip_confirmation());
    }
}

mod interrupt {
    use super::*;

    #[test]
    fn interrupt_quits_from_every_mode() {
        let states = [
            fresh(),
            run(fresh(), &[Down]).0,
            editing(),
            run(editing(), &[Digit(1), Confirm]).0,
        ];
        for state in states {
            let mode = state.mode();
            let (_, outcome) = transition(state, Interrupt);
            assert_eq!(outcome, Some(Outcome::Quit), "interrupt in {mode:?}");
        }
    }
}
