//! Layout dimension constants and fixed copy for the prompt.
//!
//! Centralized location for layout numbers so the renderer and its tests
//! agree on geometry.

/// Height of the prompt box in lines, borders included.
///
/// Title row, two-line preset row, spacer, two-line custom row.
pub const PROMPT_BOX_HEIGHT: u16 = 8;

/// Columns left empty on each side of the prompt box.
pub const PROMPT_BOX_MARGIN_X: u16 = 2;

/// Height of every button in lines.
pub const BUTTON_HEIGHT: u16 = 2;

/// Columns between adjacent preset buttons.
pub const BUTTON_GAP: u16 = 2;

/// Title shown at the top of the prompt box.
pub const PROMPT_TITLE: &str = "Leave a tip?";

/// Label of the custom button when not editing.
pub const CUSTOM_LABEL: &str = "Custom";

/// Hint shown while navigating.
pub const NAVIGATION_HINT: &str = "Use ←↑↓→ arrows to navigate, Enter to select, 'q' to quit";

/// Hint shown while typing a custom value.
pub const EDITING_HINT: &str = "Enter percentage (0-100), Enter to confirm, ESC to cancel";

/// Question asked before accepting a low custom tip.
pub const LOW_TIP_MESSAGE: &str = "Are you sure you can't give a better tip?";

/// Answer hint under the low-tip question.
pub const LOW_TIP_ANSWER_HINT: &str = "(y/n)";
