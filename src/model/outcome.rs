//! Terminal result of a prompt invocation.

use serde_json::{json, Value};

/// What the prompt produced when it finished.
///
/// "Still running" is represented by `Option::<Outcome>::None` at the
/// transition level, so this type only carries terminal results.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Outcome {
    /// The user left without choosing a tip.
    Quit,
    /// A validated tip percentage, always finite and non-negative.
    Selected(f64),
}

impl Outcome {
    /// The selected percentage, if any.
    pub fn tip_percent(self) -> Option<f64> {
        match self {
            Outcome::Quit => None,
            Outcome::Selected(value) => Some(value),
        }
    }

    /// Machine-readable form printed by `--json`.
    pub fn to_json(self) -> Value {
        match self {
            Outcome::Quit => json!({ "outcome": "quit" }),
            Outcome::Selected(value) => json!({ "outcome": "selected", "tip_percent": value }),
        }
    }
}
