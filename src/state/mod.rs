//! Selection state machine (pure core).
//!
//! `SelectionState` owns all interaction state for one prompt invocation.
//! [`transition`] is the only way it changes: a pure function from
//! (state, logical key) to (next state, optional outcome).

pub mod custom_digits;
pub mod presets;
pub mod selection;
pub mod transition;

pub use custom_digits::{CustomDigits, MAX_CUSTOM_DIGITS, MAX_CUSTOM_PERCENT};
pub use presets::{Presets, PresetsError, DEFAULT_PRESETS, MAX_PRESETS};
pub use selection::{SelectionMode, SelectionState, DEFAULT_LOW_TIP_THRESHOLD};
pub use transition::transition;
