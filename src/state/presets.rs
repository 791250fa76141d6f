//! Fixed percentage options offered on the preset row.

use thiserror::Error;

/// Presets shown when configuration does not override them.
pub const DEFAULT_PRESETS: [u8; 3] = [15, 20, 25];

/// Upper bound on preset count, so every button keeps a readable width.
pub const MAX_PRESETS: usize = 9;

/// Reasons a preset list is rejected.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PresetsError {
    /// At least one preset is required.
    #[error("at least one preset is required")]
    Empty,

    /// More presets than fit on one row.
    #[error("{count} presets given, at most {MAX_PRESETS} are supported")]
    TooMany {
        /// Number of presets supplied.
        count: usize,
    },

    /// A preset outside the 0-100 percent range.
    #[error("preset {value}% is outside 0-100")]
    OutOfRange {
        /// The offending value.
        value: u32,
    },
}

/// Validated, non-empty, ordered preset list.
///
/// Smart constructor enforces 1..=MAX_PRESETS entries, each in 0..=100.
/// Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Presets(Vec<u8>);

impl Presets {
    /// Validate and build a preset list.
    pub fn new(values: Vec<u32>) -> Result<Self, PresetsError> {
        if values.is_empty() {
            return Err(PresetsError::Empty);
        }
        if values.len() > MAX_PRESETS {
            return Err(PresetsError::TooMany {
                count: values.len(),
            });
        }
        values
            .into_iter()
            .map(|value| {
                u8::try_from(value)
                    .ok()
                    .filter(|v| *v <= 100)
                    .ok_or(PresetsError::OutOfRange { value })
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }

    /// Number of presets (never zero).
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Percentage at `index`, if in bounds.
    pub fn get(&self, index: usize) -> Option<u8> {
        self.0.get(index).copied()
    }

    /// Index of the last preset.
    pub fn last_index(&self) -> usize {
        self.0.len() - 1
    }

    /// Index of the middle preset (upper middle for even counts).
    pub fn middle_index(&self) -> usize {
        self.0.len() / 2
    }

    /// Presets in display order.
    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }
}

impl Default for Presets {
    fn default() -> Self {
        Self(DEFAULT_PRESETS.to_vec())
    }
}
