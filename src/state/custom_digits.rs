//! Bounded digit buffer for custom tip entry.

use std::num::ParseFloatError;

/// Maximum number of digits a custom entry may hold.
pub const MAX_CUSTOM_DIGITS: usize = 3;

/// Largest custom percentage accepted at entry time.
pub const MAX_CUSTOM_PERCENT: u32 = 100;

/// Digits typed so far for a custom percentage.
///
/// Kept as characters and parsed only on confirm. `push` checks the
/// *prospective* string, so the buffer never holds more than
/// [`MAX_CUSTOM_DIGITS`] characters or a value above [`MAX_CUSTOM_PERCENT`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomDigits(String);

impl CustomDigits {
    /// Empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a digit if the result stays within bounds.
    ///
    /// Returns `false` (and leaves the buffer untouched) when the digit is
    /// not in `0..=9`, the buffer is full, or the value would exceed 100.
    pub fn push(&mut self, digit: u8) -> bool {
        let Some(ch) = char::from_digit(u32::from(digit), 10) else {
            return false;
        };
        if self.0.len() >= MAX_CUSTOM_DIGITS {
            return false;
        }

        let mut prospective = self.0.clone();
        prospective.push(ch);
        match prospective.parse::<u32>() {
            Ok(value) if value <= MAX_CUSTOM_PERCENT => {
                self.0 = prospective;
                true
            }
            _ => false,
        }
    }

    /// Remove the last digit. No-op on an empty buffer.
    pub fn pop(&mut self) -> Option<char> {
        self.0.pop()
    }

    /// Discard everything typed.
    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Nothing typed yet.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of digits typed.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// The digits as typed.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Interpret the digits as a non-negative decimal percentage.
    pub fn parse(&self) -> Result<f64, ParseFloatError> {
        self.0.parse::<f64>()
    }
}
