//! tip-prompt
//!
//! Interactive terminal prompt for choosing a tip percentage.
//!
//! Pure core / impure shell: [`state`] holds the selection state machine,
//! [`view`] and [`input`] adapt it to a real terminal, [`config`] and
//! [`logging`] provide the ambient setup used by the binary.

pub mod config;
pub mod input;
pub mod logging;
pub mod model;
pub mod state;
pub mod view;

pub use model::Outcome;
pub use view::prompt_for_tip;

#[cfg(test)]
mod test_harness;

#[cfg(test)]
mod tests;
