//! Domain model types.
//!
//! This module contains the vocabulary shared by the state machine, the
//! input adapters and the renderer:
//! - [`LogicalKey`]: device-independent input symbols
//! - [`InputMode`]: which keys are meaningful right now
//! - [`Outcome`]: the terminal result of a prompt
//! - [`error`]: the application error taxonomy

pub mod error;
pub mod key_action;
pub mod outcome;

pub use error::{AppError, EnvironmentError, TerminalStream};
pub use key_action::{InputMode, LogicalKey};
pub use outcome::Outcome;
