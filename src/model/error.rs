//! Error types for tip-prompt.
//!
//! This module defines the error taxonomy using `thiserror`. Errors compose via `?` and
//! `From` conversions into the top-level [`AppError`].
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - Top-level application error
//!   - [`EnvironmentError`] - Not attached to an interactive terminal
//!   - [`ConfigError`] - Unreadable or invalid configuration
//!   - [`LoggingError`] - Log file could not be set up
//!   - `std::io::Error` - Terminal/TUI failures
//!
//! # Recovery Strategy
//!
//! Only fatal conditions are represented here. Malformed custom entries and
//! out-of-range digits are handled inside the state machine and never become
//! errors.

use crate::config::ConfigError;
use crate::logging::LoggingError;
use std::fmt;
use thiserror::Error;

/// Top-level application error encompassing all fatal failure modes.
#[derive(Debug, Error)]
pub enum AppError {
    /// The process is not attached to an interactive terminal.
    ///
    /// Reported before the terminal is touched or the event loop starts.
    #[error(transparent)]
    Environment(#[from] EnvironmentError),

    /// Configuration could not be loaded or failed validation.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Logging could not be initialised.
    #[error("Logging error: {0}")]
    Logging(#[from] LoggingError),

    /// Terminal or rendering error.
    ///
    /// Failures in the crossterm/ratatui layer: raw mode, alternate screen,
    /// broken pipes, event reads.
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

/// Problems with the process environment detected before the prompt starts.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum EnvironmentError {
    /// A standard stream is redirected to a file or pipe.
    ///
    /// The message is fixed; the offending stream is only recorded in the log.
    #[error("This program must be run in a terminal")]
    NotATerminal {
        /// The stream that failed the check.
        stream: TerminalStream,
    },
}

/// Standard stream checked for interactivity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminalStream {
    /// Standard input, where keys are read from.
    Stdin,
    /// Standard output, where the prompt is drawn.
    Stdout,
}

impl fmt::Display for TerminalStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TerminalStream::Stdin => f.write_str("stdin"),
            TerminalStream::Stdout => f.write_str("stdout"),
        }
    }
}
