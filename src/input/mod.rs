//! Input event sources.
//!
//! This module provides the sources the event loop blocks on:
//! - [`CrosstermEventSource`]: reads the terminal through crossterm
//! - [`ScriptedEventSource`]: replays a fixed sequence (tests, headless runs)
//!
//! Both hand out [`LogicalKey`]s; raw key codes never reach the state machine.

use crate::config::KeyBindings;
use crate::model::{InputMode, LogicalKey};
use crossterm::event::{self, Event, KeyEvent};
use std::collections::VecDeque;
use std::io;
use std::time::Duration;
use tracing::trace;

/// A blocking supplier of logical key events.
pub trait EventSource {
    /// Block until the next event is available.
    ///
    /// `mode` tells the source how to interpret context-sensitive keys.
    /// Returns `Ok(None)` when the source gives up waiting (idle timeout or
    /// exhausted script).
    fn next_key(&mut self, mode: InputMode) -> io::Result<Option<LogicalKey>>;
}

/// Terminal-backed event source.
///
/// Non-key events (resize, focus, mouse, paste) come back as
/// [`LogicalKey::Other`], so the loop repaints without changing state.
#[derive(Debug, Clone)]
pub struct CrosstermEventSource {
    bindings: KeyBindings,
    idle_timeout: Option<Duration>,
}

impl CrosstermEventSource {
    /// `idle_timeout` of `None` blocks until an event arrives.
    pub fn new(bindings: KeyBindings, idle_timeout: Option<Duration>) -> Self {
        Self {
            bindings,
            idle_timeout,
        }
    }
}

impl EventSource for CrosstermEventSource {
    fn next_key(&mut self, mode: InputMode) -> io::Result<Option<LogicalKey>> {
        if let Some(timeout) = self.idle_timeout {
            if !event::poll(timeout)? {
                return Ok(None);
            }
        }

        let key = match event::read()? {
            Event::Key(key) => self.bindings.resolve(key, mode),
            _ => LogicalKey::Other,
        };
        trace!(?key, ?mode, "input event");
        Ok(Some(key))
    }
}

#[derive(Debug, Clone)]
enum Scripted {
    Logical(LogicalKey),
    Raw(KeyEvent),
}

/// Replays a fixed list of events, then reports exhaustion as `Ok(None)`.
///
/// Raw key events are resolved through [`KeyBindings`] with the mode the
/// loop passes in, so context-sensitive mapping is exercised too.
#[derive(Debug, Clone, Default)]
pub struct ScriptedEventSource {
    script: VecDeque<Scripted>,
    bindings: KeyBindings,
    modes_seen: Vec<InputMode>,
}

impl ScriptedEventSource {
    /// Script of already-resolved logical keys.
    pub fn from_keys(keys: impl IntoIterator<Item = LogicalKey>) -> Self {
        Self {
            script: keys.into_iter().map(Scripted::Logical).collect(),
            ..Self::default()
        }
    }

    /// Script of raw key events, resolved with the given bindings.
    pub fn from_key_events(events: impl IntoIterator<Item = KeyEvent>, bindings: KeyBindings) -> Self {
        Self {
            script: events.into_iter().map(Scripted::Raw).collect(),
            bindings,
            modes_seen: Vec::new(),
        }
    }

    /// Events not yet consumed.
    pub fn remaining(&self) -> usize {
        self.script.len()
    }

    /// Input mode passed on each `next_key` call, in order.
    pub fn modes_seen(&self) -> &[InputMode] {
        &self.modes_seen
    }
}

impl EventSource for ScriptedEventSource {
    fn next_key(&mut self, mode: InputMode) -> io::Result<Option<LogicalKey>> {
        self.modes_seen.push(mode);
        Ok(self.script.pop_front().map(|next| match next {
            Scripted::Logical(key) => key,
            Scripted::Raw(event) => self.bindings.resolve(event, mode),
        }))
    }
}
