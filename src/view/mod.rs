//! TUI rendering and terminal management (impure shell)

pub mod confirm_dialog;
pub mod constants;
pub mod prompt;
mod styles;

pub use confirm_dialog::render_low_tip_confirmation;
pub use prompt::render_prompt;
pub use styles::{ColorConfig, PromptStyles};

use crate::config::{KeyBindings, ResolvedConfig};
use crate::input::{CrosstermEventSource, EventSource};
use crate::model::{AppError, EnvironmentError, Outcome, TerminalStream};
use crate::state::{transition, SelectionState};
use crossterm::{
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::io::{self, IsTerminal};
use tracing::{debug, info, warn};

/// Paints a state snapshot.
///
/// Implementations must not keep or mutate the state; they are called once
/// per loop iteration before blocking on input.
pub trait Renderer {
    /// Draw one frame for `state`.
    fn render(&mut self, state: &SelectionState) -> io::Result<()>;
}

/// Renderer drawing onto a ratatui terminal.
///
/// Generic over backend to support testing with TestBackend.
pub struct TerminalRenderer<B>
where
    B: Backend,
{
    terminal: Terminal<B>,
    styles: PromptStyles,
}

impl<B: Backend> TerminalRenderer<B> {
    /// Wrap an already initialised terminal.
    pub fn new(terminal: Terminal<B>, styles: PromptStyles) -> Self {
        Self { terminal, styles }
    }

    /// Underlying terminal, for buffer inspection in tests.
    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }
}

impl<B: Backend> Renderer for TerminalRenderer<B> {
    fn render(&mut self, state: &SelectionState) -> io::Result<()> {
        let styles = &self.styles;
        self.terminal.draw(|frame| {
            render_prompt(frame, state, styles);
            if state.pending_low_tip_confirmation() {
                render_low_tip_confirmation(frame, styles);
            }
        })?;
        Ok(())
    }
}

/// Run the prompt loop until it produces an outcome.
///
/// render → block for input → transition, repeated. A source that gives up
/// waiting (idle timeout) ends the prompt as if the user quit.
pub fn run_event_loop<R, S>(
    mut state: SelectionState,
    renderer: &mut R,
    source: &mut S,
) -> io::Result<Outcome>
where
    R: Renderer + ?Sized,
    S: EventSource + ?Sized,
{
    loop {
        renderer.render(&state)?;

        let Some(key) = source.next_key(state.input_mode())? else {
            warn!("no input before idle timeout, quitting");
            return Ok(Outcome::Quit);
        };

        let (next, outcome) = transition(state, key);
        state = next;
        debug!(?key, mode = ?state.mode(), "transition");

        if let Some(outcome) = outcome {
            info!(?outcome, "prompt finished");
            return Ok(outcome);
        }
    }
}

/// Show the tip prompt on the controlling terminal and block until the user
/// selects a tip or quits.
///
/// # Errors
///
/// - [`EnvironmentError::NotATerminal`] if stdin or stdout is redirected;
///   checked before the terminal is touched.
/// - [`AppError::Terminal`] for terminal I/O failures. The terminal is
///   restored before returning in every case.
pub fn prompt_for_tip(config: &ResolvedConfig) -> Result<Outcome, AppError> {
    ensure_interactive_terminal()?;

    let state = SelectionState::new(config.presets.clone(), config.low_tip_threshold);
    let styles = PromptStyles::with_color_config(ColorConfig::from_env_and_args(config.no_color));
    let mut source = CrosstermEventSource::new(KeyBindings::default(), config.idle_timeout);

    info!(
        presets = ?config.presets.as_slice(),
        threshold = config.low_tip_threshold,
        "starting tip prompt"
    );

    let result = enter_terminal().and_then(|terminal| {
        let mut renderer = TerminalRenderer::new(terminal, styles);
        run_event_loop(state, &mut renderer, &mut source)
    });

    // Always restore terminal state, even when the loop failed
    let restored = restore_terminal();
    let outcome = result?;
    restored?;
    Ok(outcome)
}

/// Fail fast unless both stdin and stdout are terminals.
pub fn ensure_interactive_terminal() -> Result<(), EnvironmentError> {
    check_streams(io::stdin().is_terminal(), io::stdout().is_terminal()).inspect_err(|err| {
        let EnvironmentError::NotATerminal { stream } = err;
        warn!(%stream, "stream is not a terminal");
    })
}

fn check_streams(stdin_tty: bool, stdout_tty: bool) -> Result<(), EnvironmentError> {
    if !stdout_tty {
        return Err(EnvironmentError::NotATerminal {
            stream: TerminalStream::Stdout,
        });
    }
    if !stdin_tty {
        return Err(EnvironmentError::NotATerminal {
            stream: TerminalStream::Stdin,
        });
    }
    Ok(())
}

/// Raw mode plus alternate screen, wrapped in a ratatui terminal.
fn enter_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    Terminal::new(CrosstermBackend::new(stdout))
}

/// Restore terminal to normal state
///
/// Disables raw mode, leaves alternate screen and shows the cursor again.
fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(LeaveAlternateScreen)?;
    stdout.execute(crossterm::cursor::Show)?;
    Ok(())
}
