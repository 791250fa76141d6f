//! Prompt styling configuration.
//!
//! Provides the colour scheme for the prompt box, buttons and the low-tip
//! alert, with a monochrome fallback.

use ratatui::style::{Color, Modifier, Style};

// ===== ColorConfig =====

/// Configuration for color output.
///
/// Determines whether colors should be enabled or disabled based on:
/// - `--no-color` CLI flag
/// - `NO_COLOR` environment variable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Create a ColorConfig from CLI args and environment.
    ///
    /// Priority (first match wins):
    /// 1. `--no-color` flag (disables colors)
    /// 2. `NO_COLOR` env var (any value disables colors)
    /// 3. Default: colors enabled
    pub fn from_env_and_args(no_color_flag: bool) -> Self {
        let enabled = !no_color_flag && std::env::var_os("NO_COLOR").is_none();
        Self { enabled }
    }

    /// Explicitly enabled or disabled, ignoring the environment.
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

// ===== PromptStyles =====

/// Styles used by the prompt renderer.
///
/// With colours: white-on-blue buttons, blue-on-white focus, black-on-white
/// frame, white-on-red alert. Without colours the focused button is
/// reversed and bold so focus stays visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PromptStyles {
    /// Prompt box border and title.
    pub frame: Style,
    /// Unfocused buttons.
    pub button: Style,
    /// The button with navigation focus.
    pub focused_button: Style,
    /// Low-tip confirmation box.
    pub alert: Style,
    /// Bottom hint line.
    pub hint: Style,
}

impl PromptStyles {
    /// Styles for the given colour configuration.
    pub fn with_color_config(config: ColorConfig) -> Self {
        let hint = Style::default().add_modifier(Modifier::DIM);
        if config.colors_enabled() {
            Self {
                frame: Style::default().fg(Color::Black).bg(Color::White),
                button: Style::default().fg(Color::White).bg(Color::Blue),
                focused_button: Style::default().fg(Color::Blue).bg(Color::White),
                alert: Style::default().fg(Color::White).bg(Color::Red),
                hint,
            }
        } else {
            Self {
                frame: Style::default(),
                button: Style::default(),
                focused_button: Style::default().add_modifier(Modifier::REVERSED | Modifier::BOLD),
                alert: Style::default().add_modifier(Modifier::BOLD),
                hint,
            }
        }
    }

    /// Style for a button given whether it has focus.
    pub fn button_style(&self, focused: bool) -> Style {
        if focused {
            self.focused_button
        } else {
            self.button
        }
    }
}

impl Default for PromptStyles {
    fn default() -> Self {
        Self::with_color_config(ColorConfig::new(true))
    }
}
