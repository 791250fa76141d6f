//! Rendering test harness.
//!
//! Draws a state snapshot onto a ratatui `TestBackend` and offers helpers for
//! asserting on the resulting buffer.

use crate::state::SelectionState;
use crate::view::{PromptStyles, Renderer, TerminalRenderer};
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::Terminal;

/// Convert a ratatui buffer to a string representation for snapshot testing.
///
/// Captures the visual output character by character, preserving layout.
/// Empty lines are removed to keep snapshots clean.
pub fn buffer_to_string(buffer: &Buffer) -> String {
    let area = buffer.area();
    let mut lines = Vec::new();

    for y in area.top()..area.bottom() {
        let mut line = String::new();
        for x in area.left()..area.right() {
            line.push_str(buffer[(x, y)].symbol());
        }
        let trimmed = line.trim_end();
        if !trimmed.is_empty() {
            lines.push(trimmed.to_string());
        }
    }

    lines.join("\n")
}

/// Position of the first cell where `text` starts, scanning row by row.
///
/// Only meaningful for single-width text.
pub fn find_text(buffer: &Buffer, text: &str) -> Option<(u16, u16)> {
    let area = buffer.area();
    let wanted: Vec<String> = text.chars().map(String::from).collect();

    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            let fits = x as usize + wanted.len() <= area.right() as usize;
            if fits
                && wanted
                    .iter()
                    .enumerate()
                    .all(|(i, ch)| buffer[(x + i as u16, y)].symbol() == ch.as_str())
            {
                return Some((x, y));
            }
        }
    }
    None
}

/// Renderer over a fresh `TestBackend` of the given size.
pub fn test_renderer(width: u16, height: u16, styles: PromptStyles) -> TerminalRenderer<TestBackend> {
    let terminal = Terminal::new(TestBackend::new(width, height)).expect("test terminal");
    TerminalRenderer::new(terminal, styles)
}

/// Render one state and return the resulting buffer.
pub fn render_to_buffer(state: &SelectionState, width: u16, height: u16) -> Buffer {
    let mut renderer = test_renderer(width, height, PromptStyles::default());
    renderer.render(state).expect("render");
    renderer.terminal().backend().buffer().clone()
}
