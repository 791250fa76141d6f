//! Main prompt rendering: framed box, preset row, custom row, hint line.

use super::constants::{
    BUTTON_GAP, BUTTON_HEIGHT, CUSTOM_LABEL, EDITING_HINT, NAVIGATION_HINT, PROMPT_BOX_HEIGHT,
    PROMPT_BOX_MARGIN_X, PROMPT_TITLE,
};
use super::styles::PromptStyles;
use crate::state::SelectionState;
use ratatui::{
    layout::{Alignment, Constraint, Layout, Margin, Rect},
    style::Style,
    widgets::{Block, BorderType, Paragraph},
    Frame,
};

/// Render the tip prompt for a state snapshot.
///
/// Layout (top to bottom, inside a double border):
/// - title
/// - one button per preset, sharing the width evenly
/// - spacer
/// - full-width custom button, showing typed digits while editing
///
/// The hint line sits on the last terminal row.
pub fn render_prompt(frame: &mut Frame, state: &SelectionState, styles: &PromptStyles) {
    let area = frame.area();
    let box_area = prompt_box_area(area);

    let block = Block::bordered()
        .border_type(BorderType::Double)
        .style(styles.frame);
    let inner = block.inner(box_area);
    frame.render_widget(block, box_area);

    let [title_row, presets_row, _spacer, custom_row] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(BUTTON_HEIGHT),
        Constraint::Length(1),
        Constraint::Length(BUTTON_HEIGHT),
    ])
    .areas(inner);

    frame.render_widget(
        Paragraph::new(PROMPT_TITLE)
            .alignment(Alignment::Center)
            .style(styles.frame),
        title_row,
    );

    let presets = state.presets().as_slice();
    let cells = Layout::horizontal(vec![Constraint::Fill(1); presets.len()])
        .spacing(BUTTON_GAP)
        .split(presets_row.inner(Margin::new(1, 0)));
    for (index, (percent, cell)) in presets.iter().zip(cells.iter()).enumerate() {
        let focused = state.focused_preset() == Some(index);
        render_button(frame, *cell, &format!("{percent}%"), styles.button_style(focused));
    }

    render_button(
        frame,
        custom_row.inner(Margin::new(1, 0)),
        &custom_label(state),
        styles.button_style(state.custom_focused()),
    );

    let hint_row = Rect {
        x: area.x,
        y: area.bottom().saturating_sub(1),
        width: area.width,
        height: area.height.min(1),
    };
    frame.render_widget(Paragraph::new(hint_text(state)).style(styles.hint), hint_row);
}

/// Label of the custom button.
pub fn custom_label(state: &SelectionState) -> String {
    if state.custom_editing() {
        format!("{CUSTOM_LABEL}: {}%", state.custom_digits().as_str())
    } else {
        CUSTOM_LABEL.to_string()
    }
}

/// Key hint for the current mode.
pub fn hint_text(state: &SelectionState) -> &'static str {
    if state.custom_editing() {
        EDITING_HINT
    } else {
        NAVIGATION_HINT
    }
}

/// Filled button with its label centred on the first line.
fn render_button(frame: &mut Frame, area: Rect, label: &str, style: Style) {
    frame.render_widget(
        Paragraph::new(label)
            .alignment(Alignment::Center)
            .style(style),
        area,
    );
}

/// Full-width box (minus side margins), vertically centred.
fn prompt_box_area(area: Rect) -> Rect {
    let height = PROMPT_BOX_HEIGHT.min(area.height);
    Rect {
        x: area.x + PROMPT_BOX_MARGIN_X.min(area.width / 2),
        y: area.y + (area.height - height) / 2,
        width: area.width.saturating_sub(2 * PROMPT_BOX_MARGIN_X),
        height,
    }
}
