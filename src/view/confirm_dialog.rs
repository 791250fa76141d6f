//! Low-tip confirmation overlay.
//!
//! A small alert box centred over the prompt with a `(y/n)` line below it.

use super::constants::{LOW_TIP_ANSWER_HINT, LOW_TIP_MESSAGE};
use super::styles::PromptStyles;
use ratatui::{
    layout::{Alignment, Rect},
    widgets::{Block, Clear, Padding, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// Render the "are you sure" overlay.
///
/// Clears the background under the alert box so prompt content does not
/// bleed through.
pub fn render_low_tip_confirmation(frame: &mut Frame, styles: &PromptStyles) {
    let area = frame.area();
    let message_width = LOW_TIP_MESSAGE.width() as u16;
    let dialog = dialog_area(message_width, area);

    frame.render_widget(Clear, dialog);
    frame.render_widget(
        Paragraph::new(LOW_TIP_MESSAGE)
            .alignment(Alignment::Center)
            .block(
                Block::bordered()
                    .padding(Padding::horizontal(1))
                    .style(styles.alert),
            ),
        dialog,
    );

    let answer_row = Rect {
        x: dialog.x + 2,
        y: dialog.bottom(),
        width: (LOW_TIP_ANSWER_HINT.width() as u16).min(area.width.saturating_sub(dialog.x + 2)),
        height: 1,
    }
    .intersection(area);
    if !answer_row.is_empty() {
        frame.render_widget(Paragraph::new(LOW_TIP_ANSWER_HINT), answer_row);
    }
}

/// Three-row box wide enough for the message plus border and padding,
/// centred on the middle row of the terminal.
fn dialog_area(message_width: u16, area: Rect) -> Rect {
    let width = (message_width + 4).min(area.width);
    let height = 3.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height / 2).saturating_sub(1).min(area.height - height),
        width,
        height,
    }
}
