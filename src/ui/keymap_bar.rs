//! Keymap help bar UI component.

use crate::ui::ThemeColors;
use ratatui::{
    layout::Rect,
    style::Style,
    widgets::Paragraph,
    Frame,
};

/// Draw the keymap help bar.
pub fn draw_keymap(f: &mut Frame<'_>, area: Rect, multiple_figures: bool, colors: &ThemeColors) {
    let keymap_text = if multiple_figures {
        "q/Esc:quit | Tab/]/l:next | [/h:prev | g:grid | T:theme"
    } else {
        "q/Esc:quit | g:grid | T:theme"
    };

    let paragraph =
        Paragraph::new(keymap_text).style(Style::default().fg(colors.gray).bg(colors.bg0));

    f.render_widget(paragraph, area);
}
