//! Status bar UI component.

use crate::figure::Figure;
use crate::ui::ThemeColors;
use ratatui::{layout::Rect, style::Style, widgets::Paragraph, Frame};

/// Draw the status bar.
///
/// Shows the active figure's source file, sample count and time range,
/// falling back to the application status message when nothing is loaded.
pub fn draw_status(
    f: &mut Frame<'_>,
    area: Rect,
    status: &str,
    figure: Option<&Figure>,
    colors: &ThemeColors,
) {
    let text = match figure {
        Some(figure) => {
            let time = match figure.time_range {
                Some((start, end)) => format!("t {:.3}..{:.3}", start, end),
                None => "no samples".to_string(),
            };
            format!(
                "{} | {} points | {} | {}",
                figure.source.display(),
                figure.len(),
                time,
                status
            )
        }
        None => status.to_string(),
    };

    let paragraph = Paragraph::new(text).style(Style::default().fg(colors.fg0).bg(colors.bg1));

    f.render_widget(paragraph, area);
}
