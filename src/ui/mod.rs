//! User interface rendering.

mod chart;
mod keymap_bar;
mod status_bar;
mod theme;

use crate::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::Style,
    widgets::{Block, Paragraph},
    Frame,
};

pub use chart::equal_aspect_bounds;
pub use theme::ThemeColors;

/// Draw the UI.
pub fn draw(f: &mut Frame<'_>, app: &App) {
    let colors = ThemeColors::from_theme(&app.theme);

    f.render_widget(
        Block::default().style(Style::default().bg(colors.bg0)),
        f.area(),
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(5),    // Chart
            Constraint::Length(1), // Status bar
            Constraint::Length(1), // Keymap bar
        ])
        .split(f.area());

    match app.active_figure() {
        Some(figure) => {
            let heading = if app.figures.len() > 1 {
                format!("{} ({}/{})", figure.title, app.active + 1, app.figures.len())
            } else {
                figure.title.clone()
            };
            chart::draw_chart(f, chunks[0], figure, &heading, app.show_grid, &colors);
        }
        None => {
            let para = Paragraph::new("No figures loaded")
                .style(Style::default().fg(colors.gray))
                .alignment(ratatui::layout::Alignment::Center);
            f.render_widget(para, chunks[0]);
        }
    }

    status_bar::draw_status(f, chunks[1], &app.status, app.active_figure(), &colors);
    keymap_bar::draw_keymap(f, chunks[2], app.figures.len() > 1, &colors);
}
