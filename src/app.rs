//! Application state and logic.

use crate::figure::Figure;

/// Application theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    /// Gruvbox dark theme.
    GruvboxDark,
    /// Gruvbox light theme.
    GruvboxLight,
}

impl Theme {
    /// Get the next theme in the cycle.
    pub fn next(self) -> Self {
        match self {
            Theme::GruvboxDark => Theme::GruvboxLight,
            Theme::GruvboxLight => Theme::GruvboxDark,
        }
    }

    /// Get the theme name.
    pub fn name(self) -> &'static str {
        match self {
            Theme::GruvboxDark => "Gruvbox Dark",
            Theme::GruvboxLight => "Gruvbox Light",
        }
    }
}

/// Application state.
///
/// Holds the figures prepared by the driver. Which figure is shown is
/// viewer state only; the figures themselves never change after loading.
#[derive(Debug)]
pub struct App {
    /// All loaded figures, in load order.
    pub figures: Vec<Figure>,
    /// Index of the figure currently shown.
    pub active: usize,
    /// Whether background grid lines are drawn.
    pub show_grid: bool,
    /// Status message.
    pub status: String,
    /// Current theme.
    pub theme: Theme,
}

impl App {
    /// Create a new application instance over already-loaded figures.
    pub fn new(figures: Vec<Figure>) -> Self {
        let status = match figures.first() {
            Some(figure) => format!("Showing '{}'", figure.title),
            None => "No figures loaded".to_string(),
        };
        Self {
            figures,
            active: 0,
            show_grid: true,
            status,
            theme: Theme::GruvboxDark,
        }
    }

    /// The figure currently shown, if any.
    pub fn active_figure(&self) -> Option<&Figure> {
        self.figures.get(self.active)
    }

    /// Switch to the next figure, wrapping around.
    pub fn next_figure(&mut self) {
        if self.figures.is_empty() {
            return;
        }
        self.active = (self.active + 1) % self.figures.len();
        self.announce_active();
    }

    /// Switch to the previous figure, wrapping around.
    pub fn prev_figure(&mut self) {
        if self.figures.is_empty() {
            return;
        }
        self.active = (self.active + self.figures.len() - 1) % self.figures.len();
        self.announce_active();
    }

    /// Toggle background grid lines.
    pub fn toggle_grid(&mut self) {
        self.show_grid = !self.show_grid;
        self.status = format!("Grid: {}", if self.show_grid { "ON" } else { "OFF" });
    }

    /// Cycle to the next theme.
    pub fn cycle_theme(&mut self) {
        self.theme = self.theme.next();
        self.status = format!("Theme: {}", self.theme.name());
    }

    fn announce_active(&mut self) {
        if let Some(figure) = self.figures.get(self.active) {
            self.status = format!(
                "Figure {}/{}: '{}'",
                self.active + 1,
                self.figures.len(),
                figure.title
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn figure(title: &str) -> Figure {
        Figure {
            title: title.to_string(),
            source: title.into(),
            points: vec![(0.0, 0.0)],
            time_range: Some((0.0, 1.0)),
        }
    }

    #[test]
    fn figure_switching_wraps_both_ways() {
        let mut app = App::new(vec![figure("a"), figure("b")]);
        assert_eq!(app.active, 0);
        app.next_figure();
        assert_eq!(app.active_figure().unwrap().title, "b");
        app.next_figure();
        assert_eq!(app.active_figure().unwrap().title, "a");
        app.prev_figure();
        assert_eq!(app.active_figure().unwrap().title, "b");
    }

    #[test]
    fn switching_with_no_figures_is_a_no_op() {
        let mut app = App::new(vec![]);
        app.next_figure();
        app.prev_figure();
        assert_eq!(app.active, 0);
        assert!(app.active_figure().is_none());
    }

    #[test]
    fn grid_toggle_flips_state_and_status() {
        let mut app = App::new(vec![figure("a")]);
        assert!(app.show_grid);
        app.toggle_grid();
        assert!(!app.show_grid);
        assert_eq!(app.status, "Grid: OFF");
    }

    #[test]
    fn theme_cycles_through_both_palettes() {
        let mut app = App::new(vec![]);
        assert_eq!(app.theme, Theme::GruvboxDark);
        app.cycle_theme();
        assert_eq!(app.theme, Theme::GruvboxLight);
        app.cycle_theme();
        assert_eq!(app.theme, Theme::GruvboxDark);
    }
}
