//! Phase-plane chart rendering.

use crate::figure::Figure;
use crate::ui::ThemeColors;
use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::Span,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph},
    Frame,
};

/// Terminal characters are roughly twice as tall as they are wide, so a
/// cell column covers half the visual distance of a cell row.
const CHAR_ASPECT_RATIO: f64 = 2.0;

/// Margin added around the data before equal-aspect widening.
const BOUNDS_MARGIN: f64 = 0.05;

/// Draw one figure as a phase-plane chart filling `area`.
pub fn draw_chart(
    f: &mut Frame<'_>,
    area: Rect,
    figure: &Figure,
    heading: &str,
    show_grid: bool,
    colors: &ThemeColors,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.bg2))
        .title(Span::styled(
            format!(" {} ", heading),
            Style::default().fg(colors.yellow),
        ))
        .title_alignment(Alignment::Center);

    let inner = block.inner(area);

    let Some((data_x, data_y)) = figure.bounds() else {
        f.render_widget(block, area);
        let para = Paragraph::new("No data to display")
            .style(Style::default().fg(colors.gray))
            .alignment(Alignment::Center);
        f.render_widget(para, inner);
        return;
    };

    let (x_bounds, y_bounds) =
        equal_aspect_bounds(pad_bounds(data_x), pad_bounds(data_y), inner.width, inner.height);

    // Grid lines are extra datasets drawn under the curve; each line is a
    // two-point segment spanning the plot.
    let grid_lines = if show_grid {
        grid_segments(x_bounds, y_bounds)
    } else {
        Vec::new()
    };

    let mut datasets: Vec<Dataset<'_>> = grid_lines
        .iter()
        .map(|segment| {
            Dataset::default()
                .marker(ratatui::symbols::Marker::Dot)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(colors.gray))
                .data(segment)
        })
        .collect();

    datasets.push(
        Dataset::default()
            .name(figure.title.as_str())
            .marker(ratatui::symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(colors.aqua))
            .data(&figure.points),
    );

    let x_axis = Axis::default()
        .title("y1")
        .style(Style::default().fg(colors.fg0))
        .bounds(x_bounds)
        .labels(vec![
            format_axis_label(x_bounds[0]),
            format_axis_label((x_bounds[0] + x_bounds[1]) / 2.0),
            format_axis_label(x_bounds[1]),
        ]);

    let y_axis = Axis::default()
        .title("y2")
        .style(Style::default().fg(colors.fg0))
        .bounds(y_bounds)
        .labels(vec![
            format_axis_label(y_bounds[0]),
            format_axis_label((y_bounds[0] + y_bounds[1]) / 2.0),
            format_axis_label(y_bounds[1]),
        ]);

    let chart = Chart::new(datasets)
        .block(block)
        .x_axis(x_axis)
        .y_axis(y_axis);

    f.render_widget(chart, area);
}

/// Pad a bounds pair by a small margin so the curve clears the axes.
///
/// A degenerate (zero-width) range is widened to a unit interval.
fn pad_bounds(bounds: [f64; 2]) -> [f64; 2] {
    let range = bounds[1] - bounds[0];
    if range <= 0.0 {
        return [bounds[0] - 1.0, bounds[1] + 1.0];
    }
    let margin = range * BOUNDS_MARGIN;
    [bounds[0] - margin, bounds[1] + margin]
}

/// Widen one axis so a data unit spans the same visual distance on both.
///
/// The visual width of the plot in "square cells" is `width / 2` because
/// of the terminal character aspect ratio. Whichever axis is denser in
/// data units per visual cell is kept; the other is widened around its
/// center. Bounds only ever grow, so no data point is pushed out of view.
pub fn equal_aspect_bounds(
    x_bounds: [f64; 2],
    y_bounds: [f64; 2],
    width: u16,
    height: u16,
) -> ([f64; 2], [f64; 2]) {
    if width == 0 || height == 0 {
        return (x_bounds, y_bounds);
    }

    let visual_width = width as f64 / CHAR_ASPECT_RATIO;
    let visual_height = height as f64;

    let x_range = x_bounds[1] - x_bounds[0];
    let y_range = y_bounds[1] - y_bounds[0];
    if x_range <= 0.0 || y_range <= 0.0 {
        return (x_bounds, y_bounds);
    }

    let units_per_cell_x = x_range / visual_width;
    let units_per_cell_y = y_range / visual_height;
    let scale = units_per_cell_x.max(units_per_cell_y);

    let target_x = scale * visual_width;
    let target_y = scale * visual_height;

    (
        widen_around_center(x_bounds, target_x),
        widen_around_center(y_bounds, target_y),
    )
}

fn widen_around_center(bounds: [f64; 2], target_range: f64) -> [f64; 2] {
    let range = bounds[1] - bounds[0];
    if target_range <= range {
        return bounds;
    }
    let center = (bounds[0] + bounds[1]) / 2.0;
    let half = target_range / 2.0;
    // Clamp so rounding can never pull a bound inward.
    [(center - half).min(bounds[0]), (center + half).max(bounds[1])]
}

/// Build grid line segments at "nice" intervals covering the plot bounds.
fn grid_segments(x_bounds: [f64; 2], y_bounds: [f64; 2]) -> Vec<Vec<(f64, f64)>> {
    let mut segments = Vec::new();

    for x in tick_positions(x_bounds) {
        segments.push(vec![(x, y_bounds[0]), (x, y_bounds[1])]);
    }
    for y in tick_positions(y_bounds) {
        segments.push(vec![(x_bounds[0], y), (x_bounds[1], y)]);
    }

    segments
}

/// Tick positions inside `bounds` at a nice step.
fn tick_positions(bounds: [f64; 2]) -> Vec<f64> {
    let range = bounds[1] - bounds[0];
    if !(range > 0.0) || !range.is_finite() {
        return Vec::new();
    }

    let step = nice_step(range);
    let mut ticks = Vec::new();
    let mut tick = (bounds[0] / step).ceil() * step;
    while tick <= bounds[1] {
        // Skip ticks sitting on the plot edge; the axes already mark it.
        if tick > bounds[0] {
            ticks.push(tick);
        }
        tick += step;
    }
    ticks
}

/// Round a range down to a 1/2/5 step giving roughly 4-8 grid lines.
fn nice_step(range: f64) -> f64 {
    let raw = range / 5.0;
    let magnitude = 10f64.powf(raw.log10().floor());
    let normalized = raw / magnitude;
    let factor = if normalized < 1.5 {
        1.0
    } else if normalized < 3.5 {
        2.0
    } else if normalized < 7.5 {
        5.0
    } else {
        10.0
    };
    factor * magnitude
}

/// Format axis label with smart precision.
fn format_axis_label(val: f64) -> String {
    if !val.is_finite() {
        return "?".to_string();
    }
    let abs_val = val.abs();
    if abs_val == 0.0 {
        "0".to_string()
    } else if !(1e-2..1e5).contains(&abs_val) {
        format!("{:.1e}", val)
    } else if abs_val >= 100.0 {
        format!("{:.0}", val)
    } else if abs_val >= 1.0 {
        format!("{:.2}", val)
    } else {
        format!("{:.3}", val)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_aspect_widens_the_sparser_axis() {
        // 40 cells wide (20 visual), 20 cells tall. x spans 10 units,
        // y spans 2: y must widen to match x's units per cell.
        let (x, y) = equal_aspect_bounds([0.0, 10.0], [0.0, 2.0], 40, 20);
        assert_eq!(x, [0.0, 10.0]);
        let y_range = y[1] - y[0];
        let x_units_per_cell = 10.0 / 20.0;
        let y_units_per_cell = y_range / 20.0;
        assert!((x_units_per_cell - y_units_per_cell).abs() < 1e-9);
        // Widening is centered on the original range.
        assert!(((y[0] + y[1]) / 2.0 - 1.0).abs() < 1e-9);
    }

    #[test]
    fn equal_aspect_never_shrinks_bounds() {
        let (x, y) = equal_aspect_bounds([-1.5, 1.5], [-1.0, 1.0], 80, 24);
        assert!(x[0] <= -1.5 && x[1] >= 1.5);
        assert!(y[0] <= -1.0 && y[1] >= 1.0);
    }

    #[test]
    fn equal_aspect_with_zero_area_is_identity() {
        let (x, y) = equal_aspect_bounds([0.0, 1.0], [0.0, 1.0], 0, 24);
        assert_eq!(x, [0.0, 1.0]);
        assert_eq!(y, [0.0, 1.0]);
    }

    #[test]
    fn pad_bounds_handles_degenerate_range() {
        assert_eq!(pad_bounds([3.0, 3.0]), [2.0, 4.0]);
        let padded = pad_bounds([0.0, 10.0]);
        assert!(padded[0] < 0.0 && padded[1] > 10.0);
    }

    #[test]
    fn nice_step_picks_one_two_five() {
        assert_eq!(nice_step(10.0), 2.0);
        assert_eq!(nice_step(5.0), 1.0);
        assert_eq!(nice_step(1.0), 0.2);
        assert_eq!(nice_step(100.0), 20.0);
        assert_eq!(nice_step(0.5), 0.1);
    }

    #[test]
    fn tick_positions_stay_inside_bounds() {
        let ticks = tick_positions([-1.0, 1.0]);
        assert!(!ticks.is_empty());
        for t in &ticks {
            assert!(*t > -1.0 && *t <= 1.0);
        }
    }

    #[test]
    fn grid_segments_span_the_full_plot() {
        let segments = grid_segments([0.0, 10.0], [0.0, 4.0]);
        assert!(!segments.is_empty());
        for segment in &segments {
            assert_eq!(segment.len(), 2);
        }
        // Horizontal lines run the whole x range.
        let horizontal = segments
            .iter()
            .find(|s| s[0].1 == s[1].1)
            .expect("at least one horizontal grid line");
        assert_eq!(horizontal[0].0, 0.0);
        assert_eq!(horizontal[1].0, 10.0);
    }
}
