//! Phase-plane figures.
//!
//! A [`Figure`] is a fully prepared in-memory plot: the ordered point
//! series of one trajectory's `y2` vs `y1` phase plane, plus its title.
//! Figures are built once per input file and accumulated by the driver;
//! rendering them is the UI's job.

use crate::data::{read_trajectory, Trajectory};
use crate::error::Result;
use std::path::{Path, PathBuf};

/// A prepared phase-plane plot of one trajectory.
#[derive(Debug, Clone)]
pub struct Figure {
    /// Display title.
    pub title: String,
    /// Path of the source trajectory file.
    pub source: PathBuf,
    /// Curve points `(y1, y2)`, in input order.
    pub points: Vec<(f64, f64)>,
    /// Time range `(first, last)` of the source samples, if non-empty.
    pub time_range: Option<(f64, f64)>,
}

impl Figure {
    /// Build a figure from a loaded trajectory.
    pub fn from_trajectory(trajectory: &Trajectory, title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            source: trajectory.file_path.clone(),
            points: trajectory.phase_points(),
            time_range: trajectory.time_range(),
        }
    }

    /// Number of points on the curve.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the figure has no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Data bounds as `([x_min, x_max], [y_min, y_max])`, if non-empty.
    pub fn bounds(&self) -> Option<([f64; 2], [f64; 2])> {
        let mut x = [f64::INFINITY, f64::NEG_INFINITY];
        let mut y = [f64::INFINITY, f64::NEG_INFINITY];
        let mut any = false;
        for &(px, py) in &self.points {
            if !px.is_finite() || !py.is_finite() {
                continue;
            }
            x[0] = x[0].min(px);
            x[1] = x[1].max(px);
            y[0] = y[0].min(py);
            y[1] = y[1].max(py);
            any = true;
        }
        any.then_some((x, y))
    }
}

/// Load the trajectory at `path` and build its phase-plane figure.
///
/// Reads the whole file, then plots `y2` against `y1` in input order.
/// Errors from the read propagate unchanged; nothing is retried and no
/// partial figure is produced.
pub fn plot_orbit(path: &Path, title: &str) -> Result<Figure> {
    let trajectory = read_trajectory(path)?;
    tracing::info!(
        "Plotting {} ({} samples) as '{}'",
        path.display(),
        trajectory.len(),
        title
    );
    Ok(Figure::from_trajectory(&trajectory, title))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn plot_orbit_maps_y1_y2_to_curve_points() {
        let file = write_csv("0,0,0,1,1\n1,1,2,1,1\n");
        let figure = plot_orbit(file.path(), "T1").unwrap();
        assert_eq!(figure.title, "T1");
        assert_eq!(figure.points, vec![(0.0, 0.0), (1.0, 2.0)]);
        assert_eq!(figure.time_range, Some((0.0, 1.0)));
    }

    #[test]
    fn figures_from_separate_calls_are_independent() {
        let first = write_csv("0,1,1,0,0\n");
        let second = write_csv("0,5,6,0,0\n1,7,8,0,0\n");
        let a = plot_orbit(first.path(), "Orbit A").unwrap();
        let b = plot_orbit(second.path(), "Orbit B").unwrap();
        assert_eq!(a.title, "Orbit A");
        assert_eq!(b.title, "Orbit B");
        assert_eq!(a.len(), 1);
        assert_eq!(b.len(), 2);
        assert_ne!(a.points, b.points);
        assert_ne!(a.source, b.source);
    }

    #[test]
    fn empty_file_produces_an_empty_figure() {
        let file = write_csv("");
        let figure = plot_orbit(file.path(), "empty").unwrap();
        assert!(figure.is_empty());
        assert_eq!(figure.bounds(), None);
    }

    #[test]
    fn bounds_cover_all_points() {
        let file = write_csv("0,-2,1,0,0\n1,3,-4,0,0\n2,0,0,0,0\n");
        let figure = plot_orbit(file.path(), "bounds").unwrap();
        let (x, y) = figure.bounds().unwrap();
        assert_eq!(x, [-2.0, 3.0]);
        assert_eq!(y, [-4.0, 1.0]);
    }
}
