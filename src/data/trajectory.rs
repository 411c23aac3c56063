//! Trajectory table types.

use serde::Deserialize;
use std::path::PathBuf;

/// One timestep of recorded state: time, 2D position, 2D velocity.
///
/// Field order matches the file's positional column order; input files
/// carry no header row, so the names here are assigned, never read.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct TrajectorySample {
    /// Time.
    pub t: f64,
    /// First position component.
    pub y1: f64,
    /// Second position component.
    pub y2: f64,
    /// First velocity component.
    pub v1: f64,
    /// Second velocity component.
    pub v2: f64,
}

/// An ordered table of trajectory samples read from one file.
///
/// Order is significant: it defines the path of the plotted curve.
#[derive(Debug, Clone)]
pub struct Trajectory {
    /// Path to the source file.
    pub file_path: PathBuf,
    /// Samples in input order, one per input line.
    pub samples: Vec<TrajectorySample>,
}

impl Trajectory {
    /// Create a trajectory from already-parsed samples.
    pub fn new(file_path: PathBuf, samples: Vec<TrajectorySample>) -> Self {
        Self { file_path, samples }
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether the trajectory has no samples.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// The phase-plane point series: `(y1, y2)` per sample, in input order.
    pub fn phase_points(&self) -> Vec<(f64, f64)> {
        self.samples.iter().map(|s| (s.y1, s.y2)).collect()
    }

    /// Time range `(first, last)` of the samples, if any.
    pub fn time_range(&self) -> Option<(f64, f64)> {
        let first = self.samples.first()?;
        let last = self.samples.last()?;
        Some((first.t, last.t))
    }
}
