//! Trajectory CSV file reader.

use super::{Trajectory, TrajectorySample};
use crate::error::{OrbitscopeError, Result};
use std::fs::File;
use std::path::Path;

/// Number of columns a trajectory row must have: t, y1, y2, v1, v2.
const FIELDS_PER_ROW: usize = 5;

/// Read a whole trajectory file into memory.
///
/// Every line must contain exactly five comma-separated numeric values,
/// with no header row. A file with zero data rows is valid and yields an
/// empty trajectory. The first malformed row aborts the read.
pub fn read_trajectory(path: &Path) -> Result<Trajectory> {
    let file =
        File::open(path).map_err(|e| OrbitscopeError::file_open(path.to_path_buf(), e))?;

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(file);

    let mut samples = Vec::new();
    for (idx, record) in reader.records().enumerate() {
        let line = idx as u64 + 1;
        let record = record.map_err(|e| {
            OrbitscopeError::parse(path.to_path_buf(), record_line(&e, line), e.to_string())
        })?;

        if record.len() != FIELDS_PER_ROW {
            return Err(OrbitscopeError::parse(
                path.to_path_buf(),
                record.position().map(|p| p.line()).unwrap_or(line),
                format!("expected {} fields, found {}", FIELDS_PER_ROW, record.len()),
            ));
        }

        let sample: TrajectorySample = record.deserialize(None).map_err(|e| {
            OrbitscopeError::parse(
                path.to_path_buf(),
                record.position().map(|p| p.line()).unwrap_or(line),
                e.to_string(),
            )
        })?;
        samples.push(sample);
    }

    tracing::debug!(
        "Read {} samples from {}",
        samples.len(),
        path.display()
    );

    Ok(Trajectory::new(path.to_path_buf(), samples))
}

fn record_line(err: &csv::Error, fallback: u64) -> u64 {
    err.position().map(|p| p.line()).unwrap_or(fallback)
}
