//! Orbitscope - A terminal-based phase-plane plot viewer.
//!
//! Orbitscope reads trajectory tables produced by an orbital-mechanics
//! simulator from comma-separated text files and renders their `y2` vs `y1`
//! phase planes as interactive terminal charts.
//!
//! # Example
//!
//! ```ignore
//! use orbitscope::plot_orbit;
//! use std::path::Path;
//!
//! // Load one trajectory and build its figure
//! let figure = plot_orbit(Path::new("arenstorf_1_dt001.csv"), "Arenstorf #1")?;
//! println!("'{}' has {} points", figure.title, figure.len());
//! ```

#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]
#![deny(unsafe_code)]

pub mod app;
pub mod data;
pub mod error;
pub mod figure;
pub mod ui;

pub use error::{OrbitscopeError, Result};
pub use figure::{plot_orbit, Figure};
