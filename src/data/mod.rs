//! Data reading and representation.
//!
//! This module handles reading trajectory CSV files and representing them
//! as ordered tables of samples.

mod reader;
mod trajectory;

pub use reader::read_trajectory;
pub use trajectory::{Trajectory, TrajectorySample};
