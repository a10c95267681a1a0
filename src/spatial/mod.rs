//! Spatial data structures for the maze grid
//!
//! This module contains spatial-related functionality including:
//! - Cell coordinates and unit moves
//! - The blocked/open grid
//! - Compact visited sets

/// Visited-cell bitset
pub mod cellset;
/// Cells, directions and the blocked/open grid
pub mod grid;

pub use cellset::CellSet;
pub use grid::{Axis, Cell, Direction, Grid};
