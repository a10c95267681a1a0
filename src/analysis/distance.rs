//! Multi-source breadth-first distance from the nearest blocked cell

use std::collections::VecDeque;

use ndarray::Array2;

use crate::spatial::grid::{Cell, Direction, Grid};

/// Distance recorded for cells that no blocked cell can reach
pub const UNREACHABLE: u32 = u32::MAX;

/// Step count from every cell to its nearest blocked cell
///
/// Blocked cells hold 0. Open cells hold the 4-adjacency hop count to the
/// closest blocked cell, or [`UNREACHABLE`] when the grid has no blocked
/// cell at all.
#[derive(Debug, Clone)]
pub struct DistanceField {
    distances: Array2<u32>,
    blocked_count: usize,
}

impl DistanceField {
    /// Flood outwards from every blocked cell at once
    pub fn from_grid(grid: &Grid) -> Self {
        let mut distances = Array2::from_elem((grid.width(), grid.height()), UNREACHABLE);
        let mut queue = VecDeque::new();

        for cell in grid.blocked_cells() {
            if let Some(slot) = distances.get_mut(cell.index()) {
                *slot = 0;
            }
            queue.push_back(cell);
        }
        let blocked_count = queue.len();

        while let Some(current) = queue.pop_front() {
            let Some(&base) = distances.get(current.index()) else {
                continue;
            };
            let next = base.saturating_add(1);
            for direction in Direction::EXPANSION_ORDER {
                let Some(neighbor) = grid.neighbor(current, direction) else {
                    continue;
                };
                if let Some(slot) = distances.get_mut(neighbor.index()) {
                    if *slot > next {
                        *slot = next;
                        queue.push_back(neighbor);
                    }
                }
            }
        }

        Self {
            distances,
            blocked_count,
        }
    }

    /// Distance at a cell, [`UNREACHABLE`] for cells off the grid
    pub fn distance(&self, cell: Cell) -> u32 {
        self.distances
            .get(cell.index())
            .copied()
            .unwrap_or(UNREACHABLE)
    }

    /// Largest finite distance on the grid
    pub fn max_distance(&self) -> Option<u32> {
        self.distances
            .iter()
            .copied()
            .filter(|&d| d != UNREACHABLE)
            .max()
    }

    /// Number of blocked cells the field was seeded from
    pub const fn blocked_count(&self) -> usize {
        self.blocked_count
    }

    /// Total number of cells
    pub fn cell_count(&self) -> usize {
        self.distances.len()
    }

    /// Fraction of open cells at each distance
    ///
    /// Index `d` holds the share of open cells whose distance is `d`; index 0
    /// is always zero. The denominator is the open-cell count, so the entries
    /// sum to 1 unless the grid is fully open or fully blocked.
    pub fn histogram(&self) -> Vec<f64> {
        let Some(max) = self.max_distance() else {
            return Vec::new();
        };
        let mut counts = vec![0usize; max as usize + 1];
        for &d in &self.distances {
            if d > 0 && d != UNREACHABLE {
                if let Some(count) = counts.get_mut(d as usize) {
                    *count += 1;
                }
            }
        }

        let open_cells = self.cell_count().saturating_sub(self.blocked_count);
        if open_cells == 0 {
            return vec![0.0; counts.len()];
        }
        counts
            .into_iter()
            .map(|count| count as f64 / open_cells as f64)
            .collect()
    }

    /// Underlying `[x, y]`-indexed distance array
    pub const fn distances(&self) -> &Array2<u32> {
        &self.distances
    }
}
