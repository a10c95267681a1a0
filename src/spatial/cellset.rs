use bitvec::prelude::*;
use std::fmt;

use crate::spatial::grid::Cell;

/// Fixed-size bitset of grid cells, used as a visited set during search
///
/// Cells are packed column-major (`x * height + y`) to match the `[x, y]`
/// layout of the grid arrays. Cells outside the bounds are never members.
#[derive(Clone, Debug)]
pub struct CellSet {
    bits: BitVec,
    width: usize,
    height: usize,
}

impl CellSet {
    /// Create an empty set for a `width` x `height` grid
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            bits: bitvec![0; width * height],
            width,
            height,
        }
    }

    const fn slot(&self, cell: Cell) -> Option<usize> {
        if cell.x < self.width && cell.y < self.height {
            Some(cell.x * self.height + cell.y)
        } else {
            None
        }
    }

    /// Insert a cell, returning `true` if it was not already present
    pub fn insert(&mut self, cell: Cell) -> bool {
        let Some(slot) = self.slot(cell) else {
            return false;
        };
        let was_present = self.bits.get(slot).as_deref() == Some(&true);
        self.bits.set(slot, true);
        !was_present
    }

    /// Test cell membership
    pub fn contains(&self, cell: Cell) -> bool {
        self.slot(cell)
            .is_some_and(|slot| self.bits.get(slot).as_deref() == Some(&true))
    }

    /// Test if no cells are present
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// Count cells in the set
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }
}

impl fmt::Display for CellSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CellSet({} of {}x{} cells)",
            self.count(),
            self.width,
            self.height
        )
    }
}
