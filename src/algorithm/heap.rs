//! Comparator-driven binary min-heap
//!
//! Unlike [`std::collections::BinaryHeap`], the order is supplied as a strict
//! "precedes" predicate, so callers can key elements on a single field and
//! keep deterministic tie behaviour across runs.

use crate::io::error::{MazeError, Result};

/// Strict-less-than predicate used by [`MinHeap::new`]
fn less_than<T: PartialOrd>(lhs: &T, rhs: &T) -> bool {
    lhs < rhs
}

/// Array-backed binary min-heap ordered by a strict comparator
///
/// `cmp(a, b)` returns `true` iff `a` strictly precedes `b`. For every
/// non-root element, `cmp(element, parent)` is `false`.
pub struct MinHeap<T, F = fn(&T, &T) -> bool> {
    data: Vec<T>,
    cmp: F,
}

impl<T: PartialOrd> MinHeap<T> {
    /// Create a heap ordered by `<`
    pub fn new() -> Self {
        Self::with_comparator(less_than::<T>)
    }
}

impl<T: PartialOrd> Default for MinHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, F> MinHeap<T, F>
where
    F: Fn(&T, &T) -> bool,
{
    /// Create a heap ordered by a custom strict comparator
    pub const fn with_comparator(cmp: F) -> Self {
        Self {
            data: Vec::new(),
            cmp,
        }
    }

    /// Number of stored elements
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Test if the heap holds no elements
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Drop every element
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Insert an element in O(log n)
    pub fn push(&mut self, value: T) {
        self.data.push(value);
        self.sift_up(self.data.len() - 1);
    }

    /// Borrow the minimum element without removing it
    ///
    /// # Errors
    ///
    /// Returns [`MazeError::EmptyHeap`] if the heap is empty
    pub fn top(&self) -> Result<&T> {
        self.data.first().ok_or(MazeError::EmptyHeap)
    }

    /// Remove and return the minimum element in O(log n)
    ///
    /// # Errors
    ///
    /// Returns [`MazeError::EmptyHeap`] if the heap is empty
    pub fn pop(&mut self) -> Result<T> {
        if self.data.is_empty() {
            return Err(MazeError::EmptyHeap);
        }
        // The last element takes the root slot before sifting down
        let root = self.data.swap_remove(0);
        self.sift_down(0);
        Ok(root)
    }

    fn precedes(&self, lhs: usize, rhs: usize) -> bool {
        match (self.data.get(lhs), self.data.get(rhs)) {
            (Some(a), Some(b)) => (self.cmp)(a, b),
            _ => false,
        }
    }

    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if !self.precedes(index, parent) {
                break;
            }
            self.data.swap(index, parent);
            index = parent;
        }
    }

    fn sift_down(&mut self, mut index: usize) {
        loop {
            let left = 2 * index + 1;
            let right = left + 1;
            let mut smallest = index;
            // Left child is checked first, so it wins ties against the right
            if self.precedes(left, smallest) {
                smallest = left;
            }
            if self.precedes(right, smallest) {
                smallest = right;
            }
            if smallest == index {
                break;
            }
            self.data.swap(index, smallest);
            index = smallest;
        }
    }
}
