//! Shared vocabulary of the two path search strategies
//!
//! Both strategies walk the same blocked grid with the same neighbour order
//! and the same heuristic, and both report their result as an ordered list of
//! unit moves for the replay engine.

use std::fmt;

use clap::ValueEnum;

use crate::algorithm::dfs::HeuristicDfs;
use crate::algorithm::shortest::ShortestPath;
use crate::spatial::grid::{Cell, Direction, Grid};

/// One unit move of the token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    /// Direction of travel
    pub direction: Direction,
    /// `true` for progress along the discovered path, `false` for a backtrack
    pub is_final: bool,
}

impl Move {
    /// Forward move along the path
    pub const fn forward(direction: Direction) -> Self {
        Self {
            direction,
            is_final: true,
        }
    }

    /// Exploratory move that undoes an earlier step
    pub const fn backtrack(direction: Direction) -> Self {
        Self {
            direction,
            is_final: false,
        }
    }
}

/// Net `(dx, dy)` displacement of a move sequence
pub fn displacement(moves: &[Move]) -> (i64, i64) {
    moves.iter().fold((0, 0), |(x, y), mv| {
        let (dx, dy) = mv.direction.delta();
        (x + i64::from(dx), y + i64::from(dy))
    })
}

/// A* style priority `|goal - cell|₁ + distance`
#[derive(Debug, Clone, Copy)]
pub struct Heuristic {
    goal: Cell,
}

impl Heuristic {
    /// Heuristic towards `goal`
    pub const fn new(goal: Cell) -> Self {
        Self { goal }
    }

    /// Estimated total path length through `cell`, reached after `distance` steps
    pub const fn score(&self, cell: Cell, distance: usize) -> usize {
        cell.manhattan(self.goal) + distance
    }
}

/// Whether the search may step onto `cell`
///
/// Start and goal always count as open, whatever the grid says.
pub(crate) fn passable(grid: &Grid, cell: Cell, start: Cell, goal: Cell) -> bool {
    cell == start || cell == goal || !grid.is_blocked(cell)
}

/// A search producing the moves that carry the token from `start` to `goal`
pub trait SearchStrategy {
    /// Run the search to completion
    ///
    /// Returns `None` when the goal cannot be reached.
    fn find_moves(&self, grid: &Grid, start: Cell, goal: Cell) -> Option<Vec<Move>>;
}

/// Selectable search strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Strategy {
    /// Heuristic depth-first search, replaying its backtracks
    #[value(name = "dfs")]
    HeuristicDfs,
    /// Shortest-path search with predecessor reconstruction
    #[value(name = "shortest")]
    ShortestPath,
}

impl SearchStrategy for Strategy {
    fn find_moves(&self, grid: &Grid, start: Cell, goal: Cell) -> Option<Vec<Move>> {
        match self {
            Self::HeuristicDfs => HeuristicDfs.find_moves(grid, start, goal),
            Self::ShortestPath => ShortestPath.find_moves(grid, start, goal),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::HeuristicDfs => write!(f, "heuristic DFS"),
            Self::ShortestPath => write!(f, "shortest path"),
        }
    }
}
