//! Heuristic depth-first search that keeps its exploration visible
//!
//! At every cell the unvisited neighbours are tried in ascending heuristic
//! order (stable, so [`Direction::EXPANSION_ORDER`] breaks ties). Each step
//! into a neighbour emits a forward move; each dead end emits the opposite
//! move marked as a backtrack. The first route that touches the goal wins,
//! which is not necessarily the shortest one.
//!
//! The recursion is run on an explicit stack so long corridors cannot
//! overflow the call stack; the emitted move sequence is the same as the
//! recursive formulation.

use log::debug;

use crate::algorithm::search::{Heuristic, Move, SearchStrategy, passable};
use crate::spatial::cellset::CellSet;
use crate::spatial::grid::{Cell, Direction, Grid};

/// Depth-first search ordered by [`Heuristic`], with replayed backtracking
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicDfs;

/// One level of the depth-first descent
struct Frame {
    distance: usize,
    /// Direction taken from the parent frame, `None` at the start cell
    via: Option<Direction>,
    children: Vec<(Cell, Direction)>,
    next_child: usize,
}

struct Expansion<'a> {
    grid: &'a Grid,
    heuristic: Heuristic,
    start: Cell,
    goal: Cell,
}

impl Expansion<'_> {
    /// Unvisited passable neighbours of `cell`, sorted by heuristic score
    fn children(&self, visited: &CellSet, cell: Cell, distance: usize) -> Vec<(Cell, Direction)> {
        let mut scored = Direction::EXPANSION_ORDER
            .iter()
            .filter_map(|&direction| {
                let neighbor = self.grid.neighbor(cell, direction)?;
                (!visited.contains(neighbor)
                    && passable(self.grid, neighbor, self.start, self.goal))
                .then(|| {
                    (
                        self.heuristic.score(neighbor, distance + 1),
                        neighbor,
                        direction,
                    )
                })
            })
            .collect::<Vec<_>>();
        scored.sort_by_key(|&(score, _, _)| score);
        scored
            .into_iter()
            .map(|(_, neighbor, direction)| (neighbor, direction))
            .collect()
    }

    fn frame(
        &self,
        visited: &mut CellSet,
        cell: Cell,
        distance: usize,
        via: Option<Direction>,
    ) -> Frame {
        visited.insert(cell);
        Frame {
            distance,
            via,
            children: self.children(visited, cell, distance),
            next_child: 0,
        }
    }
}

impl SearchStrategy for HeuristicDfs {
    fn find_moves(&self, grid: &Grid, start: Cell, goal: Cell) -> Option<Vec<Move>> {
        let mut moves = Vec::new();
        if start == goal {
            return Some(moves);
        }

        let expansion = Expansion {
            grid,
            heuristic: Heuristic::new(goal),
            start,
            goal,
        };
        let mut visited = CellSet::new(grid.width(), grid.height());
        let mut stack = vec![expansion.frame(&mut visited, start, 0, None)];

        while let Some(frame) = stack.last_mut() {
            let mut chosen = None;
            while let Some(&(child, direction)) = frame.children.get(frame.next_child) {
                frame.next_child += 1;
                // A sibling subtree may have reached this cell since the frame was built
                if !visited.contains(child) {
                    chosen = Some((child, direction, frame.distance + 1));
                    break;
                }
            }

            if let Some((child, direction, distance)) = chosen {
                moves.push(Move::forward(direction));
                if child == goal {
                    debug!(
                        "DFS reached {goal} after {} moves, {} cells visited",
                        moves.len(),
                        visited.count()
                    );
                    return Some(moves);
                }
                let next = expansion.frame(&mut visited, child, distance, Some(direction));
                stack.push(next);
            } else if let Some(direction) = stack.pop().and_then(|done| done.via) {
                moves.push(Move::backtrack(direction.opposite()));
            }
        }

        debug!(
            "DFS exhausted {} cells without reaching {goal} ({} exploratory moves dropped)",
            visited.count(),
            moves.len()
        );
        None
    }
}
