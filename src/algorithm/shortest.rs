//! Shortest-path search over the blocked grid
//!
//! Nodes are expanded in [`Heuristic`] order from a [`MinHeap`]. The Manhattan
//! estimate is consistent on a unit-cost grid, so the first time the goal is
//! popped its distance is optimal. A cell is closed when popped and never
//! expanded again; stale duplicate entries are skipped.

use log::debug;

use crate::algorithm::heap::MinHeap;
use crate::algorithm::search::{Heuristic, Move, SearchStrategy, passable};
use crate::spatial::cellset::CellSet;
use crate::spatial::grid::{Cell, Direction, Grid};

/// Priority-queue search returning only forward moves
#[derive(Debug, Clone, Copy, Default)]
pub struct ShortestPath;

/// Expanded search node, owned by the arena of a single run
#[derive(Debug, Clone, Copy)]
pub struct SearchNode {
    /// Cell this node stands on
    pub cell: Cell,
    /// Steps taken from the start
    pub distance: usize,
    /// Arena index of the predecessor node
    pub parent: Option<usize>,
}

#[derive(Debug, Clone, Copy)]
struct Entry {
    priority: usize,
    node: usize,
}

type Frontier = MinHeap<Entry, fn(&Entry, &Entry) -> bool>;

fn earlier(lhs: &Entry, rhs: &Entry) -> bool {
    lhs.priority < rhs.priority
}

/// Walk predecessor links back from `goal_node` and emit moves start-first
fn reconstruct(arena: &[SearchNode], goal_node: usize) -> Vec<Move> {
    let mut moves = Vec::new();
    let mut current = arena.get(goal_node);
    while let Some(node) = current {
        let Some(parent) = node.parent.and_then(|index| arena.get(index)) else {
            break;
        };
        if let Some(direction) = parent.cell.direction_to(node.cell) {
            moves.push(Move::forward(direction));
        }
        current = Some(parent);
    }
    moves.reverse();
    moves
}

impl SearchStrategy for ShortestPath {
    fn find_moves(&self, grid: &Grid, start: Cell, goal: Cell) -> Option<Vec<Move>> {
        let heuristic = Heuristic::new(goal);
        let mut closed = CellSet::new(grid.width(), grid.height());
        let mut arena = vec![SearchNode {
            cell: start,
            distance: 0,
            parent: None,
        }];
        let mut frontier = Frontier::with_comparator(earlier);
        frontier.push(Entry {
            priority: heuristic.score(start, 0),
            node: 0,
        });

        while !frontier.is_empty() {
            let entry = frontier.pop().ok()?;
            let Some(&node) = arena.get(entry.node) else {
                continue;
            };
            if !closed.insert(node.cell) {
                continue;
            }

            if node.cell == goal {
                let moves = reconstruct(&arena, entry.node);
                debug!(
                    "Shortest path to {goal}: {} moves, {} cells closed, {} nodes created",
                    moves.len(),
                    closed.count(),
                    arena.len()
                );
                return Some(moves);
            }

            for direction in Direction::EXPANSION_ORDER {
                let Some(neighbor) = grid.neighbor(node.cell, direction) else {
                    continue;
                };
                if closed.contains(neighbor) || !passable(grid, neighbor, start, goal) {
                    continue;
                }
                let distance = node.distance + 1;
                let priority = heuristic.score(neighbor, distance);
                arena.push(SearchNode {
                    cell: neighbor,
                    distance,
                    parent: Some(entry.node),
                });
                frontier.push(Entry {
                    priority,
                    node: arena.len() - 1,
                });
            }
        }

        debug!(
            "Shortest path frontier emptied after closing {} cells; {goal} unreachable",
            closed.count()
        );
        None
    }
}
