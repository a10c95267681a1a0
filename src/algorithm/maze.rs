//! Randomized spanning-tree maze carving
//!
//! Odd/odd interior cells are rooms; the cells between them are grass that can
//! be carved into a passage. Starting from one random room, candidate passages
//! are drawn from a heap keyed on random weights, which gives the same
//! selection order as randomized Prim's algorithm. A passage is carved only if
//! the room beyond it is still unvisited, so the open cells always form a
//! single loop-free tree.

use log::debug;
use ndarray::Array2;

use crate::algorithm::heap::MinHeap;
use crate::io::configuration::FRONTIER_WEIGHT_MAX;
use crate::io::error::{MazeError, Result};
use crate::math::random::RandomSource;
use crate::spatial::grid::{Cell, Direction, Grid};

/// Carving state of a single cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    /// Permanent wall (border, or a passage whose far room was already reached)
    Wall,
    /// Unvisited room cell
    Room,
    /// Removable wall material between rooms
    Grass,
    /// Grass already queued as a carve candidate
    Frontier,
    /// Visited room or carved passage
    Carved,
}

/// Generated maze plus the counts needed to check the spanning-tree shape
#[derive(Debug, Clone)]
pub struct Maze {
    /// Resulting obstacle map
    pub grid: Grid,
    /// Number of room cells in the arena
    pub room_count: usize,
    /// Number of passages carved between rooms
    pub passage_count: usize,
}

#[derive(Debug, Clone, Copy)]
struct Candidate {
    weight: usize,
    passage: Cell,
    room: Cell,
}

type Frontier = MinHeap<Candidate, fn(&Candidate, &Candidate) -> bool>;

fn lighter(lhs: &Candidate, rhs: &Candidate) -> bool {
    lhs.weight < rhs.weight
}

/// Number of room cells along one axis of the given length
pub const fn rooms_along(length: usize) -> usize {
    length.saturating_sub(1) / 2
}

/// Check whether a cell is an odd/odd interior room position
pub const fn is_room_position(cell: Cell, width: usize, height: usize) -> bool {
    cell.x % 2 == 1 && cell.y % 2 == 1 && cell.x + 1 < width && cell.y + 1 < height
}

fn initial_tiles(width: usize, height: usize) -> Array2<Tile> {
    Array2::from_shape_fn((width, height), |(x, y)| {
        if x == 0 || y == 0 || x + 1 == width || y + 1 == height {
            Tile::Wall
        } else if is_room_position(Cell::new(x, y), width, height) {
            Tile::Room
        } else {
            Tile::Grass
        }
    })
}

fn tile_at(tiles: &Array2<Tile>, cell: Cell) -> Tile {
    tiles.get(cell.index()).copied().unwrap_or(Tile::Wall)
}

fn set_tile(tiles: &mut Array2<Tile>, cell: Cell, tile: Tile) {
    if let Some(slot) = tiles.get_mut(cell.index()) {
        *slot = tile;
    }
}

/// Queue every grass cell around `room` whose far side is an unvisited room
fn enqueue_candidates(
    tiles: &mut Array2<Tile>,
    frontier: &mut Frontier,
    room: Cell,
    random: &mut RandomSource,
) {
    let (width, height) = tiles.dim();
    for direction in Direction::CARVE_ORDER {
        let Some(passage) = room.step(direction, width, height) else {
            continue;
        };
        if tile_at(tiles, passage) != Tile::Grass {
            continue;
        }
        let Some(beyond) = passage.step(direction, width, height) else {
            continue;
        };
        if tile_at(tiles, beyond) == Tile::Room {
            set_tile(tiles, passage, Tile::Frontier);
            frontier.push(Candidate {
                weight: random.random_int(0, FRONTIER_WEIGHT_MAX),
                passage,
                room: beyond,
            });
        }
    }
}

/// Carve a maze on a `width` x `height` arena
///
/// Border cells are always blocked. Every room cell ends up open and
/// connected to every other through exactly one chain of passages.
///
/// # Errors
///
/// Returns [`MazeError::DegenerateGrid`] if the arena has no interior room cell
pub fn generate_maze(width: usize, height: usize, random: &mut RandomSource) -> Result<Maze> {
    let rooms_x = rooms_along(width);
    let rooms_y = rooms_along(height);
    if rooms_x == 0 || rooms_y == 0 {
        return Err(MazeError::DegenerateGrid { width, height });
    }

    let mut tiles = initial_tiles(width, height);
    let seed = Cell::new(
        random.random_int(0, rooms_x - 1) * 2 + 1,
        random.random_int(0, rooms_y - 1) * 2 + 1,
    );
    set_tile(&mut tiles, seed, Tile::Carved);

    let mut frontier = Frontier::with_comparator(lighter);
    enqueue_candidates(&mut tiles, &mut frontier, seed, random);

    let mut passage_count = 0;
    let mut pops = 0usize;
    while !frontier.is_empty() {
        let candidate = frontier.pop()?;
        pops += 1;
        if tile_at(&tiles, candidate.room) == Tile::Room {
            set_tile(&mut tiles, candidate.passage, Tile::Carved);
            set_tile(&mut tiles, candidate.room, Tile::Carved);
            passage_count += 1;
            enqueue_candidates(&mut tiles, &mut frontier, candidate.room, random);
        } else {
            set_tile(&mut tiles, candidate.passage, Tile::Wall);
        }
    }

    let room_count = rooms_x * rooms_y;
    debug!(
        "Carved {passage_count} passages between {room_count} rooms from seed room {seed} ({pops} candidates drawn)"
    );

    let blocked = tiles.mapv(|tile| tile != Tile::Carved);
    Ok(Maze {
        grid: Grid::from_blocked(blocked),
        room_count,
        passage_count,
    })
}
