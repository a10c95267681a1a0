use log::debug;

use crate::math::random::RandomSource;
use crate::spatial::grid::{Cell, Grid};

/// Number of obstacles the scatter layout places for a given density
///
/// The count is capped so at least the endpoints stay free.
pub fn obstacle_count(width: usize, height: usize, density: f64, start: Cell, end: Cell) -> usize {
    let cells = width * height;
    let reserved = if start == end { 1 } else { 2 };
    let wanted = (density.max(0.0) * cells as f64).round() as usize;
    wanted.min(cells.saturating_sub(reserved))
}

/// Block randomly chosen cells, never the start or end
///
/// Draws uniformly until the requested count of distinct cells is blocked.
/// No connectivity is guaranteed, so the goal may be cut off.
pub fn scatter_obstacles(
    width: usize,
    height: usize,
    density: f64,
    start: Cell,
    end: Cell,
    random: &mut RandomSource,
) -> Grid {
    let mut grid = Grid::open(width, height);
    if width == 0 || height == 0 {
        return grid;
    }

    let target = obstacle_count(width, height, density, start, end);
    let mut placed = 0;
    while placed < target {
        let cell = Cell::new(
            random.random_int(0, width - 1),
            random.random_int(0, height - 1),
        );
        if cell == start || cell == end || grid.is_blocked(cell) {
            continue;
        }
        grid.set_blocked(cell, true);
        placed += 1;
    }

    debug!("Scattered {placed} obstacles over {width}x{height} cells");
    grid
}
