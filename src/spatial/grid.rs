//! Blocked/open grid with cell coordinates and unit moves
//!
//! Coordinates are zero-based: `x` indexes columns and `y` indexes rows.
//! The backing array is indexed `[x, y]`, so its shape is `(width, height)`.

use std::fmt;

use ndarray::Array2;

/// A cell coordinate inside a grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    /// Column index
    pub x: usize,
    /// Row index
    pub y: usize,
}

impl Cell {
    /// Create a cell at column `x`, row `y`
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Step one cell in `direction`, staying within a `width` x `height` grid
    pub fn step(self, direction: Direction, width: usize, height: usize) -> Option<Self> {
        let (dx, dy) = direction.delta();
        let x = self.x.checked_add_signed(dx as isize)?;
        let y = self.y.checked_add_signed(dy as isize)?;
        (x < width && y < height).then_some(Self { x, y })
    }

    /// Manhattan distance to another cell
    pub const fn manhattan(self, other: Self) -> usize {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }

    /// Direction of a unit step from `self` to an adjacent `other`
    pub const fn direction_to(self, other: Self) -> Option<Direction> {
        if other.y == self.y {
            if other.x + 1 == self.x {
                return Some(Direction::Left);
            }
            if self.x + 1 == other.x {
                return Some(Direction::Right);
            }
        } else if other.x == self.x {
            if other.y + 1 == self.y {
                return Some(Direction::Up);
            }
            if self.y + 1 == other.y {
                return Some(Direction::Down);
            }
        }
        None
    }

    pub(crate) const fn index(self) -> [usize; 2] {
        [self.x, self.y]
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Screen axis a move travels along
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Column axis (left/right)
    Horizontal,
    /// Row axis (up/down)
    Vertical,
}

/// One of the four unit moves on the grid
///
/// `Up` decreases `y` and `Down` increases it, matching row order on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// `x - 1`
    Left,
    /// `x + 1`
    Right,
    /// `y - 1`
    Up,
    /// `y + 1`
    Down,
}

impl Direction {
    /// Neighbour expansion order used by both search strategies
    pub const EXPANSION_ORDER: [Self; 4] = [Self::Left, Self::Right, Self::Down, Self::Up];

    /// Neighbour order used when scanning for carve candidates
    pub const CARVE_ORDER: [Self; 4] = [Self::Left, Self::Right, Self::Up, Self::Down];

    /// Coordinate delta `(dx, dy)` of this move
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
            Self::Up => (0, -1),
            Self::Down => (0, 1),
        }
    }

    /// The move that undoes this one
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
            Self::Up => Self::Down,
            Self::Down => Self::Up,
        }
    }

    /// Axis this move travels along
    pub const fn axis(self) -> Axis {
        match self {
            Self::Left | Self::Right => Axis::Horizontal,
            Self::Up | Self::Down => Axis::Vertical,
        }
    }

    /// Signed unit offset along [`Self::axis`]
    pub const fn sign(self) -> i32 {
        match self {
            Self::Left | Self::Up => -1,
            Self::Right | Self::Down => 1,
        }
    }
}

/// Boolean obstacle map, `true` where a cell is impassable
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    blocked: Array2<bool>,
}

impl Grid {
    /// Create a fully open grid
    pub fn open(width: usize, height: usize) -> Self {
        Self {
            blocked: Array2::from_elem((width, height), false),
        }
    }

    /// Wrap an existing `[x, y]`-indexed obstacle array
    pub const fn from_blocked(blocked: Array2<bool>) -> Self {
        Self { blocked }
    }

    /// Build a grid from text rows, `#` marking blocked cells
    ///
    /// Rows are `y`, characters are `x`. Short rows are padded as open.
    pub fn from_rows(rows: &[&str]) -> Self {
        let height = rows.len();
        let width = rows.iter().map(|row| row.chars().count()).max().unwrap_or(0);
        let mut grid = Self::open(width, height);
        for (y, row) in rows.iter().enumerate() {
            for (x, ch) in row.chars().enumerate() {
                grid.set_blocked(Cell::new(x, y), ch == '#');
            }
        }
        grid
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.blocked.dim().0
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.blocked.dim().1
    }

    /// Total number of cells
    pub fn cell_count(&self) -> usize {
        self.blocked.len()
    }

    /// Check whether a cell lies on the grid
    pub fn contains(&self, cell: Cell) -> bool {
        cell.x < self.width() && cell.y < self.height()
    }

    /// Check whether a cell is impassable
    ///
    /// Cells outside the grid count as blocked.
    pub fn is_blocked(&self, cell: Cell) -> bool {
        self.blocked.get(cell.index()).copied().unwrap_or(true)
    }

    /// Mark a cell blocked or open; out-of-range cells are ignored
    pub fn set_blocked(&mut self, cell: Cell, blocked: bool) {
        if let Some(value) = self.blocked.get_mut(cell.index()) {
            *value = blocked;
        }
    }

    /// Neighbour of `cell` in `direction`, if it lies on the grid
    pub fn neighbor(&self, cell: Cell, direction: Direction) -> Option<Cell> {
        cell.step(direction, self.width(), self.height())
    }

    /// Number of blocked cells
    pub fn blocked_count(&self) -> usize {
        self.blocked.iter().filter(|&&blocked| blocked).count()
    }

    /// Iterate over every open cell in `[x, y]` order
    pub fn open_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.blocked
            .indexed_iter()
            .filter(|&(_, &blocked)| !blocked)
            .map(|((x, y), _)| Cell::new(x, y))
    }

    /// Iterate over every blocked cell in `[x, y]` order
    pub fn blocked_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.blocked
            .indexed_iter()
            .filter(|&(_, &blocked)| blocked)
            .map(|((x, y), _)| Cell::new(x, y))
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height() {
            for x in 0..self.width() {
                let ch = if self.is_blocked(Cell::new(x, y)) {
                    '#'
                } else {
                    '.'
                };
                write!(f, "{ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
