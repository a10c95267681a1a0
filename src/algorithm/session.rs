//! One generated arena and everything derived from it
//!
//! A session owns the grid, its distance field and speed model. Each call to
//! [`Session::plan`] runs a search from scratch and hands back a brand new
//! [`Replay`]; replacing a run means dropping the old replay whole, queue and
//! in-flight step included.

use clap::ValueEnum;
use log::info;

use crate::algorithm::maze::{generate_maze, rooms_along};
use crate::algorithm::replay::Replay;
use crate::algorithm::scatter::scatter_obstacles;
use crate::algorithm::search::{Move, SearchStrategy, Strategy};
use crate::analysis::distance::DistanceField;
use crate::analysis::speed::{SpeedModel, SpeedProfile};
use crate::io::configuration::{
    BASE_TIME_UNIT_MS, DEFAULT_HEIGHT, DEFAULT_OBSTACLE_DENSITY, DEFAULT_WIDTH,
    MAX_GRID_DIMENSION,
};
use crate::io::error::{MazeError, Result, invalid_parameter};
use crate::math::random::RandomSource;
use crate::spatial::grid::{Cell, Grid};

/// How obstacles are laid out
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Layout {
    /// Spanning-tree maze; every room is reachable
    Maze,
    /// Uniformly scattered blocks; the goal may be cut off
    Scatter,
}

/// Coordinate of the last room cell along an axis of the given length
const fn last_room(length: usize) -> usize {
    (rooms_along(length) * 2).saturating_sub(1)
}

/// Arena parameters consumed when a session is created
#[derive(Debug, Clone, PartialEq)]
pub struct SessionConfig {
    /// Number of columns
    pub width: usize,
    /// Number of rows
    pub height: usize,
    /// Token start cell
    pub start: Cell,
    /// Search goal
    pub end: Cell,
    /// Obstacle layout
    pub layout: Layout,
    /// Share of cells blocked by [`Layout::Scatter`]
    pub obstacle_density: f64,
    /// Duration of one step at multiplier 1.0, in milliseconds
    pub base_time_ms: f64,
    /// Candidate multipliers and their weighting
    pub speed_profile: SpeedProfile,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::new(DEFAULT_WIDTH, DEFAULT_HEIGHT)
    }
}

impl SessionConfig {
    /// Maze arena from `(1, 1)` to the last room cell of the opposite corner
    ///
    /// For odd sizes that is `(width - 2, height - 2)`; an even size leaves an
    /// uncarvable column or row before the border, so the end moves one further in.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            start: Cell::new(1, 1),
            end: Cell::new(last_room(width), last_room(height)),
            layout: Layout::Maze,
            obstacle_density: DEFAULT_OBSTACLE_DENSITY,
            base_time_ms: BASE_TIME_UNIT_MS,
            speed_profile: SpeedProfile::default(),
        }
    }

    /// Reject configurations that cannot produce a usable arena
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A dimension is zero or exceeds [`MAX_GRID_DIMENSION`]
    /// - The maze layout has no room for an interior room cell
    /// - The start or end cell lies outside the grid
    /// - The obstacle density is outside `[0, 1)`
    /// - The base time unit is not finite and positive
    /// - The speed profile is invalid
    pub fn validate(&self) -> Result<()> {
        for (parameter, value) in [("width", self.width), ("height", self.height)] {
            if value == 0 || value > MAX_GRID_DIMENSION {
                return Err(invalid_parameter(
                    parameter,
                    &value,
                    &format!("must be between 1 and {MAX_GRID_DIMENSION}"),
                ));
            }
        }

        if self.layout == Layout::Maze
            && (rooms_along(self.width) == 0 || rooms_along(self.height) == 0)
        {
            return Err(MazeError::DegenerateGrid {
                width: self.width,
                height: self.height,
            });
        }

        for (parameter, cell) in [("start", self.start), ("end", self.end)] {
            if cell.x >= self.width || cell.y >= self.height {
                return Err(invalid_parameter(
                    parameter,
                    &cell,
                    &format!("outside the {}x{} grid", self.width, self.height),
                ));
            }
        }

        if !(0.0..1.0).contains(&self.obstacle_density) {
            return Err(invalid_parameter(
                "obstacle_density",
                &self.obstacle_density,
                &"must lie in [0, 1)",
            ));
        }

        if !self.base_time_ms.is_finite() || self.base_time_ms <= 0.0 {
            return Err(invalid_parameter(
                "base_time_ms",
                &self.base_time_ms,
                &"must be finite and positive",
            ));
        }

        self.speed_profile.validate()
    }
}

/// Generated arena with its pacing model
#[derive(Debug, Clone)]
pub struct Session {
    config: SessionConfig,
    grid: Grid,
    speed: SpeedModel,
}

impl Session {
    /// Validate the configuration and lay out a fresh arena from `seed`
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The configuration fails [`SessionConfig::validate`]
    /// - The generated layout blocks the start or end cell
    pub fn new(config: SessionConfig, seed: u64) -> Result<Self> {
        config.validate()?;

        let mut random = RandomSource::new(seed);
        let grid = match config.layout {
            Layout::Maze => generate_maze(config.width, config.height, &mut random)?.grid,
            Layout::Scatter => scatter_obstacles(
                config.width,
                config.height,
                config.obstacle_density,
                config.start,
                config.end,
                &mut random,
            ),
        };

        let session = Self::from_grid(config, grid)?;
        info!(
            "Laid out {:?} arena {}x{} with {} blocked cells (seed {seed})",
            session.config.layout,
            session.grid.width(),
            session.grid.height(),
            session.grid.blocked_count()
        );
        Ok(session)
    }

    /// Build a session around an existing grid
    ///
    /// The grid's dimensions replace the configured ones.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The start or end cell lies outside the grid
    /// - The start or end cell is blocked
    pub fn from_grid(mut config: SessionConfig, grid: Grid) -> Result<Self> {
        config.width = grid.width();
        config.height = grid.height();

        for (parameter, cell) in [("start", config.start), ("end", config.end)] {
            if !grid.contains(cell) {
                return Err(invalid_parameter(
                    parameter,
                    &cell,
                    &format!("outside the {}x{} grid", grid.width(), grid.height()),
                ));
            }
            if grid.is_blocked(cell) {
                return Err(MazeError::BlockedEndpoint { cell });
            }
        }

        let field = DistanceField::from_grid(&grid);
        let speed = SpeedModel::new(field, &config.speed_profile, config.base_time_ms);
        Ok(Self {
            config,
            grid,
            speed,
        })
    }

    /// Run a search and return its raw move list
    pub fn find_moves(&self, strategy: Strategy) -> Option<Vec<Move>> {
        strategy.find_moves(&self.grid, self.config.start, self.config.end)
    }

    /// Run a search and queue its moves on a fresh token at the start cell
    ///
    /// Returns `None` when no path exists.
    pub fn plan(&self, strategy: Strategy) -> Option<Replay> {
        let moves = self.find_moves(strategy)?;
        Some(Replay::with_moves(
            self.config.start,
            self.grid.width(),
            self.grid.height(),
            moves,
        ))
    }

    /// Configuration the arena was built from
    pub const fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Obstacle map
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Step pacing model
    pub const fn speed(&self) -> &SpeedModel {
        &self.speed
    }
}
