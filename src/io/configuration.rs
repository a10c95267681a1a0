//! Generation constants and runtime configuration defaults

// Default arena
/// Default number of columns
pub const DEFAULT_WIDTH: usize = 21;
/// Default number of rows
pub const DEFAULT_HEIGHT: usize = 21;

/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed grid dimension
pub const MAX_GRID_DIMENSION: usize = 10_000;

/// Upper bound (inclusive) of the random weight given to each carve candidate
pub const FRONTIER_WEIGHT_MAX: usize = 1023;

/// Share of cells blocked by the scatter layout (100 of 441 on the default grid)
pub const DEFAULT_OBSTACLE_DENSITY: f64 = 0.227;

// Pacing
/// Duration of one step at multiplier 1.0, in milliseconds
pub const BASE_TIME_UNIT_MS: f64 = 150.0;
/// Candidate step-duration multipliers
pub const SPEED_MULTIPLIERS: [f64; 5] = [0.5, 0.75, 1.0, 1.5, 3.0];
/// Weighting of each multiplier, parallel to [`SPEED_MULTIPLIERS`]
pub const SPEED_PROBABILITIES: [f64; 5] = [0.1, 0.2, 0.4, 0.2, 0.1];
/// Multiplier for cells no wall can reach (grid without any blocked cell)
pub const NEUTRAL_SPEED_MULTIPLIER: f64 = 1.0;

// Output settings
/// Side length in pixels of one cell in exported images
pub const CELL_PIXEL_SIZE: u32 = 12;
/// Minimum frame delay that viewers reliably support (in milliseconds)
pub const VIEWER_MIN_FRAME_DELAY_MS: u32 = 50;
/// How many step-durations the final GIF frame is held for
pub const FINAL_FRAME_HOLD: u32 = 20;

// Progress bar display settings
/// Width of the strategy label in front of the progress bar
pub const PROGRESS_LABEL_WIDTH: usize = 14;
