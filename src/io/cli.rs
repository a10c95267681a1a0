//! Command-line interface: lay out an arena, search it, replay and export

use crate::algorithm::replay::Replay;
use crate::algorithm::search::{Strategy, displacement};
use crate::algorithm::session::{Layout, Session, SessionConfig};
use crate::io::configuration::{
    BASE_TIME_UNIT_MS, DEFAULT_HEIGHT, DEFAULT_OBSTACLE_DENSITY, DEFAULT_SEED, DEFAULT_WIDTH,
};
use crate::io::error::Result;
use crate::io::image::{Overlay, export_grid_as_png};
use crate::io::progress::ReplayProgress;
use crate::io::visualization::{ReplayRecorder, drive};
use crate::spatial::grid::Cell;
use clap::Parser;
use log::{info, warn};
use std::path::PathBuf;
use std::time::Instant;

/// Parse an `x,y` cell coordinate
///
/// # Errors
///
/// Returns a message if the text is not two comma-separated integers
pub fn parse_cell(text: &str) -> std::result::Result<Cell, String> {
    let (x, y) = text
        .split_once(',')
        .ok_or_else(|| format!("expected x,y but got '{text}'"))?;
    let x = x
        .trim()
        .parse::<usize>()
        .map_err(|e| format!("bad x in '{text}': {e}"))?;
    let y = y
        .trim()
        .parse::<usize>()
        .map_err(|e| format!("bad y in '{text}': {e}"))?;
    Ok(Cell::new(x, y))
}

#[derive(Parser)]
#[command(name = "mazetrail")]
#[command(
    author,
    version,
    about = "Carve a random maze, search it, and replay the token's moves"
)]
/// Command-line arguments for a single maze run
pub struct Cli {
    /// Number of columns (odd values give a closed border of rooms)
    #[arg(short, long, default_value_t = DEFAULT_WIDTH)]
    pub width: usize,

    /// Number of rows
    #[arg(short = 'H', long, default_value_t = DEFAULT_HEIGHT)]
    pub height: usize,

    /// Random seed for reproducible layouts
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Search strategy
    #[arg(long, value_enum, default_value_t = Strategy::ShortestPath)]
    pub strategy: Strategy,

    /// Obstacle layout
    #[arg(short, long, value_enum, default_value_t = Layout::Maze)]
    pub layout: Layout,

    /// Share of cells blocked by the scatter layout
    #[arg(short, long, default_value_t = DEFAULT_OBSTACLE_DENSITY)]
    pub density: f64,

    /// Start cell as x,y
    #[arg(long, value_parser = parse_cell, default_value = "1,1")]
    pub start: Cell,

    /// End cell as x,y (defaults to the last room cell in the opposite corner)
    #[arg(long, value_parser = parse_cell)]
    pub end: Option<Cell>,

    /// Duration of one step at speed multiplier 1.0, in milliseconds
    #[arg(short, long, default_value_t = BASE_TIME_UNIT_MS)]
    pub base_time: f64,

    /// Write the arena and final trail as a PNG
    #[arg(short, long, value_name = "PNG")]
    pub output: Option<PathBuf>,

    /// Write the whole replay as an animated GIF
    #[arg(short, long, value_name = "GIF")]
    pub animate: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Session configuration described by the flags
    pub fn session_config(&self) -> SessionConfig {
        let mut config = SessionConfig::new(self.width, self.height);
        config.start = self.start;
        if let Some(end) = self.end {
            config.end = end;
        }
        config.layout = self.layout;
        config.obstacle_density = self.density;
        config.base_time_ms = self.base_time;
        config
    }
}

/// Outcome of one command-line run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunSummary {
    /// Whether the search reached the end cell
    pub found: bool,
    /// Number of moves replayed
    pub moves: usize,
    /// Number of those moves that were backtracks
    pub backtracks: usize,
    /// Sum of all step durations, in milliseconds
    pub animated_ms: f64,
}

/// Orchestrates layout, search, replay and export for one invocation
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a runner for the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Lay out the arena, search it, replay the moves and write requested files
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid, the replay is
    /// rejected, or an export fails
    pub fn run(&self) -> Result<RunSummary> {
        let started = Instant::now();
        let session = Session::new(self.cli.session_config(), self.cli.seed)?;
        let config = session.config();

        let Some(moves) = session.find_moves(self.cli.strategy) else {
            warn!(
                "No path from {} to {} using {}",
                config.start, config.end, self.cli.strategy
            );
            if let Some(path) = &self.cli.output {
                let overlay = Overlay {
                    lit: None,
                    token: Some(config.start),
                    goal: Some(config.end),
                };
                export_grid_as_png(session.grid(), &overlay, path)?;
            }
            return Ok(RunSummary {
                found: false,
                moves: 0,
                backtracks: 0,
                animated_ms: 0.0,
            });
        };

        let (dx, dy) = displacement(&moves);
        let backtracks = moves.iter().filter(|mv| !mv.is_final).count();
        info!(
            "{} found {} moves ({backtracks} backtracks), net displacement ({dx}, {dy})",
            self.cli.strategy,
            moves.len()
        );

        let mut replay = Replay::with_moves(
            config.start,
            session.grid().width(),
            session.grid().height(),
            moves,
        );

        let mut recorder = ReplayRecorder::new(session.grid().clone(), config.start, config.end);
        let progress = self
            .cli
            .should_show_progress()
            .then(|| ReplayProgress::new(replay.pending(), &self.cli.strategy.to_string()));

        let completions = drive(&mut replay, session.speed(), &mut recorder, |done| {
            if let Some(bar) = &progress {
                bar.update(done);
            }
        })?;

        let animated_ms = recorder.total_duration_ms();
        if let Some(bar) = &progress {
            bar.finish(format!("{:.1}s animated", animated_ms / 1000.0));
        }
        info!(
            "Replayed {completions} steps ending at {} ({:.0} ms animated, {} cells lit)",
            replay.position(),
            animated_ms,
            recorder.lit_count()
        );

        if let Some(path) = &self.cli.output {
            export_grid_as_png(session.grid(), &recorder.overlay(), path)?;
            info!("Wrote {}", path.display());
        }
        if let Some(path) = &self.cli.animate {
            recorder.export_gif(path)?;
            info!("Wrote {}", path.display());
        }

        info!("Finished in {:.2?}", started.elapsed());
        Ok(RunSummary {
            found: true,
            moves: completions,
            backtracks,
            animated_ms,
        })
    }
}
