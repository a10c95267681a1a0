//! Recording presenter, animation clock and GIF export
//!
//! [`ReplayRecorder`] stands in for an on-screen renderer: it logs every
//! presentation call and keeps the lit trail. [`drive`] plays the animation
//! clock, answering each animated step with exactly one completion.

use std::path::Path;

use image::{Delay, Frame};
use ndarray::Array2;

use crate::algorithm::replay::{AnimationStep, Presenter, Replay, ReplayState, StepTiming};
use crate::io::configuration::{CELL_PIXEL_SIZE, FINAL_FRAME_HOLD, VIEWER_MIN_FRAME_DELAY_MS};
use crate::io::error::{MazeError, Result};
use crate::io::image::{Overlay, render_grid};
use crate::spatial::grid::{Cell, Grid};

/// A single presentation call made by the replay
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PresentationEvent {
    /// Cell lit as part of the path
    Highlight(Cell),
    /// Cell cleared by a backtrack
    Unhighlight(Cell),
    /// Token step started
    Step(AnimationStep),
}

/// Presenter that records calls instead of drawing them
pub struct ReplayRecorder {
    grid: Grid,
    start: Cell,
    goal: Cell,
    events: Vec<PresentationEvent>,
    lit: Array2<bool>,
    token: Cell,
    awaiting_completion: bool,
}

impl ReplayRecorder {
    /// Recorder for a token starting at `start` and heading to `goal`
    pub fn new(grid: Grid, start: Cell, goal: Cell) -> Self {
        let lit = Array2::from_elem((grid.width(), grid.height()), false);
        Self {
            grid,
            start,
            goal,
            events: Vec::new(),
            lit,
            token: start,
            awaiting_completion: false,
        }
    }

    /// Every recorded presentation call, in order
    pub fn events(&self) -> &[PresentationEvent] {
        &self.events
    }

    /// Recorded token steps, in order
    pub fn steps(&self) -> impl Iterator<Item = &AnimationStep> + '_ {
        self.events.iter().filter_map(|event| match event {
            PresentationEvent::Step(step) => Some(step),
            _ => None,
        })
    }

    /// Cells lit at this point of the replay
    pub const fn lit(&self) -> &Array2<bool> {
        &self.lit
    }

    /// Number of lit cells
    pub fn lit_count(&self) -> usize {
        self.lit.iter().filter(|&&on| on).count()
    }

    /// Where the token was last sent
    pub const fn token(&self) -> Cell {
        self.token
    }

    /// Total animated time in milliseconds
    pub fn total_duration_ms(&self) -> f64 {
        self.steps().map(|step| step.duration_ms).sum()
    }

    /// Overlay describing the current state
    pub fn overlay(&self) -> Overlay<'_> {
        Overlay {
            lit: Some(&self.lit),
            token: Some(self.token),
            goal: Some(self.goal),
        }
    }

    /// The arena being recorded
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Consume the pending completion signal, if a step is animating
    pub fn take_completion(&mut self) -> bool {
        let pending = self.awaiting_completion;
        self.awaiting_completion = false;
        pending
    }

    /// Export the recorded replay as an animated GIF
    ///
    /// Each frame shows the arena once a step has finished and lasts as long
    /// as that step. Steps shorter than [`VIEWER_MIN_FRAME_DELAY_MS`] are
    /// merged into the following frame so the apparent pace is kept.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No steps were recorded
    /// - File system operations fail
    /// - GIF encoding fails
    pub fn export_gif(&self, output_path: &Path) -> Result<()> {
        if self.steps().next().is_none() {
            return Err(crate::io::error::invalid_parameter(
                "animation",
                &output_path.display(),
                &"no steps were recorded",
            ));
        }

        let frames = self.generate_frames();

        if let Some(parent) = output_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| MazeError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source: e,
            })?;
        }

        let file = std::fs::File::create(output_path).map_err(|e| MazeError::FileSystem {
            path: output_path.to_path_buf(),
            operation: "create file",
            source: e,
        })?;

        let mut encoder = image::codecs::gif::GifEncoder::new(file);
        encoder
            .encode_frames(frames)
            .map_err(|e| MazeError::ImageExport {
                path: output_path.to_path_buf(),
                source: e,
            })?;

        Ok(())
    }

    /// Number of frames [`Self::export_gif`] would write
    pub fn frame_count(&self) -> usize {
        self.generate_frames().len()
    }

    fn generate_frames(&self) -> Vec<Frame> {
        let mut lit = Array2::from_elem(self.lit.dim(), false);
        let mut token = self.start;
        let mut frames = Vec::new();
        let mut pending_ms = 0.0_f64;
        let mut last_delay = VIEWER_MIN_FRAME_DELAY_MS;

        for event in &self.events {
            match event {
                PresentationEvent::Highlight(cell) => set_lit(&mut lit, *cell, true),
                PresentationEvent::Unhighlight(cell) => set_lit(&mut lit, *cell, false),
                PresentationEvent::Step(step) => {
                    // The previous step has finished once the next one starts
                    if pending_ms >= f64::from(VIEWER_MIN_FRAME_DELAY_MS) || frames.is_empty() {
                        let delay = (pending_ms.round() as u32).max(VIEWER_MIN_FRAME_DELAY_MS);
                        frames.push(self.render_frame(&lit, token, delay));
                        last_delay = delay;
                        pending_ms = 0.0;
                    }
                    token = step.to;
                    pending_ms += step.duration_ms;
                }
            }
        }

        let delay = (pending_ms.round() as u32).max(VIEWER_MIN_FRAME_DELAY_MS);
        frames.push(self.render_frame(&lit, token, delay));
        // Final frame lingers so the finished trail stays visible
        frames.push(self.render_frame(&lit, token, last_delay.max(delay) * FINAL_FRAME_HOLD));
        frames
    }

    fn render_frame(&self, lit: &Array2<bool>, token: Cell, delay_ms: u32) -> Frame {
        let overlay = Overlay {
            lit: Some(lit),
            token: Some(token),
            goal: Some(self.goal),
        };
        let img = render_grid(&self.grid, &overlay, CELL_PIXEL_SIZE);
        Frame::from_parts(img, 0, 0, Delay::from_numer_denom_ms(delay_ms, 1))
    }
}

fn set_lit(lit: &mut Array2<bool>, cell: Cell, on: bool) {
    if let Some(slot) = lit.get_mut(cell.index()) {
        *slot = on;
    }
}

impl Presenter for ReplayRecorder {
    fn highlight_cell(&mut self, cell: Cell) {
        set_lit(&mut self.lit, cell, true);
        self.events.push(PresentationEvent::Highlight(cell));
    }

    fn unhighlight_cell(&mut self, cell: Cell) {
        set_lit(&mut self.lit, cell, false);
        self.events.push(PresentationEvent::Unhighlight(cell));
    }

    fn animate_step(&mut self, step: AnimationStep) {
        self.token = step.to;
        self.awaiting_completion = true;
        self.events.push(PresentationEvent::Step(step));
    }
}

/// Play a replay to the end, acting as the animation clock
///
/// Lights the token's cell if nothing has been dispatched yet, starts the
/// replay, then reports one completion per animated step. `on_step` receives
/// the running count of completions. Returns the total number of completions.
///
/// # Errors
///
/// Returns an error if the replay rejects a move or its sequencing
pub fn drive(
    replay: &mut Replay,
    timing: &impl StepTiming,
    recorder: &mut ReplayRecorder,
    mut on_step: impl FnMut(usize),
) -> Result<usize> {
    if replay.dispatched() == 0 {
        recorder.highlight_cell(replay.position());
    }

    let mut state = replay.start(timing, recorder)?;
    let mut completions = 0;
    while state == ReplayState::Animating {
        if !recorder.take_completion() {
            return Err(MazeError::ReplayState {
                reason: "animating step was never handed to the presenter",
            });
        }
        completions += 1;
        on_step(completions);
        state = replay.complete_step(timing, recorder)?;
    }
    Ok(completions)
}
