//! Move-queue replay engine
//!
//! Moves are queued in full before playback and leave the queue strictly in
//! FIFO order, one at a time. The token's logical position changes when a
//! move is dispatched, not when its animation completes, so every check made
//! while a step is in flight already sees the destination cell.
//!
//! ```text
//! Idle --start--> Animating --complete_step--> Animating ... --> Done
//! ```

use std::collections::VecDeque;

use crate::algorithm::search::Move;
use crate::io::error::{MazeError, Result};
use crate::spatial::grid::{Axis, Cell};

/// Source of per-cell step durations
pub trait StepTiming {
    /// Duration in milliseconds of a step that ends on `cell`
    fn duration_ms(&self, cell: Cell) -> f64;
}

/// Presentation layer driven by the replay
///
/// Every [`Presenter::animate_step`] call must be answered by exactly one
/// later call to [`Replay::complete_step`], never from inside `animate_step`.
pub trait Presenter {
    /// Light a cell as part of the retained path
    fn highlight_cell(&mut self, cell: Cell);
    /// Clear a cell that an exploratory move is leaving
    fn unhighlight_cell(&mut self, cell: Cell);
    /// Begin animating one step of the token
    fn animate_step(&mut self, step: AnimationStep);
}

/// One animated token step as handed to the presenter
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationStep {
    /// Zero-based position of the move in the queue
    pub index: usize,
    /// Cell the token leaves
    pub from: Cell,
    /// Cell the token arrives at
    pub to: Cell,
    /// Axis of travel
    pub axis: Axis,
    /// Signed unit offset along `axis`
    pub delta: i32,
    /// Animation length in milliseconds
    pub duration_ms: f64,
    /// Whether the move belongs to the retained path
    pub is_final: bool,
}

/// Playback state of a [`Replay`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplayState {
    /// Nothing animating, playback not started
    Idle,
    /// Exactly one step in flight
    Animating,
    /// Queue exhausted
    Done,
}

/// Token position plus its queue of pending moves
#[derive(Debug, Clone)]
pub struct Replay {
    position: Cell,
    bounds: (usize, usize),
    pending: VecDeque<Move>,
    state: ReplayState,
    dispatched: usize,
    completed: usize,
}

impl Replay {
    /// Token at `start` on a `width` x `height` grid, with an empty queue
    pub const fn new(start: Cell, width: usize, height: usize) -> Self {
        Self {
            position: start,
            bounds: (width, height),
            pending: VecDeque::new(),
            state: ReplayState::Idle,
            dispatched: 0,
            completed: 0,
        }
    }

    /// Token at `start` with `moves` already queued
    pub fn with_moves(
        start: Cell,
        width: usize,
        height: usize,
        moves: impl IntoIterator<Item = Move>,
    ) -> Self {
        let mut replay = Self::new(start, width, height);
        replay.pending.extend(moves);
        replay
    }

    /// Append a move; never starts playback by itself
    pub fn enqueue(&mut self, mv: Move) {
        self.pending.push_back(mv);
    }

    /// Logical token position, already updated for the step in flight
    pub const fn position(&self) -> Cell {
        self.position
    }

    /// Current playback state
    pub const fn state(&self) -> ReplayState {
        self.state
    }

    /// Moves not yet dispatched
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Steps whose animation has been reported complete
    pub const fn completed(&self) -> usize {
        self.completed
    }

    /// Steps handed to the presenter so far
    pub const fn dispatched(&self) -> usize {
        self.dispatched
    }

    /// Dispatch the first queued move
    ///
    /// Returns [`ReplayState::Done`] straight away for an empty queue.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A step is already animating
    /// - The first queued move would leave the grid
    pub fn start(
        &mut self,
        timing: &impl StepTiming,
        presenter: &mut impl Presenter,
    ) -> Result<ReplayState> {
        if self.state == ReplayState::Animating {
            return Err(MazeError::ReplayState {
                reason: "start called while a step is animating",
            });
        }
        self.advance(timing, presenter)
    }

    /// Report that the step in flight finished and dispatch the next one
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No step is in flight
    /// - The next move would leave the grid; the replay then drops back to
    ///   [`ReplayState::Idle`] with that move still queued
    pub fn complete_step(
        &mut self,
        timing: &impl StepTiming,
        presenter: &mut impl Presenter,
    ) -> Result<ReplayState> {
        if self.state != ReplayState::Animating {
            return Err(MazeError::ReplayState {
                reason: "step completion reported with nothing in flight",
            });
        }
        self.completed += 1;
        self.advance(timing, presenter)
    }

    fn advance(
        &mut self,
        timing: &impl StepTiming,
        presenter: &mut impl Presenter,
    ) -> Result<ReplayState> {
        let Some(&mv) = self.pending.front() else {
            self.state = ReplayState::Done;
            return Ok(self.state);
        };

        let from = self.position;
        let Some(to) = from.step(mv.direction, self.bounds.0, self.bounds.1) else {
            // Nothing is in flight any more; the rejected move stays queued
            self.state = ReplayState::Idle;
            return Err(MazeError::InvalidMove {
                from,
                direction: mv.direction,
            });
        };
        self.pending.pop_front();

        if !mv.is_final {
            presenter.unhighlight_cell(from);
        }
        self.position = to;
        self.state = ReplayState::Animating;

        presenter.animate_step(AnimationStep {
            index: self.dispatched,
            from,
            to,
            axis: mv.direction.axis(),
            delta: mv.direction.sign(),
            duration_ms: timing.duration_ms(to),
            is_final: mv.is_final,
        });
        self.dispatched += 1;

        if mv.is_final {
            presenter.highlight_cell(to);
        }
        Ok(self.state)
    }
}
