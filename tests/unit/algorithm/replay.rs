//! Tests for the move-queue replay engine

#[cfg(test)]
mod tests {
    use mazetrail::MazeError;
    use mazetrail::algorithm::replay::{
        AnimationStep, Presenter, Replay, ReplayState, StepTiming,
    };
    use mazetrail::algorithm::search::Move;
    use mazetrail::spatial::{Axis, Cell, Direction};

    struct Flat(f64);

    impl StepTiming for Flat {
        fn duration_ms(&self, _cell: Cell) -> f64 {
            self.0
        }
    }

    /// Durations that depend on the destination column
    struct ByColumn;

    impl StepTiming for ByColumn {
        fn duration_ms(&self, cell: Cell) -> f64 {
            100.0 + cell.x as f64
        }
    }

    #[derive(Debug, PartialEq)]
    enum Call {
        Highlight(Cell),
        Unhighlight(Cell),
        Animate(AnimationStep),
    }

    #[derive(Default)]
    struct Log {
        calls: Vec<Call>,
    }

    impl Log {
        fn steps(&self) -> Vec<AnimationStep> {
            self.calls
                .iter()
                .filter_map(|call| match call {
                    Call::Animate(step) => Some(*step),
                    _ => None,
                })
                .collect()
        }
    }

    impl Presenter for Log {
        fn highlight_cell(&mut self, cell: Cell) {
            self.calls.push(Call::Highlight(cell));
        }

        fn unhighlight_cell(&mut self, cell: Cell) {
            self.calls.push(Call::Unhighlight(cell));
        }

        fn animate_step(&mut self, step: AnimationStep) {
            self.calls.push(Call::Animate(step));
        }
    }

    fn play(replay: &mut Replay, timing: &impl StepTiming, log: &mut Log) -> usize {
        let mut completions = 0;
        let mut state = replay.start(timing, log).expect("start");
        while state == ReplayState::Animating {
            completions += 1;
            state = replay.complete_step(timing, log).expect("complete");
        }
        completions
    }

    // Tests that k moves produce k steps in FIFO order with matching positions
    // Verified by popping moves from the back of the queue
    #[test]
    fn test_fifo_order_and_positions() {
        let moves = vec![
            Move::forward(Direction::Right),
            Move::forward(Direction::Down),
            Move::forward(Direction::Down),
            Move::forward(Direction::Left),
            Move::forward(Direction::Up),
        ];
        let mut replay = Replay::with_moves(Cell::new(1, 1), 5, 5, moves.clone());
        let mut log = Log::default();

        assert_eq!(play(&mut replay, &Flat(150.0), &mut log), moves.len());
        assert_eq!(replay.state(), ReplayState::Done);
        assert_eq!(replay.completed(), moves.len());

        let mut at = Cell::new(1, 1);
        for (index, (step, mv)) in log.steps().iter().zip(&moves).enumerate() {
            let next = at.step(mv.direction, 5, 5).expect("in bounds");
            assert_eq!(step.index, index);
            assert_eq!(step.from, at);
            assert_eq!(step.to, next);
            at = next;
        }
        assert_eq!(replay.position(), Cell::new(1, 2));
    }

    // Tests that enqueueing alone never starts playback
    #[test]
    fn test_enqueue_does_not_start() {
        let mut replay = Replay::new(Cell::new(0, 0), 3, 3);
        replay.enqueue(Move::forward(Direction::Right));
        replay.enqueue(Move::forward(Direction::Down));
        assert_eq!(replay.state(), ReplayState::Idle);
        assert_eq!(replay.pending(), 2);
        assert_eq!(replay.dispatched(), 0);
        assert_eq!(replay.position(), Cell::new(0, 0));
    }

    // Tests that only one step is in flight until its completion arrives
    #[test]
    fn test_single_step_in_flight() {
        let mut replay = Replay::with_moves(
            Cell::new(0, 0),
            3,
            1,
            [Move::forward(Direction::Right), Move::forward(Direction::Right)],
        );
        let mut log = Log::default();
        let timing = Flat(75.0);

        assert_eq!(replay.start(&timing, &mut log).ok(), Some(ReplayState::Animating));
        assert_eq!(log.steps().len(), 1);
        assert_eq!(replay.pending(), 1);
        // Position is updated at dispatch, not at completion
        assert_eq!(replay.position(), Cell::new(1, 0));

        assert!(matches!(
            replay.start(&timing, &mut log),
            Err(MazeError::ReplayState { .. })
        ));
        assert_eq!(log.steps().len(), 1);
    }

    // Tests that completions with nothing in flight are rejected
    #[test]
    fn test_completion_without_step() {
        let mut replay = Replay::new(Cell::new(0, 0), 2, 2);
        let mut log = Log::default();
        assert!(matches!(
            replay.complete_step(&Flat(1.0), &mut log),
            Err(MazeError::ReplayState { .. })
        ));
        assert_eq!(replay.start(&Flat(1.0), &mut log).ok(), Some(ReplayState::Done));
        assert!(replay.complete_step(&Flat(1.0), &mut log).is_err());
        assert!(log.calls.is_empty());
    }

    // Tests highlight bookkeeping around forward moves and backtracks
    // Verified by unhighlighting the destination instead of the origin
    #[test]
    fn test_highlight_and_unhighlight_order() {
        let mut replay = Replay::with_moves(
            Cell::new(1, 1),
            3,
            3,
            [
                Move::forward(Direction::Right),
                Move::backtrack(Direction::Left),
            ],
        );
        let mut log = Log::default();
        play(&mut replay, &Flat(100.0), &mut log);

        let steps = log.steps();
        let (Some(first), Some(second)) = (steps.first(), steps.get(1)) else {
            panic!("expected two steps, got {steps:?}");
        };
        assert_eq!(
            log.calls,
            vec![
                Call::Animate(*first),
                Call::Highlight(Cell::new(2, 1)),
                Call::Unhighlight(Cell::new(2, 1)),
                Call::Animate(*second),
            ]
        );
        assert!(first.is_final);
        assert!(!second.is_final);
        assert_eq!(second.to, Cell::new(1, 1));
    }

    // Tests axis, sign and duration carried by each step
    #[test]
    fn test_step_payload() {
        let mut replay = Replay::with_moves(
            Cell::new(2, 2),
            5,
            5,
            [Move::forward(Direction::Up), Move::forward(Direction::Left)],
        );
        let mut log = Log::default();
        play(&mut replay, &ByColumn, &mut log);

        let steps = log.steps();
        let up = steps.first().expect("first step");
        assert_eq!(up.axis, Axis::Vertical);
        assert_eq!(up.delta, -1);
        assert!((up.duration_ms - 102.0).abs() < f64::EPSILON);

        let left = steps.get(1).expect("second step");
        assert_eq!(left.axis, Axis::Horizontal);
        assert_eq!(left.delta, -1);
        // Duration is looked up at the destination cell
        assert!((left.duration_ms - 101.0).abs() < f64::EPSILON);
    }

    // Tests that a move off the grid is rejected
    #[test]
    fn test_move_off_grid() {
        let mut replay =
            Replay::with_moves(Cell::new(0, 0), 3, 3, [Move::forward(Direction::Left)]);
        let mut log = Log::default();
        assert!(matches!(
            replay.start(&Flat(1.0), &mut log),
            Err(MazeError::InvalidMove {
                direction: Direction::Left,
                ..
            })
        ));
        assert!(log.calls.is_empty());
    }

    // Tests that a rejected move leaves nothing in flight and is not lost
    // Verified by popping the move before checking it against the bounds
    #[test]
    fn test_rejected_move_accepts_no_further_completion() {
        let mut replay = Replay::with_moves(
            Cell::new(0, 0),
            2,
            1,
            [
                Move::forward(Direction::Right),
                Move::forward(Direction::Right),
                Move::forward(Direction::Left),
            ],
        );
        let mut log = Log::default();
        let timing = Flat(100.0);

        assert_eq!(replay.start(&timing, &mut log).ok(), Some(ReplayState::Animating));
        assert!(matches!(
            replay.complete_step(&timing, &mut log),
            Err(MazeError::InvalidMove {
                direction: Direction::Right,
                ..
            })
        ));
        assert_eq!(replay.state(), ReplayState::Idle);
        assert_eq!(replay.completed(), 1);
        assert_eq!(replay.pending(), 2);
        assert_eq!(replay.position(), Cell::new(1, 0));

        assert!(matches!(
            replay.complete_step(&timing, &mut log),
            Err(MazeError::ReplayState { .. })
        ));
        assert_eq!(replay.completed(), 1);
        assert_eq!(log.steps().len(), 1);
    }
}
