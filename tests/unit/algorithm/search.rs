//! Tests for moves, the shared heuristic and strategy dispatch

#[cfg(test)]
mod tests {
    use mazetrail::algorithm::search::{Heuristic, Move, SearchStrategy, Strategy, displacement};
    use mazetrail::algorithm::shortest::ShortestPath;
    use mazetrail::spatial::{Cell, Direction, Grid};

    // Tests forward and backtrack constructors
    #[test]
    fn test_move_constructors() {
        assert!(Move::forward(Direction::Up).is_final);
        assert!(!Move::backtrack(Direction::Up).is_final);
        assert_eq!(Move::forward(Direction::Left).direction, Direction::Left);
    }

    // Tests net displacement, backtracks included
    #[test]
    fn test_displacement() {
        let moves = [
            Move::forward(Direction::Right),
            Move::forward(Direction::Right),
            Move::backtrack(Direction::Left),
            Move::forward(Direction::Down),
            Move::forward(Direction::Up),
            Move::forward(Direction::Up),
        ];
        assert_eq!(displacement(&moves), (1, -1));
        assert_eq!(displacement(&[]), (0, 0));
    }

    // Tests heuristic as Manhattan distance plus steps taken
    #[test]
    fn test_heuristic_score() {
        let heuristic = Heuristic::new(Cell::new(5, 5));
        assert_eq!(heuristic.score(Cell::new(5, 5), 0), 0);
        assert_eq!(heuristic.score(Cell::new(1, 2), 3), 10);
        assert_eq!(heuristic.score(Cell::new(7, 5), 1), 3);
    }

    // Tests that the enum dispatches to the matching strategy
    #[test]
    fn test_strategy_dispatch() {
        let grid = Grid::from_rows(&["#######", "#.....#", "#.###.#", "#.....#", "#######"]);
        let start = Cell::new(1, 1);
        let goal = Cell::new(5, 3);
        assert_eq!(
            Strategy::ShortestPath.find_moves(&grid, start, goal),
            ShortestPath.find_moves(&grid, start, goal)
        );
        assert!(Strategy::HeuristicDfs.find_moves(&grid, start, goal).is_some());
    }

    // Tests strategy display names used in logs and progress labels
    #[test]
    fn test_strategy_display() {
        assert_eq!(Strategy::HeuristicDfs.to_string(), "heuristic DFS");
        assert_eq!(Strategy::ShortestPath.to_string(), "shortest path");
    }
}
