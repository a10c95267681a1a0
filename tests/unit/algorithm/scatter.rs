//! Tests for the scattered-obstacle layout

#[cfg(test)]
mod tests {
    use mazetrail::algorithm::scatter::{obstacle_count, scatter_obstacles};
    use mazetrail::math::random::RandomSource;
    use mazetrail::spatial::Cell;

    // Tests obstacle counts from density, capped to keep endpoints free
    #[test]
    fn test_obstacle_count() {
        let start = Cell::new(1, 1);
        let end = Cell::new(19, 19);
        assert_eq!(obstacle_count(21, 21, 0.227, start, end), 100);
        assert_eq!(obstacle_count(21, 21, 0.0, start, end), 0);
        assert_eq!(obstacle_count(2, 2, 0.99, start, Cell::new(1, 0)), 2);
        assert_eq!(obstacle_count(2, 2, 0.99, start, start), 3);
    }

    // Tests that exactly the requested number of distinct cells is blocked
    // Verified by allowing the same cell to be counted twice
    #[test]
    fn test_scatter_places_exact_count() {
        let start = Cell::new(1, 1);
        let end = Cell::new(19, 19);
        let mut random = RandomSource::new(5);
        let grid = scatter_obstacles(21, 21, 0.227, start, end, &mut random);
        assert_eq!(grid.blocked_count(), 100);
        assert!(!grid.is_blocked(start));
        assert!(!grid.is_blocked(end));
    }

    // Tests that endpoints survive even at extreme density
    #[test]
    fn test_endpoints_never_blocked() {
        let start = Cell::new(0, 0);
        let end = Cell::new(4, 4);
        for seed in 0..5 {
            let mut random = RandomSource::new(seed);
            let grid = scatter_obstacles(5, 5, 0.95, start, end, &mut random);
            assert!(!grid.is_blocked(start));
            assert!(!grid.is_blocked(end));
            assert_eq!(grid.blocked_count(), 23);
        }
    }

    // Tests reproducibility from the seed
    #[test]
    fn test_scatter_is_deterministic() {
        let start = Cell::new(1, 1);
        let end = Cell::new(9, 9);
        let first = scatter_obstacles(11, 11, 0.3, start, end, &mut RandomSource::new(9));
        let second = scatter_obstacles(11, 11, 0.3, start, end, &mut RandomSource::new(9));
        assert_eq!(first, second);
    }
}
