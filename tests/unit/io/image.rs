//! Tests for arena rasterization and PNG export

#[cfg(test)]
mod tests {
    use image::Rgba;
    use mazetrail::io::image::{Overlay, export_grid_as_png, render_grid};
    use mazetrail::spatial::{Cell, Grid};
    use ndarray::Array2;
    use tempfile::tempdir;

    const BARE: Overlay<'static> = Overlay {
        lit: None,
        token: None,
        goal: None,
    };

    // Tests output dimensions follow the scale
    #[test]
    fn test_render_dimensions() {
        let img = render_grid(&Grid::open(5, 3), &BARE, 4);
        assert_eq!(img.dimensions(), (20, 12));
    }

    // Tests wall, floor, trail and goal colours
    #[test]
    fn test_cell_colors() {
        let grid = Grid::from_rows(&["#..."]);
        let mut lit = Array2::from_elem((4, 1), false);
        if let Some(slot) = lit.get_mut([1, 0]) {
            *slot = true;
        }
        let overlay = Overlay {
            lit: Some(&lit),
            token: None,
            goal: Some(Cell::new(3, 0)),
        };
        let img = render_grid(&grid, &overlay, 2);
        let wall = *img.get_pixel(0, 0);
        let trail = *img.get_pixel(2, 0);
        let floor = *img.get_pixel(4, 0);
        let goal = *img.get_pixel(6, 0);
        assert_eq!(floor, Rgba([255, 255, 255, 255]));
        assert_ne!(wall, floor);
        assert_ne!(trail, floor);
        assert_ne!(goal, floor);
        assert_ne!(trail, goal);
    }

    // Tests that the token is drawn inset inside its cell
    #[test]
    fn test_token_inset() {
        let grid = Grid::open(2, 1);
        let overlay = Overlay {
            lit: None,
            token: Some(Cell::new(1, 0)),
            goal: None,
        };
        let img = render_grid(&grid, &overlay, 8);
        let edge = *img.get_pixel(8, 0);
        let centre = *img.get_pixel(12, 4);
        assert_eq!(edge, Rgba([255, 255, 255, 255]));
        assert_ne!(centre, edge);
    }

    // Tests PNG export creates missing directories
    #[test]
    fn test_export_png() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("nested").join("grid.png");
        let grid = Grid::from_rows(&["###", "#.#", "###"]);
        assert!(export_grid_as_png(&grid, &BARE, &path).is_ok());
        assert!(path.exists());
    }

    // Tests that an empty grid cannot be exported
    #[test]
    fn test_export_empty_grid() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("empty.png");
        assert!(export_grid_as_png(&Grid::open(0, 0), &BARE, &path).is_err());
        assert!(!path.exists());
    }
}
