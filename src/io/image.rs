//! PNG rendering of the arena with its lit trail and token

use std::path::Path;

use image::{Rgba, RgbaImage};
use ndarray::Array2;

use crate::io::configuration::CELL_PIXEL_SIZE;
use crate::io::error::{MazeError, Result};
use crate::spatial::grid::{Cell, Grid};

const WALL_COLOR: Rgba<u8> = Rgba([128, 0, 0, 255]);
const FLOOR_COLOR: Rgba<u8> = Rgba([255, 255, 255, 255]);
const TRAIL_COLOR: Rgba<u8> = Rgba([204, 217, 234, 255]);
const GOAL_COLOR: Rgba<u8> = Rgba([232, 184, 62, 255]);
const TOKEN_COLOR: Rgba<u8> = Rgba([15, 90, 15, 255]);

/// What to draw on top of the bare grid
#[derive(Debug, Clone, Copy)]
pub struct Overlay<'a> {
    /// Cells currently lit, `[x, y]`-indexed like the grid
    pub lit: Option<&'a Array2<bool>>,
    /// Token position
    pub token: Option<Cell>,
    /// Search goal
    pub goal: Option<Cell>,
}

fn cell_color(grid: &Grid, overlay: &Overlay<'_>, cell: Cell) -> Rgba<u8> {
    if grid.is_blocked(cell) {
        WALL_COLOR
    } else if overlay
        .lit
        .and_then(|lit| lit.get(cell.index()).copied())
        .unwrap_or(false)
    {
        TRAIL_COLOR
    } else if overlay.goal == Some(cell) {
        GOAL_COLOR
    } else {
        FLOOR_COLOR
    }
}

/// Rasterize the grid, `scale` pixels per cell side
///
/// The token is drawn as a square inset by a quarter cell.
pub fn render_grid(grid: &Grid, overlay: &Overlay<'_>, scale: u32) -> RgbaImage {
    let scale = scale.max(1);
    let inset = scale / 4;
    RgbaImage::from_fn(
        grid.width() as u32 * scale,
        grid.height() as u32 * scale,
        |px, py| {
            let cell = Cell::new((px / scale) as usize, (py / scale) as usize);
            let (ix, iy) = (px % scale, py % scale);
            let on_token = overlay.token == Some(cell)
                && ix >= inset
                && iy >= inset
                && ix < scale - inset
                && iy < scale - inset;
            if on_token {
                TOKEN_COLOR
            } else {
                cell_color(grid, overlay, cell)
            }
        },
    )
}

/// Save the grid with its overlay as a PNG
///
/// # Errors
///
/// Returns an error if:
/// - The grid has no cells
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_grid_as_png(grid: &Grid, overlay: &Overlay<'_>, output_path: &Path) -> Result<()> {
    if grid.cell_count() == 0 {
        return Err(crate::io::error::invalid_parameter(
            "grid",
            &"0 cells",
            &"nothing to render",
        ));
    }

    let img = render_grid(grid, overlay, CELL_PIXEL_SIZE);

    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| MazeError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    img.save(output_path)
        .map_err(|e| MazeError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    Ok(())
}
