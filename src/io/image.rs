//! PNG snapshots of blocking grids with an optional line-of-sight overlay
//!
//! Row 0 is drawn at the bottom so the image matches the world's x/z layout.

use std::path::Path;

use image::{Rgba, RgbaImage};

use crate::io::configuration::{
    BLOCKED_COLOR, BLOCKED_LINE_COLOR, CELL_PIXELS, CLEAR_COLOR, GRID_LINE_COLOR, PROBED_COLOR,
    VISIBLE_COLOR,
};
use crate::io::error::{GridError, Result, file_system_error};
use crate::sight::{SightTrace, trace_line_of_sight};
use crate::spatial::SpatialGrid;

/// A line-of-sight query and its trace, ready to draw
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SightQuery {
    /// Start cell
    pub from: [i32; 2],
    /// End cell
    pub to: [i32; 2],
    /// Result of walking from `from` to `to`
    pub trace: SightTrace,
}

impl SightQuery {
    /// Trace the line from `from` to `to` on `grid`
    pub fn run(grid: &SpatialGrid<bool>, from: [i32; 2], to: [i32; 2]) -> Self {
        Self {
            from,
            to,
            trace: trace_line_of_sight(grid, from, to),
        }
    }

    const fn verdict_color(&self) -> [u8; 4] {
        if self.trace.visible {
            VISIBLE_COLOR
        } else {
            BLOCKED_LINE_COLOR
        }
    }
}

// Top-left pixel of cell (x, y), or None when the cell is off the image
fn cell_origin(grid: &SpatialGrid<bool>, cell: [i32; 2]) -> Option<(u32, u32)> {
    grid.contains(cell[0], cell[1]).then(|| {
        let row_from_top = grid.height() as u32 - 1 - cell[1] as u32;
        (cell[0] as u32 * CELL_PIXELS, row_from_top * CELL_PIXELS)
    })
}

fn fill_cell(img: &mut RgbaImage, origin: (u32, u32), inset: u32, color: [u8; 4]) {
    for py in inset..CELL_PIXELS - inset {
        for px in inset..CELL_PIXELS - inset {
            img.put_pixel(origin.0 + px, origin.1 + py, Rgba(color));
        }
    }
}

// Straight segment between two cell centers, sampled once per pixel of the longer axis
fn draw_segment(img: &mut RgbaImage, grid: &SpatialGrid<bool>, query: &SightQuery) {
    let (Some(a), Some(b)) = (cell_origin(grid, query.from), cell_origin(grid, query.to)) else {
        return;
    };

    let half = f64::from(CELL_PIXELS / 2);
    let (ax, ay) = (f64::from(a.0) + half, f64::from(a.1) + half);
    let (bx, by) = (f64::from(b.0) + half, f64::from(b.1) + half);
    let samples = (bx - ax).abs().max((by - ay).abs()).ceil().max(1.0) as u32;

    for i in 0..=samples {
        let t = f64::from(i) / f64::from(samples);
        let px = (ax + (bx - ax) * t) as u32;
        let py = (ay + (by - ay) * t) as u32;
        if px < img.width() && py < img.height() {
            img.put_pixel(px, py, Rgba(query.verdict_color()));
        }
    }
}

/// Draw `grid`, marking blocked cells, and overlay `query` when given
///
/// The overlay shades every probed cell, fills both endpoints and draws the segment
/// between them in the verdict colour.
pub fn render_grid(grid: &SpatialGrid<bool>, query: Option<&SightQuery>) -> RgbaImage {
    let width = grid.width() as u32 * CELL_PIXELS;
    let height = grid.height() as u32 * CELL_PIXELS;
    let mut img = RgbaImage::from_pixel(width, height, Rgba(GRID_LINE_COLOR));

    for y in 0..grid.height() as i32 {
        for x in 0..grid.width() as i32 {
            if let Some(origin) = cell_origin(grid, [x, y]) {
                let color = if grid.get(x, y) {
                    BLOCKED_COLOR
                } else {
                    CLEAR_COLOR
                };
                fill_cell(&mut img, origin, 1, color);
            }
        }
    }

    if let Some(query) = query {
        for &cell in &query.trace.probed {
            if let Some(origin) = cell_origin(grid, cell) {
                fill_cell(&mut img, origin, CELL_PIXELS / 4, PROBED_COLOR);
            }
        }
        for cell in [query.from, query.to] {
            if let Some(origin) = cell_origin(grid, cell) {
                fill_cell(&mut img, origin, CELL_PIXELS / 3, query.verdict_color());
            }
        }
        draw_segment(&mut img, grid, query);
    }

    img
}

/// Create the parent directory of `path` if it has one
pub(crate) fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .map_err(|e| file_system_error(parent, "create directory", e))?;
    }
    Ok(())
}

/// Export `grid` (and `query`, when given) as a PNG image
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_grid_as_png(
    grid: &SpatialGrid<bool>,
    query: Option<&SightQuery>,
    output_path: &Path,
) -> Result<()> {
    ensure_parent_dir(output_path)?;

    render_grid(grid, query)
        .save(output_path)
        .map_err(|e| GridError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })
}
