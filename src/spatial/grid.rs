//! Fixed-size tile grid with world/cell coordinate mapping
//!
//! Cells are stored row-major in a single contiguous `ndarray::Array2` of shape
//! `(height, width)`, so cell `(x, y)` lives at flat offset `y * width + x`. Cell
//! `(0, 0)` touches the world origin and the grid grows toward positive x and z.
//!
//! World positions are `[x, z]` pairs on the ground plane. The vertical axis plays no
//! part in the mapping.
//!
//! Out-of-range cell access is a caller bug. The accessors assert their bounds and
//! panic; [`SpatialGrid::try_get`] is the checked alternative.

use ndarray::Array2;

use crate::io::error::{GridError, Result, invalid_parameter};

/// Snapshot of one cell, detached from grid storage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileInfo<T> {
    /// Column index
    pub x: i32,
    /// Row index
    pub y: i32,
    /// Cell value at the time of the snapshot
    pub value: T,
}

impl<T> TileInfo<T> {
    /// Cell coordinates as an `[x, y]` pair
    pub const fn coords(&self) -> [i32; 2] {
        [self.x, self.y]
    }
}

/// Fixed-size 2D grid of square cells
#[derive(Debug, Clone, PartialEq)]
pub struct SpatialGrid<T> {
    cells: Array2<T>,
    width: usize,
    height: usize,
    tile_size: f64,
}

impl<T: Clone + Default> SpatialGrid<T> {
    /// Create a grid covering `world_size` (`[x, z]` extents) with default-initialized cells
    ///
    /// Dimensions are `ceil(world_size / tile_size)` on each axis.
    ///
    /// # Panics
    ///
    /// Panics if `tile_size` is not a positive finite number or if either world extent
    /// yields an empty axis.
    pub fn new(world_size: [f64; 2], tile_size: f64) -> Self {
        assert!(
            tile_size.is_finite() && tile_size > 0.0,
            "tile size must be positive and finite, got {tile_size}"
        );
        let width = (world_size[0] / tile_size).ceil();
        let height = (world_size[1] / tile_size).ceil();
        assert!(
            width >= 1.0 && height >= 1.0,
            "world size {world_size:?} does not cover a single tile"
        );

        Self::with_dimensions(width as usize, height as usize, tile_size)
    }

    /// Create a `width` x `height` grid with default-initialized cells
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero or `tile_size` is not a positive finite number.
    pub fn with_dimensions(width: usize, height: usize, tile_size: f64) -> Self {
        assert!(
            width > 0 && height > 0,
            "grid dimensions must be positive, got {width}x{height}"
        );
        assert!(
            tile_size.is_finite() && tile_size > 0.0,
            "tile size must be positive and finite, got {tile_size}"
        );

        Self {
            cells: Array2::default((height, width)),
            width,
            height,
            tile_size,
        }
    }
}

impl<T> SpatialGrid<T> {
    /// Wrap existing row-major cell storage
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `data.len()` differs from `width * height`
    /// - either dimension is zero
    /// - `tile_size` is not a positive finite number
    pub fn from_data(data: Vec<T>, tile_size: f64, width: usize, height: usize) -> Result<Self> {
        if !(tile_size.is_finite() && tile_size > 0.0) {
            return Err(invalid_parameter(
                "tile_size",
                &tile_size,
                &"must be positive and finite",
            ));
        }
        if width == 0 || height == 0 {
            return Err(invalid_parameter(
                "dimensions",
                &format!("{width}x{height}"),
                &"both dimensions must be positive",
            ));
        }

        let actual = data.len();
        let cells = Array2::from_shape_vec((height, width), data).map_err(|_shape_error| {
            GridError::ShapeMismatch {
                expected: width * height,
                actual,
            }
        })?;

        Ok(Self {
            cells,
            width,
            height,
            tile_size,
        })
    }

    /// Number of columns
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Number of rows
    pub const fn height(&self) -> usize {
        self.height
    }

    /// World-space edge length of one cell
    pub const fn tile_size(&self) -> f64 {
        self.tile_size
    }

    /// Underlying storage, indexed `[y, x]`
    pub const fn cells(&self) -> &Array2<T> {
        &self.cells
    }

    /// Row-major cell values, `y * width + x`
    pub fn data(&self) -> &[T] {
        self.cells.as_slice().unwrap_or(&[])
    }

    /// Whether `(x, y)` addresses a cell of this grid
    pub const fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    /// World position of the center of cell `(x, y)`
    ///
    /// No range check is made, so neighbours outside the grid can be located too.
    pub fn cell_to_world(&self, x: i32, y: i32) -> [f64; 2] {
        [
            (f64::from(x) + 0.5) * self.tile_size,
            (f64::from(y) + 0.5) * self.tile_size,
        ]
    }

    /// World position of the center of the cell a snapshot was taken from
    pub fn cell_to_world_of<V>(&self, tile: &TileInfo<V>) -> [f64; 2] {
        self.cell_to_world(tile.x, tile.y)
    }

    /// Cell containing world position `pos`
    ///
    /// The result is not clamped and may lie outside the grid; check it with
    /// [`SpatialGrid::contains`] before reading.
    pub fn world_to_cell(&self, pos: [f64; 2]) -> [i32; 2] {
        [
            (pos[0] / self.tile_size).floor() as i32,
            (pos[1] / self.tile_size).floor() as i32,
        ]
    }

    /// Cell value, or `None` outside the grid
    pub fn try_get(&self, x: i32, y: i32) -> Option<&T> {
        if self.contains(x, y) {
            self.cells.get([y as usize, x as usize])
        } else {
            None
        }
    }

    #[track_caller]
    fn index_of(&self, x: i32, y: i32) -> [usize; 2] {
        assert!(
            self.contains(x, y),
            "cell ({x}, {y}) is outside the {}x{} grid",
            self.width,
            self.height
        );
        [y as usize, x as usize]
    }

    /// Overwrite cell `(x, y)`
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` is outside the grid.
    // Bounds are asserted by index_of
    #[allow(clippy::indexing_slicing)]
    #[track_caller]
    pub fn set(&mut self, x: i32, y: i32, value: T) {
        let index = self.index_of(x, y);
        self.cells[index] = value;
    }
}

impl<T: Clone> SpatialGrid<T> {
    /// Value of cell `(x, y)`
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` is outside the grid.
    // Bounds are asserted by index_of
    #[allow(clippy::indexing_slicing)]
    #[track_caller]
    pub fn get(&self, x: i32, y: i32) -> T {
        self.cells[self.index_of(x, y)].clone()
    }

    /// Snapshot of cell `(x, y)`
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` is outside the grid.
    #[track_caller]
    pub fn get_tile_info(&self, x: i32, y: i32) -> TileInfo<T> {
        TileInfo {
            x,
            y,
            value: self.get(x, y),
        }
    }

    /// Value of the cell containing world position `pos`
    ///
    /// # Panics
    ///
    /// Panics if `pos` maps to a cell outside the grid.
    #[track_caller]
    pub fn get_at_world(&self, pos: [f64; 2]) -> T {
        let [x, y] = self.world_to_cell(pos);
        self.get(x, y)
    }

    /// Snapshot of the cell containing world position `pos`
    ///
    /// # Panics
    ///
    /// Panics if `pos` maps to a cell outside the grid.
    #[track_caller]
    pub fn tile_info_at_world(&self, pos: [f64; 2]) -> TileInfo<T> {
        let [x, y] = self.world_to_cell(pos);
        self.get_tile_info(x, y)
    }

    /// Reset every cell to `value`
    pub fn fill(&mut self, value: T) {
        self.cells.fill(value);
    }
}
