//! Stamping rotated rectangles onto a grid
//!
//! A patch is an axis-aligned rectangle centered on the origin, turned about the
//! vertical axis and moved to its world-space center. Stamping writes a value into
//! every cell whose center lies inside that rotated rectangle.
//!
//! The rotated corners only bound which cells are scanned. Each scanned cell center is
//! carried back into the patch's unrotated frame and tested against the axis-aligned
//! rectangle, which turns the arbitrary orientation into a plain bounds check.

use crate::io::configuration::PATCH_EPSILON;
use crate::math::bounds::{AxisRect, CellSpan, enclosing_box};
use crate::math::rotation::{rotated_rect_corners, unrotate_xz};
use crate::spatial::grid::{SpatialGrid, TileInfo};

/// Rotated rectangle in world space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Patch {
    /// World-space center
    pub center: [f64; 2],
    /// Full extents along x and z before rotation
    pub size: [f64; 2],
    /// Rotation about the vertical axis in degrees
    pub rotation: f64,
}

impl Patch {
    /// Create a patch from center, extents and rotation in degrees
    pub const fn new(center: [f64; 2], size: [f64; 2], rotation: f64) -> Self {
        Self {
            center,
            size,
            rotation,
        }
    }

    /// World-space corners of the rotated rectangle
    pub fn corners(&self) -> [[f64; 2]; 4] {
        rotated_rect_corners(self.center, self.size, self.rotation)
    }

    /// The same rectangle before rotation
    pub const fn unrotated(&self) -> AxisRect {
        AxisRect::new(self.center, self.size)
    }

    /// Whether the patch covers no area
    pub fn is_degenerate(&self) -> bool {
        self.unrotated().is_degenerate()
    }

    /// Whether world position `point` lies inside the rotated rectangle (edges inclusive)
    pub fn contains(&self, point: [f64; 2]) -> bool {
        let local = unrotate_xz(
            [point[0] - self.center[0], point[1] - self.center[1]],
            self.rotation,
        );
        self.unrotated().contains_within(
            [local[0] + self.center[0], local[1] + self.center[1]],
            PATCH_EPSILON,
        )
    }

    /// Cells of a `width` x `height` grid whose centers may fall inside the patch
    pub fn cell_span(&self, tile_size: f64, width: usize, height: usize) -> CellSpan {
        let corners = self.corners();
        let Some((min, max)) = enclosing_box(&corners) else {
            return CellSpan {
                min: [0, 0],
                max: [-1, -1],
            };
        };

        CellSpan::from_world_box(min, max, tile_size, PATCH_EPSILON).clamped(width, height)
    }

    /// The rotated patch turned further by `degrees`
    #[must_use]
    pub fn rotated_by(&self, degrees: f64) -> Self {
        Self {
            rotation: self.rotation + degrees,
            ..*self
        }
    }
}

impl<T: Clone> SpatialGrid<T> {
    /// Write `value` into every cell whose center lies inside the rotated rectangle
    ///
    /// `size` holds the `[x, z]` extents of the rectangle before it is turned by
    /// `rotation_degrees` about its `center`. Returns snapshots of the affected cells in
    /// row-major order (increasing y outer, increasing x inner). A patch with no area or
    /// lying entirely outside the grid affects nothing.
    pub fn set_patch(
        &mut self,
        center: [f64; 2],
        rotation_degrees: f64,
        size: [f64; 2],
        value: T,
    ) -> Vec<TileInfo<T>> {
        self.stamp(&Patch::new(center, size, rotation_degrees), value)
    }

    /// Stamp `patch` with `value`, see [`SpatialGrid::set_patch`]
    pub fn stamp(&mut self, patch: &Patch, value: T) -> Vec<TileInfo<T>> {
        self.patch_cells(patch)
            .into_iter()
            .map(|[x, y]| {
                self.set(x, y, value.clone());
                TileInfo {
                    x,
                    y,
                    value: value.clone(),
                }
            })
            .collect()
    }

    /// Cells `patch` would affect, without writing anything
    pub fn patch_cells(&self, patch: &Patch) -> Vec<[i32; 2]> {
        if patch.is_degenerate() {
            return Vec::new();
        }

        // Empty spans yield no cells
        patch
            .cell_span(self.tile_size(), self.width(), self.height())
            .cells()
            .filter(|&[x, y]| patch.contains(self.cell_to_world(x, y)))
            .collect()
    }
}
