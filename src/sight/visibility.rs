use bitvec::prelude::*;

use crate::sight::line::{has_line_of_sight, is_walkable};
use crate::spatial::SpatialGrid;

/// Row-major bitmask of the cells an origin cell can see
///
/// Bit `y * width + x` is set when `has_line_of_sight(origin, (x, y))` holds.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VisibilityMask {
    bits: BitVec,
    width: usize,
    origin: [i32; 2],
}

impl VisibilityMask {
    /// Cell the mask was computed from
    pub const fn origin(&self) -> [i32; 2] {
        self.origin
    }

    /// Whether `(x, y)` is visible; cells outside the grid never are
    pub fn is_visible(&self, x: i32, y: i32) -> bool {
        if x < 0 || y < 0 || x as usize >= self.width {
            return false;
        }
        let index = y as usize * self.width + x as usize;
        self.bits.get(index).is_some_and(|bit| *bit)
    }

    /// Number of visible cells
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }

    /// Visible cells in row-major order
    pub fn cells(&self) -> Vec<[i32; 2]> {
        self.bits
            .iter_ones()
            .map(|index| [(index % self.width) as i32, (index / self.width) as i32])
            .collect()
    }

    /// Raw bits in row-major order
    pub fn as_bits(&self) -> &BitSlice {
        &self.bits
    }
}

/// Visibility of every cell of `grid` from `origin`
///
/// A blocked or out-of-range origin sees nothing.
pub fn visibility_mask(grid: &SpatialGrid<bool>, origin: [i32; 2]) -> VisibilityMask {
    let width = grid.width();
    let mut bits = bitvec![0; width * grid.height()];

    if !is_walkable(grid, origin[0], origin[1]) {
        return VisibilityMask {
            bits,
            width,
            origin,
        };
    }

    for (index, mut bit) in bits.iter_mut().enumerate() {
        let target = [(index % width) as i32, (index / width) as i32];
        *bit = has_line_of_sight(grid, origin, target);
    }

    VisibilityMask {
        bits,
        width,
        origin,
    }
}
