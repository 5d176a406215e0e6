//! Axis-aligned rectangles in world space and inclusive cell spans in grid space

/// Axis-aligned rectangle in the x/z plane, described by its center and full extents
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisRect {
    /// Center of the rectangle
    pub center: [f64; 2],
    /// Full extents along x and z
    pub size: [f64; 2],
}

impl AxisRect {
    /// Create a rectangle from center and full extents
    pub const fn new(center: [f64; 2], size: [f64; 2]) -> Self {
        Self { center, size }
    }

    /// Inclusive containment test widened by `tolerance` on every side
    pub const fn contains_within(&self, point: [f64; 2], tolerance: f64) -> bool {
        (point[0] - self.center[0]).abs() <= self.size[0] * 0.5 + tolerance
            && (point[1] - self.center[1]).abs() <= self.size[1] * 0.5 + tolerance
    }

    /// Inclusive containment test
    pub const fn contains(&self, point: [f64; 2]) -> bool {
        self.contains_within(point, 0.0)
    }

    /// Whether the rectangle encloses zero area
    pub const fn is_degenerate(&self) -> bool {
        !(self.size[0] > 0.0 && self.size[1] > 0.0)
    }
}

/// Smallest axis-aligned box `(min, max)` enclosing all `points`
///
/// Returns `None` for an empty slice.
pub fn enclosing_box(points: &[[f64; 2]]) -> Option<([f64; 2], [f64; 2])> {
    let (first, rest) = points.split_first()?;
    let mut min = *first;
    let mut max = *first;

    for point in rest {
        min[0] = min[0].min(point[0]);
        min[1] = min[1].min(point[1]);
        max[0] = max[0].max(point[0]);
        max[1] = max[1].max(point[1]);
    }

    Some((min, max))
}

/// Inclusive range of cell indices along both axes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellSpan {
    /// Lowest cell index (inclusive)
    pub min: [i32; 2],
    /// Highest cell index (inclusive)
    pub max: [i32; 2],
}

impl CellSpan {
    /// Cells whose centers can fall between `min` and `max` in world space
    ///
    /// Cell centers sit at `(i + 0.5) * tile_size`, so the lower bound rounds up and the
    /// upper bound rounds down from the nearest center. `tolerance` (in tiles) widens the
    /// span to keep centers that lie on the box edge after rounding noise.
    pub fn from_world_box(min: [f64; 2], max: [f64; 2], tile_size: f64, tolerance: f64) -> Self {
        let low = |v: f64| (v / tile_size + 0.5 - tolerance).floor() as i32;
        let high = |v: f64| (v / tile_size - 0.5 + tolerance).floor() as i32;

        Self {
            min: [low(min[0]), low(min[1])],
            max: [high(max[0]), high(max[1])],
        }
    }

    /// Restrict the span to `0..width` by `0..height`
    #[must_use]
    pub fn clamped(self, width: usize, height: usize) -> Self {
        let last_x = width as i32 - 1;
        let last_y = height as i32 - 1;

        Self {
            min: [self.min[0].max(0), self.min[1].max(0)],
            max: [self.max[0].min(last_x), self.max[1].min(last_y)],
        }
    }

    /// Whether the span holds no cells
    pub const fn is_empty(&self) -> bool {
        self.min[0] > self.max[0] || self.min[1] > self.max[1]
    }

    /// Number of cells in the span
    pub const fn len(&self) -> usize {
        if self.is_empty() {
            0
        } else {
            ((self.max[0] - self.min[0] + 1) * (self.max[1] - self.min[1] + 1)) as usize
        }
    }

    /// Cells in row-major order: increasing y outer, increasing x inner
    pub fn cells(&self) -> impl Iterator<Item = [i32; 2]> + use<> {
        let [min_x, min_y] = self.min;
        let [max_x, max_y] = self.max;
        (min_y..=max_y).flat_map(move |y| (min_x..=max_x).map(move |x| [x, y]))
    }
}
