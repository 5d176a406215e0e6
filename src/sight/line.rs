//! Line-of-sight queries between two cells of a blocking grid
//!
//! A `true` cell is blocked. Two cells see each other when both are in range and
//! unblocked, and the straight line between their centers only passes unblocked cells.
//!
//! Diagonal lines are walked column by column. At each column the line is probed where
//! it leaves the column (the far edge in the direction of travel, or the center for the
//! final column), giving the crossing row. Every cell of the current column between the
//! previous crossing row and the new one is tested. This checks each cell the line
//! touches, not a single sample per step.

use crate::spatial::SpatialGrid;

/// Outcome of a line-of-sight query together with every cell it tested
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SightTrace {
    /// Whether the two cells see each other
    pub visible: bool,
    /// Tested cells in probe order; when blocked, the last entry is the failing cell
    pub probed: Vec<[i32; 2]>,
}

impl SightTrace {
    /// Cell that stopped the walk, if any
    pub fn blocker(&self) -> Option<[i32; 2]> {
        if self.visible {
            None
        } else {
            self.probed.last().copied()
        }
    }
}

/// Whether `(x, y)` is inside `grid` and not blocked
pub fn is_walkable(grid: &SpatialGrid<bool>, x: i32, y: i32) -> bool {
    grid.try_get(x, y).is_some_and(|blocked| !blocked)
}

/// Whether the centers of cells `from` and `to` see each other on `grid`
///
/// Endpoints outside the grid or blocked never see anything. Coincident and
/// edge-adjacent endpoints always see each other once both are clear.
pub fn has_line_of_sight(grid: &SpatialGrid<bool>, from: [i32; 2], to: [i32; 2]) -> bool {
    walk_line(from, to, grid.height(), |x, y| is_walkable(grid, x, y))
}

/// Like [`has_line_of_sight`], also recording each cell tested along the way
pub fn trace_line_of_sight(grid: &SpatialGrid<bool>, from: [i32; 2], to: [i32; 2]) -> SightTrace {
    let mut probed = Vec::new();
    let visible = walk_line(from, to, grid.height(), |x, y| {
        probed.push([x, y]);
        is_walkable(grid, x, y)
    });

    SightTrace { visible, probed }
}

/// Walk the cells between `from` and `to`, stopping at the first cell `probe` rejects
fn walk_line<P>(from: [i32; 2], to: [i32; 2], rows: usize, mut probe: P) -> bool
where
    P: FnMut(i32, i32) -> bool,
{
    let [x1, y1] = from;
    let [x2, y2] = to;

    if !probe(x1, y1) || !probe(x2, y2) {
        return false;
    }

    let dx = x2 - x1;
    let dy = y2 - y1;
    let dx_abs = dx.abs();
    let dy_abs = dy.abs();

    if dx_abs + dy_abs <= 1 {
        return true;
    }

    let iter_x = if dx > 0 { 1 } else { -1 };
    let iter_y = if dy > 0 { 1 } else { -1 };

    if dx_abs == 0 || dy_abs == 0 {
        // Cells strictly between the endpoints
        return if dy_abs == 0 {
            (1..dx_abs).all(|i| probe(x1 + i * iter_x, y1))
        } else {
            (1..dy_abs).all(|i| probe(x1, y1 + i * iter_y))
        };
    }

    let mut row = y1;
    for step in 0..=dx_abs {
        let column = x1 + step * iter_x;
        let half_offset = 2 * (column - x1) + if step < dx_abs { iter_x } else { 0 };
        let crossing = crossing_row(y1, dx, dy, half_offset, rows);

        let mut y = row;
        while y * iter_y <= crossing * iter_y && y * iter_y <= y2 * iter_y {
            if !probe(column, y) {
                return false;
            }
            y += iter_y;
        }

        row = crossing;
    }

    true
}

/// Row the line from `(x1, y1)` occupies where it meets `x3 = x1 + half_offset / 2`
///
/// Evaluates `floor(y1 + t * dy + 0.5)` with `t = (x3 - x1) / dx` exactly: every term
/// is a rational over `2 * |dx|`, so rounding ties break the same way whichever end the
/// walk starts from. The crossing is only valid when `t` lies in `[0, 1]` and the line's
/// row, normalized by the grid's `rows`, lies in `[0, 1]`; otherwise `-1` is returned.
fn crossing_row(y1: i32, dx: i32, dy: i32, half_offset: i32, rows: usize) -> i32 {
    let (mut t_num, mut t_den) = (i64::from(half_offset), 2 * i64::from(dx));
    let mut y_num = t_den * i64::from(y1) + t_num * i64::from(dy);
    if t_den < 0 {
        t_num = -t_num;
        y_num = -y_num;
        t_den = -t_den;
    }

    let t_valid = (0..=t_den).contains(&t_num);
    let s_valid = y_num >= 0 && y_num <= rows as i64 * t_den;
    if !(t_valid && s_valid) {
        return -1;
    }

    // t_den is 2|dx|, so adding |dx| is adding one half
    ((y_num + t_den / 2).div_euclid(t_den)) as i32
}
