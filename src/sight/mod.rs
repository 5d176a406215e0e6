//! Visibility queries over blocking grids

/// Line of sight between two cells
pub mod line;
/// Visibility of every cell from one origin
pub mod visibility;

pub use line::{SightTrace, has_line_of_sight, is_walkable, trace_line_of_sight};
pub use visibility::{VisibilityMask, visibility_mask};
