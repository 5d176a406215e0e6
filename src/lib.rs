//! Tile grids with rotated patch stamping and line-of-sight queries
//!
//! A [`SpatialGrid`] maps world positions on the x/z ground plane to square cells and
//! can stamp arbitrarily rotated rectangles onto them. On a `SpatialGrid<bool>`, where
//! `true` marks a blocked cell, [`sight::has_line_of_sight`] decides whether two cells
//! see each other, checking every cell the connecting line touches.

#![forbid(unsafe_code)]

/// Input/output operations and error handling
pub mod io;
/// Rotation and bounds helpers for the ground plane
pub mod math;
/// Line of sight and visibility over blocking grids
pub mod sight;
/// Tile grid storage and patch stamping
pub mod spatial;

pub use io::error::{GridError, Result};
pub use sight::{SightTrace, has_line_of_sight, trace_line_of_sight};
pub use spatial::{Patch, SpatialGrid, TileInfo};
