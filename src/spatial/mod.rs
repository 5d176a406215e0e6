//! Spatial data structures
//!
//! This module contains the tile grid and the operations that write to it:
//! - Cell storage and world/cell coordinate mapping
//! - Rotated rectangle stamping

/// Tile grid storage and coordinate mapping
pub mod grid;
/// Rotated rectangle stamping
pub mod patch;

pub use grid::{SpatialGrid, TileInfo};
pub use patch::Patch;
