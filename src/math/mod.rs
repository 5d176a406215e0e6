//! Geometric helpers for the ground plane

/// Axis-aligned rectangles and cell spans
pub mod bounds;
/// Rotation about the vertical axis
pub mod rotation;
