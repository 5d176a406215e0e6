//! Input/output: CLI, scenes, image export and error handling

/// Command-line interface
pub mod cli;
/// Constants and defaults
pub mod configuration;
/// Error types
pub mod error;
/// PNG snapshots
pub mod image;
/// Sweep progress display
pub mod progress;
/// Obstacle scenes and value parsing
pub mod scenario;
/// Rotation sweep animation
pub mod visualization;
