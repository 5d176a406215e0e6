//! Constants and runtime configuration defaults

/// Tolerance for patch containment (world units) and patch cell spans (tiles)
///
/// Keeps stamps at multiples of 90 degrees identical to the axis-aligned stamp when
/// sine and cosine round away from exact zeros and ones.
pub const PATCH_EPSILON: f64 = 1e-9;

// Default scene
/// World extents along x and z
pub const DEFAULT_WORLD_SIZE: [f64; 2] = [10.0, 10.0];
/// World-space edge length of one cell
pub const DEFAULT_TILE_SIZE: f64 = 1.0;
/// Center of the default obstacle
pub const DEFAULT_OBSTACLE_CENTER: [f64; 2] = [2.0, 3.0];
/// Extents of the default obstacle
pub const DEFAULT_OBSTACLE_SIZE: [f64; 2] = [1.5, 1.0];

// Random scenes
/// Fixed seed for reproducible obstacle scattering
pub const DEFAULT_SEED: u64 = 42;
/// Smallest random obstacle extent, in tiles
pub const RANDOM_OBSTACLE_MIN_TILES: f64 = 0.5;
/// Largest random obstacle extent, in tiles
pub const RANDOM_OBSTACLE_MAX_TILES: f64 = 3.0;

// Rotation sweep
/// Degrees turned per sweep frame, one scroll tick in the interactive scene
pub const SWEEP_STEP_DEGREES: f64 = 0.4;
/// Default number of sweep frames
pub const DEFAULT_SWEEP_FRAMES: usize = 90;
/// Delay between GIF animation frames
pub const GIF_FRAME_DELAY_MS: u32 = 50;
/// Width of the sweep progress bar in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;

// Rendering
/// Pixels per cell edge in exported images
pub const CELL_PIXELS: u32 = 16;
/// Colour of clear cells
pub const CLEAR_COLOR: [u8; 4] = [32, 32, 40, 255];
/// Colour of blocked cells
pub const BLOCKED_COLOR: [u8; 4] = [255, 0, 255, 255];
/// Colour of cells tested by a line-of-sight walk
pub const PROBED_COLOR: [u8; 4] = [240, 200, 60, 255];
/// Endpoint colour when the endpoints see each other
pub const VISIBLE_COLOR: [u8; 4] = [0, 220, 0, 255];
/// Endpoint colour when the line is blocked
pub const BLOCKED_LINE_COLOR: [u8; 4] = [220, 0, 0, 255];
/// Colour of cell borders
pub const GRID_LINE_COLOR: [u8; 4] = [70, 70, 80, 255];
