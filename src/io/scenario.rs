//! Obstacle scenes: world setup, random scattering and text parsing for the CLI
//!
//! A scene is rebuilt from scratch whenever its obstacles turn: the whole world is
//! cleared with one unrotated patch, then each obstacle is stamped as blocked.

use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::io::configuration::{
    DEFAULT_OBSTACLE_CENTER, DEFAULT_OBSTACLE_SIZE, DEFAULT_TILE_SIZE, DEFAULT_WORLD_SIZE,
    RANDOM_OBSTACLE_MAX_TILES, RANDOM_OBSTACLE_MIN_TILES,
};
use crate::io::error::{GridError, Result, invalid_parameter};
use crate::spatial::{Patch, SpatialGrid, TileInfo};

/// World extents, tile size and the obstacles placed in the world
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    /// World extents along x and z
    pub world_size: [f64; 2],
    /// World-space edge length of one cell
    pub tile_size: f64,
    /// Obstacles stamped as blocked, in stamping order
    pub obstacles: Vec<Patch>,
}

impl Default for Scene {
    /// A 10x10 world with one 1.5x1 obstacle at (2, 3)
    fn default() -> Self {
        Self {
            world_size: DEFAULT_WORLD_SIZE,
            tile_size: DEFAULT_TILE_SIZE,
            obstacles: vec![Patch::new(
                DEFAULT_OBSTACLE_CENTER,
                DEFAULT_OBSTACLE_SIZE,
                0.0,
            )],
        }
    }
}

impl Scene {
    /// Create an empty scene
    ///
    /// # Errors
    ///
    /// Returns an error if `tile_size` is not positive and finite, or if the world
    /// does not cover at least one tile on each axis.
    pub fn new(world_size: [f64; 2], tile_size: f64) -> Result<Self> {
        if !(tile_size.is_finite() && tile_size > 0.0) {
            return Err(invalid_parameter(
                "tile_size",
                &tile_size,
                &"must be positive and finite",
            ));
        }
        if !world_size.iter().all(|&extent| extent.is_finite() && extent > 0.0) {
            return Err(invalid_parameter(
                "world_size",
                &format!("{}x{}", world_size[0], world_size[1]),
                &"both extents must be positive and finite",
            ));
        }

        Ok(Self {
            world_size,
            tile_size,
            obstacles: Vec::new(),
        })
    }

    /// Add an obstacle
    #[must_use]
    pub fn with_obstacle(mut self, obstacle: Patch) -> Self {
        self.obstacles.push(obstacle);
        self
    }

    /// Create a scene with `count` obstacles scattered from `seed`
    ///
    /// Centers are uniform over the world, extents uniform between the configured
    /// minimum and maximum tile counts, rotations uniform over a full turn.
    ///
    /// # Errors
    ///
    /// Returns an error under the same conditions as [`Scene::new`].
    pub fn random(world_size: [f64; 2], tile_size: f64, count: usize, seed: u64) -> Result<Self> {
        let mut scene = Self::new(world_size, tile_size)?;
        let mut rng = StdRng::seed_from_u64(seed);

        let min_extent = RANDOM_OBSTACLE_MIN_TILES * tile_size;
        let max_extent = RANDOM_OBSTACLE_MAX_TILES * tile_size;

        scene.obstacles = (0..count)
            .map(|_| {
                Patch::new(
                    [
                        rng.random_range(0.0..world_size[0]),
                        rng.random_range(0.0..world_size[1]),
                    ],
                    [
                        rng.random_range(min_extent..max_extent),
                        rng.random_range(min_extent..max_extent),
                    ],
                    rng.random_range(0.0..360.0),
                )
            })
            .collect();

        Ok(scene)
    }

    /// Allocate a grid for this scene and stamp its obstacles turned by `extra_rotation`
    pub fn build_grid(&self, extra_rotation: f64) -> SpatialGrid<bool> {
        let mut grid = SpatialGrid::new(self.world_size, self.tile_size);
        self.rebuild(&mut grid, extra_rotation);
        grid
    }

    /// Clear `grid` and stamp every obstacle turned by `extra_rotation`
    ///
    /// Returns the cells blocked by obstacles, one entry per stamped cell in stamping
    /// order; overlapping obstacles report shared cells more than once.
    pub fn rebuild(&self, grid: &mut SpatialGrid<bool>, extra_rotation: f64) -> Vec<TileInfo<bool>> {
        let center = [self.world_size[0] * 0.5, self.world_size[1] * 0.5];
        grid.set_patch(center, 0.0, self.world_size, false);

        self.obstacles
            .iter()
            .flat_map(|obstacle| grid.stamp(&obstacle.rotated_by(extra_rotation), true))
            .collect()
    }
}

/// Check that a user-supplied cell lies on `grid`
///
/// # Errors
///
/// Returns [`GridError::CellOutOfRange`] if it does not.
pub fn require_cell<T>(grid: &SpatialGrid<T>, cell: [i32; 2]) -> Result<[i32; 2]> {
    if grid.contains(cell[0], cell[1]) {
        Ok(cell)
    } else {
        Err(GridError::CellOutOfRange {
            x: cell[0],
            y: cell[1],
            width: grid.width(),
            height: grid.height(),
        })
    }
}

fn parse_number<T: std::str::FromStr>(parameter: &'static str, text: &str) -> Result<T> {
    text.trim()
        .parse()
        .map_err(|_parse_error| invalid_parameter(parameter, &text, &"not a number"))
}

fn split_pair<'a>(
    parameter: &'static str,
    text: &'a str,
    separator: char,
    expected: &str,
) -> Result<(&'a str, &'a str)> {
    text.split_once(separator)
        .ok_or_else(|| invalid_parameter(parameter, &text, &format!("expected {expected}")))
}

/// Parse world extents written as `WIDTHxDEPTH`, e.g. `10x7.5`
///
/// # Errors
///
/// Returns an error if the text is malformed or an extent is not positive.
pub fn parse_world_size(text: &str) -> Result<[f64; 2]> {
    let (x, z) = split_pair("world", text, 'x', "WIDTHxDEPTH")?;
    let size = [parse_number("world", x)?, parse_number("world", z)?];
    if size.iter().all(|&extent: &f64| extent.is_finite() && extent > 0.0) {
        Ok(size)
    } else {
        Err(invalid_parameter(
            "world",
            &text,
            &"extents must be positive",
        ))
    }
}

/// Parse a cell written as `X,Y`, e.g. `4,6`
///
/// # Errors
///
/// Returns an error if the text is malformed.
pub fn parse_cell(text: &str) -> Result<[i32; 2]> {
    let (x, y) = split_pair("cell", text, ',', "X,Y")?;
    Ok([parse_number("cell", x)?, parse_number("cell", y)?])
}

/// Parse an obstacle written as `CX,CZ:SXxSZ` or `CX,CZ:SXxSZ@DEGREES`
///
/// # Errors
///
/// Returns an error if the text is malformed.
pub fn parse_obstacle(text: &str) -> Result<Patch> {
    let (center, rest) = split_pair("obstacle", text, ':', "CX,CZ:SXxSZ[@DEGREES]")?;
    let (size, rotation) = rest.split_once('@').unwrap_or((rest, "0"));

    let (cx, cz) = split_pair("obstacle", center, ',', "CX,CZ")?;
    let (sx, sz) = split_pair("obstacle", size, 'x', "SXxSZ")?;

    Ok(Patch::new(
        [parse_number("obstacle", cx)?, parse_number("obstacle", cz)?],
        [parse_number("obstacle", sx)?, parse_number("obstacle", sz)?],
        parse_number("obstacle", rotation)?,
    ))
}
