//! Command-line interface for running line-of-sight queries on obstacle scenes

use crate::io::configuration::{
    DEFAULT_SEED, DEFAULT_SWEEP_FRAMES, DEFAULT_TILE_SIZE, SWEEP_STEP_DEGREES,
};
use crate::io::error::Result;
use crate::io::image::{SightQuery, export_grid_as_png};
use crate::io::progress::SweepProgress;
use crate::io::scenario::{Scene, parse_cell, parse_obstacle, parse_world_size, require_cell};
use crate::io::visualization::{SweepSettings, export_sweep_gif};
use crate::spatial::Patch;
use clap::Parser;
use std::fmt;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "gridsight")]
#[command(
    author,
    version,
    about = "Stamp rotated obstacles onto a tile grid and test line of sight between two cells"
)]
/// Command-line arguments for a line-of-sight query
pub struct Cli {
    /// Start cell
    #[arg(long, value_name = "X,Y", value_parser = parse_cell)]
    pub from: [i32; 2],

    /// End cell
    #[arg(long, value_name = "X,Y", value_parser = parse_cell)]
    pub to: [i32; 2],

    /// World extents along x and z
    #[arg(long, value_name = "WxD", default_value = "10x10", value_parser = parse_world_size)]
    pub world: [f64; 2],

    /// World-space edge length of one cell
    #[arg(short, long, default_value_t = DEFAULT_TILE_SIZE)]
    pub tile_size: f64,

    /// Obstacle to stamp, repeatable (defaults to a single 1.5x1 obstacle at 2,3)
    #[arg(
        short,
        long,
        value_name = "CX,CZ:SXxSZ[@DEG]",
        value_parser = parse_obstacle,
        allow_hyphen_values = true
    )]
    pub obstacle: Vec<Patch>,

    /// Scatter this many random obstacles instead
    #[arg(long, value_name = "COUNT", conflicts_with = "obstacle")]
    pub random: Option<usize>,

    /// Random seed for reproducible scattering
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Extra rotation in degrees applied to every obstacle
    #[arg(short, long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub rotation: f64,

    /// Write a PNG snapshot of the grid and the query
    #[arg(long, value_name = "PATH")]
    pub png: Option<PathBuf>,

    /// Write an animated GIF of the obstacles turning
    #[arg(long, value_name = "PATH")]
    pub sweep: Option<PathBuf>,

    /// Number of sweep frames
    #[arg(long, default_value_t = DEFAULT_SWEEP_FRAMES)]
    pub frames: usize,

    /// Degrees turned per sweep frame
    #[arg(long, default_value_t = SWEEP_STEP_DEGREES, allow_negative_numbers = true)]
    pub step: f64,

    /// Suppress progress and status output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress and status lines should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Scene described by the arguments, obstacles already turned by `--rotation`
    ///
    /// # Errors
    ///
    /// Returns an error if the world size or tile size is invalid.
    pub fn scene(&self) -> Result<Scene> {
        let mut scene = match self.random {
            Some(count) => Scene::random(self.world, self.tile_size, count, self.seed)?,
            None => {
                let mut scene = Scene::new(self.world, self.tile_size)?;
                scene.obstacles = if self.obstacle.is_empty() {
                    Scene::default().obstacles
                } else {
                    self.obstacle.clone()
                };
                scene
            }
        };

        for obstacle in &mut scene.obstacles {
            *obstacle = obstacle.rotated_by(self.rotation);
        }
        Ok(scene)
    }

    /// Sweep settings described by the arguments
    pub fn sweep_settings(&self) -> SweepSettings {
        SweepSettings {
            frames: self.frames,
            step_degrees: self.step,
            ..SweepSettings::default()
        }
    }
}

/// Outcome of one CLI run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    /// The query and its trace
    pub query: SightQuery,
    /// Number of blocked cells on the grid
    pub blocked_cells: usize,
    /// Frames with line of sight, when a sweep was rendered
    pub sweep_visible_frames: Option<usize>,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verdict = if self.query.trace.visible {
            "visible"
        } else {
            "blocked"
        };
        write!(
            f,
            "{verdict} ({} cells probed, {} cells blocked)",
            self.query.trace.probed.len(),
            self.blocked_cells
        )?;
        if let Some(blocker) = self.query.trace.blocker() {
            write!(f, ", stopped at {},{}", blocker[0], blocker[1])?;
        }
        Ok(())
    }
}

/// Build the scene, run the query and write any requested images
///
/// # Errors
///
/// Returns an error if:
/// - The world size or tile size is invalid
/// - An endpoint lies outside the grid
/// - An image cannot be written
// Allow print for user feedback on written files
#[allow(clippy::print_stderr)]
pub fn run(cli: &Cli) -> Result<Report> {
    let scene = cli.scene()?;
    let grid = scene.build_grid(0.0);

    let from = require_cell(&grid, cli.from)?;
    let to = require_cell(&grid, cli.to)?;
    let query = SightQuery::run(&grid, from, to);
    let blocked_cells = grid.data().iter().filter(|&&blocked| blocked).count();

    if let Some(path) = &cli.png {
        export_grid_as_png(&grid, Some(&query), path)?;
        if cli.should_show_progress() {
            eprintln!("Wrote snapshot: {}", path.display());
        }
    }

    let sweep_visible_frames = match &cli.sweep {
        Some(path) => {
            let settings = cli.sweep_settings();
            let mut progress = if cli.should_show_progress() {
                SweepProgress::new(settings.frames)
            } else {
                SweepProgress::hidden(settings.frames)
            };

            let visible = export_sweep_gif(&scene, from, to, &settings, &mut progress, path)?;
            progress.finish();
            if cli.should_show_progress() {
                eprintln!("Wrote sweep: {}", path.display());
            }
            Some(visible)
        }
        None => None,
    };

    Ok(Report {
        query,
        blocked_cells,
        sweep_visible_frames,
    })
}
