//! Animated GIF of a scene whose obstacles turn a fixed step per frame
//!
//! Each frame rebuilds the grid with the obstacles turned by the accumulated angle,
//! reruns the line-of-sight query and draws the result. Angles wrap at 360 degrees.

use std::path::Path;

use image::codecs::gif::{GifEncoder, Repeat};
use image::{Delay, Frame};

use crate::io::configuration::{DEFAULT_SWEEP_FRAMES, GIF_FRAME_DELAY_MS, SWEEP_STEP_DEGREES};
use crate::io::error::{GridError, Result, file_system_error, invalid_parameter};
use crate::io::image::{SightQuery, ensure_parent_dir, render_grid};
use crate::io::progress::SweepProgress;
use crate::io::scenario::Scene;

/// Sweep length, step and timing
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepSettings {
    /// Number of frames to render
    pub frames: usize,
    /// Degrees added to every obstacle's rotation per frame
    pub step_degrees: f64,
    /// Delay between frames
    pub frame_delay_ms: u32,
}

impl Default for SweepSettings {
    fn default() -> Self {
        Self {
            frames: DEFAULT_SWEEP_FRAMES,
            step_degrees: SWEEP_STEP_DEGREES,
            frame_delay_ms: GIF_FRAME_DELAY_MS,
        }
    }
}

impl SweepSettings {
    /// Extra obstacle rotation of frame `index`, wrapped to `(-360, 360)`
    pub fn angle_at(&self, index: usize) -> f64 {
        (index as f64 * self.step_degrees) % 360.0
    }
}

/// One rendered step of a sweep
pub struct SweepFrame {
    /// Extra obstacle rotation in degrees
    pub angle: f64,
    /// Query result at this angle
    pub query: SightQuery,
    /// Rendered image
    pub frame: Frame,
}

/// Render every frame of a sweep of `scene`, querying `from` to `to` each time
///
/// # Errors
///
/// Returns an error if `settings` asks for no frames.
pub fn render_sweep(
    scene: &Scene,
    from: [i32; 2],
    to: [i32; 2],
    settings: &SweepSettings,
    progress: &mut SweepProgress,
) -> Result<Vec<SweepFrame>> {
    if settings.frames == 0 {
        return Err(invalid_parameter(
            "frames",
            &settings.frames,
            &"a sweep needs at least one frame",
        ));
    }

    let mut grid = scene.build_grid(0.0);
    let delay = Delay::from_numer_denom_ms(settings.frame_delay_ms, 1);
    let mut frames = Vec::with_capacity(settings.frames);

    for index in 0..settings.frames {
        let angle = settings.angle_at(index);
        scene.rebuild(&mut grid, angle);

        let query = SightQuery::run(&grid, from, to);
        progress.frame_done(angle, query.trace.visible);

        let image = render_grid(&grid, Some(&query));
        frames.push(SweepFrame {
            angle,
            query,
            frame: Frame::from_parts(image, 0, 0, delay),
        });
    }

    Ok(frames)
}

/// Render a sweep and write it as an animated GIF
///
/// Returns the number of frames with line of sight.
///
/// # Errors
///
/// Returns an error if:
/// - `settings` asks for no frames
/// - File system operations fail
/// - GIF encoding fails
pub fn export_sweep_gif(
    scene: &Scene,
    from: [i32; 2],
    to: [i32; 2],
    settings: &SweepSettings,
    progress: &mut SweepProgress,
    output_path: &Path,
) -> Result<usize> {
    let frames = render_sweep(scene, from, to, settings, progress)?;
    let visible = frames.iter().filter(|f| f.query.trace.visible).count();

    ensure_parent_dir(output_path)?;
    let file = std::fs::File::create(output_path)
        .map_err(|e| file_system_error(output_path, "create file", e))?;

    let export_error = |e| GridError::ImageExport {
        path: output_path.to_path_buf(),
        source: e,
    };
    let mut encoder = GifEncoder::new(file);
    encoder.set_repeat(Repeat::Infinite).map_err(export_error)?;
    encoder
        .encode_frames(frames.into_iter().map(|f| f.frame))
        .map_err(export_error)?;

    Ok(visible)
}
