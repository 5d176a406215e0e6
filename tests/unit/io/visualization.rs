//! Tests for rotation sweep rendering and GIF export

#[cfg(test)]
mod tests {
    use gridsight::io::configuration::{CELL_PIXELS, GIF_FRAME_DELAY_MS, SWEEP_STEP_DEGREES};
    use gridsight::io::progress::SweepProgress;
    use gridsight::io::scenario::Scene;
    use gridsight::io::visualization::{SweepSettings, export_sweep_gif, render_sweep};

    fn quarter_turns(frames: usize) -> SweepSettings {
        SweepSettings {
            frames,
            step_degrees: 90.0,
            frame_delay_ms: GIF_FRAME_DELAY_MS,
        }
    }

    // Tests defaults follow the configured step
    #[test]
    fn test_default_settings() {
        let settings = SweepSettings::default();
        assert!((settings.step_degrees - SWEEP_STEP_DEGREES).abs() < f64::EPSILON);
        assert!(settings.frames > 0);
    }

    // Tests frame angles accumulate and wrap at a full turn
    #[test]
    fn test_angle_at_wraps() {
        let settings = quarter_turns(8);
        assert!((settings.angle_at(0)).abs() < f64::EPSILON);
        assert!((settings.angle_at(3) - 270.0).abs() < f64::EPSILON);
        assert!((settings.angle_at(4)).abs() < f64::EPSILON);
        assert!((settings.angle_at(5) - 90.0).abs() < f64::EPSILON);
    }

    // Tests a sweep renders one frame per step with the query rerun each time
    #[test]
    fn test_render_sweep_frames() -> gridsight::Result<()> {
        let scene = Scene::default();
        let mut progress = SweepProgress::hidden(4);

        let blocked = render_sweep(&scene, [0, 0], [9, 9], &quarter_turns(4), &mut progress)?;
        assert_eq!(blocked.len(), 4);
        assert!(blocked.iter().all(|frame| !frame.query.trace.visible));
        assert_eq!(progress.position(), 4);
        assert_eq!(progress.visible_frames(), 0);

        let first = blocked.first().map(|frame| frame.frame.buffer().dimensions());
        assert_eq!(first, Some((10 * CELL_PIXELS, 10 * CELL_PIXELS)));
        Ok(())
    }

    // Tests a sweep needs at least one frame
    #[test]
    fn test_render_sweep_rejects_zero_frames() {
        let mut progress = SweepProgress::hidden(0);
        let result = render_sweep(
            &Scene::default(),
            [0, 0],
            [1, 1],
            &quarter_turns(0),
            &mut progress,
        );
        assert!(result.is_err());
    }

    // Tests GIF export writes the file and reports visible frames
    #[test]
    fn test_export_sweep_gif() -> gridsight::Result<()> {
        let dir = tempfile::tempdir()?;
        let output_path = dir.path().join("sweep.gif");
        let mut progress = SweepProgress::hidden(4);

        let visible = export_sweep_gif(
            &Scene::default(),
            [9, 0],
            [9, 9],
            &quarter_turns(4),
            &mut progress,
            &output_path,
        )?;

        assert_eq!(visible, 4);
        assert!(output_path.exists());
        Ok(())
    }
}
