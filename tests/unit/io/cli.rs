//! Tests for command-line parsing and the query runner

#[cfg(test)]
mod tests {
    use clap::Parser;
    use gridsight::GridError;
    use gridsight::io::cli::{Cli, run};
    use gridsight::io::configuration::{DEFAULT_SEED, DEFAULT_SWEEP_FRAMES, DEFAULT_TILE_SIZE};
    use gridsight::io::scenario::Scene;
    use gridsight::spatial::Patch;

    // Tests CLI parsing with only the required endpoints
    #[test]
    fn test_cli_parse_minimal_args() {
        let cli = Cli::parse_from(["gridsight", "--from", "0,0", "--to", "9,9"]);

        assert_eq!(cli.from, [0, 0]);
        assert_eq!(cli.to, [9, 9]);
        assert_eq!(cli.world, [10.0, 10.0]);
        assert!((cli.tile_size - DEFAULT_TILE_SIZE).abs() < f64::EPSILON);
        assert_eq!(cli.seed, DEFAULT_SEED);
        assert_eq!(cli.frames, DEFAULT_SWEEP_FRAMES);
        assert!(cli.obstacle.is_empty());
        assert!(cli.should_show_progress());
    }

    // Tests CLI parsing with obstacles and a negative rotation
    #[test]
    fn test_cli_parse_obstacles() {
        let cli = Cli::parse_from([
            "gridsight",
            "--from",
            "1,1",
            "--to",
            "5,2",
            "--world",
            "8x6",
            "--obstacle",
            "3,3:2x1@15",
            "-o",
            "-1,0:1x1",
            "--rotation",
            "-30",
            "--quiet",
        ]);

        assert_eq!(cli.world, [8.0, 6.0]);
        assert_eq!(
            cli.obstacle,
            vec![
                Patch::new([3.0, 3.0], [2.0, 1.0], 15.0),
                Patch::new([-1.0, 0.0], [1.0, 1.0], 0.0)
            ]
        );
        assert!((cli.rotation + 30.0).abs() < f64::EPSILON);
        assert!(!cli.should_show_progress());
    }

    // Tests random scattering conflicts with explicit obstacles
    #[test]
    fn test_cli_random_conflicts_with_obstacle() {
        let result = Cli::try_parse_from([
            "gridsight",
            "--from",
            "0,0",
            "--to",
            "1,1",
            "--obstacle",
            "3,3:2x1",
            "--random",
            "5",
        ]);
        assert!(result.is_err());
    }

    // Tests malformed cells are rejected at parse time
    #[test]
    fn test_cli_rejects_bad_cell() {
        let result = Cli::try_parse_from(["gridsight", "--from", "0;0", "--to", "1,1"]);
        assert!(result.is_err());
    }

    // Tests the scene falls back to the default obstacle and applies --rotation
    #[test]
    fn test_cli_scene() -> gridsight::Result<()> {
        let cli = Cli::parse_from(["gridsight", "--from", "0,0", "--to", "1,1", "-r", "45"]);
        let scene = cli.scene()?;
        let expected: Vec<Patch> = Scene::default()
            .obstacles
            .iter()
            .map(|obstacle| obstacle.rotated_by(45.0))
            .collect();
        assert_eq!(scene.obstacles, expected);

        let random = Cli::parse_from([
            "gridsight", "--from", "0,0", "--to", "1,1", "--random", "3", "--seed", "9",
        ])
        .scene()?;
        assert_eq!(random.obstacles.len(), 3);
        Ok(())
    }

    // Tests the runner reports the blocked verdict and the stopping cell
    #[test]
    fn test_run_default_scene() -> gridsight::Result<()> {
        let cli = Cli::parse_from(["gridsight", "--from", "0,0", "--to", "9,9", "--quiet"]);
        let report = run(&cli)?;

        assert!(!report.query.trace.visible);
        assert_eq!(report.blocked_cells, 4);
        assert_eq!(report.sweep_visible_frames, None);
        assert_eq!(
            report.to_string(),
            "blocked (6 cells probed, 4 cells blocked), stopped at 1,2"
        );
        Ok(())
    }

    // Tests a clear query and image outputs
    #[test]
    fn test_run_with_outputs() -> gridsight::Result<()> {
        let dir = tempfile::tempdir()?;
        let png = dir.path().join("snapshot.png");
        let gif = dir.path().join("sweep.gif");

        let cli = Cli::parse_from([
            "gridsight".to_string(),
            "--from".to_string(),
            "9,0".to_string(),
            "--to".to_string(),
            "9,9".to_string(),
            "--png".to_string(),
            png.display().to_string(),
            "--sweep".to_string(),
            gif.display().to_string(),
            "--frames".to_string(),
            "3".to_string(),
            "--quiet".to_string(),
        ]);
        let report = run(&cli)?;

        assert!(report.query.trace.visible);
        assert_eq!(report.sweep_visible_frames, Some(3));
        assert!(report.to_string().starts_with("visible"));
        assert!(png.exists());
        assert!(gif.exists());
        Ok(())
    }

    // Tests endpoints outside the grid are reported, not panicked on
    #[test]
    fn test_run_out_of_range_endpoint() {
        let cli = Cli::parse_from(["gridsight", "--from", "0,0", "--to", "10,3", "--quiet"]);
        assert!(matches!(
            run(&cli),
            Err(GridError::CellOutOfRange { x: 10, y: 3, .. })
        ));
    }
}
