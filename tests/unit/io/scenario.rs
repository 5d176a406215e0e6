//! Tests for scene setup, random scattering and value parsing

#[cfg(test)]
mod tests {
    use gridsight::GridError;
    use gridsight::io::scenario::{
        Scene, parse_cell, parse_obstacle, parse_world_size, require_cell,
    };
    use gridsight::spatial::{Patch, SpatialGrid};

    fn blocked_cells(grid: &SpatialGrid<bool>) -> Vec<[i32; 2]> {
        let mut cells = Vec::new();
        for y in 0..grid.height() as i32 {
            for x in 0..grid.width() as i32 {
                if grid.get(x, y) {
                    cells.push([x, y]);
                }
            }
        }
        cells
    }

    // Tests the default obstacle blocks the four cells whose centers touch it
    #[test]
    fn test_default_scene_grid() {
        let grid = Scene::default().build_grid(0.0);
        assert_eq!((grid.width(), grid.height()), (10, 10));
        assert_eq!(blocked_cells(&grid), vec![[1, 2], [2, 2], [1, 3], [2, 3]]);
    }

    // Tests a quarter turn of the default obstacle blocks the same cells
    #[test]
    fn test_default_scene_quarter_turn() {
        let grid = Scene::default().build_grid(90.0);
        assert_eq!(blocked_cells(&grid), vec![[1, 2], [2, 2], [1, 3], [2, 3]]);
    }

    // Tests rebuilding clears cells blocked at the previous angle
    #[test]
    fn test_rebuild_clears_previous_obstacles() {
        let scene = Scene::default();
        let mut grid = scene.build_grid(0.0);
        let stamped = scene.rebuild(&mut grid, 45.0);

        assert_eq!(grid, scene.build_grid(45.0));
        assert_eq!(
            stamped.iter().map(|tile| tile.coords()).collect::<Vec<_>>(),
            blocked_cells(&grid)
        );
    }

    // Tests invalid worlds are rejected
    #[test]
    fn test_new_validates() {
        assert!(Scene::new([10.0, 10.0], 0.0).is_err());
        assert!(Scene::new([10.0, -1.0], 1.0).is_err());
        assert!(Scene::new([f64::INFINITY, 1.0], 1.0).is_err());
        assert!(Scene::new([3.0, 2.0], 0.5).is_ok_and(|scene| scene.obstacles.is_empty()));
    }

    // Tests obstacles are added in order
    #[test]
    fn test_with_obstacle() -> gridsight::Result<()> {
        let scene = Scene::new([6.0, 6.0], 1.0)?
            .with_obstacle(Patch::new([1.0, 1.0], [2.0, 2.0], 0.0))
            .with_obstacle(Patch::new([4.0, 4.0], [2.0, 2.0], 0.0));
        assert_eq!(scene.obstacles.len(), 2);

        let grid = scene.build_grid(0.0);
        assert_eq!(blocked_cells(&grid).len(), 8);
        Ok(())
    }

    // Tests random scenes are reproducible from the seed
    #[test]
    fn test_random_scene_reproducible() -> gridsight::Result<()> {
        let a = Scene::random([20.0, 12.0], 1.0, 6, 7)?;
        let b = Scene::random([20.0, 12.0], 1.0, 6, 7)?;
        let c = Scene::random([20.0, 12.0], 1.0, 6, 8)?;

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(a.obstacles.len(), 6);
        for obstacle in &a.obstacles {
            assert!((0.0..20.0).contains(&obstacle.center[0]));
            assert!((0.0..12.0).contains(&obstacle.center[1]));
            assert!(obstacle.size.iter().all(|&extent| (0.5..3.0).contains(&extent)));
        }
        Ok(())
    }

    // Tests user-supplied cells are checked against the grid
    #[test]
    fn test_require_cell() {
        let grid: SpatialGrid<bool> = SpatialGrid::with_dimensions(4, 3, 1.0);
        assert_eq!(require_cell(&grid, [3, 2]).ok(), Some([3, 2]));
        assert!(matches!(
            require_cell(&grid, [4, 0]),
            Err(GridError::CellOutOfRange {
                x: 4,
                y: 0,
                width: 4,
                height: 3
            })
        ));
    }

    // Tests world size parsing
    #[test]
    fn test_parse_world_size() {
        assert_eq!(parse_world_size("10x7.5").ok(), Some([10.0, 7.5]));
        assert!(parse_world_size("10").is_err());
        assert!(parse_world_size("0x5").is_err());
        assert!(parse_world_size("ax5").is_err());
    }

    // Tests cell parsing tolerates spaces
    #[test]
    fn test_parse_cell() {
        assert_eq!(parse_cell("4,6").ok(), Some([4, 6]));
        assert_eq!(parse_cell(" 4, 6").ok(), Some([4, 6]));
        assert_eq!(parse_cell("-1,0").ok(), Some([-1, 0]));
        assert!(parse_cell("4;6").is_err());
        assert!(parse_cell("4.5,6").is_err());
    }

    // Tests obstacle parsing with and without a rotation
    #[test]
    fn test_parse_obstacle() {
        assert_eq!(
            parse_obstacle("2,3:1.5x1@30").ok(),
            Some(Patch::new([2.0, 3.0], [1.5, 1.0], 30.0))
        );
        assert_eq!(
            parse_obstacle("-1.5,2:1x1").ok(),
            Some(Patch::new([-1.5, 2.0], [1.0, 1.0], 0.0))
        );
        assert_eq!(
            parse_obstacle("0,0:2x4@-45").ok(),
            Some(Patch::new([0.0, 0.0], [2.0, 4.0], -45.0))
        );
        assert!(parse_obstacle("2,3").is_err());
        assert!(parse_obstacle("2,3:1.5").is_err());
        assert!(parse_obstacle("2,3:1x1@north").is_err());
    }
}
