//! Tests for corridor planning, path shape and carving

#[cfg(test)]
mod tests {
    use crate::unit::ScriptedRandom;
    use roomcarve::algorithm::corridors::{
        Corridor, CorridorOrientation, carve_corridor, carve_horizontal, carve_vertical,
    };
    use roomcarve::spatial::grid::SpatialGrid;
    use roomcarve::spatial::region::Region;
    use roomcarve::spatial::tiles::TileType;

    fn wall_grid(width: usize, height: usize) -> SpatialGrid<TileType> {
        SpatialGrid::new(width, height, 1.0, [0.0; 3], TileType::Wall).expect("valid grid")
    }

    fn passageways(grid: &SpatialGrid<TileType>) -> Vec<[i32; 2]> {
        grid.cells()
            .filter(|(_, tile, _)| **tile == TileType::Passageway)
            .map(|(cell, _, _)| cell)
            .collect()
    }

    // Tests planning connects room centers and draws exactly one coin
    // Verified by swapping the orientation branches
    #[test]
    fn test_plan_uses_centers_and_coin() {
        let previous = Region::square(1, 1, 2);
        let next = Region::square(6, 4, 3);

        let mut heads = ScriptedRandom::new(&[], &[true]);
        let corridor = Corridor::plan(&previous, &next, &mut heads);
        assert_eq!(corridor.from, [2, 2]);
        assert_eq!(corridor.to, [7, 5]);
        assert_eq!(corridor.orientation, CorridorOrientation::HorizontalFirst);
        assert_eq!(heads.coin_calls, 1);
        assert!(heads.range_calls.is_empty());

        let mut tails = ScriptedRandom::new(&[], &[false]);
        let corridor = Corridor::plan(&previous, &next, &mut tails);
        assert_eq!(corridor.orientation, CorridorOrientation::VerticalFirst);
    }

    // Tests the elbow sits on the start row or start column depending on orientation
    // Verified by using the end row for horizontal-first corridors
    #[test]
    fn test_elbow_follows_orientation() {
        let mut corridor = Corridor {
            from: [1, 1],
            to: [4, 3],
            orientation: CorridorOrientation::HorizontalFirst,
        };
        assert_eq!(corridor.elbow(), [4, 1]);

        corridor.orientation = CorridorOrientation::VerticalFirst;
        assert_eq!(corridor.elbow(), [1, 3]);
    }

    // Tests carving opens exactly the L-shaped path and counts new cells
    // Verified by carving the second leg along the start column
    #[test]
    fn test_carve_horizontal_first_path() {
        let mut grid = wall_grid(6, 5);
        let corridor = Corridor {
            from: [1, 1],
            to: [4, 3],
            orientation: CorridorOrientation::HorizontalFirst,
        };

        let carved = carve_corridor(&mut grid, &corridor).expect("path inside grid");

        let expected = vec![[1, 1], [2, 1], [3, 1], [4, 1], [4, 2], [4, 3]];
        assert_eq!(carved, expected.len());
        assert_eq!(corridor.cells(), expected);
        let mut open = passageways(&grid);
        open.sort_unstable();
        let mut sorted_expected = expected;
        sorted_expected.sort_unstable();
        assert_eq!(open, sorted_expected);
    }

    // Tests vertical-first corridors walk the start column before the end row
    // Verified by forcing horizontal-first carving
    #[test]
    fn test_carve_vertical_first_path() {
        let mut grid = wall_grid(6, 5);
        let corridor = Corridor {
            from: [4, 3],
            to: [1, 1],
            orientation: CorridorOrientation::VerticalFirst,
        };

        let carved = carve_corridor(&mut grid, &corridor).expect("path inside grid");

        assert_eq!(carved, 6);
        for cell in [[4, 3], [4, 2], [4, 1], [3, 1], [2, 1], [1, 1]] {
            assert_eq!(grid.get(cell[0], cell[1]).ok(), Some(&TileType::Passageway));
        }
        assert_eq!(grid.get(1, 3).ok(), Some(&TileType::Wall));
        assert_eq!(corridor.cells().first(), Some(&[4, 3]));
        assert_eq!(corridor.cells().last(), Some(&[1, 1]));
    }

    // Tests straight runs are inclusive and accept reversed endpoints
    // Verified by using an exclusive upper bound
    #[test]
    fn test_straight_runs_are_inclusive() {
        let mut grid = wall_grid(5, 5);
        assert_eq!(carve_horizontal(&mut grid, 3, 1, 2).ok(), Some(3));
        assert_eq!(carve_vertical(&mut grid, 4, 0, 0).ok(), Some(5));
        assert_eq!(grid.count(&TileType::Passageway), 8);
    }

    // Tests re-carving existing passageway reports nothing new
    // Verified by counting every visited cell
    #[test]
    fn test_recarving_counts_only_new_cells() {
        let mut grid = wall_grid(5, 5);
        grid.fill_area(TileType::Passageway, 1, 1, 2, 2)
            .expect("area inside grid");

        assert_eq!(carve_horizontal(&mut grid, 1, 3, 1).ok(), Some(1));
        assert_eq!(carve_horizontal(&mut grid, 1, 3, 1).ok(), Some(0));
    }

    // Tests a corridor between identical centers opens a single cell
    // Verified by double counting the shared elbow
    #[test]
    fn test_zero_length_corridor() {
        let mut grid = wall_grid(4, 4);
        let corridor = Corridor {
            from: [2, 2],
            to: [2, 2],
            orientation: CorridorOrientation::HorizontalFirst,
        };

        assert_eq!(carve_corridor(&mut grid, &corridor).ok(), Some(1));
        assert_eq!(corridor.cells(), vec![[2, 2]]);
    }

    // Tests a path leaving the grid is reported instead of clamped
    // Verified by switching carving to clamped writes
    #[test]
    fn test_out_of_range_path_errors() {
        let mut grid = wall_grid(4, 4);
        assert!(carve_vertical(&mut grid, 0, 9, 1).is_err());
        assert!(carve_horizontal(&mut grid, -1, 2, 1).is_err());
    }
}
