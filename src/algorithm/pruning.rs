//! Removal of wall cells that do not border any passageway

use bitvec::prelude::*;

use crate::spatial::grid::SpatialGrid;
use crate::spatial::tiles::TileType;

const NEIGHBOR_OFFSETS: [[i32; 2]; 4] = [[1, 0], [0, 1], [-1, 0], [0, -1]];

/// Whether any of the four axis-aligned neighbours is passageway
///
/// Uses clamped reads, so a border cell sees itself in place of a missing
/// neighbour.
pub fn borders_passageway(grid: &SpatialGrid<TileType>, x: i32, y: i32) -> bool {
    NEIGHBOR_OFFSETS
        .iter()
        .any(|[dx, dy]| grid.get_clamped(x + dx, y + dy).is_walkable())
}

/// Mark every wall cell with no passageway neighbour, x-major like the grid
pub fn isolated_walls(grid: &SpatialGrid<TileType>) -> BitVec {
    let mut mask = bitvec![0; grid.width() * grid.height()];
    for (index, ([x, y], tile, _)) in grid.cells().enumerate() {
        if *tile == TileType::Wall && !borders_passageway(grid, x, y) {
            mask.set(index, true);
        }
    }
    mask
}

/// Turn isolated walls into void; returns the number of cells rewritten
///
/// All neighbour checks read the grid as it was before the pass, so the
/// result does not depend on visiting order.
pub fn prune_wall_outline(grid: &mut SpatialGrid<TileType>) -> usize {
    let mask = isolated_walls(grid);
    let height = grid.height();
    for index in mask.iter_ones() {
        let x = (index / height) as i32;
        let y = (index % height) as i32;
        grid.set_if_in_range(x, y, TileType::Void);
    }
    mask.count_ones()
}
