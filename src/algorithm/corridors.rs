//! L-shaped corridors between consecutive room centers

use crate::algorithm::random::RandomSource;
use crate::io::error::Result;
use crate::spatial::grid::SpatialGrid;
use crate::spatial::region::Region;
use crate::spatial::tiles::TileType;

/// Which leg of the L is carved first
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CorridorOrientation {
    /// Along the start row, then along the end column
    HorizontalFirst,
    /// Along the start column, then along the end row
    VerticalFirst,
}

/// Planned connection between two room centers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Corridor {
    /// Center of the previously accepted room
    pub from: [i32; 2],
    /// Center of the newly accepted room
    pub to: [i32; 2],
    /// Leg order
    pub orientation: CorridorOrientation,
}

impl Corridor {
    /// Plan a corridor between two rooms, drawing the leg order from `rng`
    pub fn plan(previous: &Region, next: &Region, rng: &mut impl RandomSource) -> Self {
        let orientation = if rng.coin_flip() {
            CorridorOrientation::HorizontalFirst
        } else {
            CorridorOrientation::VerticalFirst
        };
        Self {
            from: previous.center(),
            to: next.center(),
            orientation,
        }
    }

    /// Cell where the two legs meet
    pub const fn elbow(&self) -> [i32; 2] {
        match self.orientation {
            CorridorOrientation::HorizontalFirst => [self.to[0], self.from[1]],
            CorridorOrientation::VerticalFirst => [self.from[0], self.to[1]],
        }
    }

    /// Every cell on the path from `from` to `to`, walking through the elbow
    pub fn cells(&self) -> Vec<[i32; 2]> {
        let elbow = self.elbow();
        let mut cells = straight_line(self.from, elbow);
        cells.extend(straight_line(elbow, self.to).into_iter().skip(1));
        cells
    }
}

/// Write the corridor into the grid as passageway
///
/// Returns the number of cells that were not already passageway.
///
/// # Errors
///
/// Returns [`crate::GenerationError::OutOfRange`] if the path leaves the grid.
pub fn carve_corridor(grid: &mut SpatialGrid<TileType>, corridor: &Corridor) -> Result<usize> {
    let [from_x, from_y] = corridor.from;
    let [to_x, to_y] = corridor.to;

    let carved = match corridor.orientation {
        CorridorOrientation::HorizontalFirst => {
            carve_horizontal(grid, from_x, to_x, from_y)? + carve_vertical(grid, from_y, to_y, to_x)?
        }
        CorridorOrientation::VerticalFirst => {
            carve_vertical(grid, from_y, to_y, from_x)? + carve_horizontal(grid, from_x, to_x, to_y)?
        }
    };
    Ok(carved)
}

/// Carve row `y` between two columns, both ends inclusive
///
/// # Errors
///
/// Returns [`crate::GenerationError::OutOfRange`] if a cell is outside the grid.
pub fn carve_horizontal(
    grid: &mut SpatialGrid<TileType>,
    x_start: i32,
    x_end: i32,
    y: i32,
) -> Result<usize> {
    let mut carved = 0;
    for x in x_start.min(x_end)..=x_start.max(x_end) {
        carved += carve_cell(grid, x, y)?;
    }
    Ok(carved)
}

/// Carve column `x` between two rows, both ends inclusive
///
/// # Errors
///
/// Returns [`crate::GenerationError::OutOfRange`] if a cell is outside the grid.
pub fn carve_vertical(
    grid: &mut SpatialGrid<TileType>,
    y_start: i32,
    y_end: i32,
    x: i32,
) -> Result<usize> {
    let mut carved = 0;
    for y in y_start.min(y_end)..=y_start.max(y_end) {
        carved += carve_cell(grid, x, y)?;
    }
    Ok(carved)
}

fn carve_cell(grid: &mut SpatialGrid<TileType>, x: i32, y: i32) -> Result<usize> {
    let was_open = grid.get(x, y)?.is_walkable();
    grid.set(x, y, TileType::Passageway)?;
    Ok(usize::from(!was_open))
}

// Axis-aligned segments only; one coordinate is shared
fn straight_line(start: [i32; 2], end: [i32; 2]) -> Vec<[i32; 2]> {
    let step_x = (end[0] - start[0]).signum();
    let step_y = (end[1] - start[1]).signum();
    let length = (end[0] - start[0]).abs().max((end[1] - start[1]).abs());
    (0..=length)
        .map(|i| [start[0] + step_x * i, start[1] + step_y * i])
        .collect()
}
