//! Randomized room placement with overlap rejection

use log::{debug, trace};

use crate::algorithm::corridors::Corridor;
use crate::algorithm::random::RandomSource;
use crate::io::configuration::ROOM_BORDER;
use crate::io::error::Result;
use crate::spatial::grid::SpatialGrid;
use crate::spatial::region::Region;
use crate::spatial::tiles::TileType;

/// Rooms accepted during placement and the corridors planned between them
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlacementOutcome {
    /// Accepted rooms in acceptance order
    pub rooms: Vec<Region>,
    /// One corridor per consecutive pair of accepted rooms
    pub corridors: Vec<Corridor>,
    /// Candidates discarded because they intersected an accepted room
    pub rejected: usize,
}

/// Draws square candidate rooms and stamps the accepted ones onto a grid
///
/// Size ranges must already be validated against the grid dimensions; see
/// [`crate::algorithm::executor::GenerationConfig::validate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoomPlacer {
    /// Number of placement attempts
    pub attempts: usize,
    /// Smallest room edge (inclusive)
    pub min_size: i32,
    /// Largest room edge (exclusive)
    pub max_size: i32,
    /// Accept candidates that intersect earlier rooms
    pub allow_overlap: bool,
}

impl RoomPlacer {
    /// Draw one candidate region for a `width` × `height` grid
    ///
    /// The size is drawn first, then the anchor, so a room plus a one-cell
    /// border always fits inside the grid.
    pub fn draw_candidate(&self, width: i32, height: i32, rng: &mut impl RandomSource) -> Region {
        let size = rng.range(self.min_size..self.max_size);
        let x = rng.range(ROOM_BORDER..width - size);
        let y = rng.range(ROOM_BORDER..height - size);
        Region::square(x, y, size)
    }

    /// Whether `candidate` may join the already accepted `rooms`
    pub fn accepts(&self, candidate: &Region, rooms: &[Region]) -> bool {
        self.allow_overlap || !rooms.iter().any(|room| candidate.intersects(room))
    }

    /// Run every placement attempt
    ///
    /// Rejected candidates still consume an attempt, so fewer rooms than
    /// `attempts` may be accepted. `on_room` runs after each accepted room
    /// has been stamped.
    ///
    /// # Errors
    ///
    /// Returns [`crate::GenerationError::OutOfRange`] if a candidate does not
    /// fit the grid, which only happens with an unvalidated configuration or
    /// a random source that ignores its ranges.
    pub fn place_rooms(
        &self,
        grid: &mut SpatialGrid<TileType>,
        rng: &mut impl RandomSource,
        mut on_room: impl FnMut(&Region, &SpatialGrid<TileType>),
    ) -> Result<PlacementOutcome> {
        let width = grid.width() as i32;
        let height = grid.height() as i32;
        let mut outcome = PlacementOutcome::default();

        for attempt in 0..self.attempts {
            let candidate = self.draw_candidate(width, height, rng);

            if !self.accepts(&candidate, &outcome.rooms) {
                trace!("Attempt {attempt}: rejected overlapping room {candidate:?}");
                outcome.rejected += 1;
                continue;
            }

            stamp_room(grid, &candidate)?;
            debug!(
                "Attempt {attempt}: room {} at center {:?}",
                outcome.rooms.len(),
                candidate.center()
            );

            if let Some(previous) = outcome.rooms.last() {
                outcome
                    .corridors
                    .push(Corridor::plan(previous, &candidate, rng));
            }
            outcome.rooms.push(candidate);
            on_room(&candidate, grid);
        }

        Ok(outcome)
    }
}

/// Write a room's footprint into the grid as passageway
///
/// # Errors
///
/// Returns [`crate::GenerationError::OutOfRange`] without writing anything if
/// the footprint leaves the grid.
pub fn stamp_room(grid: &mut SpatialGrid<TileType>, room: &Region) -> Result<()> {
    grid.fill_area(
        TileType::Passageway,
        room.x,
        room.y,
        usize::try_from(room.width).unwrap_or(0),
        usize::try_from(room.height).unwrap_or(0),
    )
}
