//! Seeded room-and-corridor tile map generation on a dense 2D grid
//!
//! Square rooms are placed at random with overlap rejection, consecutive
//! rooms are joined by L-shaped corridors, and walls that border no
//! passageway can be pruned to void. The finished [`SpatialGrid`] carries a
//! world position per cell for whatever renders it.

/// Room placement, corridor carving, wall pruning and the generation run
pub mod algorithm;
/// Command-line surface, exports and error handling
pub mod io;
/// Grid container, regions and tile classification
pub mod spatial;

pub use algorithm::executor::{GeneratedMap, GenerationConfig, generate};
pub use io::error::{GenerationError, Result};
pub use spatial::{Region, SpatialGrid, TileType};
