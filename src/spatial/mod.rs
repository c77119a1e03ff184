//! Spatial data structures for generated maps
//!
//! This module contains:
//! - The dense grid container with world-space positions
//! - Integer regions used as room footprints
//! - Tile classification

/// Dense grid with exact, clamped and defaulted access
pub mod grid;
/// Axis-aligned integer rectangles
pub mod region;
/// Cell classification
pub mod tiles;

pub use grid::SpatialGrid;
pub use region::Region;
pub use tiles::TileType;
