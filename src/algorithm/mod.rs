//! Map generation stages and the run that sequences them

/// L-shaped corridors between room centers
pub mod corridors;
/// Configuration, stage machine and entry points
pub mod executor;
/// Wall outline pruning
pub mod pruning;
/// Seedable random source
pub mod random;
/// Room placement with overlap rejection
pub mod rooms;
