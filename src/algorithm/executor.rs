//! Generation run: configuration, stage machine and the `generate` entry point

use log::{debug, info};

use crate::algorithm::corridors::{Corridor, carve_corridor};
use crate::algorithm::pruning::prune_wall_outline;
use crate::algorithm::random::{RandomSource, resolve_seed, seeded_rng};
use crate::algorithm::rooms::RoomPlacer;
use crate::io::configuration::{
    DEFAULT_CELL_SIZE, DEFAULT_HEIGHT, DEFAULT_MAX_ROOM_COUNT, DEFAULT_ROOM_MAX_SIZE,
    DEFAULT_ROOM_MIN_SIZE, DEFAULT_WIDTH, MAX_GRID_DIMENSION,
};
use crate::io::error::{GenerationError, Result, invalid_parameter};
use crate::io::visualization::VisualizationCapture;
use crate::spatial::grid::SpatialGrid;
use crate::spatial::region::Region;
use crate::spatial::tiles::TileType;

/// Parameters of one generation run
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationConfig {
    /// Grid width in cells
    pub width: usize,
    /// Grid height in cells
    pub height: usize,
    /// World-space edge length of one cell
    pub cell_size: f64,
    /// World position of cell `(0, 0)`
    pub origin: [f64; 3],
    /// Number of room placement attempts
    pub max_room_count: usize,
    /// Smallest room edge (inclusive)
    pub room_min_size: usize,
    /// Largest room edge (exclusive)
    pub room_max_size: usize,
    /// Skip the overlap check when placing rooms
    pub allow_overlap: bool,
    /// Run the wall outline pruning stage
    pub prune_walls: bool,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            cell_size: DEFAULT_CELL_SIZE,
            origin: [0.0; 3],
            max_room_count: DEFAULT_MAX_ROOM_COUNT,
            room_min_size: DEFAULT_ROOM_MIN_SIZE,
            room_max_size: DEFAULT_ROOM_MAX_SIZE,
            allow_overlap: false,
            prune_walls: true,
        }
    }
}

impl GenerationConfig {
    /// Check every parameter before any random draw happens
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::InvalidParameter`] naming the first invalid
    /// parameter:
    /// - `width`/`height` zero or above [`MAX_GRID_DIMENSION`]
    /// - `cell_size` not finite or not positive, `origin` not finite
    /// - `room_min_size` zero or not below `room_max_size`
    /// - `room_max_size` not below both grid dimensions, which would leave no
    ///   valid anchor for the largest room
    pub fn validate(&self) -> Result<()> {
        for (parameter, value) in [("width", self.width), ("height", self.height)] {
            if value == 0 || value > MAX_GRID_DIMENSION {
                return Err(invalid_parameter(
                    parameter,
                    &value,
                    &format!("must be between 1 and {MAX_GRID_DIMENSION}"),
                ));
            }
        }

        if !self.cell_size.is_finite() || self.cell_size <= 0.0 {
            return Err(invalid_parameter(
                "cell_size",
                &self.cell_size,
                &"must be a finite value greater than zero",
            ));
        }

        if self.origin.iter().any(|component| !component.is_finite()) {
            return Err(invalid_parameter(
                "origin",
                &format!("{:?}", self.origin),
                &"all components must be finite",
            ));
        }

        if self.room_min_size == 0 {
            return Err(invalid_parameter(
                "room_min_size",
                &self.room_min_size,
                &"must be at least 1",
            ));
        }

        if self.room_min_size >= self.room_max_size {
            return Err(invalid_parameter(
                "room_min_size",
                &self.room_min_size,
                &format!(
                    "must be less than room_max_size ({})",
                    self.room_max_size
                ),
            ));
        }

        let smallest_side = self.width.min(self.height);
        if self.room_max_size >= smallest_side {
            return Err(invalid_parameter(
                "room_max_size",
                &self.room_max_size,
                &format!(
                    "must be less than the smallest grid dimension ({smallest_side}) to leave room for a border"
                ),
            ));
        }

        Ok(())
    }

    /// Room placer for this configuration
    ///
    /// Only meaningful after [`GenerationConfig::validate`] succeeded.
    pub fn room_placer(&self) -> RoomPlacer {
        RoomPlacer {
            attempts: self.max_room_count,
            min_size: i32::try_from(self.room_min_size).unwrap_or(i32::MAX),
            max_size: i32::try_from(self.room_max_size).unwrap_or(i32::MAX),
            allow_overlap: self.allow_overlap,
        }
    }
}

/// Stages of a run, in the only order they may happen
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum GenerationStage {
    /// Grid allocated, nothing drawn yet
    Configured,
    /// Rooms stamped and corridors planned
    RoomsPlaced,
    /// Corridors carved
    CorridorsCarved,
    /// Isolated walls turned into void
    WallsPruned,
    /// Handed over as a [`GeneratedMap`]
    Finalized,
}

impl GenerationStage {
    /// Stage name used in error messages
    pub const fn name(self) -> &'static str {
        match self {
            Self::Configured => "Configured",
            Self::RoomsPlaced => "RoomsPlaced",
            Self::CorridorsCarved => "CorridorsCarved",
            Self::WallsPruned => "WallsPruned",
            Self::Finalized => "Finalized",
        }
    }
}

/// One generation run driven stage by stage
///
/// `Configured → RoomsPlaced → CorridorsCarved → (WallsPruned) → Finalized`.
/// Calling a stage out of order fails with [`GenerationError::StageOrder`]
/// and leaves the run untouched.
pub struct MapGenerator<R: RandomSource> {
    config: GenerationConfig,
    rng: R,
    grid: SpatialGrid<TileType>,
    rooms: Vec<Region>,
    corridors: Vec<Corridor>,
    rejected_rooms: usize,
    pruned_cells: usize,
    stage: GenerationStage,
    visualization: Option<VisualizationCapture>,
}

impl<R: RandomSource> MapGenerator<R> {
    /// Validate the configuration and allocate an all-wall grid
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::InvalidParameter`] for an invalid
    /// configuration; `rng` is not drawn from in that case.
    pub fn new(config: GenerationConfig, rng: R) -> Result<Self> {
        config.validate()?;

        let grid = SpatialGrid::new(
            config.width,
            config.height,
            config.cell_size,
            config.origin,
            TileType::Wall,
        )?;

        Ok(Self {
            config,
            rng,
            grid,
            rooms: Vec::new(),
            corridors: Vec::new(),
            rejected_rooms: 0,
            pruned_cells: 0,
            stage: GenerationStage::Configured,
            visualization: None,
        })
    }

    /// Record a grid snapshot after every generation event
    pub fn enable_visualization(&mut self) {
        let mut capture = VisualizationCapture::new();
        capture.record(&self.grid);
        self.visualization = Some(capture);
    }

    /// Current stage
    pub const fn stage(&self) -> GenerationStage {
        self.stage
    }

    /// Configuration of this run
    pub const fn config(&self) -> &GenerationConfig {
        &self.config
    }

    /// Grid in its current state
    pub const fn grid(&self) -> &SpatialGrid<TileType> {
        &self.grid
    }

    /// Rooms accepted so far
    pub fn rooms(&self) -> &[Region] {
        &self.rooms
    }

    /// Corridors planned so far
    pub fn corridors(&self) -> &[Corridor] {
        &self.corridors
    }

    /// Run every placement attempt; returns the number of accepted rooms
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::StageOrder`] outside the `Configured` stage,
    /// or [`GenerationError::OutOfRange`] if the random source produced a
    /// room that does not fit.
    pub fn place_rooms(&mut self) -> Result<usize> {
        self.expect_stage("place_rooms", GenerationStage::Configured)?;

        let placer = self.config.room_placer();
        let visualization = &mut self.visualization;
        let outcome = placer.place_rooms(&mut self.grid, &mut self.rng, |_, grid| {
            if let Some(capture) = visualization.as_mut() {
                capture.record(grid);
            }
        })?;

        debug!(
            "Placed {} of {} rooms ({} rejected)",
            outcome.rooms.len(),
            self.config.max_room_count,
            outcome.rejected
        );

        self.rooms = outcome.rooms;
        self.corridors = outcome.corridors;
        self.rejected_rooms = outcome.rejected;
        self.stage = GenerationStage::RoomsPlaced;
        Ok(self.rooms.len())
    }

    /// Carve every planned corridor; returns the number of newly opened cells
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::StageOrder`] outside the `RoomsPlaced` stage.
    pub fn carve_corridors(&mut self) -> Result<usize> {
        self.expect_stage("carve_corridors", GenerationStage::RoomsPlaced)?;

        let mut carved = 0;
        for corridor in &self.corridors {
            carved += carve_corridor(&mut self.grid, corridor)?;
            if let Some(capture) = self.visualization.as_mut() {
                capture.record(&self.grid);
            }
        }

        self.stage = GenerationStage::CorridorsCarved;
        Ok(carved)
    }

    /// Turn walls without a passageway neighbour into void; returns the count
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::StageOrder`] outside the `CorridorsCarved` stage.
    pub fn prune_walls(&mut self) -> Result<usize> {
        self.expect_stage("prune_walls", GenerationStage::CorridorsCarved)?;

        self.pruned_cells = prune_wall_outline(&mut self.grid);
        if let Some(capture) = self.visualization.as_mut() {
            capture.record(&self.grid);
        }

        self.stage = GenerationStage::WallsPruned;
        Ok(self.pruned_cells)
    }

    /// Hand the finished grid over
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::StageOrder`] unless corridors have been carved.
    pub fn finalize(mut self) -> Result<GeneratedMap> {
        if !matches!(
            self.stage,
            GenerationStage::CorridorsCarved | GenerationStage::WallsPruned
        ) {
            return Err(GenerationError::StageOrder {
                operation: "finalize",
                expected: "CorridorsCarved or WallsPruned",
                actual: self.stage.name(),
            });
        }
        self.stage = GenerationStage::Finalized;

        info!(
            "Generated {}x{} map: {}/{} rooms, {} corridors, {} walls pruned",
            self.grid.width(),
            self.grid.height(),
            self.rooms.len(),
            self.config.max_room_count,
            self.corridors.len(),
            self.pruned_cells
        );

        Ok(GeneratedMap {
            grid: self.grid,
            rooms: self.rooms,
            corridors: self.corridors,
            requested_rooms: self.config.max_room_count,
            rejected_rooms: self.rejected_rooms,
            pruned_cells: self.pruned_cells,
            seed: None,
            visualization: self.visualization,
        })
    }

    /// Run every stage, pruning only if the configuration asks for it
    ///
    /// # Errors
    ///
    /// Propagates the first failing stage.
    pub fn run(mut self) -> Result<GeneratedMap> {
        self.place_rooms()?;
        self.carve_corridors()?;
        if self.config.prune_walls {
            self.prune_walls()?;
        }
        self.finalize()
    }

    fn expect_stage(&self, operation: &'static str, expected: GenerationStage) -> Result<()> {
        if self.stage == expected {
            Ok(())
        } else {
            Err(GenerationError::StageOrder {
                operation,
                expected: expected.name(),
                actual: self.stage.name(),
            })
        }
    }
}

/// Finished map handed to rendering collaborators
#[derive(Debug, Clone)]
pub struct GeneratedMap {
    grid: SpatialGrid<TileType>,
    rooms: Vec<Region>,
    corridors: Vec<Corridor>,
    requested_rooms: usize,
    rejected_rooms: usize,
    pruned_cells: usize,
    seed: Option<u64>,
    visualization: Option<VisualizationCapture>,
}

impl GeneratedMap {
    /// Final tile grid with world positions
    pub const fn grid(&self) -> &SpatialGrid<TileType> {
        &self.grid
    }

    /// Accepted rooms in acceptance order
    pub fn rooms(&self) -> &[Region] {
        &self.rooms
    }

    /// Corridors between consecutive rooms
    pub fn corridors(&self) -> &[Corridor] {
        &self.corridors
    }

    /// Number of rooms actually placed
    pub const fn room_count(&self) -> usize {
        self.rooms.len()
    }

    /// Number of placement attempts configured
    pub const fn requested_rooms(&self) -> usize {
        self.requested_rooms
    }

    /// Candidates rejected for overlapping
    pub const fn rejected_rooms(&self) -> usize {
        self.rejected_rooms
    }

    /// Wall cells turned into void by pruning
    pub const fn pruned_cells(&self) -> usize {
        self.pruned_cells
    }

    /// Seed the map was generated from, when produced by [`generate`]
    pub const fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Whether overlap rejection left fewer rooms than attempts
    pub const fn is_degenerate(&self) -> bool {
        self.rooms.len() < self.requested_rooms
    }

    /// Captured snapshots, if visualization was enabled
    pub const fn visualization(&self) -> Option<&VisualizationCapture> {
        self.visualization.as_ref()
    }

    /// Iterate over `(cell, tile, world position)` for every cell
    pub fn tiles(&self) -> impl Iterator<Item = ([i32; 2], TileType, [f64; 3])> + '_ {
        self.grid
            .cells()
            .map(|(cell, tile, position)| (cell, *tile, position))
    }
}

/// Generate a map from a configuration and an optional seed
///
/// Without a seed, one is derived from the system clock; either way it is
/// reported by [`GeneratedMap::seed`].
///
/// # Errors
///
/// Returns [`GenerationError::InvalidParameter`] for an invalid configuration.
pub fn generate(config: &GenerationConfig, seed: Option<u64>) -> Result<GeneratedMap> {
    generate_seeded(config, resolve_seed(seed), false)
}

/// Generate a map with a caller-supplied random source
///
/// # Errors
///
/// Returns [`GenerationError::InvalidParameter`] for an invalid configuration,
/// or [`GenerationError::OutOfRange`] if the source draws outside its ranges.
pub fn generate_with<R: RandomSource>(
    config: &GenerationConfig,
    rng: R,
    visualize: bool,
) -> Result<GeneratedMap> {
    let mut generator = MapGenerator::new(config.clone(), rng)?;
    if visualize {
        generator.enable_visualization();
    }
    generator.run()
}

/// Generate from a fixed seed, optionally capturing snapshots for animation
///
/// # Errors
///
/// Returns [`GenerationError::InvalidParameter`] for an invalid configuration.
pub fn generate_seeded(
    config: &GenerationConfig,
    seed: u64,
    visualize: bool,
) -> Result<GeneratedMap> {
    let mut map = generate_with(config, seeded_rng(seed), visualize)?;
    map.seed = Some(seed);
    Ok(map)
}
