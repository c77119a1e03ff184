//! Generation defaults, safety limits and export settings

// Default values for configurable parameters
/// Default grid width in cells
pub const DEFAULT_WIDTH: usize = 20;
/// Default grid height in cells
pub const DEFAULT_HEIGHT: usize = 20;
/// Default world-space edge length of one cell
pub const DEFAULT_CELL_SIZE: f64 = 1.0;
/// Default number of room placement attempts
pub const DEFAULT_MAX_ROOM_COUNT: usize = 10;
/// Default smallest room edge (inclusive)
pub const DEFAULT_ROOM_MIN_SIZE: usize = 3;
/// Default largest room edge (exclusive)
pub const DEFAULT_ROOM_MAX_SIZE: usize = 10;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed grid dimension
pub const MAX_GRID_DIMENSION: usize = 10_000;

/// Cells kept between a room and the grid edge
pub const ROOM_BORDER: i32 = 1;

// Export settings
/// Default edge length in pixels of one cell in exported images
pub const DEFAULT_PIXELS_PER_CELL: u32 = 8;
/// Largest accepted pixels-per-cell scale
pub const MAX_PIXELS_PER_CELL: u32 = 64;
/// Delay between GIF animation frames
pub const GIF_FRAME_DELAY_MS: u32 = 120;
/// Multiplier applied to the delay of the last GIF frame
pub const GIF_FINAL_FRAME_HOLD: u32 = 15;
/// Suffix added to animation filenames
pub const VISUALIZATION_SUFFIX: &str = "_generation";

// Progress bar display settings
/// Threshold for switching to batch progress mode
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;
