//! Plain-text rendering of finished maps

use crate::io::error::{Result, file_system_error};
use crate::io::image::ensure_parent_dir;
use crate::spatial::grid::SpatialGrid;
use crate::spatial::tiles::TileType;
use std::path::Path;

/// Render one line per row, row 0 first, one glyph per cell
pub fn render_ascii(grid: &SpatialGrid<TileType>) -> String {
    let (width, height) = grid.dimensions();
    let mut out = String::with_capacity((width + 1) * height);
    for y in 0..height as i32 {
        for x in 0..width as i32 {
            out.push(grid.get_clamped(x, y).glyph());
        }
        out.push('\n');
    }
    out
}

/// Write [`render_ascii`] output to a file
///
/// # Errors
///
/// Returns [`crate::GenerationError::FileSystem`] if the file or its parent
/// directory cannot be written.
pub fn export_map_as_text(grid: &SpatialGrid<TileType>, output_path: &Path) -> Result<()> {
    ensure_parent_dir(output_path)?;
    std::fs::write(output_path, render_ascii(grid))
        .map_err(|e| file_system_error(output_path, "write file", e))
}
