//! PNG export of finished maps, one square pixel block per cell

use crate::io::configuration::MAX_PIXELS_PER_CELL;
use crate::io::error::{GenerationError, Result, file_system_error, invalid_parameter};
use crate::spatial::grid::SpatialGrid;
use crate::spatial::tiles::TileType;
use image::{Rgba, RgbaImage};
use ndarray::Array2;
use std::path::Path;

/// Render a `(width, height)` tile array into an RGBA image
///
/// Column `x` maps to pixel columns, row `y` to pixel rows, and void cells
/// stay transparent.
///
/// # Errors
///
/// Returns an error if `pixels_per_cell` is zero or above
/// [`MAX_PIXELS_PER_CELL`], or the image size overflows `u32`.
pub fn render_tiles(tiles: &Array2<TileType>, pixels_per_cell: u32) -> Result<RgbaImage> {
    if pixels_per_cell == 0 || pixels_per_cell > MAX_PIXELS_PER_CELL {
        return Err(invalid_parameter(
            "pixels_per_cell",
            &pixels_per_cell,
            &format!("must be between 1 and {MAX_PIXELS_PER_CELL}"),
        ));
    }

    let (width, height) = tiles.dim();
    let image_width = scaled_extent(width, pixels_per_cell)?;
    let image_height = scaled_extent(height, pixels_per_cell)?;

    let mut img = RgbaImage::new(image_width, image_height);
    for ((x, y), tile) in tiles.indexed_iter() {
        let color = Rgba(tile.color());
        let left = x as u32 * pixels_per_cell;
        let top = y as u32 * pixels_per_cell;
        for dy in 0..pixels_per_cell {
            for dx in 0..pixels_per_cell {
                img.put_pixel(left + dx, top + dy, color);
            }
        }
    }

    Ok(img)
}

/// Export a finished map as a PNG image
///
/// # Errors
///
/// Returns an error if:
/// - `pixels_per_cell` is out of range
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_map_as_png(
    grid: &SpatialGrid<TileType>,
    pixels_per_cell: u32,
    output_path: &Path,
) -> Result<()> {
    let img = render_tiles(grid.values(), pixels_per_cell)?;

    ensure_parent_dir(output_path)?;

    img.save(output_path)
        .map_err(|e| GenerationError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    Ok(())
}

/// Create the parent directory of `path` if it has one
///
/// # Errors
///
/// Returns [`GenerationError::FileSystem`] if the directory cannot be created.
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .map_err(|e| file_system_error(parent, "create directory", e))?;
    }
    Ok(())
}

fn scaled_extent(cells: usize, pixels_per_cell: u32) -> Result<u32> {
    u32::try_from(cells)
        .ok()
        .and_then(|cells| cells.checked_mul(pixels_per_cell))
        .ok_or_else(|| {
            invalid_parameter(
                "pixels_per_cell",
                &pixels_per_cell,
                &format!("image of {cells} cells would exceed the maximum image size"),
            )
        })
}
