//! Frame capture and GIF generation for generation visualization

use crate::io::configuration::GIF_FINAL_FRAME_HOLD;
use crate::io::error::{GenerationError, Result, file_system_error};
use crate::io::image::{ensure_parent_dir, render_tiles};
use crate::spatial::grid::SpatialGrid;
use crate::spatial::tiles::TileType;
use image::{Delay, Frame};
use ndarray::Array2;
use std::path::Path;

/// Captures grid snapshots for visualization
///
/// A snapshot is taken after each generation event (room stamped, corridor
/// carved, walls pruned) so the exported animation replays the run.
#[derive(Debug, Clone, Default)]
pub struct VisualizationCapture {
    frames: Vec<Array2<TileType>>,
}

impl VisualizationCapture {
    /// Create an empty capture
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the current state of the grid
    pub fn record(&mut self, grid: &SpatialGrid<TileType>) {
        self.frames.push(grid.values().clone());
    }

    /// Recorded snapshots, oldest first
    pub fn frames(&self) -> &[Array2<TileType>] {
        &self.frames
    }

    /// Number of recorded snapshots
    pub const fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Export the captured snapshots as an animated GIF
    ///
    /// The last frame is held for [`GIF_FINAL_FRAME_HOLD`] times the normal delay.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No snapshots were captured
    /// - `pixels_per_cell` is out of range
    /// - File system operations fail
    /// - GIF encoding fails
    pub fn export_gif(
        &self,
        output_path: &Path,
        pixels_per_cell: u32,
        frame_delay_ms: u32,
    ) -> Result<()> {
        if self.frames.is_empty() {
            return Err(GenerationError::InvalidParameter {
                parameter: "visualization",
                value: output_path.display().to_string(),
                reason: "No grid snapshots captured for visualization".to_string(),
            });
        }

        let last = self.frames.len() - 1;
        let mut frames = Vec::with_capacity(self.frames.len());
        for (index, tiles) in self.frames.iter().enumerate() {
            let delay_ms = if index == last {
                frame_delay_ms.saturating_mul(GIF_FINAL_FRAME_HOLD)
            } else {
                frame_delay_ms
            };
            frames.push(Frame::from_parts(
                render_tiles(tiles, pixels_per_cell)?,
                0,
                0,
                Delay::from_numer_denom_ms(delay_ms, 1),
            ));
        }

        ensure_parent_dir(output_path)?;

        let file = std::fs::File::create(output_path)
            .map_err(|e| file_system_error(output_path, "create file", e))?;

        let mut encoder = image::codecs::gif::GifEncoder::new(file);
        encoder
            .encode_frames(frames)
            .map_err(|e| GenerationError::ImageExport {
                path: output_path.to_path_buf(),
                source: e,
            })?;

        Ok(())
    }
}
