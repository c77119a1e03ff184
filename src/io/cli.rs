//! Command-line interface for generating and exporting batches of maps

use crate::algorithm::executor::{GeneratedMap, GenerationConfig, generate_seeded};
use crate::algorithm::random::resolve_seed;
use crate::io::configuration::{
    DEFAULT_CELL_SIZE, DEFAULT_HEIGHT, DEFAULT_MAX_ROOM_COUNT, DEFAULT_PIXELS_PER_CELL,
    DEFAULT_ROOM_MAX_SIZE, DEFAULT_ROOM_MIN_SIZE, DEFAULT_WIDTH, GIF_FRAME_DELAY_MS,
    VISUALIZATION_SUFFIX,
};
use crate::io::error::{Result, invalid_parameter};
use crate::io::image::export_map_as_png;
use crate::io::progress::ProgressManager;
use crate::io::text::export_map_as_text;
use clap::Parser;
use log::{LevelFilter, debug, info};
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "roomcarve")]
#[command(
    author,
    version,
    about = "Generate room-and-corridor tile maps as PNG images"
)]
/// Command-line arguments for the map generator
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Output PNG file (batches insert the seed before the extension)
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Grid width in cells
    #[arg(short, long, default_value_t = DEFAULT_WIDTH)]
    pub width: usize,

    /// Grid height in cells
    #[arg(short = 'H', long, default_value_t = DEFAULT_HEIGHT)]
    pub height: usize,

    /// World-space edge length of one cell
    #[arg(long, default_value_t = DEFAULT_CELL_SIZE)]
    pub cell_size: f64,

    /// Number of room placement attempts
    #[arg(short, long, default_value_t = DEFAULT_MAX_ROOM_COUNT)]
    pub rooms: usize,

    /// Smallest room edge (inclusive)
    #[arg(long, default_value_t = DEFAULT_ROOM_MIN_SIZE)]
    pub room_min: usize,

    /// Largest room edge (exclusive)
    #[arg(long, default_value_t = DEFAULT_ROOM_MAX_SIZE)]
    pub room_max: usize,

    /// Random seed for reproducible generation (defaults to the clock)
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Accept rooms that overlap earlier rooms
    #[arg(long)]
    pub allow_overlap: bool,

    /// Keep walls that do not border any passageway
    #[arg(long)]
    pub no_prune: bool,

    /// Number of maps to generate with consecutive seeds
    #[arg(short = 'n', long, default_value_t = 1)]
    pub count: usize,

    /// Pixels per cell in exported images
    #[arg(long, default_value_t = DEFAULT_PIXELS_PER_CELL)]
    pub scale: u32,

    /// Also export the generation process as an animated GIF
    #[arg(short, long)]
    pub visualize: bool,

    /// Also export the map as a text file
    #[arg(short, long)]
    pub text: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Log every placed room
    #[arg(long)]
    pub verbose: bool,
}

impl Cli {
    /// Generation parameters described by the arguments
    pub fn generation_config(&self) -> GenerationConfig {
        GenerationConfig {
            width: self.width,
            height: self.height,
            cell_size: self.cell_size,
            max_room_count: self.rooms,
            room_min_size: self.room_min,
            room_max_size: self.room_max,
            allow_overlap: self.allow_overlap,
            prune_walls: !self.no_prune,
            ..GenerationConfig::default()
        }
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Default log level before `RUST_LOG` is applied
    pub const fn log_level(&self) -> LevelFilter {
        if self.verbose {
            LevelFilter::Debug
        } else if self.quiet {
            LevelFilter::Error
        } else {
            LevelFilter::Warn
        }
    }

    /// Steps shown on each map's progress bar
    pub const fn steps_per_map(&self) -> usize {
        2 + self.visualize as usize + self.text as usize
    }
}

/// Generates every requested map and writes its exports
pub struct MapProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl MapProcessor {
    /// Create a new processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Generate and export all maps; returns the PNG paths written
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or any export fails.
    pub fn process(&mut self) -> Result<Vec<PathBuf>> {
        if self.cli.count == 0 {
            return Err(invalid_parameter(
                "count",
                &self.cli.count,
                &"must generate at least one map",
            ));
        }

        let config = self.cli.generation_config();
        config.validate()?;

        let base_seed = resolve_seed(self.cli.seed);
        let seeds: Vec<u64> = (0..self.cli.count as u64)
            .map(|offset| base_seed.wrapping_add(offset))
            .collect();

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(seeds.len());
        }

        let mut written = Vec::with_capacity(seeds.len());
        for (index, &seed) in seeds.iter().enumerate() {
            written.push(self.process_map(&config, index, seed)?);
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.finish();
        }

        Ok(written)
    }

    fn process_map(&mut self, config: &GenerationConfig, index: usize, seed: u64) -> Result<PathBuf> {
        let start_time = Instant::now();
        let output_path = self.output_path(seed);
        let label = output_path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();
        let steps = self.cli.steps_per_map();

        if let Some(ref mut pm) = self.progress_manager {
            pm.start_map(index, &label, steps);
        }

        let map = generate_seeded(config, seed, self.cli.visualize)?;
        if map.is_degenerate() {
            info!(
                "Seed {seed}: placed {} of {} rooms",
                map.room_count(),
                map.requested_rooms()
            );
        }
        self.advance(index);

        export_map_as_png(map.grid(), self.cli.scale, &output_path)?;
        self.advance(index);

        if self.cli.visualize {
            self.export_visualization(&map, &output_path)?;
            self.advance(index);
        }

        if self.cli.text {
            export_map_as_text(map.grid(), &output_path.with_extension("txt"))?;
            self.advance(index);
        }

        info!("Seed {seed}: wrote {}", output_path.display());

        if let Some(ref mut pm) = self.progress_manager {
            pm.complete_map(index, start_time.elapsed());
        }

        Ok(output_path)
    }

    fn export_visualization(&self, map: &GeneratedMap, output_path: &Path) -> Result<()> {
        let Some(capture) = map.visualization() else {
            return Ok(());
        };
        let gif_path = Self::visualization_path(output_path);
        capture.export_gif(&gif_path, self.cli.scale, GIF_FRAME_DELAY_MS)?;
        debug!(
            "Wrote {} frames to {}",
            capture.frame_count(),
            gif_path.display()
        );
        Ok(())
    }

    fn advance(&mut self, index: usize) {
        if let Some(ref mut pm) = self.progress_manager {
            pm.advance(index);
        }
    }

    /// PNG path for a seed: the output as given for single maps, suffixed by seed in batches
    pub fn output_path(&self, seed: u64) -> PathBuf {
        if self.cli.count <= 1 {
            return self.cli.output.clone();
        }
        let extension = self
            .cli
            .output
            .extension()
            .map_or_else(|| "png".to_string(), |ext| ext.to_string_lossy().to_string());
        Self::with_stem_suffix(&self.cli.output, &format!("_{seed}"), &extension)
    }

    /// GIF path written next to a PNG output
    pub fn visualization_path(output_path: &Path) -> PathBuf {
        Self::with_stem_suffix(output_path, VISUALIZATION_SUFFIX, "gif")
    }

    fn with_stem_suffix(path: &Path, suffix: &str, extension: &str) -> PathBuf {
        let stem = path.file_stem().unwrap_or_default();
        let name = format!("{}{suffix}.{extension}", stem.to_string_lossy());

        path.parent()
            .map_or_else(|| PathBuf::from(&name), |parent| parent.join(&name))
    }
}
