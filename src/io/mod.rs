//! Input/output surface: command line, exports, progress and errors

/// Command-line arguments and batch processing
pub mod cli;
/// Defaults, limits and export settings
pub mod configuration;
/// Error types
pub mod error;
/// PNG export
pub mod image;
/// Batch progress display
pub mod progress;
/// Plain-text export
pub mod text;
/// Generation snapshots and GIF export
pub mod visualization;
