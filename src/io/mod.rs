//! Input/output operations, configuration and error handling

/// Command-line interface and batch frame processing
pub mod cli;
/// Rendering constants and defaults
pub mod configuration;
/// Error types and frame context
pub mod error;
/// Frame file naming
pub mod frames;
/// PNG and SVG export
pub mod image;
/// Batch progress display
pub mod progress;
