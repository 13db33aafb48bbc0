//! Penrose P3 rhombus tilings shaded by the luminance of video frames
//!
//! For each frame index the crate builds a P3 tiling by golden-ratio
//! substitution, stretches its bounding square over the matching source
//! frame, samples the luminance under every rhombus, and renders the tiling
//! with each rhombus filled black or white.

#![forbid(unsafe_code)]

/// Input/output operations, configuration and error handling
pub mod io;
/// Mathematical utilities for tiling geometry
pub mod math;
/// Vector canvas, rasterization and the per-frame pipeline
pub mod render;
/// Source-frame normalization, sampling and fill decisions
pub mod sampling;
/// Penrose P3 tiling construction
pub mod tiling;

pub use io::error::{RenderError, Result};
