//! Source-frame sampling: normalization, luminance lookup and fill decisions

/// Single-channel source frames and bounds-checked lookup
pub mod luminance;
/// Tiling extent and tiling-to-pixel mapping
pub mod normalizer;
/// Per-rhombus sampling and fill decisions
pub mod sampler;
