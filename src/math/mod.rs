//! Mathematical utilities for tiling geometry

/// Translate-then-scale transforms between tiling space and device pixels
pub mod affine;
/// Complex-plane points and golden-ratio constants
pub mod geometry;
