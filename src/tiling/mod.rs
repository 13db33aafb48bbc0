//! Penrose P3 tiling construction
//!
//! This module contains the geometry side of the pipeline:
//! - Triangle and rhombus data structures
//! - The substitution rules and the initial wheel
//! - The frame-to-depth schedule
//! - Optional merging of co-rhombus triangles

/// Rhombus extraction from triangles
pub mod pairing;
/// Frame index to subdivision depth mapping
pub mod schedule;
/// Initial wheel and recursive subdivision
pub mod substitution;
/// Triangle and rhombus types
pub mod triangle;

pub use triangle::{Rhombus, Triangle, TriangleColor};
