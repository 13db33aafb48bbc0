//! Rhombus extraction, either one per triangle or with co-rhombus halves merged
//!
//! The two triangles forming a tile share their base edge and reflect onto
//! the same four corners, so their rhombi coincide. Drawing both strokes the
//! shared outline twice; merging keeps the first of each coincident pair.

use crate::tiling::triangle::{Rhombus, Triangle};
use std::collections::HashSet;

// Coincident centres differ by accumulated rounding only; 1e-7 is far below
// the smallest tile at the maximum depth and far above the rounding noise.
const CENTROID_QUANTUM: f64 = 1e-7;

/// How triangles become drawable rhombi
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RhombusMode {
    /// Every triangle reconstructs and draws its own rhombus
    #[default]
    PerTriangle,
    /// Triangles whose rhombi coincide are drawn once
    MergePairs,
}

impl RhombusMode {
    /// Rhombi to sample and draw for a tiling under this mode
    pub fn rhombi(self, triangles: &[Triangle]) -> Vec<Rhombus> {
        match self {
            Self::PerTriangle => rhombi_per_triangle(triangles),
            Self::MergePairs => merge_pairs(triangles),
        }
    }
}

/// One rhombus per triangle, in tiling order
pub fn rhombi_per_triangle(triangles: &[Triangle]) -> Vec<Rhombus> {
    triangles.iter().map(Triangle::rhombus).collect()
}

/// One rhombus per distinct tile, in order of first appearance
pub fn merge_pairs(triangles: &[Triangle]) -> Vec<Rhombus> {
    let mut seen = HashSet::with_capacity(triangles.len());
    triangles
        .iter()
        .map(Triangle::rhombus)
        .filter(|rhombus| seen.insert(centroid_key(rhombus)))
        .collect()
}

fn centroid_key(rhombus: &Rhombus) -> (i64, i64) {
    let centre = rhombus.centroid();
    (
        (centre.re / CENTROID_QUANTUM).round() as i64,
        (centre.im / CENTROID_QUANTUM).round() as i64,
    )
}
