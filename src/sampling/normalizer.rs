//! Bounding extent of a tiling and its mapping onto source-frame pixels
//!
//! The tiling grows with depth, so the square `[-max_dim, max_dim]²` that
//! contains every rhombus is measured per frame and stretched over the whole
//! source image. A mapping built for one depth must never be reused for
//! another.

use crate::io::error::{Result, computation_error};
use crate::math::geometry::Vec2;
use crate::tiling::triangle::Triangle;

/// Half-side of the origin-centred square containing every rhombus corner
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extent {
    max_dim: f64,
}

impl Extent {
    /// Measure a tiling, including each triangle's reflected fourth corner
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The tiling is empty
    /// - The measured extent is zero or not finite
    pub fn of(triangles: &[Triangle]) -> Result<Self> {
        if triangles.is_empty() {
            return Err(computation_error("extent", &"tiling has no triangles"));
        }

        let max_dim = triangles
            .iter()
            .map(|triangle| triangle.rhombus().max_component())
            .fold(0.0, f64::max);

        Self::from_max_dim(max_dim)
    }

    /// Wrap a known half-side
    ///
    /// # Errors
    ///
    /// Returns an error if `max_dim` is not strictly positive and finite
    pub fn from_max_dim(max_dim: f64) -> Result<Self> {
        if max_dim > 0.0 && max_dim.is_finite() {
            Ok(Self { max_dim })
        } else {
            Err(computation_error(
                "extent",
                &format!("degenerate tiling extent {max_dim}"),
            ))
        }
    }

    /// Largest absolute coordinate component over all rhombus corners
    pub const fn max_dim(&self) -> f64 {
        self.max_dim
    }
}

/// Maps tiling-space points onto the pixel grid of a source frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelMapping {
    half_width: f64,
    half_height: f64,
    max_dim: f64,
}

impl PixelMapping {
    /// Stretch `extent` over a `width` × `height` image
    pub fn new(extent: Extent, width: usize, height: usize) -> Self {
        Self {
            half_width: width as f64 / 2.0,
            half_height: height as f64 / 2.0,
            max_dim: extent.max_dim(),
        }
    }

    /// Fractional pixel coordinates `(x, y)` of a tiling point
    pub fn to_pixel(&self, point: Vec2) -> (f64, f64) {
        (
            self.half_width
                .mul_add(point.re / self.max_dim, self.half_width),
            self.half_height
                .mul_add(point.im / self.max_dim, self.half_height),
        )
    }

    /// Tiling point that maps onto the given fractional pixel coordinates
    pub fn from_pixel(&self, pixel: (f64, f64)) -> Vec2 {
        Vec2::new(
            (pixel.0 - self.half_width) / self.half_width * self.max_dim,
            (pixel.1 - self.half_height) / self.half_height * self.max_dim,
        )
    }
}
