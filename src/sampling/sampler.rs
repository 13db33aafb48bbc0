//! Per-rhombus luminance sampling and the black/white fill decision
//!
//! Each rhombus is probed at a 3×3 grid of interior points spanned by its
//! `a`–`b` and `a`–`c` edges. The nine luminance readings are averaged and
//! the mean is compared against a fixed threshold. The triangle's red/blue
//! class plays no part.

use crate::io::configuration::{BLACK_FILL, LUMINANCE_THRESHOLD, SAMPLE_OFFSETS, WHITE_FILL};
use crate::io::error::Result;
use crate::math::geometry::Vec2;
use crate::sampling::luminance::{BoundsPolicy, LuminanceFrame};
use crate::sampling::normalizer::PixelMapping;
use crate::tiling::triangle::Rhombus;

/// Number of interior samples taken per rhombus
pub const SAMPLES_PER_RHOMBUS: usize = SAMPLE_OFFSETS.len() * SAMPLE_OFFSETS.len();

/// Fill chosen for a tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Fill {
    /// Tile over a bright source region
    White,
    /// Tile over a dark source region
    Black,
}

impl Fill {
    /// Decide the fill for a mean luminance on the 0–255 scale
    ///
    /// Only a mean strictly above `threshold` yields white.
    pub fn from_mean(mean: f64, threshold: f64) -> Self {
        if mean > threshold {
            Self::White
        } else {
            Self::Black
        }
    }

    /// RGBA colour of the fill
    pub const fn rgba(self) -> [u8; 4] {
        match self {
            Self::White => WHITE_FILL,
            Self::Black => BLACK_FILL,
        }
    }
}

/// Interior sample points of a rhombus, `u` varying slowest
pub fn sample_points(rhombus: &Rhombus) -> [Vec2; SAMPLES_PER_RHOMBUS] {
    let mut points = [rhombus.a; SAMPLES_PER_RHOMBUS];
    let offsets = SAMPLE_OFFSETS
        .iter()
        .flat_map(|&u| SAMPLE_OFFSETS.iter().map(move |&v| (u, v)));
    for (slot, (u, v)) in points.iter_mut().zip(offsets) {
        *slot = rhombus.interior_point(u, v);
    }
    points
}

/// Arithmetic mean of luminance readings
///
/// Returns `None` for an empty slice.
pub fn mean_luminance(values: &[u8]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let total: u32 = values.iter().map(|&value| u32::from(value)).sum();
    Some(f64::from(total) / values.len() as f64)
}

/// Reads source luminance under rhombi for one frame
pub struct Sampler<'a> {
    frame: &'a LuminanceFrame,
    mapping: PixelMapping,
    policy: BoundsPolicy,
    threshold: f64,
}

impl<'a> Sampler<'a> {
    /// Bind a source frame to the pixel mapping of the current tiling
    pub const fn new(
        frame: &'a LuminanceFrame,
        mapping: PixelMapping,
        policy: BoundsPolicy,
        threshold: f64,
    ) -> Self {
        Self {
            frame,
            mapping,
            policy,
            threshold,
        }
    }

    /// Sampler with the default threshold
    pub const fn with_defaults(
        frame: &'a LuminanceFrame,
        mapping: PixelMapping,
        policy: BoundsPolicy,
    ) -> Self {
        Self::new(frame, mapping, policy, LUMINANCE_THRESHOLD)
    }

    /// Luminance readings at each interior sample point
    ///
    /// # Errors
    ///
    /// Returns an error if a sample cannot be read under the bounds policy
    pub fn samples(&self, rhombus: &Rhombus) -> Result<[u8; SAMPLES_PER_RHOMBUS]> {
        let mut values = [0; SAMPLES_PER_RHOMBUS];
        for (value, point) in values.iter_mut().zip(sample_points(rhombus)) {
            let (x, y) = self.mapping.to_pixel(point);
            *value = self.frame.sample(x, y, self.policy)?;
        }
        Ok(values)
    }

    /// Mean luminance under a rhombus
    ///
    /// # Errors
    ///
    /// Returns an error if a sample cannot be read under the bounds policy
    pub fn mean(&self, rhombus: &Rhombus) -> Result<f64> {
        let values = self.samples(rhombus)?;
        Ok(mean_luminance(&values).unwrap_or(0.0))
    }

    /// Fill decision for a rhombus
    ///
    /// # Errors
    ///
    /// Returns an error if a sample cannot be read under the bounds policy
    pub fn decide(&self, rhombus: &Rhombus) -> Result<Fill> {
        Ok(Fill::from_mean(self.mean(rhombus)?, self.threshold))
    }
}
