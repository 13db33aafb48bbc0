//! Translate-then-scale transforms between tiling space and device pixels
//!
//! The canvas applies exactly one of these before any drawing: the origin is
//! moved to the canvas centre and the plane is scaled uniformly. Composition
//! order matches a 2D graphics context, so a tiling point `p` lands on
//! `translation + scale · p`.

use crate::math::geometry::Vec2;

/// Uniform scale followed by a translation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Affine {
    /// Device-space position of the tiling origin
    pub translation: (f64, f64),
    /// Device units per tiling unit
    pub scale: f64,
}

impl Default for Affine {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Affine {
    /// The identity transform
    pub const IDENTITY: Self = Self {
        translation: (0.0, 0.0),
        scale: 1.0,
    };

    /// Compose a translation onto this transform
    #[must_use]
    pub fn translate(self, dx: f64, dy: f64) -> Self {
        Self {
            translation: (
                self.scale.mul_add(dx, self.translation.0),
                self.scale.mul_add(dy, self.translation.1),
            ),
            scale: self.scale,
        }
    }

    /// Compose a uniform scale onto this transform
    #[must_use]
    pub const fn scale_by(self, factor: f64) -> Self {
        Self {
            translation: self.translation,
            scale: self.scale * factor,
        }
    }

    /// Map a tiling-space point to device coordinates
    pub fn apply(&self, point: Vec2) -> (f64, f64) {
        (
            self.scale.mul_add(point.re, self.translation.0),
            self.scale.mul_add(point.im, self.translation.1),
        )
    }

    /// Map a tiling-space length to device units
    pub const fn apply_length(&self, length: f64) -> f64 {
        length * self.scale.abs()
    }

    /// Map a device coordinate back into tiling space
    ///
    /// Returns `None` for a degenerate (zero or non-finite) scale.
    pub fn invert(&self, device: (f64, f64)) -> Option<Vec2> {
        (self.scale != 0.0 && self.scale.is_finite()).then(|| {
            Vec2::new(
                (device.0 - self.translation.0) / self.scale,
                (device.1 - self.translation.1) / self.scale,
            )
        })
    }
}
