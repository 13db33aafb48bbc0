//! Half-rhombus triangles and the rhombi reconstructed from them

use crate::math::geometry::{Vec2, lerp, max_component};

/// Substitution class of a triangle
///
/// Selects the subdivision rule only; it never affects the rendered fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TriangleColor {
    /// Half of a thin rhombus; splits into two triangles
    Red = 0,
    /// Half of a thick rhombus; splits into three triangles
    Blue = 1,
}

impl TriangleColor {
    /// Numeric tag of the class (0 = red, 1 = blue)
    pub const fn tag(self) -> u8 {
        self as u8
    }
}

/// Robinson triangle with apex `a` and base `b`–`c`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    /// Substitution class
    pub color: TriangleColor,
    /// Apex vertex
    pub a: Vec2,
    /// First base vertex
    pub b: Vec2,
    /// Second base vertex
    pub c: Vec2,
}

impl Triangle {
    /// Create a triangle from its class and vertices
    pub const fn new(color: TriangleColor, a: Vec2, b: Vec2, c: Vec2) -> Self {
        Self { color, a, b, c }
    }

    /// Length of the `a`–`b` edge
    pub fn edge_length(&self) -> f64 {
        (self.b - self.a).norm()
    }

    /// Rhombus obtained by reflecting `a` through the midpoint of `b`–`c`
    pub fn rhombus(&self) -> Rhombus {
        Rhombus {
            a: self.a,
            b: self.b,
            d: self.b + self.c - self.a,
            c: self.c,
        }
    }
}

/// Quadrilateral tile reconstructed from a triangle
///
/// Each triangle reconstructs its own rhombus, so the two halves of one tile
/// produce two coincident rhombi unless they are merged beforehand.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rhombus {
    /// Corner shared with the source triangle's apex
    pub a: Vec2,
    /// Corner shared with the source triangle's `b`
    pub b: Vec2,
    /// Corner opposite `a`
    pub d: Vec2,
    /// Corner shared with the source triangle's `c`
    pub c: Vec2,
}

impl Rhombus {
    /// Corners in drawing order `A → B → D → C`
    pub const fn corners(&self) -> [Vec2; 4] {
        [self.a, self.b, self.d, self.c]
    }

    /// Interior point at edge fractions `u` along `a`–`b` and `v` along `a`–`c`
    pub fn interior_point(&self, u: f64, v: f64) -> Vec2 {
        lerp(self.a, self.b, u) + (self.c - self.a) * v
    }

    /// Largest absolute coordinate component over the four corners
    pub fn max_component(&self) -> f64 {
        self.corners()
            .into_iter()
            .map(max_component)
            .fold(0.0, f64::max)
    }

    /// Centre of the rhombus
    pub fn centroid(&self) -> Vec2 {
        (self.a + self.d) * 0.5
    }
}
