//! Complex-plane vectors and the golden-ratio constant used by the substitution rules

use num_complex::Complex;

/// A point in the tiling plane, stored as a complex number (real = x, imaginary = y)
pub type Vec2 = Complex<f64>;

/// Reciprocal of the golden ratio, `(√5 − 1) / 2`
///
/// Every P3 split point lies this fraction of the way along a triangle edge.
pub const PHI: f64 = 0.618_033_988_749_894_9;

/// Point at the given distance from the origin along the given angle (radians)
pub fn polar(radius: f64, angle: f64) -> Vec2 {
    Complex::from_polar(radius, angle)
}

/// Point a fraction `t` of the way from `from` towards `to`
pub fn lerp(from: Vec2, to: Vec2, t: f64) -> Vec2 {
    from + (to - from) * t
}

/// Largest absolute coordinate component of a point
///
/// This is the Chebyshev norm, the half-side of the smallest origin-centred
/// square that contains the point.
pub fn max_component(point: Vec2) -> f64 {
    point.re.abs().max(point.im.abs())
}

/// Approximate equality of two points within an absolute tolerance per component
pub fn approx_eq(a: Vec2, b: Vec2, tolerance: f64) -> bool {
    (a.re - b.re).abs() <= tolerance && (a.im - b.im).abs() <= tolerance
}
