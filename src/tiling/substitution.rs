//! P3 substitution: the initial wheel and recursive triangle subdivision
//!
//! Starting from ten red triangles fanned around the origin, each pass
//! replaces every triangle by two (red) or three (blue) smaller ones whose
//! split points sit at golden-ratio fractions of the parent's edges. The
//! result is a pure function of the depth, reproducible bit for bit.

use crate::io::configuration::{MAX_SUBDIVISION_DEPTH, WHEEL_TRIANGLES};
use crate::io::error::{Result, invalid_parameter};
use crate::math::geometry::{PHI, Vec2, lerp, polar};
use crate::tiling::triangle::{Triangle, TriangleColor};
use std::f64::consts::PI;

/// Ten red triangles with apex at the origin, alternately mirrored
///
/// Triangle `i` spans the angles `(2i − 1)π/10` to `(2i + 1)π/10`; every even
/// triangle has its base vertices swapped so neighbours mirror each other.
pub fn initial_wheel() -> Vec<Triangle> {
    (0..WHEEL_TRIANGLES)
        .map(|i| {
            let step = i as f64;
            let b = polar(1.0, 2.0f64.mul_add(step, -1.0) * PI / 10.0);
            let c = polar(1.0, 2.0f64.mul_add(step, 1.0) * PI / 10.0);
            let (b, c) = if i % 2 == 0 { (c, b) } else { (b, c) };
            Triangle::new(TriangleColor::Red, Vec2::new(0.0, 0.0), b, c)
        })
        .collect()
}

/// Apply one substitution pass to every triangle, preserving order
pub fn subdivide(triangles: &[Triangle]) -> Vec<Triangle> {
    let mut result = Vec::with_capacity(triangles.len() * 3);
    for triangle in triangles {
        split_into(triangle, &mut result);
    }
    result
}

/// Append the children of a single triangle to `out`
pub fn split_into(triangle: &Triangle, out: &mut Vec<Triangle>) {
    let Triangle { color, a, b, c } = *triangle;
    match color {
        TriangleColor::Red => {
            let p = lerp(a, b, PHI);
            out.push(Triangle::new(TriangleColor::Red, c, p, b));
            out.push(Triangle::new(TriangleColor::Blue, p, c, a));
        }
        TriangleColor::Blue => {
            let q = lerp(b, a, PHI);
            let r = lerp(b, c, PHI);
            out.push(Triangle::new(TriangleColor::Blue, r, c, a));
            out.push(Triangle::new(TriangleColor::Blue, q, r, b));
            out.push(Triangle::new(TriangleColor::Red, r, q, a));
        }
    }
}

/// Build the tiling obtained by subdividing the initial wheel `depth` times
///
/// # Errors
///
/// Returns an error if `depth` exceeds [`MAX_SUBDIVISION_DEPTH`]
pub fn generate(depth: usize) -> Result<Vec<Triangle>> {
    if depth > MAX_SUBDIVISION_DEPTH {
        return Err(invalid_parameter(
            "depth",
            &depth,
            &format!("must not exceed {MAX_SUBDIVISION_DEPTH}"),
        ));
    }

    let mut triangles = initial_wheel();
    for _ in 0..depth {
        triangles = subdivide(&triangles);
    }
    Ok(triangles)
}

/// Convert a signed depth request into a subdivision depth
///
/// # Errors
///
/// Returns an error if `depth` is negative or exceeds [`MAX_SUBDIVISION_DEPTH`]
pub fn checked_depth(depth: i64) -> Result<usize> {
    if depth < 0 {
        return Err(invalid_parameter("depth", &depth, &"must be non-negative"));
    }
    if depth > MAX_SUBDIVISION_DEPTH as i64 {
        return Err(invalid_parameter(
            "depth",
            &depth,
            &format!("must not exceed {MAX_SUBDIVISION_DEPTH}"),
        ));
    }
    Ok(depth as usize)
}

/// Number of triangles `generate(depth)` produces
///
/// Red triangles yield one red and one blue child, blue triangles one red
/// and two blue, so counts follow `r' = r + b`, `b' = r + 2b`.
pub const fn triangle_count(depth: usize) -> usize {
    let mut red = WHEEL_TRIANGLES;
    let mut blue = 0;
    let mut level = 0;
    while level < depth {
        let next_red = red + blue;
        blue += red + blue;
        red = next_red;
        level += 1;
    }
    red + blue
}
